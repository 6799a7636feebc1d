//! Text and image rendering for one circuit.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use qvar_ir::Circuit;

use crate::error::DrawResult;
use crate::image::{ImageBackend, ImageOptions, PlottersBackend};
use crate::layout::Layout;
use crate::text::{self, TextOptions};

/// Renders a circuit for given parameter values.
///
/// Text rendering is pure. Image rendering is best effort through
/// [`render_image`](Self::render_image): a failure is logged and the
/// caller carries on.
#[derive(Debug, Clone)]
pub struct Visualizer<B: ImageBackend = PlottersBackend> {
    circuit: Circuit,
    text: TextOptions,
    image: ImageOptions,
    backend: B,
}

impl Visualizer {
    /// Visualizer with default options and the PNG backend.
    pub fn new(circuit: Circuit) -> Self {
        Self {
            circuit,
            text: TextOptions::default(),
            image: ImageOptions::default(),
            backend: PlottersBackend,
        }
    }
}

impl<B: ImageBackend> Visualizer<B> {
    /// Replace the image backend.
    pub fn with_backend<C: ImageBackend>(self, backend: C) -> Visualizer<C> {
        Visualizer {
            circuit: self.circuit,
            text: self.text,
            image: self.image,
            backend,
        }
    }

    /// Replace the text diagram options.
    pub fn with_text_options(mut self, options: TextOptions) -> Self {
        self.text = options;
        self
    }

    /// Replace the raster diagram options.
    pub fn with_image_options(mut self, options: ImageOptions) -> Self {
        self.image = options;
        self
    }

    /// The circuit being drawn.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Name of the image backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Text diagram of the circuit with `params` bound.
    pub fn render_text(&self, params: &[f64]) -> DrawResult<String> {
        text::draw_text(&self.circuit, params, &self.text)
    }

    /// Write an image of the circuit with `params` bound to `path`.
    ///
    /// Missing parent directories are created and an existing file is
    /// replaced. Returns the written path.
    pub fn try_render_image(&self, params: &[f64], path: impl AsRef<Path>) -> DrawResult<PathBuf> {
        let path = path.as_ref();
        let layout = Layout::new(&self.circuit, params, self.text.decimals)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        self.backend.draw(&layout, path, &self.image)?;
        info!("Circuit diagram saved to {}", path.display());
        Ok(path.to_path_buf())
    }

    /// Like [`try_render_image`](Self::try_render_image), but a failure is
    /// logged as a warning and reported as `None`.
    pub fn render_image(&self, params: &[f64], path: impl AsRef<Path>) -> Option<PathBuf> {
        let path = path.as_ref();
        match self.try_render_image(params, path) {
            Ok(written) => Some(written),
            Err(e) => {
                warn!(
                    "Could not save circuit diagram to {} ({} backend): {}",
                    path.display(),
                    self.backend.name(),
                    e
                );
                None
            }
        }
    }
}
