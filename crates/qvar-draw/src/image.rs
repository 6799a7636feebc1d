//! Raster circuit diagrams.
//!
//! Rendering is split between the geometry in [`ImageOptions`] and an
//! [`ImageBackend`] that turns a [`Layout`] into a file. The bundled
//! [`PlottersBackend`] writes PNG through `plotters` and needs a TrueType
//! font for gate labels; without one it fails with
//! [`DrawError::FontUnavailable`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, register_font};
use tracing::{debug, warn};

use crate::error::{DrawError, DrawResult};
use crate::layout::{Glyph, Layout};

/// Family name labels are drawn with.
const FONT_FAMILY: &str = "sans-serif";

/// Largest canvas side, in pixels, the PNG backend will allocate.
pub const MAX_CANVAS_PX: u32 = 16_384;

/// Fonts tried, in order, when [`ImageOptions::font`] is not set.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Geometry and output resolution of raster diagrams. Lengths are in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOptions {
    /// Pixels per inch.
    pub dpi: u32,
    /// Blank margin around the drawn content.
    pub pad_inches: f64,
    /// Vertical distance between wires.
    pub wire_spacing: f64,
    /// Height of gate boxes.
    pub box_height: f64,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// TrueType font for labels; system fonts are searched when unset.
    pub font: Option<PathBuf>,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            dpi: 150,
            pad_inches: 0.1,
            wire_spacing: 0.7,
            box_height: 0.45,
            column_gap: 0.25,
            font_size: 0.16,
            font: None,
        }
    }
}

impl ImageOptions {
    /// Set the output resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Use a specific font file for labels.
    pub fn with_font(mut self, font: impl Into<PathBuf>) -> Self {
        self.font = Some(font.into());
        self
    }

    fn px(&self, inches: f64) -> i32 {
        (inches * f64::from(self.dpi)).round() as i32
    }
}

/// Something that can turn a layout into an image file.
pub trait ImageBackend {
    /// Backend name for diagnostics.
    fn name(&self) -> &str;

    /// Draw `layout` to `path`, replacing any existing file.
    fn draw(&self, layout: &Layout, path: &Path, options: &ImageOptions) -> DrawResult<()>;
}

/// PNG output through `plotters`' bitmap backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersBackend;

impl ImageBackend for PlottersBackend {
    fn name(&self) -> &str {
        "plotters"
    }

    fn draw(&self, layout: &Layout, path: &Path, options: &ImageOptions) -> DrawResult<()> {
        let geometry = Geometry::new(layout, options);
        if geometry.width > MAX_CANVAS_PX || geometry.height > MAX_CANVAS_PX {
            return Err(DrawError::Backend(format!(
                "{}x{} px canvas exceeds the {MAX_CANVAS_PX} px limit (dpi {})",
                geometry.width, geometry.height, options.dpi
            )));
        }
        ensure_font(options.font.as_deref())?;
        debug!(
            "Drawing {}x{} px diagram to {}",
            geometry.width,
            geometry.height,
            path.display()
        );
        paint(layout, &geometry, options, path)
    }
}

/// Register a label font with plotters once per process.
fn ensure_font(requested: Option<&Path>) -> DrawResult<()> {
    static REGISTERED: OnceLock<PathBuf> = OnceLock::new();
    if let Some(path) = requested.filter(|p| !p.is_file()) {
        return Err(DrawError::FontUnavailable {
            tried: vec![path.to_path_buf()],
        });
    }
    if let Some(registered) = REGISTERED.get() {
        if let Some(path) = requested.filter(|p| *p != registered.as_path()) {
            warn!(
                "Label font {} is already registered; ignoring {}",
                registered.display(),
                path.display()
            );
        }
        return Ok(());
    }

    let candidates: Vec<PathBuf> = match requested {
        Some(path) => vec![path.to_path_buf()],
        None => SYSTEM_FONTS.iter().map(PathBuf::from).collect(),
    };
    let found = candidates.iter().find(|p| p.is_file()).cloned();
    let Some(path) = found else {
        return Err(DrawError::FontUnavailable { tried: candidates });
    };

    let bytes: &'static [u8] = Box::leak(fs::read(&path)?.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| DrawError::InvalidFont(path.clone()))?;
    debug!("Registered label font {}", path.display());
    let _ = REGISTERED.set(path);
    Ok(())
}

/// Pixel positions of every column and wire.
struct Geometry {
    width: u32,
    height: u32,
    /// Left and right x of each column.
    columns: Vec<(i32, i32)>,
    /// y of each wire.
    wires: Vec<i32>,
    wire_start: i32,
    wire_end: i32,
    /// Left and right x of the measurement box.
    meter: (i32, i32),
}

impl Geometry {
    fn new(layout: &Layout, o: &ImageOptions) -> Self {
        let char_width = o.font_size * 0.62;
        let label_column = 0.35;
        let meter_width = 0.6;

        let mut x = o.pad_inches + label_column;
        let wire_start = o.px(x);
        x += o.column_gap;

        let mut columns = Vec::with_capacity(layout.num_layers);
        for layer in 0..layout.num_layers {
            let chars = layout.label_width(layer) as f64;
            let w = (chars * char_width + 0.2).max(0.4);
            columns.push((o.px(x), o.px(x + w)));
            x += w + o.column_gap;
        }

        let meter = (o.px(x), o.px(x + meter_width));
        let wire_end = o.px(x + meter_width / 2.0);
        x += meter_width + o.pad_inches;

        let rows = layout.num_wires.max(1);
        let top = o.pad_inches + o.box_height / 2.0;
        let wires = (0..rows)
            .map(|w| o.px(top + w as f64 * o.wire_spacing))
            .collect();
        let height = 2.0 * o.pad_inches + o.box_height + (rows - 1) as f64 * o.wire_spacing;

        Self {
            width: o.px(x).max(1) as u32,
            height: o.px(height).max(1) as u32,
            columns,
            wires,
            wire_start,
            wire_end,
            meter,
        }
    }
}

fn backend_err(e: impl std::fmt::Display) -> DrawError {
    DrawError::Backend(e.to_string())
}

fn paint(layout: &Layout, g: &Geometry, o: &ImageOptions, path: &Path) -> DrawResult<()> {
    let root = BitMapBackend::new(path, (g.width, g.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let line = BLACK.stroke_width(o.px(0.015).max(1) as u32);
    let font_px = f64::from(o.px(o.font_size).max(6));
    let label_style = TextStyle::from((FONT_FAMILY, font_px).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let half_box = o.px(o.box_height / 2.0);

    // Wires and their indices.
    for (w, &y) in g.wires.iter().enumerate().take(layout.num_wires) {
        root.draw(&PathElement::new(vec![(g.wire_start, y), (g.wire_end, y)], line))
            .map_err(backend_err)?;
        root.draw(&Text::new(
            w.to_string(),
            (g.wire_start - o.px(0.15), y),
            label_style.clone(),
        ))
        .map_err(backend_err)?;
    }

    for gate in &layout.gates {
        let (x0, x1) = g.columns[gate.layer];
        let xc = (x0 + x1) / 2;

        if gate.is_multi_wire() {
            let (y0, y1) = (g.wires[gate.lo.index()], g.wires[gate.hi.index()]);
            root.draw(&PathElement::new(vec![(xc, y0), (xc, y1)], line))
                .map_err(backend_err)?;
        }

        for (wire, glyph) in &gate.glyphs {
            let y = g.wires[wire.index()];
            match glyph {
                Glyph::Boxed(text) => {
                    root.draw(&Rectangle::new(
                        [(x0, y - half_box), (x1, y + half_box)],
                        WHITE.filled(),
                    ))
                    .map_err(backend_err)?;
                    root.draw(&Rectangle::new([(x0, y - half_box), (x1, y + half_box)], line))
                        .map_err(backend_err)?;
                    root.draw(&Text::new(text.clone(), (xc, y), label_style.clone()))
                        .map_err(backend_err)?;
                }
                Glyph::Control | Glyph::PhaseTarget => {
                    root.draw(&Circle::new((xc, y), o.px(0.07), BLACK.filled()))
                        .map_err(backend_err)?;
                }
                Glyph::Target => {
                    let r = o.px(0.14);
                    root.draw(&Circle::new((xc, y), r, WHITE.filled()))
                        .map_err(backend_err)?;
                    root.draw(&Circle::new((xc, y), r, line))
                        .map_err(backend_err)?;
                    root.draw(&PathElement::new(vec![(xc - r, y), (xc + r, y)], line))
                        .map_err(backend_err)?;
                    root.draw(&PathElement::new(vec![(xc, y - r), (xc, y + r)], line))
                        .map_err(backend_err)?;
                }
            }
        }
    }

    if let Some(obs) = layout.observable {
        let y = g.wires[obs.qubit.index()];
        let (x0, x1) = g.meter;
        root.draw(&Rectangle::new(
            [(x0, y - half_box), (x1, y + half_box)],
            WHITE.filled(),
        ))
        .map_err(backend_err)?;
        root.draw(&Rectangle::new([(x0, y - half_box), (x1, y + half_box)], line))
            .map_err(backend_err)?;
        root.draw(&Text::new(obs.to_string(), ((x0 + x1) / 2, y), label_style))
            .map_err(backend_err)?;
    }

    root.present().map_err(backend_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qvar_ir::{Circuit, Observable, ParameterExpression, QubitId};

    fn layout() -> Layout {
        let mut circuit = Circuit::with_size("variational", 2);
        circuit
            .ry(ParameterExpression::slot(0), QubitId(0))
            .unwrap()
            .ry(ParameterExpression::slot(1), QubitId(1))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .ry(ParameterExpression::slot(2), QubitId(0))
            .unwrap()
            .expval(Observable::z(QubitId(0)))
            .unwrap();
        Layout::new(&circuit, &[0.1, 0.2, 0.3], 2).unwrap()
    }

    #[test]
    fn test_geometry_scales_with_dpi() {
        let low = Geometry::new(&layout(), &ImageOptions::default().with_dpi(75));
        let high = Geometry::new(&layout(), &ImageOptions::default());
        assert_eq!(high.columns.len(), 3);
        assert!(high.width >= 2 * low.width - 2 && high.width <= 2 * low.width + 2);
        assert!(high.height >= 2 * low.height - 2 && high.height <= 2 * low.height + 2);
    }

    #[test]
    fn test_geometry_is_tight() {
        let o = ImageOptions::default();
        let g = Geometry::new(&layout(), &o);
        // Content ends one pad before the right and bottom edges.
        assert!((g.width as i32 - g.meter.1 - o.px(o.pad_inches)).abs() <= 1);
        let bottom = g.wires[1] + o.px(o.box_height / 2.0);
        assert!((g.height as i32 - bottom - o.px(o.pad_inches)).abs() <= 1);
        // Columns do not overlap.
        for pair in g.columns.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }

    #[test]
    fn test_missing_font_is_reported() {
        let options = ImageOptions::default().with_font("/nonexistent/font.ttf");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.png");
        // Reported whether or not another font was registered earlier.
        for _ in 0..2 {
            match PlottersBackend.draw(&layout(), &path, &options) {
                Err(DrawError::FontUnavailable { tried }) => {
                    assert_eq!(tried, vec![PathBuf::from("/nonexistent/font.ttf")]);
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_directory_is_not_a_font() {
        let dir = tempfile::tempdir().unwrap();
        let options = ImageOptions::default().with_font(dir.path());
        let path = dir.path().join("diagram.png");
        assert!(matches!(
            PlottersBackend.draw(&layout(), &path, &options),
            Err(DrawError::FontUnavailable { .. })
        ));
    }

    #[test]
    fn test_oversized_canvas_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.png");
        for dpi in [400_000, u32::MAX] {
            let options = ImageOptions::default().with_dpi(dpi);
            match PlottersBackend.draw(&layout(), &path, &options) {
                Err(DrawError::Backend(msg)) => assert!(msg.contains("exceeds"), "{msg}"),
                other => panic!("unexpected result: {other:?}"),
            }
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_default_canvas_within_limit() {
        let g = Geometry::new(&layout(), &ImageOptions::default());
        assert!(g.width <= MAX_CANVAS_PX && g.height <= MAX_CANVAS_PX);
        let g = Geometry::new(&layout(), &ImageOptions::default().with_dpi(1200));
        assert!(g.width <= MAX_CANVAS_PX && g.height <= MAX_CANVAS_PX);
    }
}
