//! Circuit diagrams for qvar.
//!
//! Two renderings of the same [`Layout`]:
//!
//! - a unicode text diagram, one line per wire, from [`draw_text`] or
//!   [`Visualizer::render_text`];
//! - a PNG image from [`Visualizer::render_image`], through an
//!   [`ImageBackend`] (by default [`PlottersBackend`]).
//!
//! ```rust
//! use qvar_ir::{Circuit, Observable, ParameterExpression, QubitId};
//! use qvar_draw::Visualizer;
//!
//! let mut circuit = Circuit::with_size("single", 1);
//! circuit
//!     .ry(ParameterExpression::slot(0), QubitId(0)).unwrap()
//!     .expval(Observable::z(QubitId(0))).unwrap();
//!
//! let text = Visualizer::new(circuit).render_text(&[0.5]).unwrap();
//! assert_eq!(text, "0: ──RY(0.50)─┤  <Z>");
//! ```

pub mod error;
pub mod image;
pub mod layout;
pub mod text;
pub mod visualizer;

pub use error::{DrawError, DrawResult};
pub use image::{ImageBackend, ImageOptions, MAX_CANVAS_PX, PlottersBackend};
pub use layout::{Glyph, Layout, PlacedGate};
pub use text::{TextOptions, draw_text};
pub use visualizer::Visualizer;
