//! Editing core for a screenshot capture and annotation utility
//!
//! This crate implements the editing surface of a screenshot tool: a
//! two-layer canvas (persistent content plus ephemeral crop overlay), the
//! pointer-input state machine that paints freehand strokes or drags a crop
//! rectangle depending on the active mode, and the export pipeline that
//! extracts the cropped, annotated region into a PNG file.
//!
//! Window chrome, file dialogs, timers, and the OS screen grab are the
//! host's job; the host forwards its events into an [`EditorSession`] and
//! consumes the capture/config helpers around it.

pub mod capture;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod render;
pub mod session;

pub use domain::{Point, Rect, StrokeColor, StrokeStyle};
pub use error::{Error, Result};
pub use render::RasterSurface;
pub use session::{EditorMode, EditorSession, PointerEvent};
