//! Render data module
//!
//! Produces plain triangle lists for the host to upload; no GPU or canvas
//! handles live in this crate.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Viewport, build_scene};
pub use vertex::Vertex;
