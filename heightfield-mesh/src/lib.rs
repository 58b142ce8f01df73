//! Image-to-heightfield mesh conversion core.
//!
//! Turns a decoded RGBA image into a regular surface grid: one vertex per
//! pixel with elevation taken from a selected channel (or the grayscale
//! average), one quadrilateral face per 2x2 pixel neighbourhood. The caller
//! supplies decoded pixels and configuration and receives a [`MeshData`]
//! artifact; decoding, persistence and display stay outside this crate.

mod bounds;
mod cancel;
mod channel;
pub mod constants;
mod error;
mod field;
mod grid;
mod mesh;
mod pixel;
mod progress;

pub use bounds::MeshBounds;
pub use cancel::CancelToken;
pub use channel::Channel;
pub use error::{Error, Result};
pub use field::ScalarField;
pub use grid::GridMeshBuilder;
pub use mesh::{Face, MeshData, Vertex};
pub use pixel::PixelBuffer;
pub use progress::{DecileLogger, NoProgress, ProgressSink};
