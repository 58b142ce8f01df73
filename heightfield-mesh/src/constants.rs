/// Shared conversion defaults and buffer layout constants.

/// Interleaved samples per pixel (red, green, blue, alpha)
pub const SAMPLES_PER_PIXEL: usize = 4;

/// Default name for the exported mesh object
pub const DEFAULT_MESH_NAME: &str = "DepthObject";

/// Default image density; the spatial step between vertices is its reciprocal
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 10.0;

/// Default height of a fully bright pixel, in output units
pub const DEFAULT_HEIGHT_SCALE: f32 = 1.0;

/// Default uniform height shift applied after scaling
pub const DEFAULT_OFFSET: f32 = 0.0;
