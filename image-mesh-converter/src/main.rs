/// Image to heightfield mesh converter main entry point
mod converter;
mod stl_writer;

use clap::Parser;
use converter::ImageMeshConverter;
use heightfield_mesh::constants::{
    DEFAULT_HEIGHT_SCALE, DEFAULT_MESH_NAME, DEFAULT_OFFSET, DEFAULT_PIXELS_PER_UNIT,
};
use std::path::PathBuf;

/// Convert a raster image into a heightfield surface mesh (binary STL).
///
/// Every pixel becomes one vertex whose elevation follows the selected
/// channel; adjacent pixels are joined into quad faces. Useful for stamp
/// making or PCB relief printing on a resin printer.
#[derive(Parser, Debug)]
#[command(name = "image-mesh-converter", version)]
pub struct Args {
    /// Input image file (JPEG, PNG, ...)
    pub input: PathBuf,

    /// Elevation source: r, g, b, alpha or grayscale.
    /// Unrecognized values fall back to grayscale.
    #[arg(long, default_value = "grayscale")]
    pub channel: String,

    /// Invert all source samples before extraction
    #[arg(long)]
    pub invert: bool,

    /// Image pixels per output unit; the spatial step is its reciprocal
    #[arg(long, default_value_t = DEFAULT_PIXELS_PER_UNIT)]
    pub pixels_per_unit: f32,

    /// Height of a fully bright pixel, in output units
    #[arg(long, default_value_t = DEFAULT_HEIGHT_SCALE)]
    pub height_scale: f32,

    /// Uniform height shift applied after scaling
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub offset: f32,

    /// Name of the exported mesh object
    #[arg(long, default_value = DEFAULT_MESH_NAME)]
    pub name: String,

    /// Output STL path (defaults to the input path with an .stl extension)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Build the grid on a single thread instead of the sharded worker pool
    #[arg(long)]
    pub sequential: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut converter = ImageMeshConverter::new(args)?;
    converter.convert()?;

    Ok(())
}
