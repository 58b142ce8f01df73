/// Image to mesh conversion orchestration.
use crate::Args;
use crate::stl_writer::write_binary_stl;
use heightfield_mesh::{
    CancelToken, Channel, GridMeshBuilder, MeshData, PixelBuffer, ProgressSink, ScalarField,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Converts one image file into an STL surface with a metadata sidecar.
/// Validates configuration on construction so bad parameters fail before
/// any pixels are decoded.
pub struct ImageMeshConverter {
    input_path: PathBuf,
    output_path: PathBuf,
    mesh_name: String,
    channel: Channel,
    invert: bool,
    sequential: bool,
    builder: GridMeshBuilder,
}

impl ImageMeshConverter {
    /// Create a converter from parsed command line arguments.
    pub fn new(args: Args) -> Result<Self, Box<dyn std::error::Error>> {
        let resolution = 1.0 / args.pixels_per_unit;
        let builder = GridMeshBuilder::new(resolution, args.height_scale, args.offset)?;

        let output_path = args
            .output
            .unwrap_or_else(|| args.input.with_extension("stl"));

        Ok(Self {
            input_path: args.input,
            output_path,
            mesh_name: args.name,
            channel: Channel::from_token(&args.channel),
            invert: args.invert,
            sequential: args.sequential,
            builder,
        })
    }

    /// Execute the full conversion pipeline: decode, extract, build, save.
    pub fn convert(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "Converting {} to a heightfield mesh...",
            self.input_path.display()
        );

        let buffer = self.load_image()?;
        println!(
            "  Grid: {} rows x {} cols ({} vertices, {} faces)",
            buffer.rows(),
            buffer.cols(),
            buffer.rows() * buffer.cols(),
            (buffer.rows() - 1) * (buffer.cols() - 1)
        );

        println!(
            "Extracting {} channel{}...",
            self.channel,
            if self.invert { " (inverted)" } else { "" }
        );
        let field = ScalarField::from_buffer(&buffer, self.channel, self.invert);

        let mesh = self.build_mesh(&field)?;

        write_binary_stl(&self.output_path, &self.mesh_name, &mesh)?;
        println!(
            "Saved {} ({} triangles)",
            self.output_path.display(),
            mesh.triangle_count()
        );

        self.save_metadata(&mesh, field.rows(), field.cols())?;

        println!("Conversion complete!");
        Ok(())
    }

    /// Decode the input image into normalised RGBA samples.
    /// The decoded rows become the outer grid axis, matching the row-major
    /// source layout.
    fn load_image(&self) -> Result<PixelBuffer, Box<dyn std::error::Error>> {
        let img = image::open(&self.input_path)?;
        println!(
            "  Source: {}x{} px, {:?}",
            img.width(),
            img.height(),
            img.color()
        );

        let rows = img.height() as usize;
        let cols = img.width() as usize;
        let rgba = img.to_rgba32f();

        Ok(PixelBuffer::from_raw(rows, cols, rgba.into_raw())?)
    }

    /// Run the grid builder with a progress bar attached.
    fn build_mesh(&self, field: &ScalarField) -> Result<MeshData, Box<dyn std::error::Error>> {
        let pb = ProgressBar::new(field.rows() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} rows ({percent}%) {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Building mesh grid");

        let sink = BarSink { bar: pb.clone() };
        let cancel = CancelToken::new();
        let mesh = if self.sequential {
            self.builder.build(field, &sink, &cancel)?
        } else {
            self.builder.build_parallel(field, &sink, &cancel)?
        };

        pb.finish_with_message("Mesh grid complete");
        Ok(mesh)
    }

    /// Save conversion metadata as a JSON sidecar next to the STL.
    fn save_metadata(
        &self,
        mesh: &MeshData,
        rows: usize,
        cols: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let metadata = serde_json::json!({
            "mesh_name": self.mesh_name,
            "source_image": self.input_path.display().to_string(),
            "grid": { "rows": rows, "cols": cols },
            "vertex_count": mesh.vertex_count(),
            "face_count": mesh.face_count(),
            "triangle_count": mesh.triangle_count(),
            "channel": self.channel.to_string(),
            "invert": self.invert,
            "resolution": self.builder.resolution(),
            "height_scale": self.builder.height_scale(),
            "offset": self.builder.offset(),
            "bounds": mesh.bounds(),
        });

        let metadata_path = self.metadata_path(rows, cols);
        std::fs::write(&metadata_path, metadata.to_string())?;
        println!("Saved {}", metadata_path.display());

        Ok(())
    }

    /// Metadata path derived from the output stem and grid dimensions.
    fn metadata_path(&self, rows: usize, cols: usize) -> PathBuf {
        let stem = self
            .output_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();
        let file_name = format!("{}_metadata_{}x{}.json", stem, rows, cols);

        self.output_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(file_name)
    }
}

/// Progress bar adapter for the builder's reporting contract.
/// Parallel builds report rows out of order, so the position only ever
/// moves forward.
struct BarSink {
    bar: ProgressBar,
}

impl ProgressSink for BarSink {
    fn report(&self, current: usize, total: usize) {
        if self.bar.length() != Some(total as u64) {
            self.bar.set_length(total as u64);
        }
        if current as u64 > self.bar.position() {
            self.bar.set_position(current as u64);
        }
    }
}
