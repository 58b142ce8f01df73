/// Heightfield vertex and face grid generation
use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::field::ScalarField;
use crate::mesh::{Face, MeshData, Vertex};
use crate::progress::ProgressSink;
use rayon::prelude::*;

/// Builds the vertex grid and quad face grid for a scalar field.
///
/// One vertex is emitted per field sample at
/// `(row * resolution, col * resolution, value * height_scale + offset)`,
/// in row-major order, so the flat index of the vertex at `(i, j)` is
/// `i * cols + j`. Face generation consumes that addressing: the quad for
/// the 2x2 cell at `(i, j)` references
/// `[i*cols+j, i*cols+j+1, (i+1)*cols+j+1, (i+1)*cols+j]`, giving every
/// face of the sheet the same winding. The outer grid axis runs along the
/// image rows; callers must not reorder it to a column-major layout, since
/// the face indices are derived from this exact ordering.
#[derive(Debug, Clone)]
pub struct GridMeshBuilder {
    resolution: f32,
    height_scale: f32,
    offset: f32,
}

impl GridMeshBuilder {
    /// Create a builder, validating the scaling parameters up front.
    /// A non-positive or non-finite resolution would collapse or invert the
    /// grid and is rejected before any output is constructed.
    pub fn new(resolution: f32, height_scale: f32, offset: f32) -> Result<Self> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "resolution must be positive and finite, got {}",
                resolution
            )));
        }
        if !height_scale.is_finite() || !offset.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "height scale {} and offset {} must be finite",
                height_scale, offset
            )));
        }

        Ok(Self {
            resolution,
            height_scale,
            offset,
        })
    }

    /// Spatial step between adjacent vertices
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Height of a fully bright sample
    pub fn height_scale(&self) -> f32 {
        self.height_scale
    }

    /// Uniform shift applied after height scaling
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Generate the mesh sequentially: the full vertex grid first, then the
    /// face grid. Progress is reported once per row in each phase and the
    /// cancellation token is polled between rows; a cancelled build returns
    /// [`Error::Cancelled`] with no partial mesh.
    pub fn build(
        &self,
        field: &ScalarField,
        progress: &dyn ProgressSink,
        cancel: &CancelToken,
    ) -> Result<MeshData> {
        let rows = field.rows();
        let cols = field.cols();

        let mut vertices = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            for j in 0..cols {
                vertices.push(self.vertex_at(field, i, j));
            }
            progress.report(i, rows);
        }

        let mut faces = Vec::with_capacity((rows - 1) * (cols - 1));
        for i in 0..rows - 1 {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            for j in 0..cols - 1 {
                faces.push(face_at(cols, i, j));
            }
            progress.report(i, rows - 1);
        }

        Ok(MeshData { vertices, faces })
    }

    /// Generate the same mesh with rows sharded across the rayon pool.
    ///
    /// Each worker produces one contiguous row slice and the slices are
    /// merged in index order, so the output is identical to [`build`]; only
    /// completion order differs. Progress reports may arrive out of order.
    ///
    /// [`build`]: GridMeshBuilder::build
    pub fn build_parallel(
        &self,
        field: &ScalarField,
        progress: &dyn ProgressSink,
        cancel: &CancelToken,
    ) -> Result<MeshData> {
        let rows = field.rows();
        let cols = field.cols();

        let vertex_rows: Option<Vec<Vec<Vertex>>> = (0..rows)
            .into_par_iter()
            .map(|i| {
                if cancel.is_cancelled() {
                    return None;
                }
                let row = (0..cols).map(|j| self.vertex_at(field, i, j)).collect();
                progress.report(i, rows);
                Some(row)
            })
            .collect();
        let Some(vertex_rows) = vertex_rows else {
            return Err(Error::Cancelled);
        };

        let face_rows: Option<Vec<Vec<Face>>> = (0..rows - 1)
            .into_par_iter()
            .map(|i| {
                if cancel.is_cancelled() {
                    return None;
                }
                let row = (0..cols - 1).map(|j| face_at(cols, i, j)).collect();
                progress.report(i, rows - 1);
                Some(row)
            })
            .collect();
        let Some(face_rows) = face_rows else {
            return Err(Error::Cancelled);
        };

        Ok(MeshData {
            vertices: vertex_rows.into_iter().flatten().collect(),
            faces: face_rows.into_iter().flatten().collect(),
        })
    }

    fn vertex_at(&self, field: &ScalarField, i: usize, j: usize) -> Vertex {
        Vertex::new(
            i as f32 * self.resolution,
            j as f32 * self.resolution,
            field.value(i, j) * self.height_scale + self.offset,
        )
    }
}

fn face_at(cols: usize, i: usize, j: usize) -> Face {
    let base = (i * cols + j) as u32;
    let next = ((i + 1) * cols + j) as u32;
    [base, base + 1, next + 1, next]
}
