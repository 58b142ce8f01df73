/// Scalar elevation field extraction from decoded pixels
use crate::channel::Channel;
use crate::constants::SAMPLES_PER_PIXEL;
use crate::error::{Error, Result};
use crate::pixel::PixelBuffer;

/// One scalar sample per source pixel, flat-indexed `row * cols + col`.
///
/// Transient within a conversion: produced by channel extraction, consumed
/// by the grid builder. Dimensions always match the source buffer exactly.
#[derive(Debug, Clone)]
pub struct ScalarField {
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

impl ScalarField {
    /// Extract the selected channel from a pixel buffer.
    ///
    /// Inversion replaces every source sample with `1 - v` before the
    /// channel is selected, so it applies to all four components of the
    /// pixel, not only the selected one. Grayscale is the mean of the red,
    /// green and blue samples; alpha never contributes to it.
    pub fn from_buffer(buffer: &PixelBuffer, channel: Channel, invert: bool) -> Self {
        let values = buffer
            .samples()
            .chunks_exact(SAMPLES_PER_PIXEL)
            .map(|raw| {
                let px = if invert {
                    [1.0 - raw[0], 1.0 - raw[1], 1.0 - raw[2], 1.0 - raw[3]]
                } else {
                    [raw[0], raw[1], raw[2], raw[3]]
                };

                match channel {
                    Channel::Red => px[0],
                    Channel::Green => px[1],
                    Channel::Blue => px[2],
                    Channel::Alpha => px[3],
                    Channel::Grayscale => (px[0] + px[1] + px[2]) / 3.0,
                }
            })
            .collect();

        Self {
            rows: buffer.rows(),
            cols: buffer.cols(),
            values,
        }
    }

    /// Wrap precomputed scalar values, validating the grid shape.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f32>) -> Result<Self> {
        if rows == 0 || cols == 0 || values.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                rows,
                cols,
                samples: values.len(),
            });
        }

        Ok(Self { rows, cols, values })
    }

    /// Outer grid dimension
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Inner grid dimension
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Scalar value at one grid position
    pub fn value(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.cols + col]
    }
}
