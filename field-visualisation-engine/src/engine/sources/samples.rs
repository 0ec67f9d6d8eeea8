//! Complex field samples and the channels derived from them.
//!
//! External numerical libraries hand over complex sample vectors per
//! point or per cell; the engine derives the three colourable channels
//! (real part, imaginary part, squared magnitude) once at construction
//! and never touches the data again.

use num_complex::Complex64;
use rayon::prelude::*;

use crate::engine::error::SessionError;
use crate::engine::range::{DataRange, RangeAccumulator};
use crate::engine::view::FieldChannel;

/// Complex sample vectors as supplied by the field-source provider,
/// flattened point-major: `values.len() == count * component_count`.
#[derive(Debug, Clone)]
pub struct FieldSamples {
    component_count: usize,
    values: Vec<Complex64>,
}

impl FieldSamples {
    /// Wrap a flat sample buffer, refusing lengths that are not a whole
    /// number of sample vectors.
    pub fn new(component_count: usize, values: Vec<Complex64>) -> Result<Self, SessionError> {
        if component_count == 0 {
            return Err(SessionError::UnsupportedComponentCount(0));
        }
        if values.len() % component_count != 0 {
            return Err(SessionError::InvalidPointCount {
                expected: (values.len() / component_count) * component_count,
                actual: values.len(),
            });
        }
        Ok(Self { component_count, values })
    }

    /// Scalar samples, one complex value per point.
    pub fn scalar(values: Vec<Complex64>) -> Self {
        Self { component_count: 1, values }
    }

    /// Vector samples, one complex 3-vector per point.
    pub fn vector(points: Vec<[Complex64; 3]>) -> Self {
        Self {
            component_count: 3,
            values: points.into_iter().flatten().collect(),
        }
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Number of sample vectors (points or cells) in the buffer.
    pub fn count(&self) -> usize {
        self.values.len() / self.component_count
    }

    pub fn values(&self) -> &[Complex64] {
        &self.values
    }
}

/// One derived channel: its values, value range and, for vector-valued
/// channels, the largest point-wise Euclidean norm.
#[derive(Debug, Clone)]
pub struct ChannelData {
    values: Vec<f64>,
    range: DataRange,
    max_norm: Option<f64>,
}

impl ChannelData {
    fn new(values: Vec<f64>, max_norm: Option<f64>) -> Self {
        let mut accumulator = RangeAccumulator::new();
        for value in &values {
            accumulator.expand_value(*value);
        }
        Self {
            values,
            range: accumulator.resolve(),
            max_norm,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Component-wise value range of this channel.
    pub fn range(&self) -> DataRange {
        self.range
    }

    /// Largest point-wise Euclidean norm; None for scalar channels.
    pub fn max_norm(&self) -> Option<f64> {
        self.max_norm
    }
}

/// The full channel triple derived from one sample buffer.
#[derive(Debug, Clone)]
pub struct ChannelSet {
    component_count: usize,
    real: ChannelData,
    imag: ChannelData,
    abs2: ChannelData,
}

impl ChannelSet {
    /// Derive real, imaginary and squared-magnitude channels from the
    /// given samples.
    pub fn derive(samples: &FieldSamples) -> Self {
        let count = samples.component_count();
        let values = samples.values();

        let real: Vec<f64> = values.par_iter().map(|c| c.re).collect();
        let imag: Vec<f64> = values.par_iter().map(|c| c.im).collect();
        let abs2: Vec<f64> = values
            .par_chunks(count)
            .map(|point| point.iter().map(Complex64::norm_sqr).sum())
            .collect();

        let (real_norm, imag_norm) = if count > 1 {
            (
                Some(max_component_norm(values, count, |c| c.re)),
                Some(max_component_norm(values, count, |c| c.im)),
            )
        } else {
            (None, None)
        };

        Self {
            component_count: count,
            real: ChannelData::new(real, real_norm),
            imag: ChannelData::new(imag, imag_norm),
            abs2: ChannelData::new(abs2, None),
        }
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Number of sample vectors behind each channel.
    pub fn count(&self) -> usize {
        self.abs2.values().len()
    }

    pub fn channel(&self, channel: FieldChannel) -> &ChannelData {
        match channel {
            FieldChannel::Real => &self.real,
            FieldChannel::Imaginary => &self.imag,
            FieldChannel::SquaredMagnitude => &self.abs2,
        }
    }
}

/// Largest Euclidean norm of the per-point vectors built from one
/// complex component part.
fn max_component_norm(values: &[Complex64], count: usize, part: fn(&Complex64) -> f64) -> f64 {
    values
        .par_chunks(count)
        .map(|point| point.iter().map(|c| part(c) * part(c)).sum::<f64>().sqrt())
        .reduce(|| 0.0, f64::max)
}
