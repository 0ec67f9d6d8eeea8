//! Data range tracking and aggregation across field sources.
//!
//! A session keeps one aggregated range per derived channel (real,
//! imaginary, squared magnitude). Ranges either come from a single
//! explicit override or are widened by scanning every attached source;
//! they drive colour mapping and never shrink while a session lives.

use serde::{Deserialize, Serialize};

use crate::engine::error::SessionError;
use crate::engine::sources::field_source::FieldSource;
use crate::engine::sources::samples::ChannelSet;
use crate::engine::view::FieldChannel;

/// Inclusive [low, high] interval driving colour mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    low: f64,
    high: f64,
}

impl DataRange {
    /// Create a range, refusing inverted bounds.
    pub fn new(low: f64, high: f64) -> Result<Self, SessionError> {
        if low > high {
            return Err(SessionError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// The degenerate (0, 0) range used for channels absent from every source.
    pub const fn collapsed() -> Self {
        Self { low: 0.0, high: 0.0 }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

/// Running min/max over observed values, initialised to infinity bounds.
#[derive(Debug, Clone, Copy)]
pub struct RangeAccumulator {
    low: f64,
    high: f64,
}

impl RangeAccumulator {
    /// Create an accumulator no observation has widened yet.
    pub fn new() -> Self {
        Self {
            low: f64::INFINITY,
            high: f64::NEG_INFINITY,
        }
    }

    /// Widen with a single observed value.
    pub fn expand_value(&mut self, value: f64) {
        self.low = self.low.min(value);
        self.high = self.high.max(value);
    }

    /// Widen with an observed interval.
    pub fn expand(&mut self, low: f64, high: f64) {
        self.low = self.low.min(low);
        self.high = self.high.max(high);
    }

    /// Widen with a resolved range.
    pub fn expand_range(&mut self, range: DataRange) {
        self.expand(range.low(), range.high());
    }

    /// True until the first expansion.
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    /// Collapse never-expanded accumulators to (0, 0).
    pub fn resolve(&self) -> DataRange {
        if self.is_empty() {
            return DataRange::collapsed();
        }
        DataRange { low: self.low, high: self.high }
    }
}

impl Default for RangeAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// The three resolved session ranges handed to the render binding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelRanges {
    pub real: DataRange,
    pub imag: DataRange,
    pub abs2: DataRange,
}

impl ChannelRanges {
    /// Range backing the given storage channel.
    pub fn get(&self, channel: FieldChannel) -> DataRange {
        match channel {
            FieldChannel::Real => self.real,
            FieldChannel::Imaginary => self.imag,
            FieldChannel::SquaredMagnitude => self.abs2,
        }
    }
}

/// Aggregates per-channel ranges over an attached source set, or pins
/// them to an explicit override.
///
/// Scanning is monotone: further sources only widen the accumulated
/// ranges. An overridden aggregator ignores scans entirely.
#[derive(Debug, Clone)]
pub struct RangeAggregator {
    real: RangeAccumulator,
    imag: RangeAccumulator,
    abs2: RangeAccumulator,
    overridden: bool,
}

impl RangeAggregator {
    /// Empty aggregator for the scan path.
    pub fn new() -> Self {
        Self {
            real: RangeAccumulator::new(),
            imag: RangeAccumulator::new(),
            abs2: RangeAccumulator::new(),
            overridden: false,
        }
    }

    /// Pin every channel range from one explicit override.
    ///
    /// Real and imaginary both take the override verbatim, kept even
    /// when one of them is semantically unused. The squared-magnitude
    /// range is derived from the override endpoints: intervals spanning
    /// zero bottom out at zero, single-signed intervals square both ends.
    pub fn from_override(range: DataRange) -> Self {
        let (low, high) = (range.low(), range.high());
        let (sq_low, sq_high) = (low * low, high * high);
        let abs2 = if low >= 0.0 || high <= 0.0 {
            (sq_low.min(sq_high), sq_low.max(sq_high))
        } else {
            (0.0, sq_low.max(sq_high))
        };

        let mut aggregator = Self::new();
        aggregator.real.expand(low, high);
        aggregator.imag.expand(low, high);
        aggregator.abs2.expand(abs2.0, abs2.1);
        aggregator.overridden = true;
        aggregator
    }

    /// Widen the accumulated ranges with every channel the given sources
    /// carry. Overridden aggregators ignore the scan.
    ///
    /// Vector-valued real/imag channels contribute (0, max_norm) rather
    /// than their component-wise value range; the squared-magnitude range
    /// only ever grows from actual squared-magnitude samples. Sources
    /// without channels (outline meshes) are skipped.
    pub fn scan(&mut self, sources: &[FieldSource]) -> Result<(), SessionError> {
        for source in sources {
            if let Some(count) = source.component_count() {
                if !constants::channels::SUPPORTED_COMPONENT_COUNTS.contains(&count) {
                    return Err(SessionError::UnsupportedComponentCount(count));
                }
            }
        }
        if self.overridden {
            return Ok(());
        }

        for source in sources {
            for set in [source.point_data(), source.cell_data()].into_iter().flatten() {
                self.expand_from(set);
            }
        }
        Ok(())
    }

    fn expand_from(&mut self, set: &ChannelSet) {
        for (accumulator, channel) in [
            (&mut self.real, FieldChannel::Real),
            (&mut self.imag, FieldChannel::Imaginary),
        ] {
            let data = set.channel(channel);
            match data.max_norm() {
                Some(norm) => accumulator.expand(0.0, norm),
                None => accumulator.expand_range(data.range()),
            }
        }
        self.abs2.expand_range(set.channel(FieldChannel::SquaredMagnitude).range());
    }

    /// Resolve to the session ranges, collapsing untouched channels to (0, 0).
    pub fn resolve(&self) -> ChannelRanges {
        ChannelRanges {
            real: self.real.resolve(),
            imag: self.imag.resolve(),
            abs2: self.abs2.resolve(),
        }
    }
}

impl Default for RangeAggregator {
    fn default() -> Self {
        Self::new()
    }
}
