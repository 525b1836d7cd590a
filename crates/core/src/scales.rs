//! Band and quantize scales derived once from a dataset.

use tempgrid_protocol::Color;

use crate::config::ChartConfig;
use crate::model::{MONTHS, TemperatureDataset, month_name};
use crate::palette::PALETTE;

/// Maps a discrete domain onto equal, contiguous bands over `[0, extent)`.
/// There is no inner or outer padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    extent: f64,
}

impl<T: PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, extent: f64) -> Self {
        Self { domain, extent }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            0.0
        } else {
            self.extent / self.domain.len() as f64
        }
    }

    /// Width of a single band. Equal to [`step`](Self::step) without padding.
    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.domain.iter().position(|v| v == value)
    }

    /// Start coordinate of the band for `value`.
    pub fn position(&self, value: &T) -> Option<f64> {
        self.index_of(value).map(|i| i as f64 * self.step())
    }

    /// Middle of the band for `value`; where axis ticks go.
    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|p| p + self.bandwidth() / 2.0)
    }

    /// Domain value whose band contains `coord`.
    pub fn invert(&self, coord: f64) -> Option<&T> {
        if !(0.0..self.extent).contains(&coord) || self.domain.is_empty() {
            return None;
        }
        let index = ((coord / self.step()).floor() as usize).min(self.domain.len() - 1);
        self.domain.get(index)
    }
}

/// Maps a continuous domain `[min, max]` onto a fixed list of colors by
/// splitting it into equal segments.
///
/// A value exactly on a threshold belongs to the upper segment. Values
/// outside the domain clamp to the first or last color.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale {
    min: f64,
    max: f64,
    thresholds: Vec<f64>,
    colors: Vec<Color>,
}

impl QuantizeScale {
    pub fn new(min: f64, max: f64, colors: &[Color]) -> Self {
        let n = colors.len();
        let thresholds = (1..n)
            .map(|i| min + (max - min) * i as f64 / n as f64)
            .collect();
        Self {
            min,
            max,
            thresholds,
            colors: colors.to_vec(),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Inner segment boundaries, `colors.len() - 1` of them.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Bucket index for `value`, in `0..colors().len()`.
    pub fn bucket(&self, value: f64) -> usize {
        self.thresholds.partition_point(|t| *t <= value)
    }

    pub fn color(&self, value: f64) -> Color {
        self.colors
            .get(self.bucket(value))
            .copied()
            .unwrap_or(Color::rgb(0, 0, 0))
    }
}

/// All scales needed to lay out the chart. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub years: BandScale<i32>,
    pub months: BandScale<&'static str>,
    pub colors: QuantizeScale,
}

impl Scales {
    /// Plot-local x of the column for `year`.
    pub fn x(&self, year: i32) -> Option<f64> {
        self.years.position(&year)
    }

    /// Plot-local y of the row for a 1-based `month`.
    pub fn y(&self, month: u8) -> Option<f64> {
        self.months.position(&month_name(month)?)
    }
}

/// Derive the year, month and color scales for `dataset`.
///
/// Pure: identical inputs yield identical scales.
pub fn build_scales(dataset: &TemperatureDataset, config: &ChartConfig) -> Scales {
    let years = dataset.years();
    let (min, max) = dataset.variance_range().unwrap_or((0.0, 0.0));

    tracing::debug!(
        years = years.len(),
        min_variance = min,
        max_variance = max,
        "building scales"
    );

    Scales {
        years: BandScale::new(years, config.width),
        months: BandScale::new(MONTHS.to_vec(), config.height),
        colors: QuantizeScale::new(min, max, &PALETTE),
    }
}
