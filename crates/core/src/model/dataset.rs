use serde::{Deserialize, Serialize};

/// English month names, indexed by `month - 1`.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a 1-based month, or `None` outside 1–12.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTHS.get(usize::from(month).checked_sub(1)?).copied()
}

/// One monthly reading: deviation from the dataset's base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub year: i32,
    /// 1-based month (January = 1).
    pub month: u8,
    pub variance: f64,
}

impl MonthlyRecord {
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }

    pub fn month_name(&self) -> Option<&'static str> {
        month_name(self.month)
    }
}

/// The full dataset as published. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyRecord>,
}

impl TemperatureDataset {
    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// First and last year present.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.monthly_variance.iter().map(|r| r.year).min()?;
        let max = self.monthly_variance.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Smallest and largest variance across all records.
    pub fn variance_range(&self) -> Option<(f64, f64)> {
        if self.monthly_variance.is_empty() {
            return None;
        }
        let (lo, hi) = self.monthly_variance.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.variance), hi.max(r.variance)),
        );
        Some((lo, hi))
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.monthly_variance.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: u8, variance: f64) -> MonthlyRecord {
        MonthlyRecord {
            year,
            month,
            variance,
        }
    }

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn ranges_and_distinct_years() {
        let ds = TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                record(1760, 2, 0.3),
                record(1753, 1, -1.366),
                record(1760, 1, 1.1),
                record(1753, 2, -2.2),
            ],
        };
        assert_eq!(ds.year_range(), Some((1753, 1760)));
        assert_eq!(ds.variance_range(), Some((-2.2, 1.1)));
        assert_eq!(ds.years(), vec![1753, 1760]);
        assert!((ds.monthly_variance[1].temperature(ds.base_temperature) - 7.294).abs() < 1e-9);
    }

    #[test]
    fn empty_dataset_has_no_ranges() {
        let ds = TemperatureDataset {
            base_temperature: 8.0,
            monthly_variance: Vec::new(),
        };
        assert!(ds.is_empty());
        assert_eq!(ds.year_range(), None);
        assert_eq!(ds.variance_range(), None);
    }
}
