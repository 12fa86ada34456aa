//! Club configuration for one simulated day.

use chrono::NaiveTime;

use crate::types::ValidationError;

/// Operating parameters of the computer club.
///
/// Validated on construction: at least one table, and the club cannot
/// close before it opens. Opening and closing at the same minute is
/// allowed and describes a day where nothing can be billed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubConfig {
    tables: usize,
    opens_at: NaiveTime,
    closes_at: NaiveTime,
    hourly_rate: u64,
}

impl ClubConfig {
    /// Creates a validated configuration.
    pub fn new(
        tables: usize,
        opens_at: NaiveTime,
        closes_at: NaiveTime,
        hourly_rate: u64,
    ) -> Result<Self, ValidationError> {
        if tables == 0 {
            return Err(ValidationError::NotPositive {
                field: "table count",
            });
        }
        if opens_at > closes_at {
            return Err(ValidationError::ClosesBeforeOpens {
                opens_at,
                closes_at,
            });
        }
        Ok(Self {
            tables,
            opens_at,
            closes_at,
            hourly_rate,
        })
    }

    /// Number of tables in the club.
    #[must_use]
    pub const fn tables(&self) -> usize {
        self.tables
    }

    /// When the club opens.
    #[must_use]
    pub const fn opens_at(&self) -> NaiveTime {
        self.opens_at
    }

    /// When the club closes.
    #[must_use]
    pub const fn closes_at(&self) -> NaiveTime {
        self.closes_at
    }

    /// Price of one started hour at any table.
    #[must_use]
    pub const fn hourly_rate(&self) -> u64 {
        self.hourly_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn valid_configuration_is_accepted() {
        let config = ClubConfig::new(3, t(9, 0), t(19, 0), 10).unwrap();
        assert_eq!(config.tables(), 3);
        assert_eq!(config.opens_at(), t(9, 0));
        assert_eq!(config.closes_at(), t(19, 0));
        assert_eq!(config.hourly_rate(), 10);
    }

    #[test]
    fn zero_tables_is_rejected() {
        let result = ClubConfig::new(0, t(9, 0), t(19, 0), 10);
        assert!(matches!(
            result.unwrap_err(),
            ValidationError::NotPositive {
                field: "table count"
            }
        ));
    }

    #[test]
    fn closing_before_opening_is_rejected() {
        let result = ClubConfig::new(3, t(19, 0), t(9, 0), 10);
        assert!(matches!(
            result.unwrap_err(),
            ValidationError::ClosesBeforeOpens { .. }
        ));
    }

    #[test]
    fn opening_equal_to_closing_is_accepted() {
        assert!(ClubConfig::new(1, t(12, 0), t(12, 0), 5).is_ok());
    }

    #[test]
    fn zero_rate_is_accepted() {
        assert!(ClubConfig::new(1, t(9, 0), t(19, 0), 0).is_ok());
    }
}
