//! Calendar date of the simulation clock.
//!
//! The ephemerides are taken at 2022-01-01T00:00:00 UTC, so `time_total`
//! seconds after construction maps to a date on the renderer's overlay.

use hifitime::{Duration, Epoch};

/// Epoch at which `time_total == 0`
pub fn ephemerides_epoch() -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(2022, 1, 1)
}

/// Epoch reached after `time_total` simulated seconds
pub fn epoch_at(time_total: f64) -> Epoch {
    ephemerides_epoch() + Duration::from_seconds(time_total)
}

/// ISO date ("YYYY-MM-DD") after `time_total` simulated seconds
pub fn iso_date(time_total: f64) -> String {
    let (year, month, day, ..) = epoch_at(time_total).to_gregorian_utc();
    format!("{year:04}-{month:02}-{day:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_new_year_2022() {
        assert_eq!(iso_date(0.0), "2022-01-01");
    }

    #[test]
    fn advances_by_days() {
        assert_eq!(iso_date(86_400.0), "2022-01-02");
        assert_eq!(iso_date(31.0 * 86_400.0), "2022-02-01");
        assert_eq!(iso_date(365.0 * 86_400.0 + 3600.0), "2023-01-01");
    }
}
