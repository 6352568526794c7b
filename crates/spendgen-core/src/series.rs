//! Deterministic synthetic time series for exercising a forecasting chart.
//!
//! Six fixed-shape series over the same 60-day window. No randomness: every
//! point comes from a closed-form formula over the day index and calendar
//! date, so the output is identical on every run.

use std::f64::consts::PI;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::contracts::types::{Expense, SeriesExport};
use crate::dates::format_iso_date;

pub const SERIES_DAYS: usize = 60;
pub const EXPORT_TIMESTAMP: &str = "2025-10-05T12:00:00.000Z";

pub fn series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 7).unwrap_or_default()
}

/// All six series paired with their fixed output filenames, in a stable
/// order for rendering and writing.
pub fn all_series() -> Vec<(&'static str, SeriesExport)> {
    vec![
        ("uptrend_linear.json", uptrend_linear()),
        ("downtrend_linear.json", downtrend_linear()),
        ("weekly_seasonal.json", weekly_seasonal()),
        ("weekend_spike.json", weekend_spike()),
        ("multiplicative_growth.json", multiplicative_growth()),
        ("outliers_spike.json", outliers_spike()),
    ]
}

/// Amount climbs linearly from 5 to 100 across the window.
pub fn uptrend_linear() -> SeriesExport {
    build_series("Misc", |index, _| {
        let amount = 5.0 + index_f64(index) * (95.0 / (SERIES_DAYS as f64 - 1.0));
        (amount, "Uptrend daily".to_string())
    })
}

/// Amount falls linearly from 100 to 5.
pub fn downtrend_linear() -> SeriesExport {
    build_series("Misc", |index, _| {
        let amount = 100.0 - index_f64(index) * (95.0 / (SERIES_DAYS as f64 - 1.0));
        (amount, "Downtrend daily".to_string())
    })
}

/// Sinusoid with a 7-day period around a base of 40.
pub fn weekly_seasonal() -> SeriesExport {
    build_series("Food", |index, _| {
        let seasonal = 20.0 * (2.0 * PI * (index_f64(index % 7) / 7.0)).sin();
        (40.0 + seasonal, "Weekly seasonality".to_string())
    })
}

/// Step function keyed off the calendar weekday: Saturdays and Sundays sit
/// at 80+, weekdays stay under 30.
pub fn weekend_spike() -> SeriesExport {
    build_series("Leisure", |index, date| {
        let amount = if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            80.0 + index_f64(index % 3) * 5.0
        } else {
            20.0 + index_f64(index % 4) * 2.0
        };
        (amount, "Weekend spike".to_string())
    })
}

/// Compound 3% daily growth from a base of 5.
pub fn multiplicative_growth() -> SeriesExport {
    build_series("Investment", |index, _| {
        let amount = 5.0 * 1.03f64.powi(index as i32);
        (amount, "Multiplicative growth".to_string())
    })
}

/// Flat-ish base with a +300 outlier at every 15th point.
pub fn outliers_spike() -> SeriesExport {
    build_series("Shopping", |index, _| {
        let base = 25.0 + index_f64(index % 7);
        if index % 15 == 0 {
            (base + 300.0, "Big one-off".to_string())
        } else {
            (base, "Normal".to_string())
        }
    })
}

fn build_series<F>(category: &str, point: F) -> SeriesExport
where
    F: Fn(usize, NaiveDate) -> (f64, String),
{
    let start = series_start();
    let expenses = (0..SERIES_DAYS)
        .map(|index| {
            let date = start + Duration::days(index as i64);
            let (amount, note) = point(index, date);
            Expense {
                id: (index + 1) as u32,
                category: category.to_string(),
                amount: round_cents(amount),
                date: format_iso_date(&date),
                note: Some(note),
            }
        })
        .collect();

    SeriesExport {
        exported_at: EXPORT_TIMESTAMP.to_string(),
        expenses,
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn index_f64(index: usize) -> f64 {
    index as f64
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};

    use super::{
        SERIES_DAYS, all_series, multiplicative_growth, outliers_spike, uptrend_linear,
        weekend_spike, weekly_seasonal,
    };

    #[test]
    fn every_series_spans_the_full_window() {
        for (file_name, export) in all_series() {
            assert_eq!(export.expenses.len(), SERIES_DAYS, "{file_name}");
            assert_eq!(export.expenses[0].date, "2025-08-07", "{file_name}");
            assert_eq!(export.exported_at, super::EXPORT_TIMESTAMP, "{file_name}");
        }
    }

    #[test]
    fn uptrend_hits_its_endpoints() {
        let export = uptrend_linear();
        assert_eq!(export.expenses[0].amount, 5.0);
        assert_eq!(export.expenses[SERIES_DAYS - 1].amount, 100.0);
    }

    #[test]
    fn weekend_points_spike_and_weekdays_stay_low() {
        let export = weekend_spike();
        for expense in &export.expenses {
            let parsed = NaiveDate::parse_from_str(&expense.date, "%Y-%m-%d");
            assert!(parsed.is_ok());
            if let Ok(date) = parsed {
                if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                    assert!(expense.amount >= 80.0, "{}", expense.date);
                } else {
                    assert!(expense.amount < 80.0, "{}", expense.date);
                }
            }
        }
    }

    #[test]
    fn outliers_land_on_every_fifteenth_index() {
        let export = outliers_spike();
        for (index, expense) in export.expenses.iter().enumerate() {
            let base = 25.0 + (index % 7) as f64;
            if index % 15 == 0 {
                assert_eq!(expense.amount, base + 300.0);
                assert_eq!(expense.note.as_deref(), Some("Big one-off"));
            } else {
                assert_eq!(expense.amount, base);
                assert_eq!(expense.note.as_deref(), Some("Normal"));
            }
        }
    }

    #[test]
    fn growth_series_compounds_at_three_percent() {
        let export = multiplicative_growth();
        assert_eq!(export.expenses[0].amount, 5.0);
        assert_eq!(export.expenses[1].amount, 5.15);
        assert!(export.expenses[SERIES_DAYS - 1].amount > 28.0);
    }

    #[test]
    fn weekly_seasonal_repeats_with_seven_day_period() {
        let export = weekly_seasonal();
        for index in 0..SERIES_DAYS - 7 {
            assert_eq!(
                export.expenses[index].amount,
                export.expenses[index + 7].amount
            );
        }
        assert_eq!(export.expenses[0].amount, 40.0);
    }
}
