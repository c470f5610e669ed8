//! Daily bucketing of a flat forecast point list.

use chrono::{DateTime, Utc};

use crate::model::{DailySummary, ForecastPoint};

/// Fold a time-ordered point list into at most `max_days` daily summaries.
///
/// Day boundaries are UTC calendar dates, applied identically to
/// `reference_now` and to every point timestamp. The reference date itself is
/// always excluded: today belongs to the current-conditions view, not the
/// daily forecast.
///
/// `points` must be non-decreasing by timestamp (the adapter emits them that
/// way); this function does not sort. The first point seen for each new day
/// becomes that day's representative — later same-day points are ignored
/// rather than folded into a min/max. Hourly points without a day range fall
/// back to their own temperature for both bounds.
pub fn aggregate_daily(
    points: &[ForecastPoint],
    reference_now: DateTime<Utc>,
    max_days: usize,
) -> Vec<DailySummary> {
    let today = reference_now.date_naive();

    let mut summaries = Vec::new();
    let mut current_day = None;

    for point in points {
        if summaries.len() >= max_days {
            break;
        }

        let day = point.timestamp.date_naive();
        if Some(day) == current_day {
            continue;
        }
        current_day = Some(day);

        if day == today {
            continue;
        }

        summaries.push(DailySummary {
            date: day,
            temperature_max: point.temperature_max.unwrap_or(point.temperature),
            temperature_min: point.temperature_min.unwrap_or(point.temperature),
            condition_main: point.condition_main.clone(),
            condition_description: point.condition_description.clone(),
        });
    }

    summaries
}
