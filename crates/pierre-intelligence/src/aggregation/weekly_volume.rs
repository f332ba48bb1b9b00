// ABOUTME: Weekly training volume buckets derived from logged training sessions
// ABOUTME: Groups sessions by ISO week (Monday start, UTC) and sums their duration in hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, NaiveDate};
use pierre_core::constants::progress::ISO_WEEK_LABEL_SEPARATOR;
use pierre_core::constants::time_constants::MINUTES_PER_HOUR_F64;
use pierre_core::models::{Roster, TrainingSession};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Training volume for one ISO week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    /// ISO week label, e.g. `2026-W03`
    pub label: String,
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Summed session duration in hours
    pub hours: f64,
    /// Number of sessions in the week
    pub session_count: usize,
}

#[derive(Default)]
struct WeekTotals {
    week_start: Option<NaiveDate>,
    minutes: u64,
    sessions: usize,
}

/// Sum session hours per ISO week, ordered by week label
///
/// Weeks without sessions are not synthesized. A session belongs to the ISO
/// week of its UTC start time, so 2025-12-29 lands in `2026-W01`.
#[must_use]
pub fn weekly_training_hours(sessions: &[TrainingSession]) -> Vec<WeeklyBucket> {
    bucket_sessions(sessions.iter())
}

/// Weekly training hours across every client in the roster
#[must_use]
pub fn roster_weekly_training_hours(roster: &Roster) -> Vec<WeeklyBucket> {
    bucket_sessions(roster.iter().flat_map(|client| client.sessions.iter()))
}

fn bucket_sessions<'a, I>(sessions: I) -> Vec<WeeklyBucket>
where
    I: Iterator<Item = &'a TrainingSession>,
{
    let mut weeks: BTreeMap<(i32, u32), WeekTotals> = BTreeMap::new();

    for session in sessions {
        let date = session.started_at.date_naive();
        let iso = date.iso_week();
        let totals = weeks.entry((iso.year(), iso.week())).or_default();

        if totals.week_start.is_none() {
            totals.week_start = Some(monday_of(date));
        }
        totals.minutes += u64::from(session.duration_minutes);
        totals.sessions += 1;
    }

    weeks
        .into_iter()
        .filter_map(|((year, week), totals)| {
            Some(WeeklyBucket {
                label: format!("{year:04}{ISO_WEEK_LABEL_SEPARATOR}{week:02}"),
                week_start: totals.week_start?,
                hours: totals.minutes as f64 / MINUTES_PER_HOUR_F64,
                session_count: totals.sessions,
            })
        })
        .collect()
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session(y: i32, m: u32, d: u32, minutes: u32) -> TrainingSession {
        TrainingSession::new(Utc.with_ymd_and_hms(y, m, d, 18, 30, 0).unwrap(), minutes)
    }

    #[test]
    fn test_groups_by_iso_week_monday_start() {
        // 2026-03-02 is a Monday, 2026-03-08 the following Sunday
        let sessions = vec![
            session(2026, 3, 2, 60),
            session(2026, 3, 8, 30),
            session(2026, 3, 9, 90),
        ];

        let buckets = weekly_training_hours(&sessions);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "2026-W10");
        assert_eq!(
            buckets[0].week_start,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
        assert!((buckets[0].hours - 1.5).abs() < f64::EPSILON);
        assert_eq!(buckets[0].session_count, 2);
        assert_eq!(buckets[1].label, "2026-W11");
        assert!((buckets[1].hours - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_year_boundary_uses_iso_year() {
        let sessions = vec![session(2026, 1, 2, 45), session(2025, 12, 29, 15)];

        let buckets = weekly_training_hours(&sessions);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].label, "2026-W01");
        assert_eq!(
            buckets[0].week_start,
            NaiveDate::from_ymd_opt(2025, 12, 29).unwrap()
        );
        assert!((buckets[0].hours - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_buckets_sorted_regardless_of_input_order() {
        let sessions = vec![session(2026, 5, 20, 60), session(2026, 1, 14, 60)];

        let labels: Vec<String> = weekly_training_hours(&sessions)
            .into_iter()
            .map(|bucket| bucket.label)
            .collect();

        assert_eq!(labels, vec!["2026-W03".to_owned(), "2026-W21".to_owned()]);
    }

    #[test]
    fn test_no_sessions_no_buckets() {
        assert!(weekly_training_hours(&[]).is_empty());
    }
}
