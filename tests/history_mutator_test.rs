// ABOUTME: Integration tests for the history mutator append and batch replace operations
// ABOUTME: Verifies client isolation, exercise isolation, ordering, replay and snapshot sharing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, record, sample_roster};
use pierre_coaching::constants::progress::MAX_ROSTER_VERSION;
use pierre_coaching::errors::ErrorCode;
use pierre_coaching::history::{
    append_weight_record, log_session, record_progress, replace_exercise_records,
    AppendWeightRecord, UpdateOutcome,
};
use pierre_coaching::models::{
    Client, ClientId, ExerciseId, ProgressSnapshot, Roster, TrainingSession, WeightEntry,
    WeightHistory,
};
use std::sync::Arc;

fn entry(day_of_month: u32, weight: f64, reps: u32) -> WeightEntry {
    WeightEntry {
        date: day(day_of_month),
        weight,
        reps,
        notes: None,
    }
}

fn history_of<'a>(roster: &'a Roster, id: &str) -> &'a [WeightHistory] {
    &roster.get(&ClientId::new(id)).unwrap().weight_history
}

// ============================================================================
// Append Single Record
// ============================================================================

#[test]
fn test_append_leaves_other_clients_untouched() {
    let roster = sample_roster();
    let request = AppendWeightRecord::new("ana", "bench", 45.0, 8);

    let update = append_weight_record(&roster, &request, day(5));

    assert!(update.is_applied());
    for (before, after) in roster.clients().iter().zip(update.roster.clients()) {
        if before.id().as_str() == "ana" {
            assert!(!Arc::ptr_eq(before, after));
        } else {
            assert!(Arc::ptr_eq(before, after));
            assert_eq!(before, after);
        }
    }
}

#[test]
fn test_append_grows_history_by_one_at_the_end() {
    let roster = sample_roster();
    let request = AppendWeightRecord::new("ana", "squat", 75.0, 3).with_notes("belt");

    let update = append_weight_record(&roster, &request, day(6));

    let before = history_of(&roster, "ana");
    let after = history_of(&update.roster, "ana");
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], before);

    let appended = after.last().unwrap();
    assert_eq!(appended.exercise_id, ExerciseId::new("squat"));
    assert_eq!(appended.date, day(6));
    assert!((appended.weight - 75.0).abs() < f64::EPSILON);
    assert_eq!(appended.reps, 3);
    assert_eq!(appended.notes.as_deref(), Some("belt"));
}

#[test]
fn test_append_does_not_deduplicate() {
    let roster = sample_roster();
    let request = AppendWeightRecord::new("bruno", "deadlift", 100.0, 5);

    let first = append_weight_record(&roster, &request, day(7));
    let second = append_weight_record(&first.roster, &request, day(7));

    let history = history_of(&second.roster, "bruno");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], history[1]);
}

#[test]
fn test_repeated_appends_keep_insertion_order() {
    let mut roster = sample_roster();
    let weights = [50.0, 52.5, 55.0, 57.5, 60.0];

    for (offset, weight) in (0_u32..).zip(weights) {
        let request = AppendWeightRecord::new("bruno", "bench", weight, 5);
        roster = append_weight_record(&roster, &request, day(5 + offset)).roster;
    }

    let history = history_of(&roster, "bruno");
    assert_eq!(history.len(), weights.len());
    for ((stored, weight), offset) in history.iter().zip(weights).zip(0_u32..) {
        assert!((stored.weight - weight).abs() < f64::EPSILON);
        assert_eq!(stored.date, day(5 + offset));
    }
    assert_eq!(roster.version(), 5);
}

#[test]
fn test_append_accepts_zero_and_negative_weight() {
    let roster = sample_roster();

    let zero = append_weight_record(
        &roster,
        &AppendWeightRecord::new("bruno", "plank", 0.0, 0),
        day(3),
    );
    let negative = append_weight_record(
        &zero.roster,
        &AppendWeightRecord::new("bruno", "assisted-pullup", -20.0, 8),
        day(3),
    );

    assert!(negative.is_applied());
    assert_eq!(history_of(&negative.roster, "bruno").len(), 2);
}

#[test]
fn test_append_keeps_previous_snapshot_intact() {
    let roster = sample_roster();
    let copy = roster.clone();

    let update = append_weight_record(
        &roster,
        &AppendWeightRecord::new("ana", "bench", 42.5, 10),
        day(8),
    );

    assert_eq!(roster, copy);
    assert_eq!(history_of(&roster, "ana").len(), 2);
    assert_eq!(update.roster.version(), roster.version() + 1);
}

#[test]
fn test_append_unknown_client_is_noop() {
    let roster = sample_roster();

    let update = append_weight_record(
        &roster,
        &AppendWeightRecord::new("ghost", "bench", 50.0, 5),
        day(8),
    );

    assert_eq!(
        update.outcome,
        UpdateOutcome::ClientNotFound {
            client_id: ClientId::new("ghost")
        }
    );
    assert_eq!(update.roster, roster);
    assert_eq!(update.roster.version(), roster.version());
}

// ============================================================================
// Batch Replace Records For Exercise
// ============================================================================

#[test]
fn test_replace_swaps_only_the_target_exercise() {
    let roster = sample_roster();
    let entries = vec![entry(12, 72.5, 5), entry(14, 75.0, 3)];

    let update = replace_exercise_records(
        &roster,
        &ClientId::new("ana"),
        &ExerciseId::new("squat"),
        &entries,
    );

    let history = history_of(&update.roster, "ana");
    assert_eq!(
        history,
        &[
            record("bench", day(1), 40.0, 10),
            record("squat", day(12), 72.5, 5),
            record("squat", day(14), 75.0, 3),
        ]
    );
}

#[test]
fn test_replace_keeps_other_exercises_in_relative_order() {
    let roster = Roster::new(vec![Client::new("dani", "Dani", 65.0).with_weight_history(vec![
        record("squat", day(1), 60.0, 5),
        record("bench", day(1), 40.0, 5),
        record("squat", day(2), 62.5, 5),
        record("row", day(2), 35.0, 10),
        record("bench", day(3), 42.5, 5),
    ])])
    .unwrap();

    let update = replace_exercise_records(
        &roster,
        &ClientId::new("dani"),
        &ExerciseId::new("squat"),
        &[entry(9, 65.0, 5)],
    );

    assert_eq!(
        history_of(&update.roster, "dani"),
        &[
            record("bench", day(1), 40.0, 5),
            record("row", day(2), 35.0, 10),
            record("bench", day(3), 42.5, 5),
            record("squat", day(9), 65.0, 5),
        ]
    );
}

#[test]
fn test_replace_is_idempotent_on_replay() {
    let roster = sample_roster();
    let client = ClientId::new("ana");
    let squat = ExerciseId::new("squat");
    let entries = vec![entry(20, 80.0, 2), entry(21, 82.5, 1)];

    let once = replace_exercise_records(&roster, &client, &squat, &entries);
    let twice = replace_exercise_records(&once.roster, &client, &squat, &entries);

    assert_eq!(
        history_of(&once.roster, "ana"),
        history_of(&twice.roster, "ana")
    );
    assert_eq!(twice.roster.version(), roster.version() + 2);
}

#[test]
fn test_replace_with_empty_batch_clears_exercise() {
    let roster = sample_roster();

    let update = replace_exercise_records(
        &roster,
        &ClientId::new("ana"),
        &ExerciseId::new("squat"),
        &[],
    );

    assert!(update.is_applied());
    assert_eq!(
        history_of(&update.roster, "ana"),
        &[record("bench", day(1), 40.0, 10)]
    );
}

#[test]
fn test_replace_new_exercise_appends() {
    let roster = sample_roster();

    let update = replace_exercise_records(
        &roster,
        &ClientId::new("ana"),
        &ExerciseId::new("deadlift"),
        &[entry(3, 90.0, 5)],
    );

    let history = history_of(&update.roster, "ana");
    assert_eq!(history.len(), 3);
    assert_eq!(history[2], record("deadlift", day(3), 90.0, 5));
}

#[test]
fn test_replace_shares_untouched_clients() {
    let roster = sample_roster();

    let update = replace_exercise_records(
        &roster,
        &ClientId::new("carla"),
        &ExerciseId::new("bench"),
        &[entry(10, 30.0, 12)],
    );

    let position = roster.position(&ClientId::new("carla")).unwrap();
    for (index, (before, after)) in roster
        .clients()
        .iter()
        .zip(update.roster.clients())
        .enumerate()
    {
        assert_eq!(Arc::ptr_eq(before, after), index != position);
    }
    assert_eq!(update.roster.len(), roster.len());
}

#[test]
fn test_replace_unknown_client_is_noop() {
    let roster = sample_roster();

    let update = replace_exercise_records(
        &roster,
        &ClientId::new("ghost"),
        &ExerciseId::new("squat"),
        &[entry(1, 50.0, 5)],
    );

    assert!(!update.is_applied());
    assert_eq!(update.roster, roster);
}

// ============================================================================
// Progress snapshots and sessions
// ============================================================================

#[test]
fn test_record_progress_appends_in_order() {
    let roster = sample_roster();

    let update = record_progress(
        &roster,
        &ClientId::new("ana"),
        ProgressSnapshot::weight(day(9), 77.0),
    )
    .unwrap();

    let progress = &update.roster.get(&ClientId::new("ana")).unwrap().progress;
    assert_eq!(progress.len(), 3);
    assert_eq!(progress[2].date, day(9));
}

#[test]
fn test_record_progress_rejects_backdated_snapshot() {
    let roster = sample_roster();

    let error = record_progress(
        &roster,
        &ClientId::new("ana"),
        ProgressSnapshot::weight(day(1), 77.0),
    )
    .unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.resource_id.as_deref(), Some("ana"));
}

#[test]
fn test_log_session_appends() {
    let roster = sample_roster();

    let update = log_session(
        &roster,
        &ClientId::new("bruno"),
        TrainingSession::new(day(11), 30),
    );

    assert!(update.is_applied());
    assert_eq!(
        update
            .roster
            .get(&ClientId::new("bruno"))
            .unwrap()
            .sessions
            .len(),
        1
    );
}

#[test]
fn test_roster_document_with_exhausted_version_is_rejected() {
    let json = r#"{"version":18446744073709551615,"clients":[{"id":"ana","name":"Ana","goal":60.0}]}"#;

    assert!(serde_json::from_str::<Roster>(json).is_err());
}

#[test]
fn test_append_at_maximum_loadable_version() {
    let roster =
        Roster::with_version(MAX_ROSTER_VERSION, vec![Client::new("ana", "Ana", 60.0)]).unwrap();

    let update = append_weight_record(
        &roster,
        &AppendWeightRecord::new("ana", "bench", 40.0, 10),
        day(2),
    );

    assert!(update.is_applied());
    assert_eq!(update.roster.version(), MAX_ROSTER_VERSION + 1);
}

#[test]
fn test_roster_rejects_duplicate_ids() {
    let result = Roster::new(vec![
        Client::new("ana", "Ana", 60.0),
        Client::new("ana", "Ana Again", 61.0),
    ]);

    assert_eq!(result.unwrap_err().code, ErrorCode::ResourceAlreadyExists);
}
