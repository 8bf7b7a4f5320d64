use crate::{ActivityLog, ActivityRecord, WasteCategory};

use chrono::Utc;

fn record(amount: i64) -> ActivityRecord {
    ActivityRecord {
        time: Utc::now(),
        category: WasteCategory::Plastic,
        quantity: 1.0,
        amount,
    }
}

#[test]
fn given_records_when_pushed_then_newest_first() {
    let mut log = ActivityLog::default();

    log.push(record(-1));
    log.push(record(-2));

    let amounts: Vec<i64> = log.records().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![-2, -1]);
}

#[test]
fn given_full_log_when_pushed_then_oldest_dropped() {
    let mut log = ActivityLog::new(10);

    for amount in 1..=12 {
        log.push(record(-amount));
    }

    assert_eq!(log.len(), 10);
    assert_eq!(log.latest().unwrap().amount, -12);
    assert_eq!(log.records().last().unwrap().amount, -3);
}

#[test]
fn given_zero_capacity_when_new_then_holds_one() {
    let mut log = ActivityLog::new(0);

    log.push(record(-1));
    log.push(record(-2));

    assert_eq!(log.capacity(), 1);
    assert_eq!(log.len(), 1);
}

#[test]
fn given_stored_records_when_from_records_then_truncated_to_capacity() {
    let records: Vec<ActivityRecord> = (1..=5).map(|n| record(-n)).collect();

    let log = ActivityLog::from_records(3, records);

    assert_eq!(log.len(), 3);
    assert_eq!(log.latest().unwrap().amount, -1);
}

#[test]
fn given_log_when_serialized_then_restores_equal() {
    let mut log = ActivityLog::new(4);
    log.push(record(-5_000));

    let json = serde_json::to_string(&log.to_vec()).unwrap();
    let restored = ActivityLog::from_records(4, serde_json::from_str(&json).unwrap());

    assert_eq!(restored, log);
}
