use chrono::{Duration, Local, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::query::roster::student_by_code;
use crate::store::DataStore;

/// A late record joined with roster details for display. Records for codes
/// missing from the roster still appear, under placeholder identity.
#[derive(Debug, Clone, Serialize)]
pub struct LateRecordView {
    pub id: String,
    pub student_code: String,
    pub student_name: String,
    pub department: String,
    pub date: NaiveDate,
    pub check_in_time: NaiveTime,
}

/// Late arrivals dated within `[today - days, today]`, both ends inclusive.
/// Unknown student codes count like any other record.
pub fn late_count_in_window(store: &DataStore, days: i64) -> usize {
    let today = Local::now().date_naive();
    let window_start = today - Duration::days(days);
    store
        .late_records
        .iter()
        .filter(|r| r.date >= window_start && r.date <= today)
        .count()
}

pub fn enrich_late_records(store: &DataStore) -> Vec<LateRecordView> {
    store
        .late_records
        .iter()
        .map(|record| {
            let student = student_by_code(store, &record.student_code);
            LateRecordView {
                id: record.id.clone(),
                student_code: record.student_code.clone(),
                student_name: student
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| "Unknown Student".to_string()),
                department: student
                    .map(|s| s.department.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                date: record.date,
                check_in_time: record.check_in_time,
            }
        })
        .collect()
}
