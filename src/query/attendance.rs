use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use crate::model::AttendanceRecord;
use crate::store::DataStore;

/// Percentage of days present for one student. A student with no records
/// rates 0.0; that is a defined answer, not an error.
pub fn attendance_rate_for(store: &DataStore, student_code: &str) -> f64 {
    let mut total = 0usize;
    let mut present = 0usize;
    for record in store.attendance.iter().filter(|r| r.student_code == student_code) {
        total += 1;
        if record.present {
            present += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    present as f64 / total as f64 * 100.0
}

/// Same ratio over the whole collection; 0.0 when it is empty.
pub fn system_attendance_rate(store: &DataStore) -> f64 {
    if store.attendance.is_empty() {
        return 0.0;
    }
    let present = store.attendance.iter().filter(|r| r.present).count();
    present as f64 / store.attendance.len() as f64 * 100.0
}

/// Full attendance history for one student, in source order.
pub fn records_for_student<'a>(
    store: &'a DataStore,
    student_code: &str,
) -> Vec<&'a AttendanceRecord> {
    store
        .attendance
        .iter()
        .filter(|r| r.student_code == student_code)
        .collect()
}

/// Upsert keyed by (date, student_code). Marking present stamps the current
/// time as check-in; marking absent clears it. Never fails: a missing record
/// is created.
pub fn update_attendance(store: &mut DataStore, student_code: &str, date: NaiveDate, present: bool) {
    let check_in_time = present.then(now_to_minute);

    match store
        .attendance
        .iter_mut()
        .find(|r| r.student_code == student_code && r.date == date)
    {
        Some(record) => {
            record.present = present;
            record.check_in_time = check_in_time;
            debug!(student_code, %date, present, "Updated attendance record");
        }
        None => {
            store.attendance.push(AttendanceRecord {
                date,
                student_code: student_code.to_string(),
                present,
                check_in_time,
            });
            debug!(student_code, %date, present, "Created attendance record");
        }
    }
}

/// Check-ins are displayed at minute precision.
fn now_to_minute() -> NaiveTime {
    let t = Local::now().time();
    t.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(t)
}
