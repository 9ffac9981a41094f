use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One student's presence on one day. The (date, student_code) pair is unique
/// within the collection; updates replace in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub student_code: String,
    pub present: bool,
    pub check_in_time: Option<NaiveTime>,
}
