use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A late arrival. The student code may reference a student that is no longer
/// (or never was) on the roster; consumers tolerate that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LateRecord {
    pub id: String,
    pub student_code: String,
    pub date: NaiveDate,
    pub check_in_time: NaiveTime,
}
