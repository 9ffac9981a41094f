use crate::model::{
    AttendanceRecord, Department, LateRecord, LeaveRequest, Student, Teacher,
};
use crate::seed;

/// Owns every collection the aggregator reads. The process root constructs
/// one and hands out `&`/`&mut` borrows; nothing in the crate keeps hidden
/// shared state.
#[derive(Debug, Default)]
pub struct DataStore {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub attendance: Vec<AttendanceRecord>,
    pub late_records: Vec<LateRecord>,
    pub leave_requests: Vec<LeaveRequest>,
    pub departments: Vec<Department>,
}

impl DataStore {
    /// Empty store, for fixture-driven tests.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The demo dataset the running instance starts from. Collections live
    /// for the life of the process; there is no deletion path.
    pub fn seeded() -> Self {
        Self {
            students: seed::students(),
            teachers: seed::teachers(),
            attendance: seed::attendance(),
            late_records: seed::late_records(),
            leave_requests: seed::leave_requests(),
            departments: seed::departments(),
        }
    }
}
