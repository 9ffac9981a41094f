use serde::Serialize;

use crate::query::{attendance, late, leave};
use crate::store::DataStore;

/// The headline figures of the landing view. The average is preformatted to
/// one decimal place, the single display precision used everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_students: usize,
    pub average_attendance: String,
    pub late_arrivals: usize,
    pub pending_leave_requests: usize,
}

pub fn dashboard_summary(store: &DataStore) -> DashboardSummary {
    DashboardSummary {
        total_students: store.students.len(),
        average_attendance: format!("{:.1}", attendance::system_attendance_rate(store)),
        late_arrivals: late::late_count_in_window(store, 7),
        pending_leave_requests: leave::pending_leave_count(store),
    }
}
