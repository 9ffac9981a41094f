use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::error::{AmsError, Result};
use crate::model::{LeaveRequest, LeaveStatus};
use crate::query::roster::student_by_code;
use crate::store::DataStore;

/// The two terminal decisions a reviewer can make.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

impl From<LeaveDecision> for LeaveStatus {
    fn from(decision: LeaveDecision) -> Self {
        match decision {
            LeaveDecision::Approved => LeaveStatus::Approved,
            LeaveDecision::Rejected => LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaveStatusTally {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn pending_leave_count(store: &DataStore) -> usize {
    store
        .leave_requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Pending)
        .count()
}

pub fn leave_status_tally(store: &DataStore) -> LeaveStatusTally {
    let mut tally = LeaveStatusTally::default();
    for request in &store.leave_requests {
        match request.status {
            LeaveStatus::Pending => tally.pending += 1,
            LeaveStatus::Approved => tally.approved += 1,
            LeaveStatus::Rejected => tally.rejected += 1,
        }
    }
    tally
}

/// A leave request joined with roster details for display.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveRequestView {
    pub id: String,
    pub student_code: String,
    pub student_name: String,
    pub department: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub submitted_date: NaiveDate,
    pub reviewed_by: Option<String>,
    pub review_date: Option<NaiveDate>,
}

pub fn enrich_leave_requests(store: &DataStore) -> Vec<LeaveRequestView> {
    store
        .leave_requests
        .iter()
        .map(|request| {
            let student = student_by_code(store, &request.student_code);
            LeaveRequestView {
                id: request.id.clone(),
                student_code: request.student_code.clone(),
                student_name: student
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| "Unknown Student".to_string()),
                department: student
                    .map(|s| s.department.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                from_date: request.from_date,
                to_date: request.to_date,
                reason: request.reason.clone(),
                status: request.status,
                submitted_date: request.submitted_date,
                reviewed_by: request.reviewed_by.clone(),
                review_date: request.review_date,
            }
        })
        .collect()
}

/// Records a reviewer's decision, stamping reviewer name and today's date.
/// Fails with [`AmsError::NotFound`] for an unknown id. An already-decided
/// request can be decided again and is simply overwritten; there is no
/// one-way guard on the status yet.
pub fn transition_leave_request(
    store: &mut DataStore,
    id: &str,
    decision: LeaveDecision,
    reviewed_by: &str,
) -> Result<LeaveRequest> {
    let request = store
        .leave_requests
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(AmsError::NotFound)?;

    request.status = decision.into();
    request.reviewed_by = Some(reviewed_by.to_string());
    request.review_date = Some(Local::now().date_naive());

    info!(id, status = %request.status, reviewed_by, "Leave request decided");
    Ok(request.clone())
}
