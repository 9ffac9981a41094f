pub mod attendance;
pub mod department;
pub mod late_record;
pub mod leave_request;
pub mod role;
pub mod student;
pub mod teacher;

pub use attendance::AttendanceRecord;
pub use department::Department;
pub use late_record::LateRecord;
pub use leave_request::{LeaveRequest, LeaveStatus};
pub use role::Role;
pub use student::Student;
pub use teacher::Teacher;
