use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    /// Institution-assigned code, e.g. "STU001". Unique within the roster.
    pub student_code: String,
    pub email: String,
    pub department: String,
    pub class: Option<String>,
    pub section: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub parent_contact: Option<String>,
    pub address: Option<String>,
}
