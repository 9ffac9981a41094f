use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    /// Institution-assigned code, e.g. "TCH001". Unique within the roster.
    pub teacher_code: String,
    pub email: String,
    pub department: String,
    pub subjects: Option<Vec<String>>,
    /// Homeroom class this teacher is responsible for, if any.
    pub class_teacher: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
}
