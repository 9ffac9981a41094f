use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    /// Stored display value, independent of the attendance collection.
    pub attendance_rate: f64,
}
