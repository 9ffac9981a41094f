use once_cell::sync::Lazy;

use crate::model::Role;

/// A credential-bearing identity. Distinct from [`super::Session`], which is
/// a principal's active login state and never carries the password.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The fixed demo accounts a fresh process knows about.
pub static MOCK_PRINCIPALS: Lazy<Vec<Principal>> = Lazy::new(|| {
    vec![
        Principal {
            id: "t1".into(),
            name: "Harikanth".into(),
            email: "harikanth@example.com".into(),
            password: "teacher123".into(),
            role: Role::Teacher,
        },
        Principal {
            id: "s1".into(),
            name: "Barani".into(),
            email: "barani@example.com".into(),
            password: "student123".into(),
            role: Role::Student,
        },
        Principal {
            id: "a1".into(),
            name: "Admin".into(),
            email: "admin@example.com".into(),
            password: "admin123".into(),
            role: Role::Admin,
        },
    ]
});
