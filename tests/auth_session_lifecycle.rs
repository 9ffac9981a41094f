use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ams::auth::{AuthService, Session, SessionStorage, authorize};
use ams::config::Config;
use ams::error::AmsError;
use ams::model::Role;

fn temp_session_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{}-{}.json",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ))
}

fn config(path: &PathBuf) -> Config {
    Config {
        session_path: path.clone(),
        auth_latency_ms: 0,
    }
}

#[test]
fn admin_login_yields_admin_session() {
    let path = temp_session_path("ams-login-admin");
    let auth = AuthService::new(&config(&path));

    let session = auth.login("admin@example.com", "admin123").expect("login");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.name, "Admin");
    assert_eq!(session.email, "admin@example.com");

    auth.logout();
}

#[test]
fn wrong_password_is_invalid_credentials() {
    let path = temp_session_path("ams-login-wrong");
    let auth = AuthService::new(&config(&path));

    let err = auth.login("admin@example.com", "wrong").unwrap_err();
    assert_eq!(err, AmsError::InvalidCredentials);

    // No session blob must be written for a failed login.
    assert!(auth.current_session().is_none());
}

#[test]
fn empty_credentials_are_rejected() {
    let path = temp_session_path("ams-login-empty");
    let auth = AuthService::new(&config(&path));

    assert_eq!(
        auth.login("", "").unwrap_err(),
        AmsError::InvalidCredentials
    );
    assert_eq!(
        auth.login("admin@example.com", "").unwrap_err(),
        AmsError::InvalidCredentials
    );
}

#[test]
fn session_survives_service_reopen() {
    let path = temp_session_path("ams-session-reopen");
    let cfg = config(&path);

    let auth = AuthService::new(&cfg);
    let session = auth
        .login("harikanth@example.com", "teacher123")
        .expect("login");

    // A fresh service on the same path represents a process restart.
    let reopened = AuthService::new(&cfg);
    assert_eq!(reopened.current_session(), Some(session));

    reopened.logout();
    assert!(reopened.current_session().is_none());
    assert!(AuthService::new(&cfg).current_session().is_none());
}

#[test]
fn logout_is_idempotent() {
    let path = temp_session_path("ams-logout-twice");
    let auth = AuthService::new(&config(&path));

    auth.logout();
    auth.logout();
    assert!(auth.current_session().is_none());
}

#[test]
fn corrupt_session_blob_reads_as_unauthenticated() {
    let path = temp_session_path("ams-session-corrupt");
    fs::write(&path, "{not json at all").expect("write corrupt blob");

    let storage = SessionStorage::new(path.clone());
    assert!(storage.load().is_none());

    let auth = AuthService::new(&config(&path));
    assert!(auth.current_session().is_none());

    let _ = fs::remove_file(&path);
}

#[test]
fn signup_rejects_existing_email() {
    let path = temp_session_path("ams-signup-dup");
    let auth = AuthService::new(&config(&path));

    let err = auth
        .signup("Another Barani", "barani@example.com", "pw", Role::Student)
        .unwrap_err();
    assert_eq!(err, AmsError::DuplicateEmail);
}

#[test]
fn signup_creates_session_with_requested_role() {
    let path = temp_session_path("ams-signup-ok");
    let auth = AuthService::new(&config(&path));

    let session = auth
        .signup("Kavya", "kavya@example.com", "pw123", Role::Teacher)
        .expect("signup");
    assert_eq!(session.role, Role::Teacher);
    assert_eq!(session.name, "Kavya");
    assert!(!session.id.is_empty());
    assert_eq!(auth.current_session(), Some(session));

    auth.logout();
}

#[test]
fn signed_up_account_cannot_log_back_in() {
    // Signup does not extend the principal list; after a logout the new
    // account is unknown to login. Known limitation, locked in here.
    let path = temp_session_path("ams-signup-relogin");
    let auth = AuthService::new(&config(&path));

    auth.signup("Kavya", "kavya2@example.com", "pw123", Role::Student)
        .expect("signup");
    auth.logout();

    assert_eq!(
        auth.login("kavya2@example.com", "pw123").unwrap_err(),
        AmsError::InvalidCredentials
    );
}

#[test]
fn protected_queries_require_a_session() {
    let path = temp_session_path("ams-require-session");
    let auth = AuthService::new(&config(&path));

    assert_eq!(auth.require_session().unwrap_err(), AmsError::SessionAbsent);

    auth.login("barani@example.com", "student123").expect("login");
    let session = auth.require_session().expect("session present");
    assert_eq!(session.role, Role::Student);

    auth.logout();
    assert_eq!(auth.require_session().unwrap_err(), AmsError::SessionAbsent);
}

#[test]
fn authorize_gates_by_role() {
    let session = Session {
        id: "s1".into(),
        name: "Barani".into(),
        email: "barani@example.com".into(),
        role: Role::Student,
    };

    // Empty allowed set admits any authenticated user.
    assert!(authorize(Some(&session), &[]));
    assert!(authorize(Some(&session), &[Role::Student, Role::Admin]));
    assert!(!authorize(Some(&session), &[Role::Teacher]));
    assert!(!authorize(Some(&session), &[Role::Admin]));

    // No session is denied no matter what the view allows.
    assert!(!authorize(None, &[]));
    assert!(!authorize(None, &[Role::Student, Role::Teacher, Role::Admin]));
}
