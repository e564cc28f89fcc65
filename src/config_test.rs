use super::*;
use std::sync::{Mutex, MutexGuard};

/// Env vars are process-global; every test in this file holds this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Caller must hold [`env_lock`].
unsafe fn clear_guestbook_env() {
    unsafe {
        std::env::remove_var("GRAPHQL_URL");
        std::env::remove_var("PORT");
        std::env::remove_var("GRAPHQL_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("GRAPHQL_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("GUESTBOOK_SUBMIT_POLICY");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = env_lock();
    unsafe { clear_guestbook_env() };

    let cfg = GuestbookConfig::from_env().unwrap();
    assert_eq!(cfg, GuestbookConfig::default());
    assert_eq!(cfg.graphql_url, DEFAULT_GRAPHQL_URL);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.submit_policy, SubmitPolicy::Strict);
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts {
            request_secs: DEFAULT_GRAPHQL_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_GRAPHQL_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_guestbook_env();
        std::env::set_var("GRAPHQL_URL", "https://guestbook.example.test/graphql/");
        std::env::set_var("PORT", "8080");
        std::env::set_var("GRAPHQL_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("GRAPHQL_CONNECT_TIMEOUT_SECS", "7");
        std::env::set_var("GUESTBOOK_SUBMIT_POLICY", "Permissive");
    }

    let cfg = GuestbookConfig::from_env().unwrap();
    assert_eq!(cfg.graphql_url, "https://guestbook.example.test/graphql");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.submit_policy, SubmitPolicy::Permissive);

    unsafe { clear_guestbook_env() };
}

#[test]
fn from_env_bad_numbers_fall_back() {
    let _guard = env_lock();
    unsafe {
        clear_guestbook_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("GRAPHQL_REQUEST_TIMEOUT_SECS", "-1");
    }

    let cfg = GuestbookConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_GRAPHQL_REQUEST_TIMEOUT_SECS);

    unsafe { clear_guestbook_env() };
}

#[test]
fn from_env_zero_timeouts_fall_back() {
    let _guard = env_lock();
    unsafe {
        clear_guestbook_env();
        std::env::set_var("GRAPHQL_REQUEST_TIMEOUT_SECS", "0");
        std::env::set_var("GRAPHQL_CONNECT_TIMEOUT_SECS", "0");
    }

    let cfg = GuestbookConfig::from_env().unwrap();
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts {
            request_secs: DEFAULT_GRAPHQL_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_GRAPHQL_CONNECT_TIMEOUT_SECS
        }
    );

    unsafe { clear_guestbook_env() };
}

#[test]
fn from_env_unknown_policy_errors() {
    let _guard = env_lock();
    unsafe {
        clear_guestbook_env();
        std::env::set_var("GUESTBOOK_SUBMIT_POLICY", "yolo");
    }

    let err = GuestbookConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("unknown GUESTBOOK_SUBMIT_POLICY"));

    unsafe { clear_guestbook_env() };
}

#[test]
fn parse_graphql_url_rejects_blank() {
    assert!(matches!(parse_graphql_url(Some("  ")), Err(ConfigError::Parse(_))));
    assert!(matches!(parse_graphql_url(Some("/")), Err(ConfigError::Parse(_))));
}
