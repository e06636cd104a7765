//! Acodec Addon State Tests
//!
//! Verifies:
//! - Installed flag before / after install
//! - Repeated install
//! - Failure reporting

use al5_acodec::{AllegroError, HeadlessAcodec, Version, install, installed, version};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_installed_flips_after_install() {
    init_logging();
    let backend = HeadlessAcodec::new();

    assert!(!installed(&backend));
    install(&backend).unwrap();
    assert!(installed(&backend));
}

#[test]
fn test_install_is_idempotent() {
    init_logging();
    let backend = HeadlessAcodec::new();

    install(&backend).unwrap();
    install(&backend).unwrap();
    assert!(installed(&backend));
}

#[test]
fn test_failed_install_reports_init_error() {
    init_logging();
    let backend = HeadlessAcodec::refusing();

    let err = install(&backend).unwrap_err();
    assert_eq!(err, AllegroError::AddonInit("acodec"));
    assert_eq!(err.to_string(), "Failed to initialize acodec addon");
    assert!(!installed(&backend));
}

#[test]
fn test_version_is_independent_of_install_state() {
    let backend = HeadlessAcodec::new();
    let before = version(&backend);
    install(&backend).unwrap();
    assert_eq!(version(&backend), before);
    assert_eq!(before, Version::new(5, 2, 8, 0));
}
