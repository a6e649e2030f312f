use folio_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;
use std::sync::Mutex;

static INSTALLED: Mutex<Option<Logger>> = Mutex::new(None);

#[test]
#[serial]
fn console_logger_installs_once() {
    let mut installed = INSTALLED.lock().unwrap();
    if installed.is_none() {
        let logger = Logger::builder()
            .name("folio-init-test")
            .level(LevelFilter::DEBUG)
            .init()
            .expect("first init installs the subscriber");
        assert_eq!(logger.name(), "folio-init-test");
        assert!(!logger.writes_file());
        *installed = Some(logger);
    }

    tracing::info!("subscriber is live");
}

#[test]
#[serial]
fn second_install_is_a_subscriber_error() {
    {
        let mut installed = INSTALLED.lock().unwrap();
        if installed.is_none() {
            *installed = Some(Logger::builder().name("folio-init-test").init().unwrap());
        }
    }

    let err = Logger::builder()
        .name("folio-init-test-again")
        .init()
        .expect_err("a subscriber is already installed");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "{err}");
}
