use std::borrow::Cow;

#[test]
fn folio_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/folio_error_pass.rs");
}

#[folio_derive::folio_error]
pub enum ProbeError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal probe error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk unplugged"))
}

#[test]
fn context_is_rendered_into_display() {
    let err = failing_io().context("Reading section data").unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading section data): disk unplugged");
}

#[test]
fn question_mark_converts_sources_without_context() {
    fn run() -> Result<(), ProbeError> {
        failing_io()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, ProbeError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: disk unplugged");
}

#[test]
fn strings_become_internal_errors() {
    let err: ProbeError = "latch misuse".into();
    assert_eq!(err.to_string(), "Internal probe error: latch misuse");

    let err = Err::<(), _>(ProbeError::from(String::from("late"))).context("unmount").unwrap_err();
    assert_eq!(err.to_string(), "Internal probe error (unmount): late");
}
