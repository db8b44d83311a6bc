use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IrError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        IrError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(IrError::config("x").to_string().contains("config error:"));
}

#[test]
fn io_errors_convert() {
    let base = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: IrError = base.into();
    assert!(matches!(err, IrError::Io(_)));
    assert!(err.to_string().contains("gone"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IrError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
