use std::io;
use std::path::Path;

use diag_core::DiagError;

#[test]
fn io_error_records_code_and_path() {
    let source = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let err = DiagError::io("input-unreadable", Path::new("data/input03"), &source);
    match &err {
        DiagError::Io(info) => {
            assert_eq!(info.code, "input-unreadable");
            assert_eq!(info.message, "no such file");
            assert_eq!(info.context.get("path").map(String::as_str), Some("data/input03"));
        }
        other => panic!("expected io error, got {other:?}"),
    }
    assert_eq!(err.info().code, "input-unreadable");
    assert!(err.to_string().starts_with("io error: no such file (code: input-unreadable)"));
}

#[test]
fn io_error_serializes_with_kind_tag() {
    let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err = DiagError::io("config-unreadable", Path::new("bitdiag.yaml"), &source);
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "Io");
    assert_eq!(json["detail"]["code"], "config-unreadable");
}
