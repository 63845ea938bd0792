use std::io;

use examplegen::error::Error;

#[test]
fn test_walk_error_conversion() {
    let walk_err = walkdir::WalkDir::new("/nonexistent-examplegen-test-path")
        .into_iter()
        .next()
        .unwrap()
        .unwrap_err();
    let err: Error = walk_err.into();

    match err {
        Error::Walk(_) => (),
        _ => panic!("Expected Walk variant"),
    }
}

#[test]
fn test_error_display_phase_prefixes() {
    let err = Error::Config("brand prefix is empty".to_string());
    assert_eq!(err.to_string(), "Configuration error: brand prefix is empty");

    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err = Error::CreateDir(io_err);
    assert_eq!(err.to_string(), "Error creating output directory: permission denied");

    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err = Error::ReadTemplate(io_err);
    assert_eq!(err.to_string(), "Error reading template: file not found");

    let io_err = io::Error::new(io::ErrorKind::Other, "disk full");
    let err = Error::WriteOutput(io_err);
    assert_eq!(err.to_string(), "Error creating output file: disk full");
}

#[test]
fn test_walk_error_display_prefix() {
    let walk_err = walkdir::WalkDir::new("/nonexistent-examplegen-test-path")
        .into_iter()
        .next()
        .unwrap()
        .unwrap_err();
    let err: Error = walk_err.into();

    assert!(err.to_string().starts_with("Error walking the path:"));
}
