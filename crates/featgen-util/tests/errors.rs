use featgen_util::errors::FeatgenError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = FeatgenError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_malformed_coordinate_names_offending_string() {
    let err = FeatgenError::MalformedCoordinate {
        coordinates: "com.example:bad".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "The string com.example:bad is not a valid Maven coordinates string"
    );
}

#[test]
fn test_invalid_pattern_display() {
    let err = FeatgenError::InvalidPattern {
        pattern: "a:b:c:d:e".to_string(),
        message: "too many tokens".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid artifact pattern `a:b:c:d:e`: too many tokens"
    );
}

#[test]
fn test_catalog_error_display() {
    let err = FeatgenError::Catalog {
        message: "no public features".to_string(),
    };
    assert_eq!(err.to_string(), "Feature catalog error: no public features");
}

#[test]
fn test_graph_collection_error_display() {
    let err = FeatgenError::GraphCollection {
        artifact: "org.example:lib:1.0".to_string(),
        message: "unreachable".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Could not collect dependencies of org.example:lib:1.0: unreachable"
    );
}

#[test]
fn test_config_error_display() {
    let err = FeatgenError::Config {
        message: "bad toml".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: bad toml");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: FeatgenError = io_err.into();
    assert!(matches!(err, FeatgenError::Io(_)));
}
