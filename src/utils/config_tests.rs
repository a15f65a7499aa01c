use crate::utils::{NBodyError, SolverConfig};

#[test]
fn test_new_config_squares_the_cutoff() {
    let config = SolverConfig::new(4.0, 8)
        .expect("Failed to create config");
    assert_eq!(config.cut2, 16.0);
    assert_eq!(config.tile, 8);
}

#[test]
fn test_zero_cutoff_is_allowed() {
    // A zero radius keeps every pair out of range but is not an error.
    let config = SolverConfig::new(0.0, 2)
        .expect("Failed to create config");
    assert_eq!(config.cut2, 0.0);
}

#[test]
fn test_negative_cutoff_is_rejected() {
    let err = SolverConfig::new(-1.0, 8).unwrap_err();
    assert!(matches!(err, NBodyError::InvalidArgument(_)));
}

#[test]
fn test_zero_tile_is_rejected() {
    let err = SolverConfig::new(4.0, 0).unwrap_err();
    assert!(matches!(err, NBodyError::InvalidArgument(_)));
}
