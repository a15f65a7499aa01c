use std::io::Cursor;

use crate::io::{read_points, write_forces};
use crate::models::Vec3;
use crate::utils::NBodyError;

fn record_bytes(points: &[(f32, f32, f32)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for &(x, y, z) in points {
        bytes.extend_from_slice(&x.to_le_bytes());
        bytes.extend_from_slice(&y.to_le_bytes());
        bytes.extend_from_slice(&z.to_le_bytes());
    }
    bytes
}

#[test]
fn test_read_points_parses_records() {
    let bytes = record_bytes(&[(0.5, -1.25, 3.0), (100.0, 0.0, -0.0625)]);
    let points = read_points(Cursor::new(bytes))
        .expect("Failed to read points");

    assert_eq!(points.len(), 2);
    assert_eq!(points.as_slice()[0], Vec3::new(0.5, -1.25, 3.0));
    assert_eq!(points.as_slice()[1], Vec3::new(100.0, 0.0, -0.0625));
}

#[test]
fn test_partial_trailing_record_is_discarded() {
    let mut bytes = record_bytes(&[(1.0, 2.0, 3.0)]);
    bytes.extend_from_slice(&[0xAA; 7]);
    let points = read_points(Cursor::new(bytes))
        .expect("Failed to read points");

    assert_eq!(points.len(), 1);
    assert_eq!(points.as_slice()[0], Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_empty_stream_is_an_error() {
    let err = read_points(Cursor::new(Vec::new())).unwrap_err();
    assert!(matches!(err, NBodyError::EmptyInput));

    // A lone partial record counts as empty too.
    let err = read_points(Cursor::new(vec![1u8, 2, 3])).unwrap_err();
    assert!(matches!(err, NBodyError::EmptyInput));
}

#[test]
fn test_write_forces_layout() {
    let forces = [Vec3::new(1.5, -2.0, 0.0), Vec3::new(0.25, 8.0, -16.0)];
    let mut bytes = Vec::new();
    write_forces(&mut bytes, &forces)
        .expect("Failed to write forces");

    assert_eq!(bytes, record_bytes(&[(1.5, -2.0, 0.0), (0.25, 8.0, -16.0)]));
}
