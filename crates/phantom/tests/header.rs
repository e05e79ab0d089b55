//! Integration tests for reading and writing phantom headers

use dosekit_phantom::{read_header, write_header, Axis, Error, GridSpec};
use rstest::{fixture, rstest};
use std::path::PathBuf;

/// Unique scratch file in the system temp directory
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dosekit-phantom-{}-{name}", std::process::id()))
}

#[fixture]
fn simple_header() -> PathBuf {
    let path = scratch("simple.hed");
    std::fs::write(
        &path,
        "VOXELSIZE x y 1.0 1.0 1.0\nDIMENSION x y 2 2 2\nEND-INPUT\n",
    )
    .unwrap();
    path
}

#[rstest]
fn read_simple_header(simple_header: PathBuf) {
    let grid = read_header(&simple_header).unwrap();
    assert_eq!(grid, GridSpec::new([1.0, 1.0, 1.0], [2, 2, 2]).unwrap());
    std::fs::remove_file(simple_header).unwrap();
}

#[rstest]
#[case([1.0, 1.0, 1.0], [2, 2, 2])] // case 1
#[case([0.5, 0.5, 2.0], [61, 61, 150])] // case 2
#[case([0.1, 0.3, 0.7], [1, 3, 7])] // case 3
fn write_then_read(#[case] size: [f64; 3], #[case] counts: [usize; 3]) {
    let grid = GridSpec::new(size, counts).unwrap();
    let path = scratch(&format!("{}x{}x{}.hed", counts[0], counts[1], counts[2]));

    write_header(&grid, &path).unwrap();
    let read = read_header(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(read, grid);
    assert_eq!(read.axis_coordinates(Axis::Z).len(), counts[2]);
}

#[rstest]
#[case("VOXELSIZE x y 1.0 1.0\nDIMENSION x y 2 2 2\n")] // case 1: too few tokens
#[case("VOXELSIZE x y 1.0 a 1.0\nDIMENSION x y 2 2 2\n")] // case 2: not a number
#[case("VOXELSIZE x y 1.0 1.0 1.0\nDIMENSION x y 2 2 2.5\n")] // case 3: not a count
fn malformed_headers(#[case] text: &str) {
    let result = dosekit_phantom::parse_header(text.as_bytes());
    assert!(matches!(result, Err(Error::MalformedLine { .. })));
}
