//! Integration tests from file to profiles

use dosekit_dose::vtk::{write_vtk, VolumeToVtk, VtkFormat};
use dosekit_dose::*;
use dosekit_phantom::{read_header, write_header, Axis, GridSpec};
use rstest::{fixture, rstest};
use std::path::PathBuf;

/// Unique scratch file in the system temp directory
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dosekit-dose-{}-{name}", std::process::id()))
}

#[fixture]
fn small_run() -> (PathBuf, PathBuf) {
    let header = scratch("small.hed");
    let dose = scratch("small.out");
    std::fs::write(
        &header,
        "VOXELSIZE mm 1.0 1.0 1.0\nDIMENSION n 2 2 2\nEND-INPUT\n",
    )
    .unwrap();
    std::fs::write(&dose, "0     0.5\n7     0.25\n").unwrap();
    (header, dose)
}

#[rstest]
fn two_by_two_by_two(small_run: (PathBuf, PathBuf)) {
    let (header, dose) = small_run;
    let grid = read_header(&header).unwrap();
    let samples = read_dose(&dose).unwrap();
    std::fs::remove_file(header).unwrap();
    std::fs::remove_file(dose).unwrap();

    let volume = reconstruct(&grid, &samples, ReconstructOptions::default()).unwrap();
    assert_eq!(volume[[0, 0, 0]], 0.5);
    assert_eq!(volume[[1, 1, 1]], 0.25);
    assert_eq!(volume.non_zero(), 2);

    // only valid centre on a 2x2x2 grid
    let center = Center::from_shift(&grid, [0.0, 0.0, 0.0]).unwrap();
    assert_eq!(center.indices(), [0, 0, 0]);

    let z = z_profile(&volume, &center, 4.0).unwrap();
    assert_eq!(z.values, vec![0.5, 0.25]);

    let plane = xy_plane(&volume, &center, 2.0).unwrap();
    assert_eq!(plane.dose, vec![0.5, 0.0, 0.0, 0.25]);
}

#[rstest]
fn negative_indices_in_file_are_ignored() {
    let path = scratch("negative.out");
    std::fs::write(&path, "-1     9.0\n0     0.5\n-8     1.0\n7     0.25\n").unwrap();
    let samples = read_dose(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(samples.len(), 2);

    let grid = GridSpec::new([1.0, 1.0, 1.0], [2, 2, 2]).unwrap();
    let volume = reconstruct(&grid, &samples, ReconstructOptions::default()).unwrap();
    assert_eq!(volume.total(), 0.75);
}

#[rstest]
#[case(IndexOffset::None, 0)] // case 1
#[case(IndexOffset::Depth, 5)] // case 2
#[case(IndexOffset::Fixed(11), 11)] // case 3
fn offsets_through_files(#[case] offset: IndexOffset, #[case] shift: usize) {
    let grid = GridSpec::new([1.0, 1.0, 1.0], [3, 3, 5]).unwrap();
    let samples: SparseDose = (0..grid.number_of_voxels())
        .map(|i| (i + shift, 1.0 + i as f64))
        .collect();

    let path = scratch(&format!("offset-{shift}.out"));
    write_dose(&samples, &path).unwrap();
    let read = read_dose(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(read, samples);

    let options = ReconstructOptions {
        offset,
        policy: MissingIndexPolicy::Strict,
    };
    let volume = reconstruct(&grid, &read, options).unwrap();
    assert_eq!(volume[[0, 0, 0]], 1.0);
    assert_eq!(volume[[2, 2, 4]], grid.number_of_voxels() as f64);
}

#[rstest]
fn strict_mode_reports_first_gap() {
    let grid = GridSpec::new([1.0, 1.0, 1.0], [2, 2, 2]).unwrap();
    let samples: SparseDose = [(0, 0.5), (7, 0.25)].into_iter().collect();
    let options = ReconstructOptions {
        policy: MissingIndexPolicy::Strict,
        ..Default::default()
    };
    assert!(matches!(
        reconstruct(&grid, &samples, options),
        Err(Error::MissingIndex {
            index: 1,
            voxel: [1, 0, 0]
        })
    ));
}

#[rstest]
fn header_written_then_used() {
    let grid = GridSpec::new([0.5, 0.5, 2.0], [6, 4, 10]).unwrap();
    let path = scratch("written.hed");
    write_header(&grid, &path).unwrap();
    let read = read_header(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let volume = reconstruct(&read, &SparseDose::new(), ReconstructOptions::default()).unwrap();
    let center = Center::from_shift(&read, [0.0, 0.0, 6.0]).unwrap();
    assert_eq!(center.indices(), [2, 1, 7]);

    for axis in Axis::ALL {
        let p = profile(&volume, &center, axis, 1.0e7).unwrap();
        assert_eq!(p.values.len(), read.count(axis));
        assert!(p.values.iter().all(|v| *v == 0.0));
    }
}

#[rstest]
fn outputs_are_written() {
    let grid = GridSpec::new([1.0, 1.0, 1.0], [4, 4, 4]).unwrap();
    let values = (0..64).map(f64::from).collect();
    let volume = DenseVolume::from_values(grid, values).unwrap();
    let center = Center::new(&grid, [1, 1, 1]).unwrap();

    // profile csv
    let x = x_profile(&volume, &center, 1.0).unwrap();
    let path = scratch("x_profile.csv");
    write_profile_csv(&x, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("coordinate,dose"));
    assert_eq!(lines.count(), 4);

    // plane csv
    let plane = xy_plane(&volume, &center, 1.0).unwrap();
    let path = scratch("xy_plane.csv");
    write_plane_csv(&plane, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(text.starts_with("x,y,dose\n"));
    assert_eq!(text.lines().count(), 17);

    // figures
    let figures = vec![profile_figure(&x), xy_scatter_figure(&plane)];
    let path = scratch("figures.json");
    write_figures_json(&figures, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    let read: Vec<Figure> = serde_json::from_str(&text).unwrap();
    assert_eq!(read, figures);
}

#[rstest]
#[case(VtkFormat::Xml)] // case 1
#[case(VtkFormat::LegacyAscii)] // case 2
#[case(VtkFormat::LegacyBinary)] // case 3
fn vtk_formats(#[case] format: VtkFormat) {
    let grid = GridSpec::new([1.0, 1.0, 1.0], [2, 3, 4]).unwrap();
    let volume = DenseVolume::zeros(grid);
    let vtk = VolumeToVtk::new().convert(&volume);

    let path = scratch(&format!("volume-{format:?}.{}", format.extension()));
    write_vtk(vtk, &path, format).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    std::fs::remove_file(&path).unwrap();
}
