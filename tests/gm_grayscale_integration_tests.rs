use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{Rgba, RgbaImage};

fn setup<'a>() -> (&'a str, &'a str) {
    let binary = env!("CARGO_BIN_EXE_gm-grayscale");
    let tmp_dir = env!("CARGO_TARGET_TMPDIR");
    (binary, tmp_dir)
}

/// Writes a 2x1 image with a pure red and a pure green pixel
fn write_sample(tmp_dir: &str, name: &str) -> PathBuf {
    let path = Path::new(tmp_dir).join(name);
    let image = RgbaImage::from_vec(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255]).unwrap();
    image.save(&path).unwrap();
    path
}

fn luma_values(path: &str) -> Vec<u8> {
    image::open(path).unwrap().to_luma8().into_raw()
}

#[test]
fn test_component_writes_three_planes() {
    let (binary, tmp_dir) = setup();
    let input = write_sample(tmp_dir, "component-input.png");
    let output_path = format!("{}/planes.png", tmp_dir);
    let planes: Vec<String> = (1..=3)
        .map(|i| format!("{}/planes-{}.png", tmp_dir, i))
        .collect();
    for plane in &planes {
        let _ = fs::remove_file(plane);
    }

    let result = Command::new(binary)
        .args(["-algorithm", "Component"])
        .arg(&input)
        .arg(&output_path)
        .output()
        .expect("convert did not exit successfully");

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), planes);
    assert_eq!(luma_values(&planes[0]), [255, 0]);
    assert_eq!(luma_values(&planes[1]), [0, 255]);
    assert_eq!(luma_values(&planes[2]), [0, 0]);
}

#[test]
fn test_default_algorithm_is_weighted_average() {
    let (binary, tmp_dir) = setup();
    let input = write_sample(tmp_dir, "weighted-input.png");
    let output_path = format!("{}/weighted.png", tmp_dir);
    let _ = fs::remove_file(&output_path);

    let result = Command::new(binary)
        .arg(&input)
        .arg(&output_path)
        .output()
        .expect("convert did not exit successfully");

    assert!(result.status.success());
    // 0.30 * 255 = 76.5 and 0.59 * 255 = 150.45
    assert_eq!(luma_values(&output_path), [76, 150]);
}

#[test]
fn test_missing_input_fails() {
    let (binary, tmp_dir) = setup();
    let output_path = format!("{}/never-written.png", tmp_dir);
    let _ = fs::remove_file(&output_path);

    let result = Command::new(binary)
        .args(["./tests/does-not-exist.png", output_path.as_str()])
        .output()
        .expect("failed to run the binary");

    assert!(!result.status.success());
    assert!(String::from_utf8(result.stderr)
        .unwrap()
        .contains("No such file or directory"));
    assert!(!Path::new(&output_path).exists());
}

#[test]
fn test_unknown_algorithm_fails() {
    let (binary, tmp_dir) = setup();
    let input = write_sample(tmp_dir, "unknown-algorithm-input.png");
    let output_path = format!("{}/unknown-algorithm.png", tmp_dir);

    let result = Command::new(binary)
        .args(["-algorithm", "Rec709Luma"])
        .arg(&input)
        .arg(&output_path)
        .output()
        .expect("failed to run the binary");

    assert!(!result.status.success());
    assert!(String::from_utf8(result.stderr)
        .unwrap()
        .contains("unsupported grayscale algorithm `Rec709Luma'"));
}

#[test]
fn test_help_lists_algorithms() {
    let (binary, _) = setup();
    let result = Command::new(binary)
        .arg("-help")
        .output()
        .expect("failed to run the binary");

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    for name in ["Component", "Maximum", "Minimum", "Average", "WeightedAverage"] {
        assert!(stdout.contains(name), "{name} missing from help");
    }
}
