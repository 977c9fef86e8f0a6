// Integration tests for validating and exporting icons on a real filesystem
use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use square_icons::icon_export::{
    ExportConfig, ExportSpec, IconError, ResizeFilter, VariantStatus, export, validate,
};

fn write_image(path: &Path, width: u32, height: u32, format: ImageFormat) {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x % 255) as u8, (y % 255) as u8, ((x * y) % 255) as u8, 255])
    });
    DynamicImage::ImageRgba8(img)
        .to_rgb8()
        .save_with_format(path, format)
        .expect("failed to write test image");
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn exports_finder_1x_and_2x_from_400px_source() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    let out_dir = tempfile::tempdir().expect("tempdir");
    let input = input_dir.path().join("source.png");
    write_image(&input, 400, 400, ImageFormat::Png);

    let source = validate(&input, &ExportConfig::default()).expect("400x400 is valid");
    let report = export(
        &source,
        "finder",
        out_dir.path(),
        &ExportSpec::default(),
        ResizeFilter::Bilinear,
    );

    assert!(report.is_complete());
    assert_eq!(report.written_count(), 2);
    assert_eq!(file_names(out_dir.path()), ["finder@1x.png", "finder@2x.png"]);

    for (name, size) in [("finder@1x.png", 128), ("finder@2x.png", 256)] {
        let bytes = fs::read(out_dir.path().join(name)).expect("read output");
        assert_eq!(image::guess_format(&bytes).ok(), Some(ImageFormat::Png));
        let decoded = image::load_from_memory(&bytes).expect("output decodes");
        assert_eq!((decoded.width(), decoded.height()), (size, size));
    }
}

#[test]
fn re_export_overwrites_without_duplicates() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    let out_dir = tempfile::tempdir().expect("tempdir");
    let input = input_dir.path().join("source.png");
    write_image(&input, 400, 400, ImageFormat::Png);

    // 预置一个同名的旧文件，确认会被覆盖
    fs::write(out_dir.path().join("finder@1x.png"), b"stale").expect("write stale file");

    let source = validate(&input, &ExportConfig::default()).expect("valid source");
    for _ in 0..2 {
        let report = export(
            &source,
            "finder",
            out_dir.path(),
            &ExportSpec::default(),
            ResizeFilter::Bilinear,
        );
        assert!(report.is_complete());
    }

    assert_eq!(file_names(out_dir.path()), ["finder@1x.png", "finder@2x.png"]);
    let refreshed = image::open(out_dir.path().join("finder@1x.png")).expect("stale file replaced");
    assert_eq!(refreshed.width(), 128);
}

#[test]
fn missing_destination_fails_every_variant_and_writes_nothing() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    let input = input_dir.path().join("source.png");
    write_image(&input, 256, 256, ImageFormat::Png);
    let missing = input_dir.path().join("does-not-exist");

    let source = validate(&input, &ExportConfig::default()).expect("valid source");
    let report = export(
        &source,
        "finder",
        &missing,
        &ExportSpec::default(),
        ResizeFilter::Bilinear,
    );

    assert!(report.attempted());
    assert_eq!(report.written_count(), 0);
    assert_eq!(report.outcomes.len(), 2);
    assert!(report
        .outcomes
        .iter()
        .all(|o| matches!(o.status, VariantStatus::Failed(_))));
    assert!(!missing.exists());
}

#[test]
fn destination_that_is_a_file_fails_every_variant() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("source.png");
    write_image(&input, 128, 128, ImageFormat::Png);
    let not_a_dir = dir.path().join("plain.txt");
    fs::write(&not_a_dir, "x").expect("write plain file");

    let source = validate(&input, &ExportConfig::default()).expect("valid source");
    let report = export(
        &source,
        "finder",
        &not_a_dir,
        &ExportSpec::default(),
        ResizeFilter::Bilinear,
    );

    assert_eq!(report.written_count(), 0);
}

#[test]
fn accepts_other_decodable_formats() {
    let dir = tempfile::tempdir().expect("tempdir");
    for (name, format) in [("a.jpg", ImageFormat::Jpeg), ("a.bmp", ImageFormat::Bmp)] {
        let path = dir.path().join(name);
        write_image(&path, 300, 300, format);
        let source = validate(&path, &ExportConfig::default()).expect("decodable square image");
        assert_eq!(source.width(), 300);
    }
}

#[test]
fn non_image_file_is_a_decode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notes.png");
    fs::write(&path, "definitely not a picture").expect("write text file");

    assert!(matches!(
        validate(&path, &ExportConfig::default()),
        Err(IconError::Decode(_))
    ));
}

#[test]
fn directory_path_is_a_decode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        validate(dir.path(), &ExportConfig::default()),
        Err(IconError::Decode(_))
    ));
}
