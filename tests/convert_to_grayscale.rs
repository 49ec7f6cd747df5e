mod common;

use std::fs;

use gray_image::{convert_to_grayscale, CLIParser, ErrorKind, Outcome, SourceFormat};
use image::{ColorType, ImageFormat, Luma};

use common::{colorful_rgb, scratch_directory, translucent_rgba, write_fixture};

const PROGRAM_NAME_ARGUMENT: &str = "test";

fn run(arguments: &[&str]) -> gray_image::Result<Outcome> {
    let mut cli_parser = CLIParser::new();
    let mut all_arguments = vec![PROGRAM_NAME_ARGUMENT];
    all_arguments.extend_from_slice(arguments);
    let arguments = cli_parser.parse(all_arguments)?;
    convert_to_grayscale(&arguments)
}

#[test]
fn test_convert_jpeg_to_jpeg() {
    let directory = scratch_directory("convert_jpeg_to_jpeg");
    let input = directory.join("photo.jpg");
    let output = directory.join("gray.jpg");
    write_fixture(&colorful_rgb(640, 480), &input, ImageFormat::Jpeg);

    let outcome = run(&[
        "-input",
        input.to_str().unwrap(),
        "-output",
        output.to_str().unwrap(),
        "-quality",
        "90",
    ])
    .expect("Conversion failed");

    assert_eq!(outcome, Outcome::Saved(output.clone()));
    let result = image::open(&output).expect("Output is not an image");
    assert_eq!((result.width(), result.height()), (640, 480));
    assert_eq!(result.color(), ColorType::L8);
}

#[test]
fn test_convert_png_to_png_exactly() {
    let directory = scratch_directory("convert_png_to_png");
    let input = directory.join("image.png");
    let output = directory.join("result.PNG");
    write_fixture(&translucent_rgba(8, 4), &input, ImageFormat::Png);

    run(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .expect("Conversion failed");

    let result = image::open(&output).expect("Output is not an image");
    assert_eq!(result.color(), ColorType::L8);
    let result = result.into_luma8();
    assert_eq!(result.dimensions(), (8, 4));
    // (255, 64, 0) weighs to 76 + 38 = 114, transparent columns become black.
    assert_eq!(result.get_pixel(0, 0), &Luma([114]));
    assert_eq!(result.get_pixel(1, 0), &Luma([0]));
}

#[test]
fn test_convert_png_to_jpeg() {
    let directory = scratch_directory("convert_png_to_jpeg");
    let input = directory.join("image.png");
    let output = directory.join("gray.JPEG");
    write_fixture(&colorful_rgb(33, 17), &input, ImageFormat::Png);

    run(&["-input", input.to_str().unwrap(), "-output", output.to_str().unwrap()])
        .expect("Conversion failed");

    let bytes = fs::read(&output).expect("Output missing");
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    let result = image::load_from_memory(&bytes).expect("Output is not an image");
    assert_eq!((result.width(), result.height()), (33, 17));
}

#[test]
fn test_report_info_without_output() {
    let directory = scratch_directory("report_info");
    let input = directory.join("photo.jpg");
    let output = directory.join("never.jpg");
    write_fixture(&colorful_rgb(64, 48), &input, ImageFormat::Jpeg);

    let outcome = run(&[
        "-input",
        input.to_str().unwrap(),
        "-output",
        output.to_str().unwrap(),
        "-info",
    ])
    .expect("Info failed");

    let Outcome::InfoReported(info) = outcome else {
        panic!("Expected an info report");
    };
    assert_eq!(info.format, SourceFormat::Jpeg);
    assert_eq!((info.width, info.height), (64, 48));
    assert_eq!(info.color_model, "Rgb8");
    assert!(!output.exists(), "Info mode created the output file");
}

#[test]
fn test_info_ignores_output_extension() {
    let directory = scratch_directory("info_ignores_extension");
    let input = directory.join("image.png");
    let output = directory.join("never.gif");
    write_fixture(&translucent_rgba(4, 4), &input, ImageFormat::Png);

    let outcome = run(&[
        "-input",
        input.to_str().unwrap(),
        "-output",
        output.to_str().unwrap(),
        "-info",
    ])
    .expect("Info failed");

    assert!(matches!(outcome, Outcome::InfoReported(ref info) if info.color_model == "Rgba8"));
    assert!(!output.exists());
}

#[test]
fn test_reject_unsupported_output_extension() {
    let directory = scratch_directory("reject_gif_output");
    let input = directory.join("photo.png");
    let output = directory.join("gray.gif");
    write_fixture(&colorful_rgb(4, 4), &input, ImageFormat::Png);

    let error = run(&["-input", input.to_str().unwrap(), "-output", output.to_str().unwrap()])
        .err()
        .expect("gif output accepted");

    assert_eq!(error.kind(), ErrorKind::UnsupportedFormat);
    assert!(!output.exists(), "Output file was created");
}

#[test]
fn test_reject_quality_before_file_access() {
    let directory = scratch_directory("reject_quality");
    let input = directory.join("missing.png");
    let output = directory.join("gray.jpg");

    for quality in ["0", "101", "-3"] {
        let error = run(&[
            "-input",
            input.to_str().unwrap(),
            "-output",
            output.to_str().unwrap(),
            "-quality",
            quality,
        ])
        .err()
        .expect("Quality accepted");
        // The input does not exist, so an I/O error would mean the file was touched first.
        assert_eq!(error.kind(), ErrorKind::Validation, "quality {}", quality);
    }
    assert!(!output.exists());
}

#[test]
fn test_report_missing_input_file() {
    let directory = scratch_directory("missing_input");
    let input = directory.join("absent.jpg");
    let output = directory.join("gray.jpg");

    let error = run(&["-input", input.to_str().unwrap(), "-output", output.to_str().unwrap()])
        .err()
        .expect("Missing input accepted");

    assert_eq!(error.kind(), ErrorKind::Io);
    assert!(error.to_string().contains("absent.jpg"), "{}", error);
    assert!(!output.exists());
}

#[test]
fn test_report_undecodable_input() {
    let directory = scratch_directory("undecodable_input");
    let input = directory.join("notes.jpg");
    let output = directory.join("gray.jpg");
    fs::write(&input, "plain text pretending to be a photo").unwrap();

    let error = run(&["-input", input.to_str().unwrap(), "-output", output.to_str().unwrap()])
        .err()
        .expect("Text decoded as image");

    assert_eq!(error.kind(), ErrorKind::Decode);
    assert!(!output.exists());
}

#[test]
fn test_report_unwritable_output() {
    let directory = scratch_directory("unwritable_output");
    let input = directory.join("photo.png");
    let output = directory.join("no_such_directory").join("gray.png");
    write_fixture(&colorful_rgb(4, 4), &input, ImageFormat::Png);

    let error = run(&["-input", input.to_str().unwrap(), "-output", output.to_str().unwrap()])
        .err()
        .expect("Output written into missing directory");

    assert_eq!(error.kind(), ErrorKind::Io);
}

#[test]
fn test_truncate_existing_output() {
    let directory = scratch_directory("truncate_output");
    let input = directory.join("photo.png");
    let output = directory.join("gray.png");
    write_fixture(&colorful_rgb(2, 2), &input, ImageFormat::Png);
    fs::write(&output, vec![0xAB; 1 << 16]).unwrap();

    run(&["-input", input.to_str().unwrap(), "-output", output.to_str().unwrap()])
        .expect("Conversion failed");

    let result = image::open(&output).expect("Output is not an image");
    assert_eq!((result.width(), result.height()), (2, 2));
}
