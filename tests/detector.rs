mod common;

use common::synthetic_image::{checkerboard_u8, gray, vertical_step_u8};
use edge_detector::config::{cli, load_config};
use edge_detector::image::{load_image, prepare_gray, write_json_file, write_png};
use edge_detector::{BorderMode, Buffer, EdgeDetector, EdgeError, EdgeParams, Operation};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("edge_detector_{}_{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn checkerboard_canny_produces_binary_edges() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (w, h) = (64, 48);
    let mut buf = gray(w, h, checkerboard_u8(w, h, 8));
    let detector = EdgeDetector::new(EdgeParams::default());
    let report = detector.process(&mut buf, &Operation::default()).unwrap();

    assert_eq!((buf.w, buf.h, buf.channels), (w, h, 1));
    assert!(buf.data.iter().all(|&v| v == 0 || v == 255));
    let lit = buf.data.iter().filter(|&&v| v == 255).count();
    assert!(lit > 0 && lit < w * h / 2, "lit = {lit}");

    let stats = report.hysteresis.expect("canny reports hysteresis");
    assert!(stats.strong_seeds > 0);
    assert!(report.timing.total_ms >= 0.0);
}

#[test]
fn report_serializes_operation_and_timings() {
    let mut buf = gray(16, 16, vertical_step_u8(16, 16, 8, 10, 200));
    let detector = EdgeDetector::new(EdgeParams {
        border: BorderMode::Zero,
    });
    let report = detector
        .process(&mut buf, &Operation::Log { sigma: 1.0, threshold: Some(20) })
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["operation"]["op"], "log");
    assert_eq!(json["border"], "zero");
    assert_eq!(json["threshold"], 20);
    assert_eq!(json["input"]["width"], 16);
    assert!(json.get("hysteresis").is_none());
    assert_eq!(json["timing"]["stages"][0]["label"], "log");
    assert_eq!(json["timing"]["stages"][1]["label"], "threshold");
    assert!(json["timing"]["totalMs"].is_number());
}

#[test]
fn color_file_runs_through_the_full_pipeline() {
    let dir = scratch_dir("pipeline");
    let input = dir.join("input.png");
    let output = dir.join("out/edges.png");
    let report_path = dir.join("out/report.json");

    let (w, h) = (20, 12);
    let rgb: Vec<u8> = vertical_step_u8(w, h, 10, 0, 250)
        .into_iter()
        .flat_map(|v| [v, v, v])
        .collect();
    write_png(&Buffer::from_raw(w, h, 3, rgb).unwrap(), &input).unwrap();

    let args: Vec<String> = vec![
        input.display().to_string(),
        output.display().to_string(),
        "--sobel".into(),
        "64".into(),
    ];
    let config = cli::parse_args("edge_detect", &args).unwrap();
    let loaded = load_image(&config.input).unwrap();
    assert_eq!(loaded.channels, 3);
    let mut gray_buf = prepare_gray(loaded).unwrap();
    let report = EdgeDetector::new(config.edge_params())
        .process(&mut gray_buf, &config.operation)
        .unwrap();
    write_png(&gray_buf, &config.output).unwrap();
    write_json_file(&report_path, &report).unwrap();

    let written = load_image(&output).unwrap();
    assert_eq!((written.w, written.h, written.channels), (w, h, 1));
    assert_eq!(written.get(9, 6), 255);
    assert_eq!(written.get(0, 6), 0);
    let text = fs::read_to_string(&report_path).unwrap();
    assert!(text.contains("\"op\": \"sobel\""), "{text}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn json_config_file_selects_operation() {
    let dir = scratch_dir("config");
    let path = dir.join("run.json");
    fs::write(
        &path,
        r#"{"input": "in.png", "output": "out.png",
            "operation": {"op": "canny", "sigma": 1.4, "t1": 70, "t2": 30},
            "report_json": "report.json"}"#,
    )
    .unwrap();

    let via_cli =
        cli::parse_args("edge_detect", &["--config".into(), path.display().to_string()]).unwrap();
    let direct = load_config(&path).unwrap();
    assert_eq!(via_cli, direct);
    assert_eq!(
        direct.operation,
        Operation::Canny {
            sigma: 1.4,
            t1: 70,
            t2: 30
        }
    );
    assert_eq!(direct.border, BorderMode::Replicate);

    fs::write(&path, r#"{"input": "in.png"}"#).unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(err.starts_with("Failed to parse config"), "{err}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_requests_do_not_touch_the_buffer() {
    let detector = EdgeDetector::default();
    let mut buf = gray(8, 8, checkerboard_u8(8, 8, 2));
    let before = buf.clone();

    let err = detector
        .process(&mut buf, &Operation::Canny { sigma: 1.0, t1: 20, t2: 40 })
        .unwrap_err();
    assert_eq!(err, EdgeError::ThresholdOrder { high: 20, low: 40 });
    assert!(detector
        .process(&mut buf, &Operation::Blur { weight: 0.0 })
        .is_err());
    assert_eq!(buf, before);

    let mut empty = Buffer::new(0, 5, 1);
    assert!(matches!(
        detector.process(&mut empty, &Operation::Sobel { threshold: None }),
        Err(EdgeError::EmptyBuffer { .. })
    ));
}
