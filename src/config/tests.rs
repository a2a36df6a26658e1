use super::*;
use crate::border::{BorderConfig, BorderKind};
use crate::style::{Color, Paint};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_config_path(ext: &str) -> std::path::PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("ttyframe_config_{nanos}.{ext}"))
}

#[test]
fn empty_document_is_default() {
    let options = FrameOptions::from_json_str("{}").expect("empty object");
    assert_eq!(options, FrameOptions::default());
    assert!(options.enable_color);
    assert!(!options.is_positioned());
}

#[test]
fn yaml_covers_every_option() {
    let options = FrameOptions::from_yaml_str(
        r#"
top: 2
left: 10
width: 30
height: 10
align: center
padding: 3
title:
  top_left: " file1 "
border: thick
style:
  fg: bright_yellow
  bg: blue
  border:
    fg: bright_yellow
    bg: blue
"#,
    )
    .expect("yaml options");
    assert_eq!(options.top, Some(2));
    assert_eq!(options.left, Some(10));
    assert_eq!(options.width, Some(30));
    assert_eq!(options.height, Some(10));
    assert_eq!(options.align, Align::Center);
    assert_eq!(options.padding, Padding::uniform(3));
    assert_eq!(options.title.top_left, " file1 ");
    assert_eq!(options.border, BorderOption::Kind(BorderKind::Thick));
    assert_eq!(
        options.style.border,
        Paint::new(Some(Color::BrightYellow), Some(Color::Blue))
    );
    assert!(options.is_positioned());
}

#[test]
fn structured_border_in_json() {
    let options = FrameOptions::from_json_str(
        r#"{"border": {"type": "thick", "top": false, "bottom": false}}"#,
    )
    .expect("structured border");
    assert_eq!(
        options.border,
        BorderOption::Custom(BorderConfig {
            kind: BorderKind::Thick,
            top: false.into(),
            bottom: false.into(),
            ..BorderConfig::default()
        })
    );
}

#[test]
fn invalid_border_reports_value() {
    let err = FrameOptions::from_json_str(r#"{"border": ["unknown"]}"#).unwrap_err();
    assert!(err
        .to_string()
        .contains(r#"wrong value `["unknown"]` for border configuration option"#));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(FrameOptions::from_json_str(r#"{"colour": "red"}"#).is_err());
    assert!(FrameOptions::from_json_str(r#"{"title": {"middle": "x"}}"#).is_err());
}

#[test]
fn load_picks_format_from_extension() {
    let json_path = temp_config_path("json");
    fs::write(&json_path, r#"{"width": 20, "padding": [1, 2]}"#).expect("write json");
    let options = FrameOptions::load(&json_path).expect("load json");
    assert_eq!(options.width, Some(20));
    assert_eq!(options.padding, Padding::symmetric(1, 2));
    let _ = fs::remove_file(&json_path);

    let yaml_path = temp_config_path("yml");
    fs::write(&yaml_path, "enable_color: false\nalign: right\n").expect("write yaml");
    let options = FrameOptions::load(&yaml_path).expect("load yaml");
    assert!(!options.enable_color);
    assert_eq!(options.align, Align::Right);
    let _ = fs::remove_file(&yaml_path);
}

#[test]
fn load_reports_missing_file() {
    let err = FrameOptions::load(&temp_config_path("yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read frame config"));
}

#[test]
fn title_rows() {
    let titles = Titles {
        bottom_right: "(v1.0)".to_string(),
        ..Titles::top_left("TITLE")
    };
    assert_eq!(titles.row(TitleRow::Top), ["TITLE", "", ""]);
    assert_eq!(titles.row(TitleRow::Bottom), ["", "", "(v1.0)"]);
    assert!(!titles.is_empty());
    assert!(Titles::default().is_empty());
}
