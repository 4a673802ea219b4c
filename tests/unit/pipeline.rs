use super::*;

#[test]
fn output_format_names_and_mime() {
    assert_eq!("GIF".parse::<OutputFormat>().unwrap(), OutputFormat::Gif);
    assert_eq!(" png ".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
    assert!(matches!(
        "bmp".parse::<OutputFormat>(),
        Err(AutographError::Validation(_))
    ));
    for f in OutputFormat::ALL {
        assert_eq!(f.to_string().parse::<OutputFormat>().unwrap(), f);
    }
    assert_eq!(OutputFormat::Svg.mime(), "image/svg+xml");
    assert_eq!(OutputFormat::Json.mime(), "application/json");
    assert_eq!(OutputFormat::default(), OutputFormat::Svg);
}

#[test]
fn placeholder_only_replaces_blank_text() {
    let blank = StyleConfig {
        text: "  ".to_string(),
        ..StyleConfig::default()
    };
    assert_eq!(with_placeholder_text(blank).text, PLACEHOLDER_TEXT);

    let named = StyleConfig {
        text: "Ada".to_string(),
        ..StyleConfig::default()
    };
    assert_eq!(with_placeholder_text(named).text, "Ada");
}

#[test]
fn json_output_uses_view_box_key() {
    let out = JsonOutput {
        paths: &[],
        view_box: ViewWindow::FALLBACK,
    };
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["viewBox"]["w"], 100.0);
    assert!(v["paths"].as_array().unwrap().is_empty());
}
