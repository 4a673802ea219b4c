use super::*;

#[test]
fn parses_short_long_and_alpha_forms() {
    assert_eq!(
        parse_hex("#f00").unwrap(),
        Rgba8 {
            r: 255,
            g: 0,
            b: 0,
            a: 255
        }
    );
    assert_eq!(parse_hex("00FF00").unwrap().to_hex(), "#00ff00");
    assert_eq!(parse_hex("#0000ff80").unwrap().a, 128);
    assert!(parse_hex("#12345").is_err());
    assert!(parse_hex("zzzzzz").is_err());
}

#[test]
fn normalize_adds_hash_and_lowercases() {
    assert_eq!(normalize_hex("FF0000").as_deref(), Some("#ff0000"));
    assert_eq!(normalize_hex("not a color"), None);
}

#[test]
fn color_for_falls_back_past_the_end() {
    let list = vec!["#ff0000".to_string(), String::new()];
    assert_eq!(color_for(&list, 0, "#333333"), "#ff0000");
    assert_eq!(color_for(&list, 1, "#333333"), "#333333");
    assert_eq!(color_for(&list, 7, "#333333"), "#333333");
    assert_eq!(color_for(&[], 0, "#333333"), "#333333");
}

#[test]
fn rainbow_cycles_palette() {
    let colors = rainbow_colors(11);
    assert_eq!(colors.len(), 11);
    assert_eq!(colors[0], DEFAULT_CHAR_COLORS[0]);
    assert_eq!(colors[9], DEFAULT_CHAR_COLORS[0]);
    assert_eq!(colors[10], DEFAULT_CHAR_COLORS[1]);
}
