use super::*;

fn tile(kind: TextureKind) -> TileSpec {
    TileSpec {
        kind,
        color: "#cbd5e1".to_string(),
        size: 20.0,
        thickness: 1.0,
        opacity: 0.5,
    }
}

fn pattern(kind: TextureKind) -> String {
    let mut out = String::new();
    tile(kind).write_pattern(&mut out, &IdScope::new("s-")).unwrap();
    out
}

#[test]
fn no_tile_without_texture() {
    assert_eq!(TileSpec::from_style(&StyleConfig::default()), None);
    let style = StyleConfig {
        texture: TextureKind::Lines,
        tex_size: 32.0,
        ..StyleConfig::default()
    };
    let spec = TileSpec::from_style(&style).unwrap();
    assert_eq!(spec.size, 32.0);
    assert_eq!(spec.name(), "texture-lines");
}

#[test]
fn pattern_header_is_scoped_and_sized() {
    let out = pattern(TextureKind::Grid);
    assert!(out.starts_with(
        r#"<pattern id="s-texture-grid" x="0" y="0" width="20" height="20" patternUnits="userSpaceOnUse">"#
    ));
    assert!(out.contains(r#"d="M 20 0 L 0 0 0 20""#));
    assert!(out.trim_end().ends_with("</pattern>"));
}

#[test]
fn dots_scale_radius_with_thickness() {
    let out = pattern(TextureKind::Dots);
    assert!(out.contains(
        r##"<circle cx="10" cy="10" r="1.5" fill="#cbd5e1" fill-opacity="0.5"/>"##
    ));
}

#[test]
fn cross_draws_diagonal_ticks() {
    let out = pattern(TextureKind::Cross);
    assert!(out.contains(r#"d="M 5 5 L 15 15 M 15 5 L 5 15""#));
}

#[test]
fn practice_grids_use_dashed_guides() {
    let tian = pattern(TextureKind::Tianzige);
    assert!(tian.contains(r#"<rect width="20" height="20" fill="none""#));
    assert!(tian.contains(r#"d="M10 0 L10 20 M0 10 L20 10""#));
    assert_eq!(tian.matches(r#"stroke-dasharray="3,3""#).count(), 1);

    let mi = pattern(TextureKind::Mizige);
    assert!(mi.contains(r#"d="M0 0 L20 20 M20 0 L0 20 M10 0 L10 20 M0 10 L20 10""#));
}
