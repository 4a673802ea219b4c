use super::*;

#[test]
fn empty_bounds_fall_back() {
    let b = Bounds::new();
    assert!(!b.is_finite());
    assert_eq!(b.rect(), None);
    assert_eq!(b.to_view_window(VIEW_PADDING), ViewWindow::FALLBACK);
}

#[test]
fn padding_is_applied_on_every_side() {
    let mut b = Bounds::new();
    b.add_rect(Rect::new(10.0, 20.0, 110.0, 70.0));
    b.add_rect(Rect::new(100.0, 0.0, 150.0, 60.0));
    let w = b.to_view_window(40.0);
    assert_eq!(
        w,
        ViewWindow {
            x: -30.0,
            y: -40.0,
            width: 220.0,
            height: 150.0
        }
    );
}

#[test]
fn non_finite_rects_are_ignored() {
    let mut b = Bounds::new();
    b.add_rect(Rect::new(f64::NAN, 0.0, 1.0, 1.0));
    assert!(!b.is_finite());
    b.add_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
    assert!(b.is_finite());
}

#[test]
fn degenerate_window_uses_fallback() {
    assert_eq!(ViewWindow::new(0.0, 0.0, 0.0, 10.0), ViewWindow::FALLBACK);
    assert_eq!(
        ViewWindow::new(f64::NAN, 0.0, 10.0, 10.0),
        ViewWindow::FALLBACK
    );
    let w = ViewWindow::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!((w.x, w.y, w.width, w.height), (1.0, 2.0, 3.0, 4.0));
}

#[test]
fn serializes_with_short_size_keys() {
    let json = serde_json::to_value(ViewWindow::FALLBACK).unwrap();
    assert_eq!(json["w"], 100.0);
    assert_eq!(json["h"], 100.0);
}
