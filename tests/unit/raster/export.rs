use super::*;
use crate::{
    animation::timing::Timeline,
    glyph::extract::PathRecord,
    layout::bounds::ViewWindow,
    raster::sink::InMemorySink,
    style::config::{BgSizeMode, StyleConfig},
};

fn squares() -> Vec<PathRecord> {
    vec![
        PathRecord {
            d: "M20 20L70 20L70 70L20 70Z".to_string(),
            len: 200.0,
            index: 0,
            stroke: None,
        },
        PathRecord {
            d: "M100 20L150 20L150 70L100 70Z".to_string(),
            len: 200.0,
            index: 1,
            stroke: None,
        },
    ]
}

fn transparent() -> StyleConfig {
    StyleConfig {
        bg_transparent: true,
        speed: 5.0,
        ..StyleConfig::default()
    }
}

fn with_doc<T>(style: &StyleConfig, f: impl FnOnce(&SignatureDocument<'_>) -> T) -> T {
    let paths = squares();
    let timeline = Timeline::allocate(&paths, style.speed);
    let doc = SignatureDocument {
        paths: &paths,
        view: ViewWindow::new(0.0, 0.0, 200.0, 100.0),
        style,
        timeline: &timeline,
    };
    f(&doc)
}

struct FailingSink {
    fail_at: u64,
    ended: bool,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> AutographResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, _frame: &RgbaFrame, _secs: f64) -> AutographResult<()> {
        if idx == self.fail_at {
            return Err(AutographError::encode("disk full"));
        }
        Ok(())
    }

    fn end(&mut self) -> AutographResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[test]
fn output_size_defaults_to_canvas_and_caps_longest_side() {
    let style = StyleConfig::default();
    let canvas = Canvas::fit(ViewWindow::new(0.0, 0.0, 220.4, 100.0), &style);
    let opts = RasterOptions::default();
    assert_eq!(opts.output_size(&canvas).unwrap(), (220, 100));

    let wide = Canvas::fit(ViewWindow::new(0.0, 0.0, 1600.0, 400.0), &style);
    assert_eq!(opts.output_size(&wide).unwrap(), (800, 200));

    let card = StyleConfig {
        bg_size_mode: BgSizeMode::Custom,
        bg_width: Some(300.0),
        bg_height: Some(1200.0),
        ..StyleConfig::default()
    };
    let tall = Canvas::fit(ViewWindow::new(0.0, 0.0, 200.0, 100.0), &card);
    assert_eq!(opts.output_size(&tall).unwrap(), (200, 800));

    let explicit = RasterOptions {
        width: Some(2000),
        height: Some(1000),
        ..RasterOptions::default()
    };
    assert_eq!(explicit.output_size(&canvas).unwrap(), (800, 400));

    let zero = RasterOptions {
        width: Some(0),
        ..RasterOptions::default()
    };
    assert!(zero.output_size(&canvas).is_err());
}

#[test]
fn samples_whole_duration_plus_hold_frame() {
    let opts = RasterOptions {
        fps: Fps::new(10, 1).unwrap(),
        ..RasterOptions::default()
    };
    let mut sink = InMemorySink::new();
    let pushed = with_doc(&transparent(), |doc| {
        render_frames(doc, &IdScope::default(), &opts, &mut sink).unwrap()
    });

    // Two characters at speed 5 last 0.4s, i.e. 4 frames at 10 fps.
    assert_eq!(pushed, 5);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (200, 100));

    let frames = sink.frames();
    let idx: Vec<u64> = frames.iter().map(|(i, _, _)| *i).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    assert!((frames[0].2 - 0.1).abs() < 1e-9);
    assert_eq!(frames[4].2, 1.0);

    // Nothing is drawn at t=0, the hold frame shows the filled squares.
    let covered = |f: &RgbaFrame| f.data.chunks(4).filter(|px| px[3] > 0).count();
    assert!(covered(&frames[0].1) < 20);
    assert!(covered(&frames[4].1) > 4000);
    assert_eq!(frames[4].1.alpha_at(45, 45), Some(255));
    assert_eq!(frames[4].1.alpha_at(125, 45), Some(255));
}

#[test]
fn short_hold_still_covers_trailing_fill_fade() {
    let opts = RasterOptions {
        fps: Fps::new(10, 1).unwrap(),
        hold_secs: 0.05,
        ..RasterOptions::default()
    };
    let mut sink = InMemorySink::new();
    with_doc(&transparent(), |doc| {
        render_frames(doc, &IdScope::default(), &opts, &mut sink).unwrap()
    });

    // The last fill fade starts at 0.32s and ends at 1.12s; the hold frame appears at 0.4s.
    let frames = sink.frames();
    assert_eq!(frames.len(), 5);
    assert!((frames[4].2 - 0.72).abs() < 1e-9);
    let played: f64 = frames.iter().map(|(_, _, secs)| secs).sum();
    assert!((played - 1.12).abs() < 1e-9);
}

#[test]
fn failure_aborts_without_finishing() {
    let mut sink = FailingSink {
        fail_at: 2,
        ended: false,
    };
    let err = with_doc(&transparent(), |doc| {
        render_frames(doc, &IdScope::default(), &RasterOptions::default(), &mut sink)
    })
    .unwrap_err();
    assert!(matches!(err, AutographError::Encode(_)));
    assert!(!sink.ended);
}

#[test]
fn gif_and_png_bytes_have_magic_headers() {
    let opts = RasterOptions {
        fps: Fps::new(5, 1).unwrap(),
        ..RasterOptions::default()
    };
    let gif = with_doc(&transparent(), |doc| {
        export_gif(doc, &IdScope::new("g-"), &opts).unwrap()
    });
    assert_eq!(&gif[..6], b"GIF89a");

    let png = with_doc(&StyleConfig::default(), |doc| {
        export_png(doc, &IdScope::default(), &opts).unwrap()
    });
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
