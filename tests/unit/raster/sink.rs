use super::*;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaFrame {
    RgbaFrame {
        width,
        height,
        data: rgba.repeat((width * height) as usize),
    }
}

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::default(),
    }
}

#[test]
fn in_memory_sink_keeps_order_and_durations() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(0, &solid(2, 2, [0, 0, 0, 0]), 0.1).unwrap();
    sink.push_frame(1, &solid(2, 2, [255, 0, 0, 255]), 1.0).unwrap();
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(cfg(2, 2)));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _, _)| *i).collect();
    assert_eq!(idx, vec![0, 1]);
    assert_eq!(sink.frames()[1].2, 1.0);
}

#[test]
fn gif_sink_writes_a_complete_stream() {
    let mut bytes = Vec::new();
    {
        let mut sink = GifSink::new(&mut bytes);
        sink.begin(cfg(4, 3)).unwrap();
        sink.push_frame(0, &solid(4, 3, [0, 0, 0, 0]), 1.0 / 30.0).unwrap();
        sink.push_frame(1, &solid(4, 3, [20, 40, 200, 255]), 1.0 / 30.0).unwrap();
        sink.end().unwrap();
    }
    assert_eq!(&bytes[..6], b"GIF89a");
    assert_eq!(bytes.last(), Some(&0x3b));
    // NETSCAPE2.0 application extension carries the loop count.
    assert!(bytes.windows(11).any(|w| w == b"NETSCAPE2.0"));
}

#[test]
fn gif_sink_rejects_misuse() {
    let mut bytes = Vec::new();
    let mut sink = GifSink::new(&mut bytes);
    assert!(sink.push_frame(0, &solid(1, 1, [0; 4]), 0.1).is_err());
    assert!(sink.end().is_err());

    sink.begin(cfg(2, 2)).unwrap();
    assert!(matches!(
        sink.push_frame(0, &solid(3, 3, [0; 4]), 0.1),
        Err(AutographError::Encode(_))
    ));
    assert!(sink.begin(cfg(2, 2)).is_err());
}

#[test]
fn gif_delays_keep_the_total_duration() {
    use image::{AnimationDecoder, codecs::gif::GifDecoder};

    let mut bytes = Vec::new();
    {
        let mut sink = GifSink::new(&mut bytes);
        sink.begin(cfg(2, 2)).unwrap();
        for i in 0..30u8 {
            let frame = solid(2, 2, [i * 8, 0, 0, 255]);
            sink.push_frame(u64::from(i), &frame, 1.0 / 30.0).unwrap();
        }
        sink.end().unwrap();
    }

    let frames = GifDecoder::new(std::io::Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    let delays: Vec<u32> = frames
        .iter()
        .map(|f| {
            let (numer, denom) = f.delay().numer_denom_ms();
            numer / denom
        })
        .collect();
    assert_eq!(delays.len(), 30);
    // 33.3ms frames alternate between 30 and 40ms instead of all playing at 30ms.
    assert!(delays.iter().all(|d| *d == 30 || *d == 40));
    assert_eq!(delays.iter().sum::<u32>(), 1000);
}
