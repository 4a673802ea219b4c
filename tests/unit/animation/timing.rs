use super::*;

fn rec(index: usize, len: f64) -> PathRecord {
    PathRecord {
        d: "M0 0L1 0".to_string(),
        len,
        index,
        stroke: None,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn one_slot_per_character() {
    let paths = [rec(0, 100.0), rec(1, 300.0), rec(2, 50.0)];
    let tl = Timeline::allocate(&paths, 2.0);
    assert_eq!(tl.groups, 3);
    assert!(approx(tl.total, 1.5));
    let delays: Vec<f64> = tl.entries.iter().map(|e| e.delay).collect();
    assert_eq!(delays, vec![0.0, 0.5, 1.0]);
    assert!(tl.entries.iter().all(|e| approx(e.duration, 0.5)));
}

#[test]
fn strokes_share_their_slot_by_length() {
    let paths = [rec(0, 30.0), rec(0, 10.0), rec(1, 5.0)];
    let tl = Timeline::allocate(&paths, 1.0);
    assert_eq!(tl.groups, 2);
    assert!(approx(tl.entries[0].delay, 0.0));
    assert!(approx(tl.entries[0].duration, 0.75));
    assert!(approx(tl.entries[1].delay, 0.75));
    assert!(approx(tl.entries[1].duration, 0.25));
    // The next character starts exactly where the previous slot ends.
    assert!(approx(tl.entries[2].delay, 1.0));
    assert!(approx(tl.total, 2.0));
}

#[test]
fn zero_length_group_splits_evenly() {
    let paths = [rec(0, 0.0), rec(0, 0.0), rec(0, f64::NAN), rec(0, 0.0)];
    let tl = Timeline::allocate(&paths, 1.0);
    for (i, e) in tl.entries.iter().enumerate() {
        assert!(approx(e.duration, 0.25));
        assert!(approx(e.delay, 0.25 * i as f64));
    }
}

#[test]
fn sparse_character_indices_do_not_leave_gaps() {
    // Index 1 (a space) produced no record.
    let paths = [rec(0, 10.0), rec(2, 10.0)];
    let tl = Timeline::allocate(&paths, 1.0);
    assert!(approx(tl.entries[1].delay, 1.0));
    assert!(approx(tl.total, 2.0));
}

#[test]
fn speed_is_clamped() {
    let paths = [rec(0, 10.0)];
    for speed in [0.0, -5.0, f64::NAN, f64::NEG_INFINITY] {
        let tl = Timeline::allocate(&paths, speed);
        assert!(approx(tl.total, 100.0), "speed={speed}");
    }
}

#[test]
fn empty_input_has_zero_duration() {
    let tl = Timeline::allocate(&[], 1.0);
    assert!(tl.is_empty());
    assert_eq!(tl.total, 0.0);
    assert_eq!(tl.settled_at(), 0.0);
}

#[test]
fn allocation_is_idempotent() {
    let paths = [rec(0, 12.5), rec(0, 7.0), rec(1, 99.0), rec(3, 1.0)];
    assert_eq!(
        Timeline::allocate(&paths, 0.7),
        Timeline::allocate(&paths, 0.7)
    );
}

#[test]
fn progress_and_fill_fade() {
    let e = TimingEntry {
        delay: 1.0,
        duration: 2.0,
    };
    assert_eq!(e.draw_progress(0.5, Ease::Linear), 0.0);
    assert!(approx(e.draw_progress(2.0, Ease::Linear), 0.5));
    assert_eq!(e.draw_progress(10.0, Ease::EaseOut), 1.0);

    assert!(approx(e.fill_delay(), 2.2));
    assert!(approx(e.fill_opacity(2.2, Ease::Linear), 0.0));
    assert!(approx(e.fill_opacity(2.6, Ease::Linear), 0.5));
    assert!(approx(e.fill_opacity(3.0, Ease::Linear), 1.0));
    assert!(approx(e.end(), 3.0));
}

#[test]
fn progress_is_complete_at_the_exact_end_time() {
    let e = TimingEntry {
        delay: 1.0,
        duration: 2.0,
    };
    // fill_delay() is 2.2000000000000002, so 3.0 - fill_delay() falls just short of 0.8.
    assert_eq!(e.fill_opacity(e.end(), Ease::Linear), 1.0);
    assert_eq!(e.fill_opacity(e.end(), Ease::EaseOut), 1.0);
    assert_eq!(e.draw_progress(3.0, Ease::Linear), 1.0);
    assert!(e.fill_opacity(2.9, Ease::Linear) < 1.0);
}

#[test]
fn settled_time_covers_trailing_fill_fade() {
    let paths = [rec(0, 10.0)];
    let tl = Timeline::allocate(&paths, 10.0);
    // Slot of 0.1s, fill fade starts at 0.06 and lasts 0.8.
    assert!(approx(tl.settled_at(), 0.86));
}
