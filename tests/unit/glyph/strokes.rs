use std::cell::Cell;

use super::*;
use crate::foundation::error::AutographError;

struct CountingSource {
    calls: Cell<usize>,
    fail: bool,
}

impl StrokeSource for CountingSource {
    fn strokes(&self, ch: char) -> AutographResult<Option<Arc<StrokeData>>> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(AutographError::stroke_data(format!("offline for {ch}")));
        }
        Ok(Some(Arc::new(StrokeData::from_strokes(["M 0 0 L 10 0"]))))
    }
}

#[test]
fn cjk_range_is_the_unified_block() {
    assert!(is_cjk('你'));
    assert!(is_cjk('\u{4e00}'));
    assert!(is_cjk('\u{9fa5}'));
    assert!(!is_cjk('\u{9fa6}'));
    assert!(!is_cjk('A'));
    assert!(!is_cjk('あ'));
}

#[test]
fn cache_fetches_each_character_once() {
    let cache = StrokeCache::new(CountingSource {
        calls: Cell::new(0),
        fail: false,
    });
    assert!(cache.lookup('你').is_some());
    assert!(cache.lookup('你').is_some());
    assert_eq!(cache.source().calls.get(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn non_cjk_characters_never_hit_the_source() {
    let cache = StrokeCache::new(CountingSource {
        calls: Cell::new(0),
        fail: false,
    });
    assert!(cache.lookup('A').is_none());
    assert_eq!(cache.source().calls.get(), 0);
    assert!(cache.is_empty());
}

#[test]
fn failures_are_cached_as_absent() {
    let cache = StrokeCache::new(CountingSource {
        calls: Cell::new(0),
        fail: true,
    });
    assert!(cache.lookup('好').is_none());
    assert!(cache.lookup('好').is_none());
    assert_eq!(cache.source().calls.get(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn prefetch_deduplicates_characters() {
    let cache = StrokeCache::new(CountingSource {
        calls: Cell::new(0),
        fail: false,
    });
    cache.prefetch("你好你好 hi");
    assert_eq!(cache.source().calls.get(), 2);
}

#[test]
fn capacity_bounds_entries() {
    let cache = StrokeCache::with_capacity(
        CountingSource {
            calls: Cell::new(0),
            fail: false,
        },
        1,
    );
    cache.lookup('你');
    cache.lookup('好');
    assert_eq!(cache.len(), 1);
    cache.lookup('你');
    assert_eq!(cache.source().calls.get(), 3);
}

#[test]
fn stroke_data_parses_hanzi_writer_json() {
    let json = r#"{"strokes":["M 1 2 L 3 4","M 5 6 L 7 8"],"medians":[[[1,2],[3,4]],[[5,6],[7,8]]]}"#;
    let data: StrokeData = serde_json::from_str(json).unwrap();
    assert_eq!(data.strokes.len(), 2);
    assert_eq!(data.medians[1][0], [5.0, 6.0]);

    let data: StrokeData = serde_json::from_str(r#"{"strokes":[]}"#).unwrap();
    assert!(data.medians.is_empty());
}

#[test]
fn memory_source_returns_registered_data() {
    let src = MemoryStrokes::new().with('一', StrokeData::from_strokes(["M 0 0 L 1 0"]));
    assert!(src.strokes('一').unwrap().is_some());
    assert!(src.strokes('二').unwrap().is_none());
}
