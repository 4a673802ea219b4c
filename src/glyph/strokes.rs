//! Per-character stroke data for CJK stroke-by-stroke rendering.

use std::{
    collections::{BTreeSet, HashMap},
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};

use lru::LruCache;

use crate::foundation::error::AutographResult;

/// Side length of the square coordinate space stroke paths are drawn in.
pub const STROKE_EM: f64 = 1024.0;

/// Default number of characters kept by [`StrokeCache`].
pub const DEFAULT_STROKE_CACHE_CAPACITY: usize = 512;

/// Ordered stroke outlines for one character, in a [`STROKE_EM`] square.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeData {
    /// One path string per stroke, in canonical writing order.
    pub strokes: Vec<String>,
    /// Stroke center lines, when the source provides them.
    #[serde(default)]
    pub medians: Vec<Vec<[f64; 2]>>,
}

impl StrokeData {
    /// Build from stroke path strings only.
    pub fn from_strokes<I, S>(strokes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strokes: strokes.into_iter().map(Into::into).collect(),
            medians: Vec::new(),
        }
    }
}

/// Characters eligible for stroke mode (CJK Unified Ideographs, U+4E00..=U+9FA5).
pub fn is_cjk(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

/// External lookup of stroke data by character.
pub trait StrokeSource {
    /// `Ok(None)` when the source has no data for `ch`.
    fn strokes(&self, ch: char) -> AutographResult<Option<Arc<StrokeData>>>;
}

/// In-memory [`StrokeSource`], handy for bundled data and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStrokes {
    by_char: HashMap<char, Arc<StrokeData>>,
}

impl MemoryStrokes {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register data for `ch`, replacing any previous entry.
    pub fn insert(&mut self, ch: char, data: StrokeData) {
        self.by_char.insert(ch, Arc::new(data));
    }

    /// Builder-style [`MemoryStrokes::insert`].
    pub fn with(mut self, ch: char, data: StrokeData) -> Self {
        self.insert(ch, data);
        self
    }
}

impl StrokeSource for MemoryStrokes {
    fn strokes(&self, ch: char) -> AutographResult<Option<Arc<StrokeData>>> {
        Ok(self.by_char.get(&ch).cloned())
    }
}

/// LRU cache in front of a [`StrokeSource`].
///
/// Holds at most one entry per character. Failed lookups are cached as absent so
/// a broken character is not refetched for every render. Concurrent misses for
/// the same character may both fetch; the last insert wins, which is harmless
/// because results for one character are deterministic.
pub struct StrokeCache<S> {
    source: S,
    entries: Mutex<LruCache<char, Option<Arc<StrokeData>>>>,
}

impl<S: StrokeSource> StrokeCache<S> {
    /// Cache with [`DEFAULT_STROKE_CACHE_CAPACITY`] entries.
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, DEFAULT_STROKE_CACHE_CAPACITY)
    }

    /// Cache holding up to `capacity` characters (at least one).
    pub fn with_capacity(source: S, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            source,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Cached lookup. Only CJK characters are ever fetched.
    pub fn lookup(&self, ch: char) -> Option<Arc<StrokeData>> {
        if !is_cjk(ch) {
            return None;
        }
        if let Some(hit) = self.lock().get(&ch) {
            return hit.clone();
        }

        // The lock is not held across the fetch.
        let fetched = match self.source.strokes(ch) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(%ch, error = %e, "stroke data lookup failed");
                None
            }
        };
        self.lock().put(ch, fetched.clone());
        fetched
    }

    /// Warm the cache for every distinct CJK character of `text`, in order of
    /// first appearance.
    pub fn prefetch(&self, text: &str) {
        let mut seen = BTreeSet::new();
        for ch in text.chars().filter(|c| is_cjk(*c)) {
            if seen.insert(ch) {
                let _ = self.lookup(ch);
            }
        }
    }

    /// Number of cached characters, hits and misses alike.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access the wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<char, Option<Arc<StrokeData>>>> {
        // A poisoned cache only ever holds complete entries, so keep using it.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<S: StrokeSource> StrokeSource for StrokeCache<S> {
    fn strokes(&self, ch: char) -> AutographResult<Option<Arc<StrokeData>>> {
        Ok(self.lookup(ch))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/strokes.rs"]
mod tests;
