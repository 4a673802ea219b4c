//! Per-path delays and durations.
//!
//! Each character gets a fixed slot of `1 / speed` seconds. Records inside a
//! character split that slot in proportion to their length, and slots are laid
//! out back to back in character order.

use crate::{animation::ease::Ease, glyph::extract::PathRecord, style::config::MIN_SPEED};

/// Fraction of the draw duration after which the fill starts fading in.
pub const FILL_FADE_START: f64 = 0.6;
/// Duration of the fill fade, in seconds.
pub const FILL_FADE_SECS: f64 = 0.8;

/// Start time and duration of one path's draw animation, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingEntry {
    /// Seconds from the start of the animation.
    pub delay: f64,
    /// Seconds spent drawing the path.
    pub duration: f64,
}

impl TimingEntry {
    /// Time the fill fade begins.
    pub fn fill_delay(&self) -> f64 {
        self.delay + self.duration * FILL_FADE_START
    }

    /// Time by which both the draw and the fill fade are complete.
    pub fn end(&self) -> f64 {
        (self.delay + self.duration).max(self.fill_delay() + FILL_FADE_SECS)
    }

    /// Eased draw progress in `[0, 1]` at time `t`.
    pub fn draw_progress(&self, t: f64, ease: Ease) -> f64 {
        ease.apply(progress(t, self.delay, self.duration))
    }

    /// Eased fill opacity in `[0, 1]` at time `t`.
    pub fn fill_opacity(&self, t: f64, ease: Ease) -> f64 {
        ease.apply(progress(t, self.fill_delay(), FILL_FADE_SECS))
    }
}

/// Progress this close to the end counts as finished.
const SETTLE_EPSILON: f64 = 1e-9;

fn progress(t: f64, start: f64, duration: f64) -> f64 {
    if t < start {
        return 0.0;
    }
    if duration <= 0.0 {
        return 1.0;
    }
    let p = (t - start) / duration;
    if p >= 1.0 - SETTLE_EPSILON {
        1.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Timing for a whole record list, index-aligned with the records.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// One entry per record.
    pub entries: Vec<TimingEntry>,
    /// Number of character slots.
    pub groups: usize,
    /// Sum of all slot durations, in seconds.
    pub total: f64,
}

impl Timeline {
    /// Allocate timing for `paths`. `speed` below [`MIN_SPEED`] (or non-finite) is clamped.
    pub fn allocate(paths: &[PathRecord], speed: f64) -> Self {
        let speed = if speed.is_finite() {
            speed.max(MIN_SPEED)
        } else {
            MIN_SPEED
        };
        let slot = 1.0 / speed;

        let mut entries = Vec::with_capacity(paths.len());
        let mut groups = 0usize;
        let mut start = 0usize;
        while start < paths.len() {
            let index = paths[start].index;
            let end = paths[start..]
                .iter()
                .position(|p| p.index != index)
                .map_or(paths.len(), |n| start + n);
            let group = &paths[start..end];

            let slot_start = groups as f64 * slot;
            let total_len: f64 = group.iter().map(|p| usable_len(p.len)).sum();
            let mut cursor = slot_start;
            for p in group {
                let share = if total_len > 0.0 {
                    usable_len(p.len) / total_len
                } else {
                    1.0 / group.len() as f64
                };
                let duration = slot * share;
                entries.push(TimingEntry {
                    delay: cursor,
                    duration,
                });
                cursor += duration;
            }

            groups += 1;
            start = end;
        }

        Self {
            entries,
            groups,
            total: groups as f64 * slot,
        }
    }

    /// `true` when there is nothing to animate.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for the record at `i`, or a zero entry when out of range.
    pub fn entry(&self, i: usize) -> TimingEntry {
        self.entries.get(i).copied().unwrap_or_default()
    }

    /// Time at which every draw and fill fade has finished.
    pub fn settled_at(&self) -> f64 {
        self.entries
            .iter()
            .map(TimingEntry::end)
            .fold(self.total, f64::max)
    }
}

fn usable_len(len: f64) -> f64 {
    if len.is_finite() && len > 0.0 { len } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
