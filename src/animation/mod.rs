/// Easing curves.
pub mod ease;
/// Per-path delay and duration allocation.
pub mod timing;
