use strum_macros::Display;

/// Outcome of a single engine tick.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum TickSignal {
    /// Nothing relevant moved; the published pair is untouched.
    Idle,
    /// Tracked state changed; a fresh pair was published.
    Recomputed,
}
