//! Shared crate-wide constants.

/// Default window width and height, in surface units, when a configuration
/// record omits them.
pub const DEFAULT_WINDOW_SIZE: u32 = 256;

/// Default minimum window width and height, in surface units, when a
/// configuration record omits them.
pub const DEFAULT_WINDOW_MIN_SIZE: u32 = 256;

/// Absolute floor for caller-supplied minimum widths. Minimums below the
/// floor are clamped, never rejected; anything narrower cannot host window
/// chrome at all.
pub const MIN_WINDOW_FLOOR_WIDTH: u32 = 6;

/// Absolute floor for caller-supplied minimum heights.
pub const MIN_WINDOW_FLOOR_HEIGHT: u32 = 3;

/// First stacking value handed out after a fresh start or a dense renumber.
pub const STACKING_BASE: i64 = 100;

/// Increment applied on each bring-to-front.
pub const STACKING_STEP: i64 = 10;

/// Once the stacking counter passes this ceiling, open windows are densely
/// renumbered from [`STACKING_BASE`] preserving relative order.
pub const STACKING_CEILING: i64 = 10_000;
