use log::Level;

/// Fraction of a region that has to be on screen before it counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pixels trimmed off the bottom of the viewport when checking intersection.
pub const REVEAL_BOTTOM_MARGIN_PX: u32 = 50;

/// Scroll offset after which the nav bar switches to its solid style.
pub const NAV_SCROLLED_OFFSET_PX: i32 = 80;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
