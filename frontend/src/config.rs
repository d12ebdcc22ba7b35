use log::Level;

pub const BRAND: &str = "Talko";

/// Vertical offset (px) past which the header switches to its compact variant.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Height reserved for the fixed header; anchor targets land this far below the viewport top.
pub const HEADER_OFFSET: f64 = 70.0;

pub const SCROLL_DURATION_MS: f64 = 500.0;

pub const FRAME_INTERVAL_MS: u32 = 16;

/// Stand-in latency for the contact submission until a real backend is wired in.
pub const SUBMIT_DELAY_MS: u32 = 1_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
