//! The authored campaign: six scripted nights plus the custom night.
//!
//! Each night is a difficulty schedule keyed on the office-clock hour,
//! with delayed roster actions layered on top. Numbers here are tuning,
//! not derived values.

mod custom;
mod night1;
mod night2;
mod night3;
mod night4;
mod night5;
mod night6;

pub use custom::CustomNight;
pub use night1::Night1;
pub use night2::Night2;
pub use night3::Night3;
pub use night4::Night4;
pub use night5::Night5;
pub use night6::Night6;

/// Recap line shown at the start of the later nights.
pub(crate) const SUMMARY_NOTE: &str =
    "Tonight's roster has been rebalanced since your last shift. Watch the old ones.";
