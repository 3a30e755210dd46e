//! The polymorphic scripted-event surface.
//!
//! A night or challenge is a boxed trait object driven by the director:
//! it hears hour and half-hour edges, decides how long the shift lasts,
//! and reacts once on a win. All mutation of the world goes through the
//! [`NightContext`] passed into each hook.
//!
//! [`NightContext`]: crate::context::NightContext

use crate::context::NightContext;

pub const DEFAULT_NIGHT_HOURS: u32 = 6;

pub trait TimeEvent {
    /// In-game hours until the shift is won.
    fn hours(&self) -> u32 {
        DEFAULT_NIGHT_HOURS
    }

    /// Fires once per hour edge; `hour` is the office-clock label
    /// (12 at midnight, then 1, 2, ...).
    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32);

    /// Fires once when the clock crosses the 30-minute mark of an hour.
    fn on_half_hour(&mut self, _ctx: &mut NightContext, _hour: u32) {}

    /// Fires once when the shift is won.
    fn on_win(&mut self, _ctx: &mut NightContext) {}
}

/// A campaign night.
pub trait Night: TimeEvent {
    /// Campaign position, 1 through the final night.
    fn night(&self) -> u32;

    /// One-time setup when the director selects this night.
    fn init_night(&mut self, ctx: &mut NightContext);
}

/// A standalone challenge mode.
pub trait Challenge: TimeEvent {
    /// Stable selection id.
    fn challenge_id(&self) -> u32;

    /// One-time setup when the director selects this challenge.
    fn init_challenge(&mut self, ctx: &mut NightContext);

    /// Whether the player has beaten this challenge before.
    fn completed(&self, ctx: &NightContext) -> bool;
}
