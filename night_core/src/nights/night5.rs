use rand::Rng;

use crate::actors::ActorId;
use crate::context::NightContext;
use crate::events::{Night, TimeEvent};
use crate::nights::SUMMARY_NOTE;

/// Fifth night: a flat high-pressure roster under rolling power surges.
/// Every hour kicks off a surge and every half hour re-runs the
/// blackout tail on its own.
pub struct Night5;

impl Night5 {
    pub fn new() -> Self {
        Night5
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        ctx.set_start_delay_all_random(3.0, 10.0);
        let (rng, roster) = ctx.split();
        let paired = rng.random_range(3.0..10.0);
        let strummer = paired + rng.random_range(-1.5..1.5);
        let songbird = paired + rng.random_range(-1.5..1.5);
        roster.set_start_delay(ActorId::Strummer, strummer);
        roster.set_start_delay(ActorId::Songbird, songbird);
        roster.set_start_delay(ActorId::Marionette, 0.0);

        ctx.roster_mut().set_difficulty_all(15);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 8);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 17);
    }

    fn in_surge_window(hour: u32) -> bool {
        !(6..12).contains(&hour)
    }
}

impl Default for Night5 {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for Night5 {
    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        if hour == 12 {
            self.at_midnight(ctx);
        }
        if Self::in_surge_window(hour) {
            ctx.power_surge();
        }
    }

    fn on_half_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        if Self::in_surge_window(hour) {
            ctx.power_surge_end(crate::context::SURGE_OUT_SECONDS);
        }
    }
}

impl Night for Night5 {
    fn night(&self) -> u32 {
        5
    }

    fn init_night(&mut self, ctx: &mut NightContext) {
        ctx.set_call_note(SUMMARY_NOTE);
    }
}
