use std::fmt::Write as _;

use crate::actors::ActorId;
use crate::context::NightContext;
use crate::events::{Night, TimeEvent};

/// The player-configured night. Registered as night 7; winning it never
/// advances the campaign.
pub struct CustomNight;

impl CustomNight {
    pub fn new() -> Self {
        CustomNight
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        ctx.set_start_delay_all_random(0.0, 10.0);
        ctx.roster_mut().set_start_delay(ActorId::Marionette, 0.0);

        let levels: Vec<(ActorId, i32)> = ctx.custom_night().iter().collect();
        for (id, level) in levels {
            ctx.roster_mut().set_difficulty(id, level);
        }
    }
}

impl Default for CustomNight {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for CustomNight {
    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        if hour == 12 {
            self.at_midnight(ctx);
        }
    }
}

impl Night for CustomNight {
    fn night(&self) -> u32 {
        7
    }

    fn init_night(&mut self, ctx: &mut NightContext) {
        let mut note = String::new();
        for (id, level) in ctx.custom_night().iter() {
            let _ = writeln!(note, "{}: {level}", id.nickname());
        }
        ctx.set_call_note(note);
    }
}
