use rand::Rng;

use crate::actors::ActorId;
use crate::context::NightContext;
use crate::events::{Night, TimeEvent};

/// Second night: the withered cast wakes up.
pub struct Night2 {
    note: String,
}

impl Night2 {
    pub fn new() -> Self {
        Night2 {
            note: String::new(),
        }
    }

    fn push_note(&mut self, ctx: &mut NightContext, text: &str) {
        self.note.push_str(text);
        self.note.push(' ');
        ctx.set_call_note(self.note.clone());
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        self.push_note(ctx, "The older models move tonight. They were never retired properly.");

        ctx.set_start_delay_all_random(2.5, 5.0);
        ctx.roster_mut().set_start_delay(ActorId::Marionette, 0.0);
        let (rng, roster) = ctx.split();
        let old_strummer = rng.random_range(5.0..10.0);
        let old_songbird = rng.random_range(5.0..10.0);
        roster.set_start_delay(ActorId::OldStrummer, old_strummer);
        roster.set_start_delay(ActorId::OldSongbird, old_songbird);
        roster.set_start_delay(ActorId::Prowler, 10.0);

        ctx.roster_mut().set_difficulty_all(0);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 6);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 3);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 4);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 3);
    }

    fn at_1am(&mut self, ctx: &mut NightContext) {
        self.push_note(ctx, "Use the flashlight on the hall to keep the runner back.");

        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 5);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 3);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 5);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 3);
    }

    fn at_3am(&mut self, ctx: &mut NightContext) {
        self.push_note(ctx, "Whatever you hear in the vents, the mask works.");

        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 10);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 3);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 6);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 7);
    }

    fn at_4am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 5);

        ctx.roster_mut().try_advance(ActorId::OldStrummer, false);
        ctx.roster_mut().try_advance(ActorId::Drifter, false);
    }

    fn at_5am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 6);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 5);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 8);
    }
}

impl Default for Night2 {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for Night2 {
    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        match hour {
            12 => self.at_midnight(ctx),
            1 => self.at_1am(ctx),
            3 => self.at_3am(ctx),
            4 => self.at_4am(ctx),
            5 => self.at_5am(ctx),
            _ => {}
        }
    }
}

impl Night for Night2 {
    fn night(&self) -> u32 {
        2
    }

    fn init_night(&mut self, _ctx: &mut NightContext) {
        self.note.clear();
    }
}
