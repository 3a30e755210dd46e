use rand::Rng;

use crate::actors::ActorId;
use crate::context::NightContext;
use crate::events::{Night, TimeEvent};
use crate::nights::SUMMARY_NOTE;

/// Final scripted night: a steady baseline that spikes twice.
pub struct Night6;

impl Night6 {
    pub fn new() -> Self {
        Night6
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        ctx.set_start_delay_all_random(3.0, 10.0);
        let (rng, roster) = ctx.split();
        let paired = rng.random_range(5.0..12.0);
        let strummer = paired + rng.random_range(-2.0..2.0);
        let songbird = paired + rng.random_range(-2.0..2.0);
        roster.set_start_delay(ActorId::Strummer, strummer);
        roster.set_start_delay(ActorId::Songbird, songbird);
        roster.set_start_delay(ActorId::Marionette, 0.0);

        ctx.roster_mut().set_difficulty_all(10);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 8);
        ctx.roster_mut().set_difficulty(ActorId::Showman, 15);
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 12);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 18);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 20);
    }

    fn at_3am(&mut self, ctx: &mut NightContext) {
        let (rng, roster) = ctx.split();
        let strummer = roster.difficulty(ActorId::Strummer) + rng.random_range(-2..2);
        roster.set_difficulty(ActorId::Strummer, strummer);
        let songbird = roster.difficulty(ActorId::Songbird) + rng.random_range(-2..2);
        roster.set_difficulty(ActorId::Songbird, songbird);

        ctx.roster_mut().set_start_delay(ActorId::Showman, 18.0);
        ctx.roster_mut().set_start_delay(ActorId::Tangle, 16.0);
        ctx.roster_mut().set_start_delay(ActorId::Drifter, 20.0);
        ctx.roster_mut().set_start_delay(ActorId::Prowler, 15.0);
    }

    fn at_5am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty_all(5);
        ctx.roster_mut().set_start_delay(ActorId::Marionette, 8.0);
        ctx.roster_mut().set_start_delay(ActorId::Showman, 15.0);
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 20);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 10);
    }
}

impl Default for Night6 {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for Night6 {
    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        match hour {
            12 => self.at_midnight(ctx),
            3 => self.at_3am(ctx),
            5 => self.at_5am(ctx),
            _ => {}
        }
    }
}

impl Night for Night6 {
    fn night(&self) -> u32 {
        6
    }

    fn init_night(&mut self, ctx: &mut NightContext) {
        ctx.set_call_note(SUMMARY_NOTE);
    }
}
