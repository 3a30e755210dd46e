use crate::actors::ActorId;
use crate::completion::ChallengeFlags;
use crate::context::NightContext;
use crate::events::{Challenge, TimeEvent};

/// Challenge 1: the new line at full tilt, with the vent crawler parked
/// in the office from the first minute.
pub struct EncoreChallenge;

impl EncoreChallenge {
    pub fn new() -> Self {
        EncoreChallenge
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        ctx.set_start_delay_all_random(0.0, 10.0);
        ctx.roster_mut().set_start_delay(ActorId::Marionette, 0.0);

        ctx.roster_mut().set_difficulty_all(0);
        ctx.roster_mut().set_difficulty(ActorId::Showman, 20);
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 35);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 35);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 12);
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 50);

        if let Some(vent) = ctx.roster_mut().vent_mut(ActorId::Drifter) {
            vent.force_office();
        }
    }
}

impl Default for EncoreChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for EncoreChallenge {
    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        if hour == 12 {
            self.at_midnight(ctx);
        }
    }

    fn on_win(&mut self, ctx: &mut NightContext) {
        ctx.completion_mut().set_challenge(ChallengeFlags::ENCORE);
    }
}

impl Challenge for EncoreChallenge {
    fn challenge_id(&self) -> u32 {
        1
    }

    fn init_challenge(&mut self, ctx: &mut NightContext) {
        ctx.set_call_note("The new line is running hot tonight. Keep your eyes on the stage.");
    }

    fn completed(&self, ctx: &NightContext) -> bool {
        ctx.completion().has_challenge(ChallengeFlags::ENCORE)
    }
}
