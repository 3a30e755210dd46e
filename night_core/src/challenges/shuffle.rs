use crate::actors::ActorId;
use crate::completion::ChallengeFlags;
use crate::context::{NightContext, SURGE_OUT_SECONDS};
use crate::events::{Challenge, TimeEvent};

/// Challenge 3: every hour the whole roster rerolls under a blackout.
pub struct ShuffleChallenge;

impl ShuffleChallenge {
    pub fn new() -> Self {
        ShuffleChallenge
    }

    fn reroll(&mut self, ctx: &mut NightContext) {
        ctx.set_difficulty_all_random(1, 20);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 10);

        ctx.power_surge_end(SURGE_OUT_SECONDS);
    }
}

impl Default for ShuffleChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for ShuffleChallenge {
    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        match hour {
            12 => {
                ctx.set_start_delay_all_random(0.0, 30.0);
                ctx.roster_mut().set_start_delay(ActorId::Marionette, 0.0);
                self.reroll(ctx);
            }
            1..=5 => self.reroll(ctx),
            _ => {}
        }
    }

    fn on_win(&mut self, ctx: &mut NightContext) {
        ctx.completion_mut().set_challenge(ChallengeFlags::SHUFFLE);
    }
}

impl Challenge for ShuffleChallenge {
    fn challenge_id(&self) -> u32 {
        3
    }

    fn init_challenge(&mut self, ctx: &mut NightContext) {
        ctx.set_call_note("Nothing is where it should be tonight. Trust the cameras, not the schedule.");
    }

    fn completed(&self, ctx: &NightContext) -> bool {
        ctx.completion().has_challenge(ChallengeFlags::SHUFFLE)
    }
}
