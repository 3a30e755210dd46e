use crate::actors::ActorId;
use crate::completion::ChallengeFlags;
use crate::context::{NightContext, SURGE_OUT_SECONDS};
use crate::events::{Challenge, TimeEvent};

/// Challenge 2: the withered cast under failing power. Every hour the
/// blackout tail replays, and every half hour the breaker rows lose
/// switches while the old pair digs in where it stands.
pub struct BlackoutChallenge;

impl BlackoutChallenge {
    pub fn new() -> Self {
        BlackoutChallenge
    }

    fn in_outage_window(hour: u32) -> bool {
        !(6..12).contains(&hour)
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        ctx.set_start_delay_all_random(0.0, 10.0);
        ctx.roster_mut().set_start_delay(ActorId::Marionette, 0.0);

        ctx.roster_mut().set_difficulty_all(0);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 4);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 8);
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 4);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 6);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 8);
    }

    fn at_1am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 6);
        ctx.pick_random(&[
            |ctx: &mut NightContext| {
                ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 8);
                ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 4);
            },
            |ctx: &mut NightContext| {
                ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 4);
                ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 8);
            },
        ]);
    }

    fn at_2am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 2);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 7);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 7);
    }

    fn at_3am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 4);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 4);
    }

    fn at_5am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 6);
    }
}

impl Default for BlackoutChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for BlackoutChallenge {
    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        match hour {
            12 => self.at_midnight(ctx),
            1 => self.at_1am(ctx),
            2 => self.at_2am(ctx),
            3 => self.at_3am(ctx),
            5 => self.at_5am(ctx),
            _ => {}
        }

        if Self::in_outage_window(hour) {
            ctx.power_surge_end(SURGE_OUT_SECONDS);
        }
    }

    fn on_half_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        if !Self::in_outage_window(hour) {
            return;
        }

        let (rng, roster) = ctx.split();
        if let Some(breaker) = roster.breaker_mut(ActorId::Showman) {
            breaker.sabotage_switches(rng);
        }

        if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::OldStrummer) {
            patrol.bump_active_timer(10.0);
        }
        if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::OldSongbird) {
            patrol.bump_active_timer(10.0);
        }
    }

    fn on_win(&mut self, ctx: &mut NightContext) {
        ctx.completion_mut().set_challenge(ChallengeFlags::BLACKOUT);
    }
}

impl Challenge for BlackoutChallenge {
    fn challenge_id(&self) -> u32 {
        2
    }

    fn init_challenge(&mut self, ctx: &mut NightContext) {
        ctx.set_call_note("The breakers keep tripping tonight. Watch the panels.");
    }

    fn completed(&self, ctx: &NightContext) -> bool {
        ctx.completion().has_challenge(ChallengeFlags::BLACKOUT)
    }
}
