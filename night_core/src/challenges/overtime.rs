use rand::Rng;

use crate::actors::ActorId;
use crate::completion::ChallengeFlags;
use crate::context::NightContext;
use crate::events::{Challenge, TimeEvent};
use crate::nights::SUMMARY_NOTE;

const OVERTIME_HOURS: u32 = 9;

/// Challenge 4: a nine-hour shift. Four new/old actor pairs swap who is
/// on the floor every hour while a shared multiplier climbs, dips once
/// at seven, then spikes for the last stretch.
pub struct OvertimeChallenge {
    multiplier: i32,
    shifts: [bool; 4],
}

impl OvertimeChallenge {
    pub fn new() -> Self {
        OvertimeChallenge {
            multiplier: 0,
            shifts: [false; 4],
        }
    }

    fn roll(multiplier: i32, rng: &mut rand::rngs::SmallRng, cap: i32) -> i32 {
        (multiplier + rng.random_range(2..4)).clamp(0, cap)
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        ctx.set_start_delay_all_random(5.0, 60.0);
        ctx.roster_mut().set_start_delay(ActorId::Marionette, 0.0);

        ctx.roster_mut().set_difficulty_all(0);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 10);

        self.shift(ctx);
    }

    /// Flips every pair and hands the floor to whichever side is now on
    /// shift; the benched side idles at difficulty 1.
    fn shift(&mut self, ctx: &mut NightContext) {
        for slot in self.shifts.iter_mut() {
            *slot = !*slot;
        }
        self.multiplier += 2;

        let multiplier = self.multiplier;
        let shifts = self.shifts;
        let (rng, roster) = ctx.split();

        let pairs = [
            (ActorId::Showman, ActorId::OldShowman, 15, 15),
            (ActorId::Strummer, ActorId::OldStrummer, 18, 18),
            (ActorId::Songbird, ActorId::OldSongbird, 18, 18),
            (ActorId::Tangle, ActorId::Prowler, 20, 12),
        ];
        for (index, (new, old, new_cap, old_cap)) in pairs.into_iter().enumerate() {
            if shifts[index] {
                let value = Self::roll(multiplier, rng, new_cap);
                roster.set_difficulty(new, value);
                roster.set_difficulty(old, 1);
            } else {
                let value = Self::roll(multiplier, rng, old_cap);
                roster.set_difficulty(new, 1);
                roster.set_difficulty(old, value);
            }
        }

        let drifter = Self::roll(multiplier, rng, 15);
        roster.set_difficulty(ActorId::Drifter, drifter);
    }

    /// Rerolls everyone from the multiplier, ignoring the shift split.
    fn set_all(&mut self, ctx: &mut NightContext) {
        let multiplier = self.multiplier;
        let (rng, roster) = ctx.split();
        let caps = [
            (ActorId::Showman, 15),
            (ActorId::Strummer, 18),
            (ActorId::Songbird, 18),
            (ActorId::Tangle, 20),
            (ActorId::Drifter, 15),
            (ActorId::OldShowman, 15),
            (ActorId::OldStrummer, 18),
            (ActorId::OldSongbird, 18),
            (ActorId::Prowler, 12),
        ];
        for (id, cap) in caps {
            let value = Self::roll(multiplier, rng, cap);
            roster.set_difficulty(id, value);
        }
    }
}

impl Default for OvertimeChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for OvertimeChallenge {
    fn hours(&self) -> u32 {
        OVERTIME_HOURS
    }

    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        match hour {
            12 => self.at_midnight(ctx),
            1..=6 => self.shift(ctx),
            7 => {
                self.multiplier -= 1;
                self.set_all(ctx);
            }
            8 => {
                self.multiplier += 3;
                self.set_all(ctx);
            }
            _ => {}
        }
    }

    fn on_win(&mut self, ctx: &mut NightContext) {
        ctx.completion_mut().set_challenge(ChallengeFlags::OVERTIME);
    }
}

impl Challenge for OvertimeChallenge {
    fn challenge_id(&self) -> u32 {
        4
    }

    fn init_challenge(&mut self, ctx: &mut NightContext) {
        ctx.set_call_note(format!(
            "Management needs you to stay late tonight.\n\n{SUMMARY_NOTE}"
        ));

        self.multiplier = 0;
        for slot in self.shifts.iter_mut() {
            *slot = ctx.rng_mut().random_bool(0.5);
        }
    }

    fn completed(&self, ctx: &NightContext) -> bool {
        ctx.completion().has_challenge(ChallengeFlags::OVERTIME)
    }
}
