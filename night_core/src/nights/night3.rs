use crate::actors::ActorId;
use crate::context::NightContext;
use crate::events::{Night, TimeEvent};
use crate::nights::SUMMARY_NOTE;

/// Third night: both casts share the floor.
pub struct Night3;

impl Night3 {
    pub fn new() -> Self {
        Night3
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        ctx.set_start_delay_all_random(5.0, 8.0);
        ctx.roster_mut().set_start_delay(ActorId::Showman, 15.0);
        ctx.roster_mut().set_start_delay(ActorId::Songbird, 0.0);
        ctx.roster_mut().set_start_delay(ActorId::Tangle, 20.0);
        ctx.roster_mut().set_start_delay(ActorId::Marionette, 0.0);
        ctx.roster_mut().set_start_delay(ActorId::OldStrummer, 0.0);

        ctx.roster_mut().set_difficulty_all(0);
        ctx.roster_mut().set_difficulty(ActorId::Showman, 2);
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 4);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 4);
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 25);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 7);

        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 2);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 4);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 4);

        ctx.delay(3.0, |ctx| {
            ctx.pick_random(&[
                |ctx: &mut NightContext| {
                    if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::OldStrummer) {
                        patrol.move_to(2);
                    }
                },
                |ctx: &mut NightContext| {
                    if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::OldSongbird) {
                        patrol.move_to(4);
                    }
                },
            ]);
        });
    }

    fn at_1am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Showman, 3);
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 5);
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 5);
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 3);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 5);
    }

    fn at_2am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Showman, 0);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 3);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 3);
    }

    fn at_3am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Showman, 6);
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 3);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 6);
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 3);
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 5);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 3);
    }

    fn at_4am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 5);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 5);

        ctx.roster_mut().try_advance(ActorId::Songbird, false);
        ctx.roster_mut().try_advance(ActorId::OldStrummer, false);
    }

    fn at_5am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Showman, 0);
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 8);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 6);
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 0);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 0);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 8);

        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 4);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 8);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 0);

        ctx.roster_mut().try_advance(ActorId::OldShowman, false);
    }
}

impl Default for Night3 {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for Night3 {
    fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
        match hour {
            12 => self.at_midnight(ctx),
            1 => self.at_1am(ctx),
            2 => self.at_2am(ctx),
            3 => self.at_3am(ctx),
            4 => self.at_4am(ctx),
            5 => self.at_5am(ctx),
            _ => {}
        }
    }
}

impl Night for Night3 {
    fn night(&self) -> u32 {
        3
    }

    fn init_night(&mut self, ctx: &mut NightContext) {
        ctx.set_call_note(SUMMARY_NOTE);
    }
}
