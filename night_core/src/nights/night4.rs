use rand::Rng;

use crate::actors::ActorId;
use crate::context::NightContext;
use crate::events::{Night, TimeEvent};
use crate::nights::SUMMARY_NOTE;

/// Fourth night: everyone starts staged deep in the building and the
/// opening minute pre-positions the withered cast.
pub struct Night4;

impl Night4 {
    pub fn new() -> Self {
        Night4
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_start_delay_all(0.0);
        ctx.roster_mut().set_start_delay(ActorId::Strummer, 30.0);
        ctx.roster_mut().set_start_delay(ActorId::Songbird, 30.0);
        ctx.roster_mut().set_start_delay(ActorId::Tangle, 30.0);
        ctx.roster_mut().set_start_delay(ActorId::OldShowman, 30.0);
        ctx.roster_mut().set_start_delay(ActorId::OldStrummer, 30.0);
        ctx.roster_mut().set_start_delay(ActorId::OldSongbird, 30.0);
        ctx.roster_mut().set_start_delay(ActorId::Prowler, 15.0);

        ctx.roster_mut().set_difficulty_all(0);
        ctx.roster_mut().set_difficulty(ActorId::Showman, 4);
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 6);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 6);
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 10);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 5);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 8);

        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 2);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 8);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 8);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 3);

        ctx.delay(3.0, |ctx| {
            if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::OldShowman) {
                patrol.move_to(1);
            }
            if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::OldStrummer) {
                patrol.move_to(2);
            }
            if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::OldSongbird) {
                patrol.move_to(4);
            }

            ctx.pick_random(&[
                |ctx: &mut NightContext| ctx.roster_mut().try_advance(ActorId::OldStrummer, false),
                |ctx: &mut NightContext| ctx.roster_mut().try_advance(ActorId::OldSongbird, false),
                |ctx: &mut NightContext| {
                    ctx.roster_mut().set_difficulty(ActorId::Showman, 3);
                    if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::OldSongbird) {
                        patrol.move_to(2);
                    }
                    let (rng, roster) = ctx.split();
                    let crawl = rng.random_range(110..310) as f32 / 10.0;
                    if let Some(vent) = roster.vent_mut(ActorId::Drifter) {
                        vent.rush(crawl);
                        vent.set_start_delay(0.0);
                    }
                    ctx.delay(4.0, |ctx| {
                        if let Some(runner) = ctx.roster_mut().runner_mut(ActorId::Prowler) {
                            runner.set_running(true);
                        }
                    });
                },
            ]);
        });
        ctx.delay(15.0, |ctx| {
            if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::Tangle) {
                patrol.move_to(4);
            }
        });
        ctx.delay(30.0, |ctx| {
            if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::Strummer) {
                patrol.move_to(3);
            }
            if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::Songbird) {
                patrol.move_to(3);
            }
        });
    }

    fn at_1am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 8);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 8);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 6);

        ctx.roster_mut().try_advance(ActorId::Showman, false);

        let (rng, roster) = ctx.split();
        let linger = rng.random_range(20.0..100.0);
        if let Some(patrol) = roster.patrol_mut(ActorId::Songbird) {
            patrol.bump_active_timer(linger);
        }
    }

    fn at_2am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 4);
        ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 8);
        ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 8);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 4);

        ctx.roster_mut().try_advance(ActorId::Strummer, false);
        ctx.roster_mut().try_advance(ActorId::OldSongbird, false);
    }

    fn at_3am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 12);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 3);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 6);

        ctx.roster_mut().try_advance(ActorId::OldShowman, false);
        ctx.roster_mut().try_advance(ActorId::Drifter, false);
    }

    fn at_4am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Showman, 7);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 3);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 7);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 6);

        ctx.pick_random(&[
            |ctx: &mut NightContext| ctx.roster_mut().set_difficulty(ActorId::Strummer, 10),
            |ctx: &mut NightContext| ctx.roster_mut().set_difficulty(ActorId::Songbird, 10),
        ]);
        ctx.pick_random(&[
            |ctx: &mut NightContext| ctx.roster_mut().set_difficulty(ActorId::OldStrummer, 10),
            |ctx: &mut NightContext| ctx.roster_mut().set_difficulty(ActorId::OldSongbird, 10),
        ]);

        ctx.roster_mut().try_advance(ActorId::Drifter, false);
    }

    fn at_5am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Showman, 4);
        ctx.roster_mut().set_difficulty(ActorId::Drifter, 0);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 6);
        ctx.roster_mut().set_difficulty(ActorId::OldShowman, 6);
        ctx.roster_mut().set_difficulty(ActorId::Prowler, 0);

        if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::Tangle) {
            if matches!(patrol.position_index(), Some(index) if index < 5) {
                patrol.move_to(5);
            }
            patrol.try_advance(false);
        }

        ctx.delay(15.0, |ctx| {
            ctx.pick_random(&[
                |ctx: &mut NightContext| ctx.roster_mut().try_advance(ActorId::Strummer, false),
                |ctx: &mut NightContext| ctx.roster_mut().try_advance(ActorId::OldStrummer, false),
            ]);
            ctx.pick_random(&[
                |ctx: &mut NightContext| ctx.roster_mut().try_advance(ActorId::Songbird, false),
                |ctx: &mut NightContext| ctx.roster_mut().try_advance(ActorId::OldSongbird, false),
            ]);
        });
    }
}

impl Default for Night4 {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for Night4 {
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

impl Night for Night4 {
    fn night(&self) -> u32 {
        4
    }

    fn init_night(&mut self, ctx: &mut NightContext) {
        ctx.set_call_note(SUMMARY_NOTE);
    }
}
