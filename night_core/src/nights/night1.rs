use crate::actors::ActorId;
use crate::context::NightContext;
use crate::events::{Night, TimeEvent};

/// Opening night: the new line only, eased in with a long phone note.
pub struct Night1 {
    note: String,
}

impl Night1 {
    pub fn new() -> Self {
        Night1 {
            note: String::new(),
        }
    }

    fn push_note(&mut self, ctx: &mut NightContext, text: &str) {
        self.note.push_str(text);
        self.note.push(' ');
        ctx.set_call_note(self.note.clone());
    }

    fn at_midnight(&mut self, ctx: &mut NightContext) {
        self.push_note(ctx, "Welcome aboard. Keep the stage lit and check the back rooms.");
        self.note
            .push_str("If something leaves the stage, find it on the cameras first. ");
        ctx.set_call_note_delayed(30.0, self.note.clone());

        ctx.roster_mut().set_start_delay_all(2.5);
        ctx.roster_mut().set_start_delay(ActorId::Showman, 30.0);
        ctx.roster_mut().set_start_delay(ActorId::Strummer, 5.0);
        ctx.roster_mut().set_start_delay(ActorId::Songbird, 10.0);
        ctx.roster_mut().set_start_delay(ActorId::Tangle, 2.0);
        ctx.roster_mut().set_start_delay(ActorId::Marionette, 0.0);

        ctx.roster_mut().set_difficulty_all(0);
        ctx.roster_mut().set_difficulty(ActorId::Showman, 3);
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 6);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 4);
        ctx.roster_mut().set_difficulty(ActorId::Tangle, 10);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 4);

        ctx.delay(3.0, |ctx| {
            if let Some(patrol) = ctx.roster_mut().patrol_mut(ActorId::Tangle) {
                patrol.move_to_office();
            }
        });
    }

    fn at_1am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 5);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 5);
    }

    fn at_2am(&mut self, ctx: &mut NightContext) {
        self.push_note(ctx, "They get restless after two. Keep winding the box.");

        ctx.roster_mut().set_difficulty(ActorId::Tangle, 5);
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 7);
    }

    fn at_3am(&mut self, ctx: &mut NightContext) {
        self.push_note(ctx, "If the hall light catches eyes, get the mask on.");

        ctx.roster_mut().set_difficulty(ActorId::Strummer, 3);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 8);
        ctx.roster_mut().set_difficulty(ActorId::Showman, 5);
        ctx.roster_mut().set_difficulty(ActorId::Marionette, 6);

        ctx.roster_mut().try_advance(ActorId::Showman, false);
        ctx.roster_mut().try_advance(ActorId::Songbird, false);
    }

    fn at_4am(&mut self, ctx: &mut NightContext) {
        self.push_note(ctx, "Almost morning. Stay sharp.");

        ctx.roster_mut().set_difficulty(ActorId::Tangle, 12);
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 4);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 7);
        ctx.roster_mut().set_difficulty(ActorId::Showman, 3);
    }

    fn at_5am(&mut self, ctx: &mut NightContext) {
        ctx.roster_mut().set_difficulty(ActorId::Strummer, 6);
        ctx.roster_mut().set_difficulty(ActorId::Songbird, 6);

        ctx.roster_mut().try_advance(ActorId::Showman, false);
    }
}

impl Default for Night1 {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEvent for Night1 {
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

impl Night for Night1 {
    fn night(&self) -> u32 {
        1
    }

    fn init_night(&mut self, _ctx: &mut NightContext) {
        self.note.clear();
    }
}
