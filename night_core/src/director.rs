//! The night director: owns the virtual clock, the selected scripted
//! event, and the edge detection that turns ticks into hour and
//! half-hour callbacks.

use crate::clock::NightClock;
use crate::completion::{night_flag, FINAL_NIGHT};
use crate::context::NightContext;
use crate::events::{Challenge, Night, TimeEvent};
use crate::registry::TimeEventRegistry;

/// What the director is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NightMode {
    Night(u32),
    Challenge(u32),
}

enum ActiveEvent {
    Night(Box<dyn Night>),
    Challenge(Box<dyn Challenge>),
}

impl ActiveEvent {
    fn as_time_event_mut(&mut self) -> &mut dyn TimeEvent {
        match self {
            ActiveEvent::Night(event) => event.as_mut(),
            ActiveEvent::Challenge(event) => event.as_mut(),
        }
    }

    fn hours(&self) -> u32 {
        match self {
            ActiveEvent::Night(event) => event.hours(),
            ActiveEvent::Challenge(event) => event.hours(),
        }
    }
}

pub struct Director {
    clock: NightClock,
    mode: Option<NightMode>,
    current: Option<ActiveEvent>,
    last_hour: Option<u32>,
    past_half: bool,
    won: bool,
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

impl Director {
    pub fn new() -> Self {
        Self::with_clock(NightClock::new())
    }

    pub fn with_clock(clock: NightClock) -> Self {
        Director {
            clock,
            mode: None,
            current: None,
            last_hour: None,
            past_half: false,
            won: false,
        }
    }

    pub fn clock(&self) -> &NightClock {
        &self.clock
    }

    pub fn mode(&self) -> Option<NightMode> {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_hours(&self) -> Option<u32> {
        self.current.as_ref().map(|event| event.hours())
    }

    /// Selects and initialises campaign night `night`. An unknown
    /// number leaves the director idle.
    pub fn select_night(
        &mut self,
        registry: &TimeEventRegistry,
        ctx: &mut NightContext,
        night: u32,
    ) {
        self.reset_run_state();
        match registry.find_night(night) {
            Some(mut event) => {
                event.init_night(ctx);
                ctx.log(format!("director: night {night} begins"));
                self.mode = Some(NightMode::Night(night));
                self.current = Some(ActiveEvent::Night(event));
            }
            None => {
                log::warn!("no night registered under {night}");
                self.mode = None;
                self.current = None;
            }
        }
    }

    /// Selects and initialises the challenge registered under `id`.
    pub fn select_challenge(
        &mut self,
        registry: &TimeEventRegistry,
        ctx: &mut NightContext,
        id: u32,
    ) {
        self.reset_run_state();
        match registry.find_challenge(id) {
            Some(mut event) => {
                event.init_challenge(ctx);
                ctx.log(format!("director: challenge {id} begins"));
                self.mode = Some(NightMode::Challenge(id));
                self.current = Some(ActiveEvent::Challenge(event));
            }
            None => {
                log::warn!("no challenge registered under {id}");
                self.mode = None;
                self.current = None;
            }
        }
    }

    fn reset_run_state(&mut self) {
        self.clock.reset();
        self.last_hour = None;
        self.past_half = false;
        self.won = false;
    }

    /// Drops the current event and lowers the surge flag. Pending
    /// delayed actions stay queued and fire on their own schedule.
    pub fn clear(&mut self, ctx: &mut NightContext) {
        self.mode = None;
        self.current = None;
        self.last_hour = None;
        self.past_half = false;
        self.won = false;
        ctx.clear_power_surge();
    }

    /// Advances one frame: the context and clock move by `dt` real
    /// seconds, hour and half-hour edges dispatch to the event, then
    /// due delayed actions run. Idle directors ignore ticks.
    pub fn tick(&mut self, ctx: &mut NightContext, dt: f32) {
        if self.current.is_none() {
            return;
        }
        ctx.advance(dt);
        self.clock.advance(dt);

        let hour = self.clock.hour_label();
        let hour_changed = self.last_hour != Some(hour);
        let half = self.clock.past_half_hour();

        if let Some(event) = self.current.as_mut() {
            if hour_changed {
                self.last_hour = Some(hour);
                event.as_time_event_mut().on_hour(ctx, hour);
            }
            if half {
                if !self.past_half {
                    self.past_half = true;
                    event.as_time_event_mut().on_half_hour(ctx, hour);
                }
            } else {
                self.past_half = false;
            }
        }

        ctx.flush_due();
    }

    /// Whether the clock has reached the event's win time.
    pub fn night_over(&self) -> bool {
        match &self.current {
            Some(event) => self.clock.minutes() >= event.hours() as f32 * 60.0,
            None => false,
        }
    }

    /// Fires the win hook once. Campaign nights short of the final one
    /// also record their completion flag and advance the campaign.
    pub fn on_win(&mut self, ctx: &mut NightContext) {
        if self.won {
            return;
        }
        let Some(event) = self.current.as_mut() else {
            return;
        };
        self.won = true;
        match event {
            ActiveEvent::Night(night) => {
                night.on_win(ctx);
                let number = night.night();
                ctx.log(format!("director: night {number} won"));
                if number < FINAL_NIGHT {
                    if let Some(flag) = night_flag(number) {
                        ctx.completion_mut().set_night(flag);
                    }
                    ctx.completion_mut().set_next_night(number + 1);
                }
            }
            ActiveEvent::Challenge(challenge) => {
                challenge.on_win(ctx);
                let id = challenge.challenge_id();
                ctx.log(format!("director: challenge {id} won"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::NightClock;
    use crate::completion::NightFlags;

    struct ProbeNight;

    impl TimeEvent for ProbeNight {
        fn on_hour(&mut self, ctx: &mut NightContext, hour: u32) {
            ctx.log(format!("hour {hour}"));
        }

        fn on_half_hour(&mut self, ctx: &mut NightContext, hour: u32) {
            ctx.log(format!("half {hour}"));
        }

        fn on_win(&mut self, ctx: &mut NightContext) {
            ctx.log("win hook");
        }
    }

    impl Night for ProbeNight {
        fn night(&self) -> u32 {
            3
        }

        fn init_night(&mut self, ctx: &mut NightContext) {
            ctx.log("init");
        }
    }

    fn probe_registry() -> TimeEventRegistry {
        let mut registry = TimeEventRegistry::empty();
        registry.register_night(3, || Box::new(ProbeNight));
        registry
    }

    fn minute_director() -> Director {
        // One in-game minute per real second keeps the arithmetic flat.
        Director::with_clock(NightClock::with_rate(1.0))
    }

    #[test]
    fn hour_and_half_hour_edges_fire_once_each() {
        let registry = probe_registry();
        let mut ctx = NightContext::new(0);
        let mut director = minute_director();
        director.select_night(&registry, &mut ctx, 3);

        // 10-second frames across the first two hours.
        for _ in 0..12 {
            director.tick(&mut ctx, 10.0);
        }

        let marks: Vec<&str> = ctx
            .events()
            .iter()
            .filter(|line| line.starts_with("hour") || line.starts_with("half"))
            .map(String::as_str)
            .collect();
        assert_eq!(marks, ["hour 12", "half 12", "hour 1", "half 1", "hour 2"]);
    }

    #[test]
    fn idle_director_ignores_ticks() {
        let mut ctx = NightContext::new(0);
        let mut director = minute_director();
        director.tick(&mut ctx, 100.0);
        assert_eq!(ctx.elapsed(), 0.0);
        assert!(!director.night_over());
    }

    #[test]
    fn unknown_night_leaves_the_director_idle() {
        let registry = probe_registry();
        let mut ctx = NightContext::new(0);
        let mut director = minute_director();
        director.select_night(&registry, &mut ctx, 5);
        assert!(!director.is_active());
        assert_eq!(director.mode(), None);
    }

    #[test]
    fn win_records_the_flag_and_advances_the_campaign() {
        let registry = probe_registry();
        let mut ctx = NightContext::new(0);
        let mut director = minute_director();
        director.select_night(&registry, &mut ctx, 3);

        while !director.night_over() {
            director.tick(&mut ctx, 30.0);
        }
        director.on_win(&mut ctx);
        director.on_win(&mut ctx);

        assert!(ctx.completion().has_night(NightFlags::NIGHT_3));
        assert_eq!(ctx.completion().next_night(), 4);
        let wins = ctx.events().iter().filter(|line| *line == "win hook").count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn clear_lowers_the_surge_flag_but_keeps_pending_actions() {
        let registry = probe_registry();
        let mut ctx = NightContext::new(0);
        let mut director = minute_director();
        director.select_night(&registry, &mut ctx, 3);

        ctx.power_surge();
        ctx.delay(1.0, |ctx| ctx.log("straggler"));
        director.clear(&mut ctx);

        assert!(!ctx.in_power_surge());
        assert!(!director.is_active());
        assert!(ctx.pending_len() > 0);

        ctx.advance(2.0);
        ctx.flush_due();
        assert!(ctx.events().iter().any(|line| line == "straggler"));
    }
}
