//! The mutable world handed to every scripted event hook.
//!
//! Owns the actor roster, completion state, custom-night sheet, the
//! run's RNG, the delayed-action queue and the power-surge flag, plus a
//! human-readable event log the host can persist after the run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::actors::ActorId;
use crate::completion::CompletionTracker;
use crate::custom_night::CustomNightConfig;
use crate::roster::ActorRoster;

/// Number of light stages chained during a power surge.
pub const SURGE_STAGES: u32 = 6;
/// Spacing between chained surge stages, in seconds.
pub const SURGE_STAGE_SPACING: f32 = 0.1;
/// Seconds of full surge before the blackout tail begins.
pub const SURGE_SECONDS: f32 = 8.0;
/// Default length of the blackout tail.
pub const SURGE_OUT_SECONDS: f32 = 4.0;

type DelayedFn = Box<dyn FnOnce(&mut NightContext)>;

struct DelayedAction {
    deadline: f32,
    seq: u64,
    action: DelayedFn,
}

pub struct NightContext {
    roster: ActorRoster,
    completion: CompletionTracker,
    custom_night: CustomNightConfig,
    rng: SmallRng,
    elapsed: f32,
    pending: Vec<DelayedAction>,
    next_seq: u64,
    in_power_surge: bool,
    call_note: Option<String>,
    events: Vec<String>,
}

impl NightContext {
    pub fn new(seed: u64) -> Self {
        NightContext {
            roster: ActorRoster::new(),
            completion: CompletionTracker::new(),
            custom_night: CustomNightConfig::new(),
            rng: SmallRng::seed_from_u64(seed),
            elapsed: 0.0,
            pending: Vec::new(),
            next_seq: 0,
            in_power_surge: false,
            call_note: None,
            events: Vec::new(),
        }
    }

    /// Context pre-populated with the standard ten-actor cast.
    pub fn with_standard_cast(seed: u64) -> Self {
        let mut ctx = NightContext::new(seed);
        ctx.roster = ActorRoster::standard_cast(seed.wrapping_add(1));
        ctx
    }

    pub fn roster(&self) -> &ActorRoster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut ActorRoster {
        &mut self.roster
    }

    pub fn completion(&self) -> &CompletionTracker {
        &self.completion
    }

    pub fn completion_mut(&mut self) -> &mut CompletionTracker {
        &mut self.completion
    }

    pub fn custom_night(&self) -> &CustomNightConfig {
        &self.custom_night
    }

    pub fn custom_night_mut(&mut self) -> &mut CustomNightConfig {
        &mut self.custom_night
    }

    pub fn rng_mut(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// RNG and roster borrowed together, for draws that feed straight
    /// into roster mutations.
    pub fn split(&mut self) -> (&mut SmallRng, &mut ActorRoster) {
        (&mut self.rng, &mut self.roster)
    }

    /// Real seconds since the context was created.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed += dt;
        }
    }

    pub fn in_power_surge(&self) -> bool {
        self.in_power_surge
    }

    pub(crate) fn clear_power_surge(&mut self) {
        self.in_power_surge = false;
    }

    pub fn call_note(&self) -> Option<&str> {
        self.call_note.as_deref()
    }

    pub fn set_call_note(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.log(format!("note: {text}"));
        self.call_note = Some(text);
    }

    /// Queues a call note to land after `seconds`.
    pub fn set_call_note_delayed(&mut self, seconds: f32, text: impl Into<String>) {
        let text = text.into();
        self.delay(seconds, move |ctx| ctx.set_call_note(text));
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn log(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::debug!("{line}");
        self.events.push(line);
    }

    /// Schedules `action` to run once `seconds` from now. Actions are
    /// never retracted; an early end to the shift still lets them fire.
    pub fn delay(&mut self, seconds: f32, action: impl FnOnce(&mut NightContext) + 'static) {
        let deadline = self.elapsed + seconds.max(0.0);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(DelayedAction {
            deadline,
            seq,
            action: Box::new(action),
        });
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Runs every delayed action whose deadline has passed, earliest
    /// deadline first, queue order breaking ties. Actions scheduled
    /// while flushing join the queue like any other.
    pub fn flush_due(&mut self) {
        loop {
            let mut due: Option<usize> = None;
            for (index, entry) in self.pending.iter().enumerate() {
                if entry.deadline > self.elapsed {
                    continue;
                }
                due = match due {
                    Some(best) => {
                        let b = &self.pending[best];
                        if entry.deadline < b.deadline
                            || (entry.deadline == b.deadline && entry.seq < b.seq)
                        {
                            Some(index)
                        } else {
                            Some(best)
                        }
                    }
                    None => Some(index),
                };
            }
            let Some(index) = due else { break };
            let entry = self.pending.swap_remove(index);
            (entry.action)(self);
        }
    }

    /// Runs one action drawn uniformly from `actions`.
    pub fn pick_random(&mut self, actions: &[fn(&mut NightContext)]) {
        if actions.is_empty() {
            return;
        }
        let index = self.rng.random_range(0..actions.len());
        actions[index](self);
    }

    /// Rolls an independent difficulty in `[min, max]` for every slot.
    pub fn set_difficulty_all_random(&mut self, min: i32, max: i32) {
        for id in ActorId::ALL {
            let value = self.rng.random_range(min..=max);
            self.roster.set_difficulty(id, value);
        }
    }

    /// Rolls an independent start delay in `[min, max)` for every slot.
    pub fn set_start_delay_all_random(&mut self, min: f32, max: f32) {
        for id in ActorId::ALL {
            let value = self.rng.random_range(min..max);
            self.roster.set_start_delay(id, value);
        }
    }

    /// Kicks off a power surge: the flag raises immediately, six light
    /// stages chain at 0.1 s spacing, and after eight seconds the
    /// blackout tail takes over.
    pub fn power_surge(&mut self) {
        self.in_power_surge = true;
        self.log("surge: begin");
        self.delay(SURGE_STAGE_SPACING, |ctx| surge_stage(ctx, 1));
        self.delay(SURGE_SECONDS, |ctx| ctx.power_surge_end(SURGE_OUT_SECONDS));
    }

    /// The blackout tail on its own: the surge flag asserts (or stays
    /// up) and clears once `delay` seconds pass.
    pub fn power_surge_end(&mut self, delay: f32) {
        self.in_power_surge = true;
        self.log("surge: blackout");
        self.delay(delay, |ctx| {
            ctx.log("surge: restored");
            ctx.in_power_surge = false;
        });
    }
}

fn surge_stage(ctx: &mut NightContext, stage: u32) {
    ctx.log(format!("surge: stage {stage}"));
    if stage < SURGE_STAGES {
        ctx.delay(SURGE_STAGE_SPACING, move |ctx| surge_stage(ctx, stage + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delayed_actions_fire_in_deadline_then_queue_order() {
        let mut ctx = NightContext::new(1);
        ctx.delay(2.0, |ctx| ctx.log("late"));
        ctx.delay(1.0, |ctx| ctx.log("early a"));
        ctx.delay(1.0, |ctx| ctx.log("early b"));

        ctx.advance(0.5);
        ctx.flush_due();
        assert!(ctx.events().is_empty());

        ctx.advance(2.0);
        ctx.flush_due();
        assert_eq!(ctx.events(), ["early a", "early b", "late"]);
        assert_eq!(ctx.pending_len(), 0);
    }

    #[test]
    fn actions_scheduled_during_a_flush_wait_for_their_deadline() {
        let mut ctx = NightContext::new(1);
        ctx.delay(1.0, |ctx| {
            ctx.log("first");
            ctx.delay(1.0, |ctx| ctx.log("second"));
        });
        ctx.advance(1.5);
        ctx.flush_due();
        assert_eq!(ctx.events(), ["first"]);
        ctx.advance(1.0);
        ctx.flush_due();
        assert_eq!(ctx.events(), ["first", "second"]);
    }

    #[test]
    fn power_surge_runs_six_stages_then_blacks_out_and_restores() {
        let mut ctx = NightContext::new(1);
        ctx.power_surge();
        assert!(ctx.in_power_surge());

        // Each stage schedules the next from its own callback, so time
        // has to move in small steps for the chain to play out.
        for _ in 0..10 {
            ctx.advance(0.1);
            ctx.flush_due();
        }
        let stages: Vec<&str> = ctx
            .events()
            .iter()
            .filter(|line| line.starts_with("surge: stage"))
            .map(String::as_str)
            .collect();
        assert_eq!(
            stages,
            [
                "surge: stage 1",
                "surge: stage 2",
                "surge: stage 3",
                "surge: stage 4",
                "surge: stage 5",
                "surge: stage 6",
            ]
        );
        assert!(ctx.in_power_surge());

        ctx.advance(7.5);
        ctx.flush_due();
        assert!(ctx.events().iter().any(|line| line == "surge: blackout"));
        assert!(ctx.in_power_surge());

        ctx.advance(4.1);
        ctx.flush_due();
        assert!(ctx.events().iter().any(|line| line == "surge: restored"));
        assert!(!ctx.in_power_surge());
    }

    #[test]
    fn surge_stages_chain_off_the_previous_stage() {
        let mut ctx = NightContext::new(1);
        ctx.power_surge();

        // A single coarse jump fires only stage 1; stage 2 is scheduled
        // from stage 1's callback and its deadline lies in the future.
        ctx.advance(1.0);
        ctx.flush_due();
        let fired = ctx
            .events()
            .iter()
            .filter(|line| line.starts_with("surge: stage"))
            .count();
        assert_eq!(fired, 1);
        assert!(ctx.pending_len() > 0);
    }

    #[test]
    fn blackout_tail_honours_a_custom_delay() {
        let mut ctx = NightContext::new(1);
        ctx.power_surge_end(2.0);
        assert!(ctx.in_power_surge());
        ctx.advance(1.9);
        ctx.flush_due();
        assert!(ctx.in_power_surge());
        ctx.advance(0.2);
        ctx.flush_due();
        assert!(!ctx.in_power_surge());
    }

    #[test]
    fn delayed_call_note_lands_after_its_delay() {
        let mut ctx = NightContext::new(1);
        ctx.set_call_note_delayed(3.0, "check the vents");
        assert_eq!(ctx.call_note(), None);
        ctx.advance(3.5);
        ctx.flush_due();
        assert_eq!(ctx.call_note(), Some("check the vents"));
    }

    #[test]
    fn pick_random_runs_exactly_one_action() {
        let mut ctx = NightContext::new(42);
        let actions: [fn(&mut NightContext); 3] = [
            |ctx| ctx.log("a"),
            |ctx| ctx.log("b"),
            |ctx| ctx.log("c"),
        ];
        ctx.pick_random(&actions);
        assert_eq!(ctx.events().len(), 1);
        ctx.pick_random(&[]);
        assert_eq!(ctx.events().len(), 1);
    }
}
