//! Uniform control surface over the heterogeneous actor simulations.
//!
//! Every concrete actor exposes the same trio of active flag,
//! difficulty and start delay through [`ActorHandle`]; the variant-specific
//! operations (patrol routes, vent sub-states, breaker choices) live on
//! the variant handles reached through the capability accessors.
//!
//! Handles are non-owning: each wraps one live simulation bag and only
//! observes or mutates the narrow fields the director cares about.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim::{BreakerSim, PatrolSim, RunnerSim, Shared, SimpleSim, VentSim, BREAKER_CHOICES};

pub const DIFFICULTY_MAX: i32 = 100;

/// The closed set of known actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActorId {
    Showman,
    Strummer,
    Songbird,
    Tangle,
    Drifter,
    Marionette,
    OldShowman,
    OldStrummer,
    OldSongbird,
    Prowler,
}

impl ActorId {
    pub const ALL: [ActorId; 10] = [
        ActorId::Showman,
        ActorId::Strummer,
        ActorId::Songbird,
        ActorId::Tangle,
        ActorId::Drifter,
        ActorId::Marionette,
        ActorId::OldShowman,
        ActorId::OldStrummer,
        ActorId::OldSongbird,
        ActorId::Prowler,
    ];

    pub fn nickname(self) -> &'static str {
        match self {
            ActorId::Showman => "The Showman",
            ActorId::Strummer => "The Strummer",
            ActorId::Songbird => "The Songbird",
            ActorId::Tangle => "The Tangle",
            ActorId::Drifter => "The Drifter",
            ActorId::Marionette => "The Marionette",
            ActorId::OldShowman => "Old Showman",
            ActorId::OldStrummer => "Old Strummer",
            ActorId::OldSongbird => "Old Songbird",
            ActorId::Prowler => "The Prowler",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ActorId::Showman => "showman",
            ActorId::Strummer => "strummer",
            ActorId::Songbird => "songbird",
            ActorId::Tangle => "tangle",
            ActorId::Drifter => "drifter",
            ActorId::Marionette => "marionette",
            ActorId::OldShowman => "old_showman",
            ActorId::OldStrummer => "old_strummer",
            ActorId::OldSongbird => "old_songbird",
            ActorId::Prowler => "prowler",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ActorId> {
        ActorId::ALL.into_iter().find(|id| id.slug() == slug)
    }
}

fn clamp_difficulty(value: i32) -> i32 {
    value.clamp(0, DIFFICULTY_MAX)
}

/// Handle over a position-graph patrol actor.
#[derive(Debug, Clone)]
pub struct PatrolHandle {
    sim: Shared<PatrolSim>,
}

impl PatrolHandle {
    pub fn new(sim: Shared<PatrolSim>) -> Self {
        PatrolHandle { sim }
    }

    pub fn active(&self) -> bool {
        self.sim.borrow().enabled
    }

    pub fn set_active(&mut self, active: bool) {
        self.sim.borrow_mut().enabled = active;
    }

    pub fn difficulty(&self) -> i32 {
        self.sim.borrow().difficulty as i32
    }

    pub fn set_difficulty(&mut self, value: i32) {
        let value = clamp_difficulty(value);
        let mut sim = self.sim.borrow_mut();
        sim.enabled = value > 0;
        sim.difficulty = value as f32;
    }

    pub fn start_delay(&self) -> f32 {
        self.sim.borrow().start_timer
    }

    pub fn set_start_delay(&mut self, seconds: f32) {
        self.sim.borrow_mut().start_timer = seconds;
    }

    /// Node currently occupied on the patrol route, if any.
    pub fn active_position(&self) -> Option<usize> {
        self.sim.borrow().graph.active_node()
    }

    /// Chain index of the active position; `None` while off-route.
    pub fn position_index(&self) -> Option<usize> {
        let sim = self.sim.borrow();
        sim.graph.active_node().and_then(|node| sim.graph.index_of(node))
    }

    pub fn route_len(&self) -> usize {
        let sim = self.sim.borrow();
        let mut cursor = sim.graph.head();
        let mut len = 0;
        while let Some(node) = cursor {
            len += 1;
            cursor = sim.graph.get(node).and_then(|n| n.next);
        }
        len
    }

    /// Moves the actor to the route position at `index`.
    pub fn move_to(&mut self, index: usize) {
        let target = self.sim.borrow().graph.node_at(index);
        self.move_to_node(target);
    }

    /// Moves the actor to `target`, handling departure from its current
    /// spot, or from the home stage when it has not yet left it.
    pub fn move_to_node(&mut self, target: Option<usize>) {
        let mut sim = self.sim.borrow_mut();
        if let Some(current) = sim.graph.active_node() {
            if let Some(node) = sim.graph.get_mut(current) {
                node.wait += 1.0;
                node.visible = false;
                node.active = false;
            }
        } else if !sim.off_stage {
            if !sim.withered {
                sim.stage_down = true;
            }
            if sim.withered || sim.stage_down {
                sim.stage_visible = false;
                sim.stage_wait += 1.0;
                sim.off_stage = true;
                sim.start_timer = 0.0;
            }
        }
        if let Some(node) = target {
            sim.graph.activate(node);
        }
    }

    /// Whether the terminal office flag of the route is raised.
    pub fn is_in_office(&self) -> bool {
        let sim = self.sim.borrow();
        sim.graph
            .last()
            .and_then(|node| sim.graph.get(node))
            .map(|node| node.office)
            .unwrap_or(false)
    }

    /// Moves the actor straight to the office entry.
    pub fn move_to_office(&mut self) {
        self.move_to_node(None);
        let mut sim = self.sim.borrow_mut();
        if let Some(last) = sim.graph.last() {
            if let Some(node) = sim.graph.get_mut(last) {
                node.office = true;
            }
        }
    }

    /// Nudges the patrol along. Without `force` the current position's
    /// dwell timer resets (the actor lingers as if it just arrived);
    /// with `force` the successor activates immediately. Off-route, the
    /// start delay is zeroed to accelerate re-entry.
    pub fn try_advance(&mut self, force: bool) {
        let mut sim = self.sim.borrow_mut();
        match sim.graph.active_node() {
            Some(current) => {
                if !force {
                    if let Some(node) = sim.graph.get_mut(current) {
                        node.timer = 0.0;
                    }
                } else {
                    let next = sim.graph.get(current).and_then(|node| node.next);
                    if let Some(node) = sim.graph.get_mut(current) {
                        node.wait += 1.0;
                        node.visible = false;
                        node.active = false;
                    }
                    if let Some(next) = next {
                        sim.graph.activate(next);
                    }
                }
            }
            None => sim.start_timer = 0.0,
        }
    }

    /// Extends the dwell at the current position by `seconds`.
    pub fn bump_active_timer(&mut self, seconds: f32) {
        let mut sim = self.sim.borrow_mut();
        if let Some(current) = sim.graph.active_node() {
            if let Some(node) = sim.graph.get_mut(current) {
                node.timer += seconds;
            }
        }
    }
}

/// Handle over a runner actor (wind-up, then a charge at the office).
#[derive(Debug)]
pub struct RunnerHandle {
    sim: Shared<RunnerSim>,
    rng: SmallRng,
}

impl RunnerHandle {
    pub fn new(sim: Shared<RunnerSim>, rng: SmallRng) -> Self {
        RunnerHandle { sim, rng }
    }

    pub fn active(&self) -> bool {
        self.sim.borrow().active
    }

    pub fn is_running(&self) -> bool {
        self.sim.borrow().active
    }

    /// Starts or cancels a run. Cancelling an in-progress run re-arms
    /// the wind-up from a random range shortened by difficulty.
    pub fn set_running(&mut self, active: bool) {
        let mut sim = self.sim.borrow_mut();
        if sim.active == active {
            return;
        }
        if active {
            sim.start_timer = 0.0;
        } else {
            let base = self.rng.random_range(610..810) as f32 / 10.0;
            sim.start_timer = base - sim.difficulty * 2.0;
        }
        sim.active = active;
    }

    pub fn difficulty(&self) -> i32 {
        self.sim.borrow().difficulty as i32
    }

    pub fn set_difficulty(&mut self, value: i32) {
        let value = clamp_difficulty(value);
        if value <= 0 {
            self.set_running(false);
        }
        let mut sim = self.sim.borrow_mut();
        sim.enabled = value > 0;
        sim.difficulty = value as f32;
    }

    pub fn start_delay(&self) -> f32 {
        self.sim.borrow().start_timer
    }

    pub fn set_start_delay(&mut self, seconds: f32) {
        self.sim.borrow_mut().start_timer = seconds;
    }
}

/// Handle over a vent actor with its two alternate sub-states.
#[derive(Debug, Clone)]
pub struct VentHandle {
    sim: Shared<VentSim>,
}

impl VentHandle {
    pub fn new(sim: Shared<VentSim>) -> Self {
        VentHandle { sim }
    }

    pub fn active(&self) -> bool {
        self.sim.borrow().enabled
    }

    pub fn set_active(&mut self, active: bool) {
        self.sim.borrow_mut().enabled = active;
    }

    pub fn difficulty(&self) -> i32 {
        self.sim.borrow().difficulty as i32
    }

    pub fn set_difficulty(&mut self, value: i32) {
        let value = clamp_difficulty(value);
        let mut sim = self.sim.borrow_mut();
        sim.enabled = value > 0;
        sim.difficulty = value as f32;
    }

    pub fn start_delay(&self) -> f32 {
        self.sim.borrow().start_timer
    }

    pub fn set_start_delay(&mut self, seconds: f32) {
        self.sim.borrow_mut().start_timer = seconds;
    }

    pub fn is_in_vent(&self) -> bool {
        self.sim.borrow().vent.active
    }

    pub fn is_in_office(&self) -> bool {
        self.sim.borrow().office.active
    }

    /// Resets whichever sub-state is currently active: an office guest
    /// has its loiter timer zeroed, an in-vent crawl restarts when
    /// forced, and an actor still at its camera spot gets its start
    /// delay zeroed.
    pub fn try_advance(&mut self, force: bool) {
        let mut sim = self.sim.borrow_mut();
        if !sim.active {
            sim.start_timer = 0.0;
        } else if !sim.vent.active && sim.office.active {
            sim.move_timer = 0.0;
        } else if force {
            if sim.vent.active {
                sim.vent.progress = 0.0;
                sim.vent.timer = 0.0;
            } else if sim.office.active {
                sim.office.progress = 0.0;
                sim.office.timer = 0.0;
            }
        }
    }

    /// Pushes the actor off its camera spot with the given crawl timer,
    /// as if it had just slipped away on its own.
    pub fn rush(&mut self, move_timer: f32) {
        let mut sim = self.sim.borrow_mut();
        sim.start_timer = 0.0;
        if !sim.active {
            sim.move_timer = move_timer;
            sim.cam_visible = false;
            sim.cam_wait += 1.0;
            sim.active = true;
        }
    }

    /// Parks the actor directly in the office, skipping the vent crawl.
    pub fn force_office(&mut self) {
        let mut sim = self.sim.borrow_mut();
        sim.active = true;
        sim.cam_visible = false;
        sim.vent.active = false;
        sim.office.active = true;
        sim.start_timer = 0.0;
    }
}

/// Handle over the breaker-choice actor.
#[derive(Debug, Clone)]
pub struct BreakerHandle {
    sim: Shared<BreakerSim>,
}

impl BreakerHandle {
    pub fn new(sim: Shared<BreakerSim>) -> Self {
        BreakerHandle { sim }
    }

    pub fn active(&self) -> bool {
        self.sim.borrow().enabled
    }

    pub fn set_active(&mut self, active: bool) {
        self.sim.borrow_mut().enabled = active;
    }

    pub fn difficulty(&self) -> i32 {
        self.sim.borrow().difficulty as i32
    }

    pub fn set_difficulty(&mut self, value: i32) {
        let value = clamp_difficulty(value);
        let mut sim = self.sim.borrow_mut();
        sim.enabled = value > 0;
        sim.difficulty = value as f32;
    }

    pub fn start_delay(&self) -> f32 {
        self.sim.borrow().start_timer
    }

    pub fn set_start_delay(&mut self, seconds: f32) {
        self.sim.borrow_mut().start_timer = seconds;
    }

    /// 1-based index of whichever breaker choice reports "arrived", or
    /// 0 when the actor is between panels.
    pub fn arrived_choice_index(&self) -> usize {
        let sim = self.sim.borrow();
        for (i, choice) in sim.choices.iter().enumerate() {
            if choice.arrived {
                return i + 1;
            }
        }
        0
    }

    pub fn is_at_choice(&self, choice: usize) -> bool {
        if choice == 0 || choice > BREAKER_CHOICES {
            return false;
        }
        self.sim.borrow().choices[choice - 1].arrived
    }

    /// Trips the outage at `choice` (1-based) if the actor is there.
    pub fn shutdown_choice(&mut self, choice: usize) {
        if choice == 0 || choice > BREAKER_CHOICES {
            return;
        }
        let mut sim = self.sim.borrow_mut();
        let target = &mut sim.choices[choice - 1];
        if target.arrived {
            target.outage_timer = 0.0;
        }
    }

    /// Keeps the actor moving: between panels the walk timer resets,
    /// and with `force` every arrived panel is tripped at once.
    pub fn try_advance(&mut self, force: bool) {
        let mut sim = self.sim.borrow_mut();
        if !sim.active {
            sim.start_timer = 0.0;
        } else if sim.moving {
            sim.move_timer = 0.0;
        } else if force {
            for choice in sim.choices.iter_mut() {
                if choice.arrived {
                    choice.outage_timer = 0.0;
                }
            }
        }
    }

    /// Switches still on across all four breaker rows.
    pub fn live_switch_count(&self) -> usize {
        self.sim
            .borrow()
            .choices
            .iter()
            .map(|choice| choice.switches.iter().filter(|&&on| on).count())
            .sum()
    }

    /// Probabilistically forces switches off across all four breaker
    /// rows: each row is visited in shuffled order, each live switch
    /// survives with 20% odds outright, and every switch already thrown
    /// this sweep makes the next one 20 points harder to throw.
    pub fn sabotage_switches(&mut self, rng: &mut SmallRng) {
        let mut sim = self.sim.borrow_mut();
        for choice in sim.choices.iter_mut() {
            let mut order: Vec<usize> = (0..choice.switches.len()).collect();
            order.shuffle(rng);
            let mut thrown = 0usize;
            for index in order {
                if !choice.switches[index] {
                    continue;
                }
                if rng.random::<f32>() < 0.2 {
                    continue;
                }
                if thrown == 0 || rng.random::<f32>() > 0.5 + 0.2 * thrown as f32 {
                    choice.switches[index] = false;
                    thrown += 1;
                }
            }
        }
    }
}

/// Handle over a freeform actor with only the uniform fields.
#[derive(Debug, Clone)]
pub struct SimpleHandle {
    sim: Shared<SimpleSim>,
}

impl SimpleHandle {
    pub fn new(sim: Shared<SimpleSim>) -> Self {
        SimpleHandle { sim }
    }

    pub fn active(&self) -> bool {
        self.sim.borrow().enabled
    }

    pub fn set_active(&mut self, active: bool) {
        self.sim.borrow_mut().enabled = active;
    }

    pub fn difficulty(&self) -> i32 {
        self.sim.borrow().difficulty as i32
    }

    pub fn set_difficulty(&mut self, value: i32) {
        let value = clamp_difficulty(value);
        let mut sim = self.sim.borrow_mut();
        sim.enabled = value > 0;
        sim.difficulty = value as f32;
    }

    pub fn start_delay(&self) -> f32 {
        self.sim.borrow().start_timer
    }

    pub fn set_start_delay(&mut self, seconds: f32) {
        self.sim.borrow_mut().start_timer = seconds;
    }
}

/// Tagged union over the actor variants.
///
/// Generic scheduling code goes through the uniform methods; callers
/// needing a specialised operation pattern-match through the capability
/// accessors and get `None` when the variant does not support it.
#[derive(Debug)]
pub enum ActorHandle {
    Patrol(PatrolHandle),
    Runner(RunnerHandle),
    Vent(VentHandle),
    Breaker(BreakerHandle),
    Simple(SimpleHandle),
}

impl ActorHandle {
    pub fn active(&self) -> bool {
        match self {
            ActorHandle::Patrol(h) => h.active(),
            ActorHandle::Runner(h) => h.active(),
            ActorHandle::Vent(h) => h.active(),
            ActorHandle::Breaker(h) => h.active(),
            ActorHandle::Simple(h) => h.active(),
        }
    }

    pub fn set_active(&mut self, active: bool) {
        match self {
            ActorHandle::Patrol(h) => h.set_active(active),
            ActorHandle::Runner(h) => h.set_running(active),
            ActorHandle::Vent(h) => h.set_active(active),
            ActorHandle::Breaker(h) => h.set_active(active),
            ActorHandle::Simple(h) => h.set_active(active),
        }
    }

    pub fn difficulty(&self) -> i32 {
        match self {
            ActorHandle::Patrol(h) => h.difficulty(),
            ActorHandle::Runner(h) => h.difficulty(),
            ActorHandle::Vent(h) => h.difficulty(),
            ActorHandle::Breaker(h) => h.difficulty(),
            ActorHandle::Simple(h) => h.difficulty(),
        }
    }

    pub fn set_difficulty(&mut self, value: i32) {
        match self {
            ActorHandle::Patrol(h) => h.set_difficulty(value),
            ActorHandle::Runner(h) => h.set_difficulty(value),
            ActorHandle::Vent(h) => h.set_difficulty(value),
            ActorHandle::Breaker(h) => h.set_difficulty(value),
            ActorHandle::Simple(h) => h.set_difficulty(value),
        }
    }

    pub fn start_delay(&self) -> f32 {
        match self {
            ActorHandle::Patrol(h) => h.start_delay(),
            ActorHandle::Runner(h) => h.start_delay(),
            ActorHandle::Vent(h) => h.start_delay(),
            ActorHandle::Breaker(h) => h.start_delay(),
            ActorHandle::Simple(h) => h.start_delay(),
        }
    }

    pub fn set_start_delay(&mut self, seconds: f32) {
        match self {
            ActorHandle::Patrol(h) => h.set_start_delay(seconds),
            ActorHandle::Runner(h) => h.set_start_delay(seconds),
            ActorHandle::Vent(h) => h.set_start_delay(seconds),
            ActorHandle::Breaker(h) => h.set_start_delay(seconds),
            ActorHandle::Simple(h) => h.set_start_delay(seconds),
        }
    }

    /// Variant-aware nudge; a no-op for variants without the operation.
    pub fn try_advance(&mut self, force: bool) {
        match self {
            ActorHandle::Patrol(h) => h.try_advance(force),
            ActorHandle::Vent(h) => h.try_advance(force),
            ActorHandle::Breaker(h) => h.try_advance(force),
            ActorHandle::Runner(_) | ActorHandle::Simple(_) => {}
        }
    }

    pub fn patrol(&self) -> Option<&PatrolHandle> {
        match self {
            ActorHandle::Patrol(h) => Some(h),
            _ => None,
        }
    }

    pub fn patrol_mut(&mut self) -> Option<&mut PatrolHandle> {
        match self {
            ActorHandle::Patrol(h) => Some(h),
            _ => None,
        }
    }

    pub fn runner_mut(&mut self) -> Option<&mut RunnerHandle> {
        match self {
            ActorHandle::Runner(h) => Some(h),
            _ => None,
        }
    }

    pub fn vent_mut(&mut self) -> Option<&mut VentHandle> {
        match self {
            ActorHandle::Vent(h) => Some(h),
            _ => None,
        }
    }

    pub fn breaker_mut(&mut self) -> Option<&mut BreakerHandle> {
        match self {
            ActorHandle::Breaker(h) => Some(h),
            _ => None,
        }
    }
}
