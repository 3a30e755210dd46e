//! Named actor slots.
//!
//! Scripts address actors by [`ActorId`]; a slot may be empty when the
//! host never installed that actor, and every operation on a missing
//! slot is a silent no-op so authored schedules stay valid against a
//! partial cast.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::actors::{
    ActorHandle, ActorId, BreakerHandle, PatrolHandle, RunnerHandle, SimpleHandle, VentHandle,
};
use crate::sim::{shared, BreakerSim, PatrolSim, RunnerSim, SimpleSim, VentSim};

#[derive(Debug, Default)]
pub struct ActorRoster {
    slots: BTreeMap<ActorId, ActorHandle>,
}

impl ActorRoster {
    pub fn new() -> Self {
        ActorRoster::default()
    }

    /// The full house cast with fresh simulation bags: three patrol
    /// actors on the new line, three withered ones, the breaker walker,
    /// the vent crawler, the runner and the freeform Marionette.
    pub fn standard_cast(seed: u64) -> Self {
        let mut roster = ActorRoster::new();
        roster.install(
            ActorId::Showman,
            ActorHandle::Breaker(BreakerHandle::new(shared(BreakerSim::default()))),
        );
        roster.install(
            ActorId::Strummer,
            ActorHandle::Patrol(PatrolHandle::new(shared(PatrolSim::new(5, false)))),
        );
        roster.install(
            ActorId::Songbird,
            ActorHandle::Patrol(PatrolHandle::new(shared(PatrolSim::new(5, false)))),
        );
        roster.install(
            ActorId::Tangle,
            ActorHandle::Patrol(PatrolHandle::new(shared(PatrolSim::new(7, false)))),
        );
        roster.install(
            ActorId::Drifter,
            ActorHandle::Vent(VentHandle::new(shared(VentSim::default()))),
        );
        roster.install(
            ActorId::Marionette,
            ActorHandle::Simple(SimpleHandle::new(shared(SimpleSim::default()))),
        );
        roster.install(
            ActorId::OldShowman,
            ActorHandle::Patrol(PatrolHandle::new(shared(PatrolSim::new(5, true)))),
        );
        roster.install(
            ActorId::OldStrummer,
            ActorHandle::Patrol(PatrolHandle::new(shared(PatrolSim::new(5, true)))),
        );
        roster.install(
            ActorId::OldSongbird,
            ActorHandle::Patrol(PatrolHandle::new(shared(PatrolSim::new(6, true)))),
        );
        roster.install(
            ActorId::Prowler,
            ActorHandle::Runner(RunnerHandle::new(
                shared(RunnerSim::default()),
                SmallRng::seed_from_u64(seed),
            )),
        );
        roster
    }

    pub fn install(&mut self, id: ActorId, handle: ActorHandle) {
        self.slots.insert(id, handle);
    }

    pub fn remove(&mut self, id: ActorId) -> Option<ActorHandle> {
        self.slots.remove(&id)
    }

    pub fn get(&self, id: ActorId) -> Option<&ActorHandle> {
        self.slots.get(&id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut ActorHandle> {
        self.slots.get_mut(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.slots.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn active(&self, id: ActorId) -> bool {
        self.slots.get(&id).map(|h| h.active()).unwrap_or(false)
    }

    pub fn set_active(&mut self, id: ActorId, active: bool) {
        if let Some(handle) = self.slots.get_mut(&id) {
            handle.set_active(active);
        }
    }

    pub fn difficulty(&self, id: ActorId) -> i32 {
        self.slots.get(&id).map(|h| h.difficulty()).unwrap_or(0)
    }

    pub fn set_difficulty(&mut self, id: ActorId, value: i32) {
        if let Some(handle) = self.slots.get_mut(&id) {
            handle.set_difficulty(value);
        }
    }

    pub fn set_start_delay(&mut self, id: ActorId, seconds: f32) {
        if let Some(handle) = self.slots.get_mut(&id) {
            handle.set_start_delay(seconds);
        }
    }

    pub fn try_advance(&mut self, id: ActorId, force: bool) {
        if let Some(handle) = self.slots.get_mut(&id) {
            handle.try_advance(force);
        }
    }

    pub fn patrol(&self, id: ActorId) -> Option<&PatrolHandle> {
        self.slots.get(&id).and_then(|h| h.patrol())
    }

    pub fn patrol_mut(&mut self, id: ActorId) -> Option<&mut PatrolHandle> {
        self.slots.get_mut(&id).and_then(|h| h.patrol_mut())
    }

    pub fn runner_mut(&mut self, id: ActorId) -> Option<&mut RunnerHandle> {
        self.slots.get_mut(&id).and_then(|h| h.runner_mut())
    }

    pub fn vent_mut(&mut self, id: ActorId) -> Option<&mut VentHandle> {
        self.slots.get_mut(&id).and_then(|h| h.vent_mut())
    }

    pub fn breaker_mut(&mut self, id: ActorId) -> Option<&mut BreakerHandle> {
        self.slots.get_mut(&id).and_then(|h| h.breaker_mut())
    }

    /// Applies one difficulty to every installed actor.
    pub fn set_difficulty_all(&mut self, value: i32) {
        for handle in self.slots.values_mut() {
            handle.set_difficulty(value);
        }
    }

    /// Shifts every installed actor's difficulty by `delta`, through the
    /// usual clamp.
    pub fn add_difficulty_all(&mut self, delta: i32) {
        for handle in self.slots.values_mut() {
            let current = handle.difficulty();
            handle.set_difficulty(current + delta);
        }
    }

    /// Applies one start delay to every installed actor.
    pub fn set_start_delay_all(&mut self, seconds: f32) {
        for handle in self.slots.values_mut() {
            handle.set_start_delay(seconds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{shared, PatrolSim, SimpleSim};

    fn roster_with_two() -> ActorRoster {
        let mut roster = ActorRoster::new();
        roster.install(
            ActorId::Showman,
            ActorHandle::Patrol(PatrolHandle::new(shared(PatrolSim::new(3, false)))),
        );
        roster.install(
            ActorId::Marionette,
            ActorHandle::Simple(SimpleHandle::new(shared(SimpleSim::default()))),
        );
        roster
    }

    #[test]
    fn missing_slots_are_silent_no_ops() {
        let mut roster = roster_with_two();
        roster.set_difficulty(ActorId::Prowler, 20);
        roster.set_start_delay(ActorId::Prowler, 5.0);
        roster.try_advance(ActorId::Prowler, true);
        assert!(!roster.active(ActorId::Prowler));
        assert_eq!(roster.difficulty(ActorId::Prowler), 0);
    }

    #[test]
    fn sweeps_touch_every_installed_slot() {
        let mut roster = roster_with_two();
        roster.set_difficulty_all(8);
        assert_eq!(roster.difficulty(ActorId::Showman), 8);
        assert_eq!(roster.difficulty(ActorId::Marionette), 8);

        roster.add_difficulty_all(200);
        assert_eq!(roster.difficulty(ActorId::Showman), 100);

        roster.add_difficulty_all(-100);
        assert!(!roster.active(ActorId::Showman));
        assert!(!roster.active(ActorId::Marionette));
    }

    #[test]
    fn standard_cast_installs_all_ten_actors() {
        let mut roster = ActorRoster::standard_cast(5);
        assert_eq!(roster.len(), ActorId::ALL.len());
        assert!(roster.breaker_mut(ActorId::Showman).is_some());
        assert!(roster.runner_mut(ActorId::Prowler).is_some());
        assert!(roster.vent_mut(ActorId::Drifter).is_some());
        assert!(roster.patrol(ActorId::Tangle).is_some());
        for id in ActorId::ALL {
            assert!(!roster.active(id), "{id:?} should start inactive");
        }
    }

    #[test]
    fn capability_accessors_reject_other_variants() {
        let mut roster = roster_with_two();
        assert!(roster.patrol_mut(ActorId::Showman).is_some());
        assert!(roster.runner_mut(ActorId::Showman).is_none());
        assert!(roster.vent_mut(ActorId::Marionette).is_none());
        assert!(roster.breaker_mut(ActorId::Prowler).is_none());
    }
}
