//! A deliberately small stand-in for the game's per-frame actor
//! simulation. It owns the shared property bags, hands the core
//! non-owning handles over them, and each frame moves the handful of
//! timers the director's scripts read back.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use night_core::actors::{
    ActorHandle, BreakerHandle, PatrolHandle, RunnerHandle, SimpleHandle, VentHandle,
};
use night_core::sim::{
    shared, BreakerSim, PatrolSim, RunnerSim, Shared, SimpleSim, VentSim, BREAKER_CHOICES,
};
use night_core::{ActorId, ActorRoster};

/// Seconds the breaker walker spends between panels.
const BREAKER_WALK_SECONDS: f32 = 10.0;
/// Seconds of vent crawl at difficulty 1; higher levels crawl faster.
const VENT_CRAWL_SECONDS: f32 = 30.0;

pub struct HostWorld {
    patrols: Vec<(ActorId, Shared<PatrolSim>)>,
    runner: Shared<RunnerSim>,
    vent: Shared<VentSim>,
    breaker: Shared<BreakerSim>,
    marionette: Shared<SimpleSim>,
    breaker_cursor: usize,
}

impl HostWorld {
    pub fn new() -> Self {
        let patrols = vec![
            (ActorId::Strummer, shared(PatrolSim::new(5, false))),
            (ActorId::Songbird, shared(PatrolSim::new(5, false))),
            (ActorId::Tangle, shared(PatrolSim::new(7, false))),
            (ActorId::OldShowman, shared(PatrolSim::new(5, true))),
            (ActorId::OldStrummer, shared(PatrolSim::new(5, true))),
            (ActorId::OldSongbird, shared(PatrolSim::new(6, true))),
        ];
        HostWorld {
            patrols,
            runner: shared(RunnerSim::default()),
            vent: shared(VentSim::default()),
            breaker: shared(BreakerSim::default()),
            marionette: shared(SimpleSim::default()),
            breaker_cursor: 0,
        }
    }

    /// Installs handles over this world's bags into `roster`.
    pub fn install_into(&self, roster: &mut ActorRoster, seed: u64) {
        for (id, sim) in &self.patrols {
            roster.install(*id, ActorHandle::Patrol(PatrolHandle::new(sim.clone())));
        }
        roster.install(
            ActorId::Prowler,
            ActorHandle::Runner(RunnerHandle::new(
                self.runner.clone(),
                SmallRng::seed_from_u64(seed),
            )),
        );
        roster.install(
            ActorId::Drifter,
            ActorHandle::Vent(VentHandle::new(self.vent.clone())),
        );
        roster.install(
            ActorId::Showman,
            ActorHandle::Breaker(BreakerHandle::new(self.breaker.clone())),
        );
        roster.install(
            ActorId::Marionette,
            ActorHandle::Simple(SimpleHandle::new(self.marionette.clone())),
        );
    }

    /// One simulation frame.
    pub fn step(&mut self, dt: f32) {
        for (_, sim) in &self.patrols {
            let mut bag = sim.borrow_mut();
            if !bag.enabled {
                continue;
            }
            bag.start_timer = (bag.start_timer - dt).max(0.0);
            if let Some(node) = bag.graph.active_node() {
                if let Some(node) = bag.graph.get_mut(node) {
                    node.timer += dt;
                }
            }
        }

        {
            let mut runner = self.runner.borrow_mut();
            if runner.enabled && !runner.active {
                runner.start_timer -= dt;
                if runner.start_timer <= 0.0 {
                    runner.start_timer = 0.0;
                    runner.active = true;
                }
            }
        }

        {
            let mut vent = self.vent.borrow_mut();
            if vent.enabled {
                if !vent.active {
                    vent.start_timer -= dt;
                    if vent.start_timer <= 0.0 {
                        vent.start_timer = 0.0;
                        vent.active = true;
                        vent.cam_visible = false;
                        vent.cam_wait += 1.0;
                        vent.vent.active = true;
                    }
                } else if vent.vent.active {
                    let speed = vent.difficulty.max(1.0);
                    vent.vent.timer += dt;
                    vent.vent.progress += dt * speed / VENT_CRAWL_SECONDS;
                    if vent.vent.progress >= 1.0 {
                        vent.vent.active = false;
                        vent.vent.progress = 0.0;
                        vent.office.active = true;
                    }
                } else if vent.office.active {
                    vent.office.timer += dt;
                }
            }
        }

        {
            let mut breaker = self.breaker.borrow_mut();
            if breaker.enabled {
                if !breaker.active {
                    breaker.start_timer -= dt;
                    if breaker.start_timer <= 0.0 {
                        breaker.start_timer = 0.0;
                        breaker.active = true;
                        breaker.moving = true;
                        breaker.move_timer = 0.0;
                    }
                } else if breaker.moving {
                    breaker.move_timer += dt;
                    if breaker.move_timer >= BREAKER_WALK_SECONDS {
                        breaker.moving = false;
                        let target = self.breaker_cursor % BREAKER_CHOICES;
                        self.breaker_cursor += 1;
                        for (index, choice) in breaker.choices.iter_mut().enumerate() {
                            choice.arrived = index == target;
                        }
                    }
                } else {
                    for choice in breaker.choices.iter_mut() {
                        if choice.arrived {
                            choice.outage_timer += dt;
                        }
                    }
                }
            }
        }

        {
            let mut marionette = self.marionette.borrow_mut();
            if marionette.enabled {
                marionette.start_timer = (marionette.start_timer - dt).max(0.0);
            }
        }
    }
}

impl Default for HostWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_actors_do_not_move() {
        let mut world = HostWorld::new();
        world.step(5.0);
        assert!(!world.runner.borrow().active);
        assert!(!world.vent.borrow().active);
        assert!(!world.breaker.borrow().active);
    }

    #[test]
    fn runner_arms_after_its_start_delay() {
        let mut world = HostWorld::new();
        let mut roster = ActorRoster::new();
        world.install_into(&mut roster, 3);
        roster.set_difficulty(ActorId::Prowler, 10);
        roster.set_start_delay(ActorId::Prowler, 2.0);

        world.step(1.0);
        assert!(!world.runner.borrow().active);
        world.step(1.5);
        assert!(world.runner.borrow().active);
    }

    #[test]
    fn vent_crawl_reaches_the_office() {
        let mut world = HostWorld::new();
        let mut roster = ActorRoster::new();
        world.install_into(&mut roster, 3);
        roster.set_difficulty(ActorId::Drifter, 10);
        roster.set_start_delay(ActorId::Drifter, 0.0);

        for _ in 0..100 {
            world.step(0.5);
        }
        let vent = world.vent.borrow();
        assert!(vent.office.active);
        assert!(!vent.vent.active);
    }
}
