//! Selection table for scripted events.
//!
//! The director resolves a night number or challenge id here and gets a
//! fresh boxed instance each time; scripted events carry per-run state
//! (shift tables, one-shot guards) and are never reused across runs.

use crate::challenges::{BlackoutChallenge, EncoreChallenge, OvertimeChallenge, ShuffleChallenge};
use crate::events::{Challenge, Night};
use crate::nights::{CustomNight, Night1, Night2, Night3, Night4, Night5, Night6};

pub type NightFactory = fn() -> Box<dyn Night>;
pub type ChallengeFactory = fn() -> Box<dyn Challenge>;

pub struct TimeEventRegistry {
    nights: Vec<(u32, NightFactory)>,
    challenges: Vec<(u32, ChallengeFactory)>,
}

impl TimeEventRegistry {
    pub fn empty() -> Self {
        TimeEventRegistry {
            nights: Vec::new(),
            challenges: Vec::new(),
        }
    }

    /// Registry pre-loaded with the full campaign and challenge list.
    pub fn with_builtin() -> Self {
        let mut registry = TimeEventRegistry::empty();
        registry.register_night(1, || Box::new(Night1::new()));
        registry.register_night(2, || Box::new(Night2::new()));
        registry.register_night(3, || Box::new(Night3::new()));
        registry.register_night(4, || Box::new(Night4::new()));
        registry.register_night(5, || Box::new(Night5::new()));
        registry.register_night(6, || Box::new(Night6::new()));
        registry.register_night(7, || Box::new(CustomNight::new()));
        registry.register_challenge(1, || Box::new(EncoreChallenge::new()));
        registry.register_challenge(2, || Box::new(BlackoutChallenge::new()));
        registry.register_challenge(3, || Box::new(ShuffleChallenge::new()));
        registry.register_challenge(4, || Box::new(OvertimeChallenge::new()));
        registry
    }

    pub fn register_night(&mut self, night: u32, factory: NightFactory) {
        self.nights.push((night, factory));
    }

    pub fn register_challenge(&mut self, id: u32, factory: ChallengeFactory) {
        self.challenges.push((id, factory));
    }

    /// Fresh instance of the night registered under `night`, if any.
    pub fn find_night(&self, night: u32) -> Option<Box<dyn Night>> {
        self.nights
            .iter()
            .find(|(number, _)| *number == night)
            .map(|(_, factory)| factory())
    }

    /// Fresh instance of the challenge registered under `id`, if any.
    pub fn find_challenge(&self, id: u32) -> Option<Box<dyn Challenge>> {
        self.challenges
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, factory)| factory())
    }

    pub fn night_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.nights.iter().map(|(number, _)| *number)
    }

    pub fn challenge_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.challenges.iter().map(|(id, _)| *id)
    }
}

impl Default for TimeEventRegistry {
    fn default() -> Self {
        TimeEventRegistry::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_covers_the_campaign_and_challenges() {
        let registry = TimeEventRegistry::with_builtin();
        for night in 1..=7 {
            let event = registry.find_night(night);
            assert!(event.is_some(), "night {night} missing");
            assert_eq!(event.map(|e| e.night()), Some(night));
        }
        for id in 1..=4 {
            let event = registry.find_challenge(id);
            assert!(event.is_some(), "challenge {id} missing");
            assert_eq!(event.map(|e| e.challenge_id()), Some(id));
        }
    }

    #[test]
    fn unknown_selections_resolve_to_none() {
        let registry = TimeEventRegistry::with_builtin();
        assert!(registry.find_night(0).is_none());
        assert!(registry.find_night(8).is_none());
        assert!(registry.find_challenge(9).is_none());
    }

    #[test]
    fn each_lookup_returns_a_fresh_instance() {
        let registry = TimeEventRegistry::with_builtin();
        let a = registry.find_night(1).map(|e| e.hours());
        let b = registry.find_night(1).map(|e| e.hours());
        assert_eq!(a, b);
    }
}
