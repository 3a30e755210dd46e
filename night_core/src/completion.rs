//! Persistent completion state: which nights and challenges the player
//! has beaten, plus the next night the campaign offers.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

pub const FIRST_NIGHT: u32 = 1;
pub const FINAL_NIGHT: u32 = 7;

bitflags! {
    /// One bit per campaign night, in night order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct NightFlags: u32 {
        const NIGHT_1 = 1 << 0;
        const NIGHT_2 = 1 << 1;
        const NIGHT_3 = 1 << 2;
        const NIGHT_4 = 1 << 3;
        const NIGHT_5 = 1 << 4;
        const NIGHT_6 = 1 << 5;
        const NIGHT_7 = 1 << 6;
    }
}

bitflags! {
    /// One bit per challenge. Bit positions are part of the save format
    /// and never reassigned.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ChallengeFlags: u32 {
        const ENCORE = 1 << 0;
        const SHUFFLE = 1 << 1;
        const OVERTIME = 1 << 2;
        const BLACKOUT = 1 << 3;
    }
}

/// Flag for night `number`, or `None` outside the campaign range.
pub fn night_flag(number: u32) -> Option<NightFlags> {
    if (FIRST_NIGHT..=FINAL_NIGHT).contains(&number) {
        NightFlags::from_bits(1 << (number - 1))
    } else {
        None
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionTracker {
    nights: NightFlags,
    challenges: ChallengeFlags,
    next_night: u32,
}

impl Default for CompletionTracker {
    fn default() -> Self {
        CompletionTracker {
            nights: NightFlags::empty(),
            challenges: ChallengeFlags::empty(),
            next_night: FIRST_NIGHT,
        }
    }
}

impl CompletionTracker {
    pub fn new() -> Self {
        CompletionTracker::default()
    }

    pub fn nights(&self) -> NightFlags {
        self.nights
    }

    pub fn challenges(&self) -> ChallengeFlags {
        self.challenges
    }

    pub fn has_night(&self, flag: NightFlags) -> bool {
        self.nights.contains(flag)
    }

    pub fn set_night(&mut self, flag: NightFlags) {
        self.nights.insert(flag);
    }

    /// Administrative reset of a night flag; normal play only ever sets.
    pub fn unset_night(&mut self, flag: NightFlags) {
        self.nights.remove(flag);
    }

    pub fn all_nights(&self, flags: NightFlags) -> bool {
        self.nights.contains(flags)
    }

    pub fn any_night(&self, flags: NightFlags) -> bool {
        self.nights.intersects(flags)
    }

    pub fn has_challenge(&self, flag: ChallengeFlags) -> bool {
        self.challenges.contains(flag)
    }

    pub fn set_challenge(&mut self, flag: ChallengeFlags) {
        self.challenges.insert(flag);
    }

    pub fn unset_challenge(&mut self, flag: ChallengeFlags) {
        self.challenges.remove(flag);
    }

    /// The night the campaign menu offers next.
    pub fn next_night(&self) -> u32 {
        self.next_night
    }

    pub fn set_next_night(&mut self, night: u32) {
        self.next_night = night.clamp(FIRST_NIGHT, FINAL_NIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_flag_maps_the_campaign_range() {
        assert_eq!(night_flag(1), Some(NightFlags::NIGHT_1));
        assert_eq!(night_flag(7), Some(NightFlags::NIGHT_7));
        assert_eq!(night_flag(0), None);
        assert_eq!(night_flag(8), None);
    }

    #[test]
    fn flags_accumulate_and_support_admin_reset() {
        let mut tracker = CompletionTracker::new();
        tracker.set_night(NightFlags::NIGHT_1);
        tracker.set_night(NightFlags::NIGHT_2);
        assert!(tracker.all_nights(NightFlags::NIGHT_1 | NightFlags::NIGHT_2));
        assert!(!tracker.has_night(NightFlags::NIGHT_3));

        tracker.unset_night(NightFlags::NIGHT_1);
        assert!(!tracker.has_night(NightFlags::NIGHT_1));
        assert!(tracker.has_night(NightFlags::NIGHT_2));
    }

    #[test]
    fn next_night_stays_inside_the_campaign() {
        let mut tracker = CompletionTracker::new();
        assert_eq!(tracker.next_night(), 1);
        tracker.set_next_night(4);
        assert_eq!(tracker.next_night(), 4);
        tracker.set_next_night(0);
        assert_eq!(tracker.next_night(), 1);
        tracker.set_next_night(12);
        assert_eq!(tracker.next_night(), 7);
    }

    #[test]
    fn tracker_round_trips_through_json() {
        let mut tracker = CompletionTracker::new();
        tracker.set_night(NightFlags::NIGHT_5);
        tracker.set_challenge(ChallengeFlags::BLACKOUT);
        tracker.set_next_night(6);
        let json = serde_json::to_string(&tracker).unwrap();
        let back: CompletionTracker = serde_json::from_str(&json).unwrap();
        assert!(back.has_night(NightFlags::NIGHT_5));
        assert!(back.has_challenge(ChallengeFlags::BLACKOUT));
        assert_eq!(back.next_night(), 6);
    }
}
