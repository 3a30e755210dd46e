/// In-game minutes advanced per real second at the default time scale.
///
/// The original host ran the night clock at one in-game minute per 1.3
/// real seconds; a full six-hour night lasts a little under eight
/// real minutes.
pub const DEFAULT_MINUTES_PER_SECOND: f32 = 1.0 / 1.3;

/// Midnight is displayed as hour 12 on the office clock.
pub const MIDNIGHT_LABEL: u32 = 12;

/// Virtual night clock owned by the director.
///
/// Tracks in-game minutes since midnight. The clock is forward-only:
/// negative deltas are ignored rather than rewinding hour state.
#[derive(Debug, Clone)]
pub struct NightClock {
    minutes: f32,
    minutes_per_second: f32,
}

impl Default for NightClock {
    fn default() -> Self {
        Self::new()
    }
}

impl NightClock {
    pub fn new() -> Self {
        Self::with_rate(DEFAULT_MINUTES_PER_SECOND)
    }

    pub fn with_rate(minutes_per_second: f32) -> Self {
        NightClock {
            minutes: 0.0,
            minutes_per_second,
        }
    }

    pub fn reset(&mut self) {
        self.minutes = 0.0;
    }

    /// Advances the clock by `dt` real seconds.
    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.minutes += dt * self.minutes_per_second;
        }
    }

    /// In-game minutes elapsed since midnight.
    pub fn minutes(&self) -> f32 {
        self.minutes
    }

    /// The hour shown on the office clock: 12 for the first hour of the
    /// night, then 1, 2, ...
    pub fn hour_label(&self) -> u32 {
        let hour = (self.minutes / 60.0) as u32;
        if hour == 0 {
            MIDNIGHT_LABEL
        } else {
            hour
        }
    }

    /// Whether the clock sits past the 30-minute mark of the current hour.
    pub fn past_half_hour(&self) -> bool {
        self.minutes % 60.0 >= 30.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_midnight() {
        let clock = NightClock::new();
        assert_eq!(clock.hour_label(), 12);
        assert!(!clock.past_half_hour());
        assert_eq!(clock.minutes(), 0.0);
    }

    #[test]
    fn hour_labels_follow_the_office_clock() {
        let mut clock = NightClock::with_rate(1.0);
        let mut labels = vec![clock.hour_label()];
        for _ in 0..6 {
            clock.advance(60.0);
            labels.push(clock.hour_label());
        }
        assert_eq!(labels, vec![12, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn half_hour_window_tracks_minutes_within_the_hour() {
        let mut clock = NightClock::with_rate(1.0);
        clock.advance(29.0);
        assert!(!clock.past_half_hour());
        clock.advance(1.0);
        assert!(clock.past_half_hour());
        clock.advance(30.0);
        assert!(!clock.past_half_hour());
        clock.advance(35.0);
        assert!(clock.past_half_hour());
    }

    #[test]
    fn backward_jumps_are_ignored() {
        let mut clock = NightClock::with_rate(1.0);
        clock.advance(90.0);
        clock.advance(-45.0);
        assert_eq!(clock.minutes(), 90.0);
    }
}
