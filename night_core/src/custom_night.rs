//! Player-authored difficulty levels for the custom night.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::actors::ActorId;

/// Per-actor level caps. Most actors share one cap; the Marionette is
/// held lower because its pressure does not scale like the others.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelLimits {
    pub default_max: i32,
    pub marionette_max: i32,
}

impl Default for LevelLimits {
    fn default() -> Self {
        LevelLimits {
            default_max: 20,
            marionette_max: 10,
        }
    }
}

impl LevelLimits {
    pub fn max_for(&self, id: ActorId) -> i32 {
        match id {
            ActorId::Marionette => self.marionette_max,
            _ => self.default_max,
        }
    }
}

/// The custom-night level sheet. Unset actors default to level 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomNightConfig {
    limits: LevelLimits,
    levels: BTreeMap<ActorId, i32>,
}

impl CustomNightConfig {
    pub fn new() -> Self {
        CustomNightConfig::default()
    }

    pub fn with_limits(limits: LevelLimits) -> Self {
        CustomNightConfig {
            limits,
            levels: BTreeMap::new(),
        }
    }

    pub fn limits(&self) -> LevelLimits {
        self.limits
    }

    pub fn max_for(&self, id: ActorId) -> i32 {
        self.limits.max_for(id)
    }

    pub fn level(&self, id: ActorId) -> i32 {
        self.levels.get(&id).copied().unwrap_or(0)
    }

    /// Stores a level for `id`, clamped to `[0, cap]` for that actor.
    pub fn set_level(&mut self, id: ActorId, level: i32) {
        let clamped = level.clamp(0, self.limits.max_for(id));
        self.levels.insert(id, clamped);
    }

    pub fn reset(&mut self) {
        self.levels.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, i32)> + '_ {
        self.levels.iter().map(|(id, level)| (*id, *level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_default_to_zero() {
        let config = CustomNightConfig::new();
        assert_eq!(config.level(ActorId::Showman), 0);
    }

    #[test]
    fn levels_clamp_to_the_actor_cap() {
        let mut config = CustomNightConfig::new();
        config.set_level(ActorId::Showman, 35);
        assert_eq!(config.level(ActorId::Showman), 20);

        config.set_level(ActorId::Marionette, 15);
        assert_eq!(config.level(ActorId::Marionette), 10);

        config.set_level(ActorId::Prowler, -3);
        assert_eq!(config.level(ActorId::Prowler), 0);
    }

    #[test]
    fn custom_limits_raise_the_cap() {
        let mut config = CustomNightConfig::with_limits(LevelLimits {
            default_max: 50,
            marionette_max: 25,
        });
        config.set_level(ActorId::Tangle, 40);
        assert_eq!(config.level(ActorId::Tangle), 40);
        config.set_level(ActorId::Marionette, 40);
        assert_eq!(config.level(ActorId::Marionette), 25);
    }

    #[test]
    fn reset_clears_the_sheet() {
        let mut config = CustomNightConfig::new();
        config.set_level(ActorId::Drifter, 8);
        config.reset();
        assert_eq!(config.level(ActorId::Drifter), 0);
        assert_eq!(config.iter().count(), 0);
    }
}
