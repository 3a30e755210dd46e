//! Core engine for scripted night shifts.
//!
//! A [`Director`] advances a virtual [`NightClock`] and drives the
//! selected night or challenge through hour and half-hour callbacks.
//! Scripts mutate the world through a [`NightContext`]: a roster of
//! heterogeneous actors behind one handle type, a delayed-action queue,
//! completion bitflags and the custom-night level sheet. The host owns
//! the actual per-frame actor simulation; this crate owns the schedule.

pub mod actors;
pub mod challenges;
pub mod clock;
pub mod completion;
pub mod context;
pub mod custom_night;
pub mod director;
pub mod events;
pub mod nights;
pub mod registry;
pub mod roster;
pub mod sim;

pub use actors::{ActorHandle, ActorId};
pub use clock::NightClock;
pub use completion::{ChallengeFlags, CompletionTracker, NightFlags};
pub use context::NightContext;
pub use custom_night::CustomNightConfig;
pub use director::{Director, NightMode};
pub use events::{Challenge, Night, TimeEvent};
pub use registry::TimeEventRegistry;
pub use roster::ActorRoster;
