//! Standalone challenge modes. Each one records its own completion
//! flag on a win; none of them touch campaign progression.

mod blackout;
mod encore;
mod overtime;
mod shuffle;

pub use blackout::BlackoutChallenge;
pub use encore::EncoreChallenge;
pub use overtime::OvertimeChallenge;
pub use shuffle::ShuffleChallenge;
