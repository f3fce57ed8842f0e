//! Gridsim content: challenge authoring files and their conversion to engine types.
mod challenge;
mod error;
mod load;
mod types;

pub use challenge::Challenge;
pub use error::ContentError;
pub use load::{
    load_challenge, parse_challenge_json, parse_challenge_ron, save_challenge, ChallengeFormat,
};
pub use types::{ChallengeFile, CoordFile, GridEffectFile, GridStateFile, SelectionFile, StepFile};
