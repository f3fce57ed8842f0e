use std::fs;
use std::io::{self, Write};
use std::path::Path;

use engine_logging::{engine_debug, engine_info, engine_warn};
use tempfile::NamedTempFile;

use crate::{Challenge, ChallengeFile, ContentError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeFormat {
    Json,
    Ron,
}

impl ChallengeFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

pub fn parse_challenge_json(text: &str) -> Result<Challenge, ContentError> {
    let file: ChallengeFile = serde_json::from_str(text)?;
    Challenge::try_from(file)
}

pub fn parse_challenge_ron(text: &str) -> Result<Challenge, ContentError> {
    let file: ChallengeFile = ron::from_str(text)?;
    Challenge::try_from(file)
}

/// Reads and validates a challenge file.
///
/// Unknown action tags are accepted and reported as warnings; the engine
/// treats them as no-ops.
pub fn load_challenge(path: &Path) -> Result<Challenge, ContentError> {
    let format = ChallengeFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let challenge = match format {
        ChallengeFormat::Json => parse_challenge_json(&text)?,
        ChallengeFormat::Ron => parse_challenge_ron(&text)?,
    };

    for (index, tag) in challenge.unrecognized_actions() {
        engine_warn!(
            "Challenge {:?} step {index}: unrecognized grid action {tag:?}",
            challenge.id
        );
    }
    engine_info!(
        "Loaded challenge {:?} ({} steps) from {:?}",
        challenge.id,
        challenge.steps.len(),
        path
    );
    Ok(challenge)
}

/// Writes `challenge` to `path` through a temp file in the same directory, so
/// a failed write never leaves a truncated file behind.
pub fn save_challenge(path: &Path, challenge: &Challenge) -> Result<(), ContentError> {
    let format = ChallengeFormat::from_path(path)?;
    let file = ChallengeFile::from(challenge);
    let content = match format {
        ChallengeFormat::Json => serde_json::to_string_pretty(&file)?,
        ChallengeFormat::Ron => {
            ron::ser::to_string_pretty(&file, ron::ser::PrettyConfig::new())?
        }
    };

    let io_err = |source: io::Error| ContentError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    engine_debug!("Saved challenge {:?} to {:?}", challenge.id, path);
    Ok(())
}
