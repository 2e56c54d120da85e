use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::Section;

use super::store::{ContentError, ContentStore};

/// Error returned when a content file cannot be used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid content in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ContentError,
    },
}

/// Loads a full content set from a JSON file and checks its invariants.
///
/// The file mirrors `ContentStore`'s serialized form: four arrays named
/// `speaking_prompts`, `writing_prompts`, `listening_exercises` and
/// `reading_questions`.
pub fn load_content_from_json<P: AsRef<Path>>(path: P) -> Result<ContentStore, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let store: ContentStore =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    store.validate().map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    for section in Section::ALL {
        debug!(section = %section, items = store.len(section), "Loaded section content");
    }
    info!(path = %path.display(), "Loaded practice content");

    Ok(store)
}
