use crate::error::{KeysError, Result};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Read and parse one JSON document. The file is closed before this returns.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| KeysError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        // from_reader surfaces read failures as serde_json io errors
        if source.is_io() {
            KeysError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            KeysError::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!(path = %path.display(), "loaded document");
    Ok(value)
}
