use crate::defaults::Defaults;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Defaults backed by a JSON object on disk.
///
/// Values are kept in memory and written through on every mutation, so a read
/// always observes the preceding write even when the disk write failed.
#[derive(Debug)]
pub struct FileDefaults {
    path: PathBuf,
    values: RwLock<BTreeMap<String, f64>>,
}

impl FileDefaults {
    #[instrument]
    pub fn open(path: impl AsRef<Path> + std::fmt::Debug) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match read_file(&path) {
            Ok(Some(values)) => {
                info!("💾 Loaded {} default(s) from '{}'", values.len(), path.display());
                values
            }
            Ok(None) => {
                debug!("💾 No defaults at '{}', starting empty", path.display());
                BTreeMap::new()
            }
            Err(err) => {
                warn!("⚠️ Ignoring unreadable defaults at '{}': {}", path.display(), err);
                BTreeMap::new()
            }
        };

        FileDefaults {
            path,
            values: RwLock::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate(&self, f: impl FnOnce(&mut BTreeMap<String, f64>)) {
        let mut values = self.values.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *values);

        if let Err(err) = write_file(&self.path, &values) {
            warn!("⚠️ Could not persist defaults to '{}': {}", self.path.display(), err);
        }
    }
}

impl Defaults for FileDefaults {
    fn double(&self, key: &str) -> f64 {
        let values = self.values.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        values.get(key).copied().unwrap_or_default()
    }

    fn set_double(&self, key: &str, value: f64) {
        self.mutate(|values| {
            values.insert(key.to_string(), value);
        });
    }

    fn remove(&self, key: &str) {
        self.mutate(|values| {
            values.remove(key);
        });
    }
}

fn read_file(path: &Path) -> Result<Option<BTreeMap<String, f64>>, DefaultsError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(DefaultsError::Io {
                source: err,
                path: path.to_path_buf(),
            });
        }
    };

    Ok(Some(serde_json::from_str(&data)?))
}

fn write_file(path: &Path, values: &BTreeMap<String, f64>) -> Result<(), DefaultsError> {
    let io_error = |source: io::Error| DefaultsError::Io {
        source,
        path: path.to_path_buf(),
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    // JSON has no representation for NaN or infinity
    let finite: BTreeMap<&String, &f64> = values.iter().filter(|(_, value)| value.is_finite()).collect();
    let json = serde_json::to_string_pretty(&finite)?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json).map_err(io_error)?;
    fs::rename(&tmp_path, path).map_err(io_error)
}

#[derive(Error, Debug)]
pub enum DefaultsError {
    #[error("{source} ({})", .path.display())]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid defaults file: {0}")]
    Json(#[from] serde_json::Error),
}
