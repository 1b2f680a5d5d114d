//! Registry construction at startup.
//!
//! The registry is seeded from the built-in clinics unless
//! [`ServerSettings::seed_path`] names a JSON seed file.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::{ClinicRegistry, ClinicSeed, SeedError};
use crate::settings::ServerSettings;

/// Errors returned while building the startup registry.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Seed file could not be read.
    #[error("failed to read seed file at {path}: {source}")]
    SeedRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Seed content was rejected.
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),
}

/// Build the clinic registry described by `settings`.
///
/// # Examples
/// ```no_run
/// use std::ffi::OsString;
///
/// use clinic_backend::settings::ServerSettings;
/// use clinic_backend::startup::load_clinic_registry;
/// use ortho_config::OrthoConfig;
///
/// let settings = ServerSettings::load_from_iter([OsString::from("clinic-backend")])
///     .expect("settings load");
/// let registry = load_clinic_registry(&settings).expect("registry builds");
/// assert!(!registry.is_empty());
/// ```
pub fn load_clinic_registry(settings: &ServerSettings) -> Result<ClinicRegistry, StartupError> {
    let seed = match settings.seed_path() {
        Some(path) => {
            info!(path = %path.display(), "loading clinic seed file");
            ClinicSeed::from_json(&read_seed_file(path)?)?
        }
        None => ClinicSeed::builtin()?,
    };
    let registry = seed.into_registry()?;
    info!(clinics = registry.len(), "clinic registry ready");
    Ok(registry)
}

fn read_seed_file(path: &Path) -> Result<String, StartupError> {
    let read_error = |source| StartupError::SeedRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let payload = dir.read(Path::new(file_name)).map_err(read_error)?;
    String::from_utf8(payload)
        .map_err(|source| read_error(std::io::Error::new(std::io::ErrorKind::InvalidData, source)))
}
