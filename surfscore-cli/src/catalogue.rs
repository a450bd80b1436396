//! Spot catalogue loading shared by the `score` and `spots` commands.

use camino::Utf8Path;
use log::debug;
use surfscore_core::SpotCatalogue;

use crate::{ARG_SPOTS_FILE, CliError};

/// Load the catalogue at `path`, or the built-in catalogue when no path is
/// configured.
pub(crate) fn load_catalogue(path: Option<&Utf8Path>) -> Result<SpotCatalogue, CliError> {
    path.map_or_else(|| Ok(SpotCatalogue::builtin()), load_catalogue_file)
}

fn load_catalogue_file(path: &Utf8Path) -> Result<SpotCatalogue, CliError> {
    require_existing(path, ARG_SPOTS_FILE)?;
    let contents =
        surfscore_fs::read_utf8_file(path).map_err(|source| CliError::ReadCatalogue {
            path: path.to_path_buf(),
            source,
        })?;
    let catalogue =
        SpotCatalogue::from_json_str(&contents).map_err(|source| CliError::ParseCatalogue {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
    debug!("loaded {} spots from {path}", catalogue.len());
    Ok(catalogue)
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match surfscore_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
