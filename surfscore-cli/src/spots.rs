//! Spots command implementation for the surfscore CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use surfscore_core::SpotCatalogue;

use crate::catalogue::load_catalogue;
use crate::{ARG_SPOTS_FILE, CliError};

/// CLI arguments for the `spots` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "spots",
    about = "List the spot identifiers accepted by `surfscore score`"
)]
#[ortho_config(prefix = "SURFSCORE")]
pub(crate) struct SpotsArgs {
    /// JSON spot catalogue replacing the built-in spots.
    #[arg(long = ARG_SPOTS_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) spots_file: Option<Utf8PathBuf>,
}

pub(super) fn run_spots(args: SpotsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_spots_with(args, &mut stdout)
}

impl SpotsArgs {
    fn into_spots_file(self) -> Result<Option<Utf8PathBuf>, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(merged.spots_file)
    }
}

pub(super) fn run_spots_with(args: SpotsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let spots_file = args.into_spots_file()?;
    let catalogue = load_catalogue(spots_file.as_deref())?;
    write_spots(writer, &catalogue)
}

/// Write one `id<TAB>name<TAB>orientation°` line per spot.
pub(super) fn write_spots(
    writer: &mut dyn Write,
    catalogue: &SpotCatalogue,
) -> Result<(), CliError> {
    for spot in catalogue.iter() {
        writeln!(
            writer,
            "{}\t{}\t{}°",
            spot.id, spot.name, spot.profile.orientation_deg
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
