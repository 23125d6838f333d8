//! Command implementations

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::init_logging;
use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::{BuildPlaylistCli, PatchPlaylistCli};
use crate::config_initialization::initialize_configuration;
use crate::domain::model::BuildRequest;

/// Execute `build-playlist`
pub fn build_playlist(cli: BuildPlaylistCli) -> Result<ExitCode> {
    let Some(video) = cli.video.clone() else {
        return Ok(ExitCode::SUCCESS);
    };

    let config = initialize_configuration(&cli.overrides())
        .context("Failed to initialize configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    if !cli.ignored.is_empty() {
        warn!(ignored = ?cli.ignored, "Ignoring extra arguments");
    }

    if !video.exists() {
        eprintln!("File {} does not exist", video.display());
        return Ok(ExitCode::from(1));
    }

    let container = DefaultAppContainer::new(&config);
    let report = container
        .build_interactor()
        .execute(&BuildRequest::new(video.clone(), cli.tree))
        .with_context(|| format!("Failed to build playlist for {}", video.display()))?;

    info!(
        tracks = report.track_count,
        title_scrubbed = report.title_scrubbed,
        "Build completed"
    );
    println!("Playlist --> {}", report.output_path.display());
    Ok(ExitCode::SUCCESS)
}

/// Execute `patch-playlist`
pub fn patch_playlist(cli: PatchPlaylistCli) -> Result<ExitCode> {
    let config = initialize_configuration(&cli.overrides())
        .context("Failed to initialize configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let container = DefaultAppContainer::new(&config);
    let report = container.patch_interactor().patch_all(&cli.playlists);

    for output in &report.written {
        println!("{}", output.display());
    }

    info!(
        written = report.written.len(),
        unchanged = report.unchanged.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "Patch completed"
    );

    if report.has_failures() {
        for (path, error) in &report.failed {
            eprintln!("Failed to patch {}: {}", path.display(), error);
        }
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
