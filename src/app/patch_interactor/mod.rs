// Patch interactor - Orchestrates the pause-at-end use case

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::has_playlist_extension;
use crate::utils::path::patched_playlist_path;
use crate::xspf::{patch_document, Document};

/// Interactor for making playlists pause at the end of every track
#[derive(Debug, Default)]
pub struct PatchPlaylistInteractor;

impl PatchPlaylistInteractor {
    pub fn new() -> Self {
        Self
    }

    /// Patch one playlist.
    ///
    /// Returns the path of the written copy, or `None` when every track
    /// already pauses at its end and nothing was written.
    pub fn patch_file(&self, playlist: &Path) -> DomainResult<Option<PathBuf>> {
        let mut document = Document::read_file(playlist)?;
        let changed = patch_document(&mut document, playlist)?;
        if changed == 0 {
            debug!(playlist = %playlist.display(), "Already pauses at end");
            return Ok(None);
        }

        let output = patched_playlist_path(playlist);
        document.write_file(&output)?;
        info!(
            output = %output.display(),
            tracks = changed,
            "Patched playlist written"
        );
        Ok(Some(output))
    }

    /// Patch every usable path in order. Missing files and non-playlists
    /// are skipped; a failing file is recorded and the rest still run.
    pub fn patch_all<I, P>(&self, paths: I) -> PatchReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = PatchReport::default();

        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                debug!(path = %path.display(), "Skipping, not an existing file");
                report.skip(path, SkipReason::NotFound);
                continue;
            }
            if !has_playlist_extension(path) {
                debug!(path = %path.display(), "Skipping, not an .xspf playlist");
                report.skip(path, SkipReason::NotPlaylist);
                continue;
            }

            match self.patch_file(path) {
                Ok(Some(output)) => report.written.push(output),
                Ok(None) => report.unchanged.push(path.to_path_buf()),
                Err(e) => {
                    error!(playlist = %path.display(), error = %e, "Failed to patch playlist");
                    report.failed.push((path.to_path_buf(), e));
                }
            }
        }

        report
    }
}
