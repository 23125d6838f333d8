//! Make every track of the given playlists pause at its end
//!
//! ```bash
//! patch-playlist "Conference Talk - PLAYLIST.xspf" other.xspf
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use chapter_playlist::cli::{commands, PatchPlaylistCli};

fn main() -> Result<ExitCode> {
    let cli = PatchPlaylistCli::parse();
    commands::patch_playlist(cli)
}
