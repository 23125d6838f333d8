//! Build a VLC playlist from a video's chapters
//!
//! ```bash
//! build-playlist "Conference Talk.mkv"          # flat playlist, title cleared
//! build-playlist "Conference Talk.mkv" --tree   # node per chapter, video untouched
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use chapter_playlist::cli::{commands, BuildPlaylistCli};

fn main() -> Result<ExitCode> {
    let cli = BuildPlaylistCli::parse();
    commands::build_playlist(cli)
}
