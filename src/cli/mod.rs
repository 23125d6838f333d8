//! CLI module for the playlist tools
//!
//! This module handles command-line argument parsing for both binaries;
//! execution lives in [`commands`].

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config_initialization::{ConfigOverrides, ENV_CONFIG};

pub mod commands;

/// Options shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file
    #[arg(long, env = ENV_CONFIG, global = true)]
    pub config: Option<PathBuf>,
}

/// Build a VLC playlist with one track per chapter of a video
#[derive(Parser, Debug)]
#[command(name = "build-playlist")]
#[command(about = "Build an XSPF playlist from a video's chapters")]
#[command(version)]
pub struct BuildPlaylistCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// ffprobe executable
    #[arg(long)]
    pub ffprobe: Option<PathBuf>,

    /// ffmpeg executable
    #[arg(long)]
    pub ffmpeg: Option<PathBuf>,

    /// Group tracks under per-chapter nodes and leave the video untouched
    #[arg(long)]
    pub tree: bool,

    /// Video file to read chapters from
    pub video: Option<PathBuf>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

impl BuildPlaylistCli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.global.config.clone(),
            ffprobe: self.ffprobe.clone(),
            ffmpeg: self.ffmpeg.clone(),
            log_level: self.global.log_level.clone(),
            json_logs: self.global.json_logs,
        }
    }
}

/// Make every track of one or more playlists pause at its end
#[derive(Parser, Debug)]
#[command(name = "patch-playlist")]
#[command(about = "Add play-and-pause to every track of XSPF playlists")]
#[command(version)]
pub struct PatchPlaylistCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Playlists to patch; missing files and non-.xspf paths are skipped
    pub playlists: Vec<PathBuf>,
}

impl PatchPlaylistCli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.global.config.clone(),
            log_level: self.global.log_level.clone(),
            json_logs: self.global.json_logs,
            ..Default::default()
        }
    }
}
