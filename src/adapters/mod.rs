// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod probe_ffprobe;
pub mod process_runner;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_ffmpeg::FfmpegTitleScrubber;
pub use probe_ffprobe::FfprobeAdapter;
pub use process_runner::CommandRunner;
pub use toml_config::AppConfig;
pub use tracing_log::init_logging;
