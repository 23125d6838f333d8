// Application layer - Use case interactors

pub mod build_interactor;
pub mod container;
pub mod patch_interactor;

// Re-export interactors
pub use build_interactor::BuildPlaylistInteractor;
pub use container::{AppContainer, DefaultAppContainer};
pub use patch_interactor::PatchPlaylistInteractor;
