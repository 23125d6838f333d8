// Ports - Interface definitions (contracts)

use std::path::Path;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for querying a video's chapter and title metadata
pub trait MediaProbePort: Send + Sync {
    /// Ordered chapter records.
    ///
    /// Fails with `MissingMetadata` when the chapter list or any chapter's
    /// start, end or title is absent.
    fn chapters(&self, video_path: &Path) -> DomainResult<Vec<ChapterRecord>>;

    /// Container title tag; `Ok(None)` when the container has none
    fn title(&self, video_path: &Path) -> DomainResult<Option<String>>;
}

/// Port for clearing a video's embedded title
pub trait TitleScrubPort: Send + Sync {
    /// Rewrite `video_path` in place with its title tag cleared.
    ///
    /// The original must survive any failure, including a crash midway.
    fn strip_title(&self, video_path: &Path) -> DomainResult<()>;
}
