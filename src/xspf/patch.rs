//! Pause-at-end patching of existing playlists

use std::path::Path;

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::rules::PAUSE_AT_END_OPTION;
use crate::xspf::dom::{Document, Element};
use crate::xspf::namespace::{Namespace, VLC_NS, VLC_PREFIX};

/// Append a `play-and-pause` option to every track extension that lacks one.
///
/// Returns the number of tracks that changed; zero means the document was
/// already patched and nothing was touched. `source` only labels errors.
pub fn patch_document(document: &mut Document, source: &Path) -> DomainResult<usize> {
    let declared = document.declared_prefix(Namespace::Vlc);
    let option_name = match &declared {
        Some(Some(prefix)) => format!("{}:option", prefix),
        Some(None) => "option".to_string(),
        None => format!("{}:option", VLC_PREFIX),
    };

    let track_list = document
        .root_mut()
        .find_mut(Namespace::Xspf, "trackList")
        .ok_or_else(|| DomainError::InvalidPlaylist {
            path: source.display().to_string(),
            message: "no trackList element in the XSPF namespace".to_string(),
        })?;

    let mut modified = 0;
    for (index, track) in track_list.find_all_mut(Namespace::Xspf, "track").enumerate() {
        let mut touched = false;
        for extension in track.find_all_mut(Namespace::Xspf, "extension") {
            let already_paused = extension
                .find_all(Namespace::Vlc, "option")
                .any(|option| option.text() == PAUSE_AT_END_OPTION);
            if !already_paused {
                extension.push_child(
                    Element::from_qualified_name(Some(VLC_NS), option_name.clone())
                        .with_text(PAUSE_AT_END_OPTION),
                );
                touched = true;
            }
        }
        if touched {
            debug!(track = index, "Added {}", PAUSE_AT_END_OPTION);
            modified += 1;
        }
    }

    if modified > 0 && declared.is_none() {
        document
            .root_mut()
            .set_attribute(&Namespace::Vlc.declaration_attribute(), VLC_NS);
    }

    Ok(modified)
}
