//! Assembly of tracks into a complete playlist document

use crate::xspf::dom::{Document, Element};
use crate::xspf::namespace::{Namespace, VLC_NS, XSPF_NS};
use crate::xspf::track::track_id;

/// Wrap `tracks` into a playlist titled `title`.
///
/// With `tree` set, a VLC extension block is appended holding one
/// collapsible `vlc:node` per track, labelled with the track's title and
/// pointing at it through its `vlc:id`.
pub fn assemble_playlist(title: &str, tracks: Vec<Element>, tree: bool) -> Document {
    let tree_block = tree.then(|| tree_extension(&tracks));

    let mut track_list = Element::new(Namespace::Xspf, "trackList");
    for track in tracks {
        track_list.push_child(track);
    }

    let mut root = Element::new(Namespace::Xspf, "playlist")
        .with_attribute(&Namespace::Xspf.declaration_attribute(), XSPF_NS)
        .with_attribute(&Namespace::Vlc.declaration_attribute(), VLC_NS)
        .with_attribute("version", "1")
        .with_child(Element::new(Namespace::Xspf, "title").with_text(title))
        .with_child(track_list);

    if let Some(block) = tree_block {
        root.push_child(block);
    }

    Document::new(root)
}

fn tree_extension(tracks: &[Element]) -> Element {
    let mut extension =
        Element::new(Namespace::Xspf, "extension").with_attribute("application", VLC_NS);

    for (index, track) in tracks.iter().enumerate() {
        let title = track.find_text(Namespace::Xspf, "title").unwrap_or_default();
        let tid = track_id(track).unwrap_or_else(|| index.to_string());
        extension.push_child(
            Element::new(Namespace::Vlc, "node")
                .with_attribute("title", title)
                .with_child(Element::new(Namespace::Vlc, "item").with_attribute("tid", tid)),
        );
    }

    extension
}
