//! XSPF playlist documents: model, parsing, serialization, and the two
//! transformations this crate performs on them.

pub mod dom;
pub mod namespace;
pub mod patch;
pub mod playlist;
pub mod reader;
pub mod track;
pub mod writer;

pub use dom::{Document, Element, Node};
pub use namespace::{Namespace, VLC_NS, VLC_PREFIX, XSPF_NS};
pub use patch::patch_document;
pub use playlist::assemble_playlist;
pub use track::{track_id, TrackBuilder};
