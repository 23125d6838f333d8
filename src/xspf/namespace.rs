//! XML namespaces used by XSPF playlists and VLC's extensions to them

/// Default namespace of every XSPF document
pub const XSPF_NS: &str = "http://xspf.org/ns/0/";

/// VLC's playlist extension namespace
pub const VLC_NS: &str = "http://www.videolan.org/vlc/playlist/ns/0/";

/// Prefix VLC expects its namespace under
pub const VLC_PREFIX: &str = "vlc";

/// The two namespaces a playlist element can live in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Xspf,
    Vlc,
}

impl Namespace {
    pub fn uri(self) -> &'static str {
        match self {
            Namespace::Xspf => XSPF_NS,
            Namespace::Vlc => VLC_NS,
        }
    }

    /// Prefix used when we create elements; `None` means default namespace
    pub fn default_prefix(self) -> Option<&'static str> {
        match self {
            Namespace::Xspf => None,
            Namespace::Vlc => Some(VLC_PREFIX),
        }
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            XSPF_NS => Some(Namespace::Xspf),
            VLC_NS => Some(Namespace::Vlc),
            _ => None,
        }
    }

    /// `xmlns` attribute name declaring this namespace under its default prefix
    pub fn declaration_attribute(self) -> String {
        match self.default_prefix() {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_round_trip() {
        for ns in [Namespace::Xspf, Namespace::Vlc] {
            assert_eq!(Namespace::from_uri(ns.uri()), Some(ns));
        }
        assert_eq!(Namespace::from_uri("http://example.com/"), None);
    }

    #[test]
    fn test_declaration_attribute() {
        assert_eq!(Namespace::Xspf.declaration_attribute(), "xmlns");
        assert_eq!(Namespace::Vlc.declaration_attribute(), "xmlns:vlc");
    }
}
