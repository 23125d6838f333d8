//! Namespace-aware parsing of playlist documents into the [`Document`] model

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

use crate::domain::errors::{DomainError, DomainResult};
use crate::xspf::dom::{Document, Element};

/// Parse a complete XML document.
///
/// Comments, processing instructions and the declaration are dropped.
/// Whitespace-only text between elements is discarded; text inside leaf
/// elements is kept verbatim.
pub fn parse_document(xml: &str) -> DomainResult<Document> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = NsReader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (resolved, event) = reader.read_resolved_event().map_err(DomainError::xml)?;
        match event {
            Event::Start(start) => {
                stack.push(element_from_start(resolved, &start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(resolved, &start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| DomainError::Xml("unexpected closing tag".to_string()))?;
                element.drop_layout_whitespace();
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(parent) = stack.last_mut() {
                    let text = text.unescape().map_err(DomainError::xml)?;
                    parent.push_text(text.into_owned());
                }
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8(data.into_inner().into_owned())
                        .map_err(DomainError::xml)?;
                    parent.push_text(text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(DomainError::Xml(format!(
            "unclosed element <{}>",
            open.qualified_name()
        )));
    }

    root.map(Document::new)
        .ok_or_else(|| DomainError::Xml("document has no root element".to_string()))
}

fn element_from_start(resolved: ResolveResult<'_>, start: &BytesStart<'_>) -> DomainResult<Element> {
    let namespace = match resolved {
        ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.0).into_owned()),
        _ => None,
    };
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::from_qualified_name(namespace.as_deref(), name);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(DomainError::xml)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(DomainError::xml)?;
        element.set_attribute(&key, value.into_owned());
    }

    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> DomainResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(DomainError::Xml(format!(
            "second root element <{}>",
            element.qualified_name()
        )));
    }
    *root = Some(element);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xspf::namespace::{Namespace, VLC_NS, XSPF_NS};

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<playlist xmlns="http://xspf.org/ns/0/" xmlns:vlc="http://www.videolan.org/vlc/playlist/ns/0/" version="1">
  <!-- saved by hand -->
  <title>Talk &amp; Demo</title>
  <trackList>
    <track>
      <title><![CDATA[Intro]]></title>
      <extension application="http://www.videolan.org/vlc/playlist/ns/0/">
        <vlc:id>0</vlc:id>
        <vlc:option>start-time=0.000000</vlc:option>
      </extension>
    </track>
  </trackList>
</playlist>
"#;

    #[test]
    fn test_parse_resolves_namespaces() {
        let doc = parse_document(SAMPLE).unwrap();
        let root = doc.root();
        assert!(root.is(Namespace::Xspf, "playlist"));
        assert_eq!(root.attribute("version"), Some("1"));
        assert_eq!(root.attribute("xmlns:vlc"), Some(VLC_NS));
        assert_eq!(root.find_text(Namespace::Xspf, "title").as_deref(), Some("Talk & Demo"));

        let track = root
            .find(Namespace::Xspf, "trackList")
            .and_then(|list| list.find(Namespace::Xspf, "track"))
            .unwrap();
        assert_eq!(track.find_text(Namespace::Xspf, "title").as_deref(), Some("Intro"));

        let extension = track.find(Namespace::Xspf, "extension").unwrap();
        let id = extension.find(Namespace::Vlc, "id").unwrap();
        assert_eq!(id.qualified_name(), "vlc:id");
        assert_eq!(id.text(), "0");
    }

    #[test]
    fn test_parse_drops_layout_whitespace() {
        let doc = parse_document(SAMPLE).unwrap();
        let track_list = doc.root().find(Namespace::Xspf, "trackList").unwrap();
        assert_eq!(track_list.nodes().len(), 1);
    }

    #[test]
    fn test_parse_without_default_namespace() {
        let doc = parse_document("<playlist><trackList/></playlist>").unwrap();
        assert_eq!(doc.root().namespace(), None);
        assert!(doc.root().find(Namespace::Xspf, "trackList").is_none());
    }

    #[test]
    fn test_parse_honours_custom_prefix() {
        let xml = format!(
            r#"<p:playlist xmlns:p="{}" xmlns:v="{}"><p:trackList/><v:node/></p:playlist>"#,
            XSPF_NS, VLC_NS
        );
        let doc = parse_document(&xml).unwrap();
        assert!(doc.root().is(Namespace::Xspf, "playlist"));
        assert!(doc.root().find(Namespace::Xspf, "trackList").is_some());
        assert!(doc.root().find(Namespace::Vlc, "node").is_some());
    }

    #[test]
    fn test_parse_rejects_broken_documents() {
        assert!(parse_document("").is_err());
        assert!(parse_document("<playlist>").is_err());
        assert!(parse_document("<a></b>").is_err());
        assert!(parse_document("<a/><b/>").is_err());
    }
}
