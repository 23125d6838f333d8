//! Pretty-printing of [`Document`]s

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::domain::errors::{DomainError, DomainResult};
use crate::xspf::dom::{Document, Element, Node};

const INDENT_WIDTH: usize = 2;

/// Serialize `document` as UTF-8 with an XML declaration, indented by two
/// spaces and terminated by a newline.
pub fn write_document(document: &Document) -> DomainResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(DomainError::xml)?;
    write_element(&mut writer, document.root())?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(DomainError::xml)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> DomainResult<()> {
    let mut start = BytesStart::new(element.qualified_name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.nodes().is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(DomainError::xml);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(DomainError::xml)?;
    for node in element.nodes() {
        match node {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(DomainError::xml)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.qualified_name())))
        .map_err(DomainError::xml)
}
