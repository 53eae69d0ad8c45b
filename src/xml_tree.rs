//! Generic element tree built from the `quick-xml` event stream.
//!
//! The record extractors never see XML events. They walk this tree, which keeps
//! every element (by local name), its attributes and its text in document order.
//! Namespace prefixes are dropped so `<gpx:wpt>` and `<wpt>` look the same.

use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};

use crate::error::DocumentParseError;

type Result<T> = std::result::Result<T, DocumentParseError>;

/// One XML element with its attributes, text content and child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Local name of the element, without any namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the attribute with the given local name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Text directly inside this element (CDATA and entities resolved), trimmed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// All children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child with the given local name.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(|c| c.text().to_string())
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = std::str::from_utf8(start.local_name().as_ref())?.to_string();

        let mut attributes = Vec::new();
        for attr_result in start.attributes() {
            let attr = attr_result.map_err(quick_xml::Error::from)?;
            let key = std::str::from_utf8(attr.key.local_name().as_ref())?.to_string();
            let raw = std::str::from_utf8(&attr.value)?;
            let value = quick_xml::escape::unescape(raw)
                .map_err(quick_xml::Error::from)?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }
}

/// Parse XML text into its root element.
///
/// The whole document is read before returning, so callers only ever see a
/// complete tree. Comments, processing instructions and the declaration are
/// dropped, as is text outside the root element.
pub fn parse_xml(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let element = XmlElement::from_start(&e)?;
                if stack.is_empty() && root.is_some() {
                    return Err(DocumentParseError::MultipleRoots(element.name));
                }
                stack.push(element);
            }
            Event::Empty(e) => {
                let element = XmlElement::from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            // quick-xml already rejects mismatched end tags
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element)?;
                }
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(std::str::from_utf8(e.as_ref())?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(std::str::from_utf8(e.as_ref())?);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(current) = stack.last_mut() {
                    push_reference(&mut current.text, &e)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(DocumentParseError::UnclosedElement(open.name));
    }

    root.ok_or(DocumentParseError::NoRootElement)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => return Err(DocumentParseError::MultipleRoots(element.name)),
        None => *root = Some(element),
    }
    Ok(())
}

/// Append the character behind `&...;` to `text`.
/// Handles character references (&#60; &#x3C;) and the predefined XML entities.
fn push_reference(text: &mut String, reference: &BytesRef<'_>) -> Result<()> {
    if let Some(ch) = reference.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }

    match std::str::from_utf8(reference.as_ref())? {
        "amp" => text.push('&'),
        "lt" => text.push('<'),
        "gt" => text.push('>'),
        "quot" => text.push('"'),
        "apos" => text.push('\''),
        other => log::warn!("skipping unknown entity reference &{other};"),
    }
    Ok(())
}
