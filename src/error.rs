use std::str::Utf8Error;

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, GpxError>;

/// Reasons the XML text could not be turned into an element tree.
#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid UTF-8 in document: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("element <{0}> is never closed")]
    UnclosedElement(String),

    #[error("document has no root element")]
    NoRootElement,

    #[error("document has more than one root element (found <{0}> after the root)")]
    MultipleRoots(String),

    #[error("root element is <{0}>, expected <gpx>")]
    UnexpectedRoot(String),
}

#[derive(Debug, Error)]
pub enum GpxError {
    #[error("failed to parse GPX document: {0}")]
    DocumentParse(#[from] DocumentParseError),

    /// A `<rte>` without any `<rtept>` children.
    #[error("route #{route} has no <rtept> points")]
    MalformedRoute { route: usize },

    /// A `<trkseg>` without any `<trkpt>` children.
    #[error("segment #{segment} of track #{track} has no <trkpt> points")]
    MalformedTrack { track: usize, segment: usize },

    #[error("no GPX document has been parsed yet")]
    NotParsed,
}

impl From<GpxError> for JsValue {
    fn from(e: GpxError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
