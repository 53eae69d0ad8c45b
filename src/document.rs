use geojson::FeatureCollection;

use crate::converter::to_feature_collection;
use crate::error::{DocumentParseError, GpxError, Result};
use crate::gpx_types::*;
use crate::options::ConvertOptions;
use crate::parser::{self, extract_metadata, extract_routes, extract_tracks, extract_waypoints};
use crate::xml_tree::XmlElement;

/// Parsed GPX data: metadata plus all waypoints, routes, and tracks.
///
/// Built in one pass from an element tree and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GpxDocument {
    metadata: Metadata,
    waypoints: Vec<GpxPoint>,
    routes: Vec<GpxRoute>,
    tracks: Vec<GpxTrack>,
}

impl GpxDocument {
    /// Run every extractor over a `<gpx>` root element.
    ///
    /// The tree is only read, so one tree may feed any number of documents.
    pub fn from_tree(root: &XmlElement) -> Result<Self> {
        if root.name() != "gpx" {
            return Err(DocumentParseError::UnexpectedRoot(root.name().to_string()).into());
        }

        let document = Self {
            metadata: extract_metadata(root),
            waypoints: extract_waypoints(root),
            routes: extract_routes(root)?,
            tracks: extract_tracks(root)?,
        };

        log::debug!(
            "parsed GPX document: {} waypoints, {} routes, {} tracks",
            document.waypoints.len(),
            document.routes.len(),
            document.tracks.len()
        );

        Ok(document)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn waypoints(&self) -> &[GpxPoint] {
        &self.waypoints
    }

    pub fn routes(&self) -> &[GpxRoute] {
        &self.routes
    }

    pub fn tracks(&self) -> &[GpxTrack] {
        &self.tracks
    }

    /// Project onto GeoJSON with default options.
    pub fn to_geojson(&self) -> FeatureCollection {
        to_feature_collection(self, &ConvertOptions::default())
    }

    pub fn to_geojson_with(&self, opts: &ConvertOptions) -> FeatureCollection {
        to_feature_collection(self, opts)
    }
}

/// Stateful parser holding the most recently parsed document.
///
/// Accessors fail with [`GpxError::NotParsed`] until `parse` has succeeded. Each
/// call to `parse` replaces the previous document; a failed call leaves the
/// parser empty rather than holding stale data.
#[derive(Debug, Default)]
pub struct GpxParser {
    document: Option<GpxDocument>,
}

impl GpxParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, xml: &str) -> Result<()> {
        self.document = None;
        self.document = Some(parser::parse_gpx(xml)?);
        Ok(())
    }

    pub fn is_parsed(&self) -> bool {
        self.document.is_some()
    }

    pub fn metadata(&self) -> Result<&Metadata> {
        Ok(self.document()?.metadata())
    }

    pub fn waypoints(&self) -> Result<&[GpxPoint]> {
        Ok(self.document()?.waypoints())
    }

    pub fn routes(&self) -> Result<&[GpxRoute]> {
        Ok(self.document()?.routes())
    }

    pub fn tracks(&self) -> Result<&[GpxTrack]> {
        Ok(self.document()?.tracks())
    }

    pub fn to_geojson(&self) -> Result<FeatureCollection> {
        Ok(self.document()?.to_geojson())
    }

    pub fn to_geojson_with(&self, opts: &ConvertOptions) -> Result<FeatureCollection> {
        Ok(self.document()?.to_geojson_with(opts))
    }

    fn document(&self) -> Result<&GpxDocument> {
        self.document.as_ref().ok_or(GpxError::NotParsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ONE_WAYPOINT: &str = r#"<?xml version="1.0"?>
<gpx version="1.1">
  <metadata><name>Doc</name></metadata>
  <wpt lat="45.0" lon="-122.0"><name>A</name></wpt>
</gpx>"#;

    #[test]
    fn test_accessors_before_parse() {
        let parser = GpxParser::new();
        assert!(!parser.is_parsed());
        assert!(matches!(parser.metadata(), Err(GpxError::NotParsed)));
        assert!(matches!(parser.waypoints(), Err(GpxError::NotParsed)));
        assert!(matches!(parser.routes(), Err(GpxError::NotParsed)));
        assert!(matches!(parser.tracks(), Err(GpxError::NotParsed)));
        assert!(matches!(parser.to_geojson(), Err(GpxError::NotParsed)));
    }

    #[test]
    fn test_parse_then_read() {
        let mut parser = GpxParser::new();
        parser.parse(ONE_WAYPOINT).unwrap();

        assert_eq!(parser.metadata().unwrap().name.as_deref(), Some("Doc"));
        let waypoints = parser.waypoints().unwrap();
        assert_eq!(
            serde_json::to_value(waypoints).unwrap(),
            json!([{ "lat": 45.0, "lon": -122.0, "name": "A" }])
        );
        assert!(parser.routes().unwrap().is_empty());
        assert!(parser.tracks().unwrap().is_empty());
    }

    #[test]
    fn test_reparse_replaces_document() {
        let mut parser = GpxParser::new();
        parser.parse(ONE_WAYPOINT).unwrap();
        parser.parse("<gpx/>").unwrap();
        assert!(parser.waypoints().unwrap().is_empty());
        assert_eq!(*parser.metadata().unwrap(), Metadata::default());
    }

    #[test]
    fn test_failed_parse_clears_state() {
        let mut parser = GpxParser::new();
        parser.parse(ONE_WAYPOINT).unwrap();

        let err = parser.parse("<gpx><wpt lat=\"1\" lon=\"2\">").unwrap_err();
        assert!(matches!(err, GpxError::DocumentParse(_)));
        assert!(!parser.is_parsed());
        assert!(matches!(parser.waypoints(), Err(GpxError::NotParsed)));
    }

    #[test]
    fn test_one_tree_feeds_two_documents() {
        let root = crate::xml_tree::parse_xml(ONE_WAYPOINT).unwrap();
        let a = GpxDocument::from_tree(&root).unwrap();
        let b = GpxDocument::from_tree(&root).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrong_root() {
        let root = crate::xml_tree::parse_xml("<kml/>").unwrap();
        let err = GpxDocument::from_tree(&root).unwrap_err();
        assert!(matches!(
            err,
            GpxError::DocumentParse(DocumentParseError::UnexpectedRoot(ref n)) if n == "kml"
        ));
    }
}
