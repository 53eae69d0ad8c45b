//! Typed GPX records.
//!
//! Every optional field is skipped when serializing, so a key is present in the
//! JSON (or JS object) output exactly when the source document supplied it.

use serde::Serialize;

/// A single GPX point (used for wpt, rtept, trkpt).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpxPoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ele: Option<f64>,
}

impl GpxPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            name: None,
            desc: None,
            time: None,
            ele: None,
        }
    }
}

/// Distance along a sequence of points, in kilometres.
///
/// `cumul[i]` is the distance from the first point to point `i + 1`, so it holds
/// one entry fewer than the path has points. `total` is its last value, or 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distance {
    pub total: f64,
    pub cumul: Vec<f64>,
}

/// A GPX link element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpxLink {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

/// Document-level `<metadata>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<GpxLink>,
}

/// A GPX route (<rte>).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GpxRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub route_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<GpxLink>,
    pub points: Vec<GpxPoint>,
    pub distance: Distance,
}

/// A GPX track (<trk>).
///
/// Distances live on the segments; there is no track-level total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GpxTrack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub track_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<GpxLink>,
    pub segments: Vec<GpxSegment>,
}

/// A GPX track segment (<trkseg>).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GpxSegment {
    pub points: Vec<GpxPoint>,
    pub distance: Distance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_not_serialized() {
        let mut pt = GpxPoint::new(45.0, -122.0);
        pt.name = Some("A".to_string());
        assert_eq!(
            serde_json::to_value(&pt).unwrap(),
            json!({ "lat": 45.0, "lon": -122.0, "name": "A" })
        );

        assert_eq!(serde_json::to_value(Metadata::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_type_fields_renamed() {
        let route = GpxRoute {
            route_type: Some("hiking".to_string()),
            link: Some(GpxLink {
                href: "https://example.com".to_string(),
                text: None,
                link_type: Some("text/html".to_string()),
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&route).unwrap();
        assert_eq!(value["type"], "hiking");
        assert_eq!(
            value["link"],
            json!({ "href": "https://example.com", "type": "text/html" })
        );
        assert_eq!(value["distance"], json!({ "total": 0.0, "cumul": [] }));
        assert!(value.get("name").is_none());
    }
}
