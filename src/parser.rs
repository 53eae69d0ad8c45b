use crate::distance::path_distance;
use crate::document::GpxDocument;
use crate::error::{GpxError, Result};
use crate::gpx_types::*;
use crate::xml_tree::{XmlElement, parse_xml};

/// Parse a GPX XML string into a GpxDocument.
pub fn parse_gpx(xml: &str) -> Result<GpxDocument> {
    let root = parse_xml(xml)?;
    GpxDocument::from_tree(&root)
}

/// Read the first `<metadata>` element under `<gpx>`.
pub fn extract_metadata(gpx: &XmlElement) -> Metadata {
    let Some(meta) = gpx.child("metadata") else {
        return Metadata::default();
    };

    Metadata {
        name: meta.child_text("name"),
        desc: meta.child_text("desc"),
        author: meta.child("author").map(author_name),
        time: meta.child_text("time"),
        link: meta.child("link").map(extract_link),
    }
}

/// Collect every `<wpt>` in document order.
pub fn extract_waypoints(gpx: &XmlElement) -> Vec<GpxPoint> {
    gpx.children_named("wpt").map(extract_point).collect()
}

/// Collect every `<rte>`; each must carry at least one `<rtept>`.
pub fn extract_routes(gpx: &XmlElement) -> Result<Vec<GpxRoute>> {
    gpx.children_named("rte")
        .enumerate()
        .map(|(index, rte)| extract_route(index, rte))
        .collect()
}

/// Collect every `<trk>`; each present `<trkseg>` must carry at least one `<trkpt>`.
pub fn extract_tracks(gpx: &XmlElement) -> Result<Vec<GpxTrack>> {
    gpx.children_named("trk")
        .enumerate()
        .map(|(index, trk)| extract_track(index, trk))
        .collect()
}

fn extract_route(index: usize, rte: &XmlElement) -> Result<GpxRoute> {
    let points: Vec<GpxPoint> = rte.children_named("rtept").map(extract_point).collect();
    if points.is_empty() {
        return Err(GpxError::MalformedRoute { route: index });
    }

    let distance = path_distance(&points);
    Ok(GpxRoute {
        name: rte.child_text("name"),
        number: extract_number(rte),
        cmt: rte.child_text("cmt"),
        desc: rte.child_text("desc"),
        src: rte.child_text("src"),
        route_type: rte.child_text("type"),
        link: rte.child("link").map(extract_link),
        points,
        distance,
    })
}

fn extract_track(index: usize, trk: &XmlElement) -> Result<GpxTrack> {
    let segments = trk
        .children_named("trkseg")
        .enumerate()
        .map(|(segment, seg)| {
            let points: Vec<GpxPoint> = seg.children_named("trkpt").map(extract_point).collect();
            if points.is_empty() {
                return Err(GpxError::MalformedTrack {
                    track: index,
                    segment,
                });
            }
            let distance = path_distance(&points);
            Ok(GpxSegment { points, distance })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GpxTrack {
        name: trk.child_text("name"),
        number: extract_number(trk),
        cmt: trk.child_text("cmt"),
        desc: trk.child_text("desc"),
        src: trk.child_text("src"),
        track_type: trk.child_text("type"),
        link: trk.child("link").map(extract_link),
        segments,
    })
}

/// Build a point from a wpt, rtept or trkpt element.
///
/// Coordinates are parsed leniently: a missing or malformed `lat`/`lon` becomes NaN
/// instead of rejecting the point. An unparsable or non-finite `<ele>` is dropped.
fn extract_point(el: &XmlElement) -> GpxPoint {
    let mut point = GpxPoint::new(coordinate(el, "lat"), coordinate(el, "lon"));
    point.name = el.child_text("name");
    point.desc = el.child_text("desc");
    point.time = el.child_text("time");
    point.ele = el.child_text("ele").and_then(|text| match text.parse::<f64>() {
        Ok(ele) if ele.is_finite() => Some(ele),
        _ => {
            log::warn!("ignoring unparsable <ele>{text}</ele> on <{}>", el.name());
            None
        }
    });
    point
}

fn coordinate(el: &XmlElement, attribute: &str) -> f64 {
    match el.attribute(attribute).map(|v| v.trim().parse::<f64>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            log::warn!("<{}> has a malformed '{attribute}' attribute", el.name());
            f64::NAN
        }
        None => {
            log::warn!("<{}> is missing its '{attribute}' attribute", el.name());
            f64::NAN
        }
    }
}

fn extract_number(el: &XmlElement) -> Option<u32> {
    let text = el.child_text("number")?;
    let number = text.parse::<u32>().ok();
    if number.is_none() {
        log::warn!("ignoring unparsable <number>{text}</number> on <{}>", el.name());
    }
    number
}

/// Parse a <link> element.
fn extract_link(el: &XmlElement) -> GpxLink {
    GpxLink {
        href: el.attribute("href").unwrap_or_default().to_string(),
        text: el.child_text("text"),
        link_type: el.child_text("type"),
    }
}

/// GPX 1.1 `<author>` is a person element with a `<name>` child; older files
/// put the name directly in the element.
fn author_name(author: &XmlElement) -> String {
    author
        .child_text("name")
        .unwrap_or_else(|| author.text().to_string())
}
