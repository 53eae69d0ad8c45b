use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use crate::document::GpxDocument;
use crate::gpx_types::*;
use crate::options::{ConvertOptions, GpxElementType};

/// Convert a parsed GPX document to a GeoJSON FeatureCollection.
///
/// Tracks come first, then routes, then (only when requested) waypoints.
/// Document metadata goes into a top-level `properties` member.
/// A track without segments, or a one-point route or track, still yields a
/// `LineString`, so lines with fewer than two positions can appear.
pub fn to_feature_collection(doc: &GpxDocument, opts: &ConvertOptions) -> FeatureCollection {
    let mut features = Vec::new();

    if opts.should_include(GpxElementType::Track) {
        for trk in doc.tracks() {
            features.push(track_to_feature(trk, opts));
        }
    }

    if opts.should_include(GpxElementType::Route) {
        for rte in doc.routes() {
            features.push(route_to_feature(rte, opts));
        }
    }

    if opts.should_include(GpxElementType::Waypoint) {
        for wpt in doc.waypoints() {
            features.push(waypoint_to_feature(wpt, opts));
        }
    }

    let mut foreign_members = Map::new();
    foreign_members.insert(
        "properties".to_string(),
        JsonValue::Object(metadata_props(doc.metadata())),
    );

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign_members),
    }
}

fn track_to_feature(trk: &GpxTrack, opts: &ConvertOptions) -> Feature {
    let mut props = Map::new();
    if opts.include_metadata {
        insert_optional(&mut props, "name", &trk.name);
        insert_optional(&mut props, "cmt", &trk.cmt);
        insert_optional(&mut props, "desc", &trk.desc);
        insert_optional(&mut props, "src", &trk.src);
        insert_number(&mut props, trk.number);
        insert_optional(&mut props, "type", &trk.track_type);
        insert_link(&mut props, &trk.link);
    }

    let geometry = if opts.split_track_segments {
        let lines: Vec<Vec<Vec<f64>>> = trk
            .segments
            .iter()
            .map(|seg| line_coords(&seg.points, opts))
            .collect();

        if opts.include_time {
            let times: Vec<JsonValue> = trk
                .segments
                .iter()
                .map(|seg| JsonValue::Array(point_times(&seg.points)))
                .collect();
            let any_time = trk.segments.iter().flat_map(|s| &s.points).any(|p| p.time.is_some());
            if any_time {
                insert_coordinate_times(&mut props, times);
            }
        }

        Geometry::new(Value::MultiLineString(lines))
    } else {
        // All segments flattened into a single line, in order
        let points: Vec<&GpxPoint> = trk.segments.iter().flat_map(|s| &s.points).collect();
        let coords: Vec<Vec<f64>> = points.iter().map(|pt| point_coords(pt, opts)).collect();

        if opts.include_time && points.iter().any(|p| p.time.is_some()) {
            let times = points.iter().map(|pt| time_value(pt)).collect();
            insert_coordinate_times(&mut props, times);
        }

        Geometry::new(Value::LineString(coords))
    };

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn route_to_feature(rte: &GpxRoute, opts: &ConvertOptions) -> Feature {
    let geometry = Geometry::new(Value::LineString(line_coords(&rte.points, opts)));

    let mut props = Map::new();
    if opts.include_metadata {
        insert_optional(&mut props, "name", &rte.name);
        insert_optional(&mut props, "cmt", &rte.cmt);
        insert_optional(&mut props, "desc", &rte.desc);
        insert_optional(&mut props, "src", &rte.src);
        insert_number(&mut props, rte.number);
        insert_optional(&mut props, "type", &rte.route_type);
        insert_link(&mut props, &rte.link);
    }

    if opts.include_time && rte.points.iter().any(|p| p.time.is_some()) {
        insert_coordinate_times(&mut props, point_times(&rte.points));
    }

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn waypoint_to_feature(pt: &GpxPoint, opts: &ConvertOptions) -> Feature {
    let geometry = Geometry::new(Value::Point(point_coords(pt, opts)));

    let mut props = Map::new();
    if opts.include_metadata {
        insert_optional(&mut props, "name", &pt.name);
        insert_optional(&mut props, "desc", &pt.desc);
        insert_optional(&mut props, "time", &pt.time);
        if let Some(ele) = pt.ele.and_then(serde_json::Number::from_f64) {
            props.insert("ele".to_string(), JsonValue::Number(ele));
        }
    }

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn metadata_props(meta: &Metadata) -> Map<String, JsonValue> {
    let mut props = Map::new();
    insert_optional(&mut props, "name", &meta.name);
    insert_optional(&mut props, "desc", &meta.desc);
    insert_optional(&mut props, "time", &meta.time);
    insert_optional(&mut props, "author", &meta.author);
    insert_link(&mut props, &meta.link);
    props
}

fn line_coords(points: &[GpxPoint], opts: &ConvertOptions) -> Vec<Vec<f64>> {
    points.iter().map(|pt| point_coords(pt, opts)).collect()
}

/// Build [lon, lat] or [lon, lat, ele] coordinate array.
fn point_coords(pt: &GpxPoint, opts: &ConvertOptions) -> Vec<f64> {
    match (opts.include_elevation, pt.ele) {
        (true, Some(ele)) => vec![pt.lon, pt.lat, ele],
        _ => vec![pt.lon, pt.lat],
    }
}

fn point_times(points: &[GpxPoint]) -> Vec<JsonValue> {
    points.iter().map(time_value).collect()
}

fn time_value(pt: &GpxPoint) -> JsonValue {
    match &pt.time {
        Some(t) => JsonValue::String(t.clone()),
        None => JsonValue::Null,
    }
}

fn insert_optional(props: &mut Map<String, JsonValue>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        props.insert(key.to_string(), JsonValue::String(v.clone()));
    }
}

fn insert_number(props: &mut Map<String, JsonValue>, number: Option<u32>) {
    if let Some(n) = number {
        props.insert("number".to_string(), JsonValue::Number(n.into()));
    }
}

fn insert_link(props: &mut Map<String, JsonValue>, link: &Option<GpxLink>) {
    if let Some(link) = link {
        let mut link_obj = Map::new();
        link_obj.insert("href".to_string(), JsonValue::String(link.href.clone()));
        if let Some(ref t) = link.text {
            link_obj.insert("text".to_string(), JsonValue::String(t.clone()));
        }
        if let Some(ref lt) = link.link_type {
            link_obj.insert("type".to_string(), JsonValue::String(lt.clone()));
        }
        props.insert("link".to_string(), JsonValue::Object(link_obj));
    }
}

fn insert_coordinate_times(props: &mut Map<String, JsonValue>, times: Vec<JsonValue>) {
    let mut coord_props = Map::new();
    coord_props.insert("times".to_string(), JsonValue::Array(times));
    props.insert(
        "coordinateProperties".to_string(),
        JsonValue::Object(coord_props),
    );
}
