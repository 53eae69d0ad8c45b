//! Tests for the JavaScript-facing API. Run with `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use gpx_parser_wasm::{JsGpxParser, gpx_to_geojson_string};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const ROUTE: &str = r#"<?xml version="1.0"?>
<gpx version="1.1">
  <metadata><name>Doc</name></metadata>
  <rte><name>R</name><rtept lat="0" lon="0"/><rtept lat="0" lon="1"/></rte>
</gpx>"#;

#[wasm_bindgen_test]
fn accessors_throw_before_parse() {
    let parser = JsGpxParser::new();
    assert!(parser.routes().is_err());
    assert!(parser.to_geojson(JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn routes_are_plain_objects() {
    let mut parser = JsGpxParser::new();
    parser.parse(ROUTE).unwrap();

    let routes = parser.routes().unwrap();
    let json = js_sys::JSON::stringify(&routes).unwrap();
    let value: serde_json::Value = serde_json::from_str(&String::from(json)).unwrap();
    assert_eq!(value[0]["name"], "R");
    assert!(value[0].get("desc").is_none());
    assert_eq!(value[0]["points"].as_array().unwrap().len(), 2);
}

#[wasm_bindgen_test]
fn geojson_string_carries_metadata() {
    let text = gpx_to_geojson_string(ROUTE, JsValue::NULL).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["properties"]["name"], "Doc");
    assert_eq!(value["features"].as_array().unwrap().len(), 1);
}

#[wasm_bindgen_test]
fn malformed_document_throws() {
    let mut parser = JsGpxParser::new();
    assert!(parser.parse("<gpx><rte></gpx>").is_err());
}
