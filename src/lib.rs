pub mod converter;
pub mod distance;
pub mod document;
pub mod error;
pub mod gpx_types;
pub mod options;
pub mod parser;
pub mod xml_tree;

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use crate::document::{GpxDocument, GpxParser};
pub use crate::error::{DocumentParseError, GpxError};
pub use crate::options::ConvertOptions;
pub use crate::parser::parse_gpx;

/// Stateful parser exposed to JavaScript as `GpxParser`.
#[wasm_bindgen(js_name = GpxParser)]
#[derive(Default)]
pub struct JsGpxParser {
    inner: GpxParser,
}

#[wasm_bindgen(js_class = GpxParser)]
impl JsGpxParser {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::default()
    }

    pub fn parse(&mut self, gpx_string: &str) -> Result<(), JsValue> {
        self.inner.parse(gpx_string)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = getMetadata)]
    pub fn metadata(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.metadata()?)
    }

    #[wasm_bindgen(js_name = getWaypoints)]
    pub fn waypoints(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.waypoints()?)
    }

    #[wasm_bindgen(js_name = getRoutes)]
    pub fn routes(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.routes()?)
    }

    #[wasm_bindgen(js_name = getTracks)]
    pub fn tracks(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.tracks()?)
    }

    #[wasm_bindgen(js_name = toGeoJson)]
    pub fn to_geojson(&self, options: JsValue) -> Result<JsValue, JsValue> {
        let opts = parse_options(options)?;
        to_js(&self.inner.to_geojson_with(&opts)?)
    }
}

/// Convert GPX string to GeoJSON, returned as a JS object.
#[wasm_bindgen(js_name = gpxToGeoJson)]
pub fn gpx_to_geojson(gpx_string: &str, options: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let doc = parse_gpx(gpx_string)?;
    to_js(&doc.to_geojson_with(&opts))
}

/// Convert GPX string to GeoJSON, returned as a JSON string.
#[wasm_bindgen(js_name = gpxToGeoJsonString)]
pub fn gpx_to_geojson_string(gpx_string: &str, options: JsValue) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let doc = parse_gpx(gpx_string)?;
    serde_json::to_string(&doc.to_geojson_with(&opts)).map_err(|e| js_error(&e.to_string()))
}

fn parse_options(options: JsValue) -> Result<ConvertOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(ConvertOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| js_error(&e.to_string()))
    }
}

/// Serialize into plain JS objects (not `Map`s) so JSON-shaped values survive.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(&e.to_string()))
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}
