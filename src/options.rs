use serde::Deserialize;

/// Options for GPX to GeoJSON conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Include elevation as the 3rd coordinate value when known (default: true)
    #[serde(default = "default_true")]
    pub include_elevation: bool,

    /// Include route/track fields (name, desc, etc.) in feature properties (default: true)
    #[serde(default = "default_true")]
    pub include_metadata: bool,

    /// Include timestamps in coordinateProperties.times (default: false)
    #[serde(default)]
    pub include_time: bool,

    /// Which GPX element types to convert (default: tracks and routes)
    #[serde(default)]
    pub types: Option<Vec<GpxElementType>>,

    /// Emit each track as a MultiLineString, one line per segment (default: false)
    #[serde(default)]
    pub split_track_segments: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            include_elevation: true,
            include_metadata: true,
            include_time: false,
            types: None,
            split_track_segments: false,
        }
    }
}

impl ConvertOptions {
    /// Waypoints are only projected when asked for explicitly.
    pub fn should_include(&self, element_type: GpxElementType) -> bool {
        match &self.types {
            None => element_type != GpxElementType::Waypoint,
            Some(types) => types.contains(&element_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpxElementType {
    Waypoint,
    Route,
    Track,
}

fn default_true() -> bool {
    true
}
