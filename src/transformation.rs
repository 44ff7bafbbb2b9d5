//! Transformation descriptors
//!
//! Value objects describing one encoding target (crop mode, dimensions,
//! bit rate). The client serializes them into the nested `transformation`
//! fields of a profile's representations and otherwise treats them as
//! opaque mappings, since the remote schema is server-defined.

use serde::Serialize;
use serde_json::{Map, Value};

/// One encoding target. Built up fluently, serialized as a flat mapping.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transformation {
    params: Map<String, Value>,
}

impl Transformation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Crop/scale mode, e.g. "limit", "fill", "scale".
    #[must_use]
    pub fn crop(self, mode: impl Into<String>) -> Self {
        self.param("crop", Value::String(mode.into()))
    }

    /// Target width in pixels.
    #[must_use]
    pub fn width(self, pixels: u64) -> Self {
        self.param("width", Value::from(pixels))
    }

    /// Target height in pixels.
    #[must_use]
    pub fn height(self, pixels: u64) -> Self {
        self.param("height", Value::from(pixels))
    }

    /// Target bit rate, e.g. "5m" or "800k".
    #[must_use]
    pub fn bit_rate(self, rate: impl Into<String>) -> Self {
        self.param("bit_rate", Value::String(rate.into()))
    }

    /// Arbitrary transformation parameter. The service accepts an
    /// open-ended set of keys; anything not covered by a named builder
    /// method goes through here.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Serialized form: the parameter mapping.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.params.clone())
    }
}

/// One entry of a profile's `representations` list: an ordered chain of
/// transformations producing a single output rendition.
#[derive(Debug, Clone, Serialize)]
pub struct Representation {
    pub transformation: Vec<Transformation>,
}

impl Representation {
    #[must_use]
    pub fn new(transformation: Vec<Transformation>) -> Self {
        Self { transformation }
    }

    /// The common case of one transformation per rendition.
    #[must_use]
    pub fn single(transformation: Transformation) -> Self {
        Self::new(vec![transformation])
    }

    /// Serialized form: `{"transformation": [...]}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "transformation".to_string(),
            Value::Array(self.transformation.iter().map(Transformation::to_value).collect()),
        );
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transformation_serializes_to_flat_mapping() {
        let t = Transformation::new()
            .crop("limit")
            .width(1200)
            .height(1200)
            .bit_rate("5m");
        assert_eq!(
            t.to_value(),
            json!({"crop": "limit", "width": 1200, "height": 1200, "bit_rate": "5m"})
        );
    }

    #[test]
    fn test_transformation_arbitrary_param() {
        let t = Transformation::new().param("audio_codec", json!("aac"));
        assert_eq!(t.to_value(), json!({"audio_codec": "aac"}));
    }

    #[test]
    fn test_transformation_last_write_wins() {
        let t = Transformation::new().width(100).width(200);
        assert_eq!(t.to_value(), json!({"width": 200}));
    }

    #[test]
    fn test_representation_wire_shape() {
        let rep = Representation::single(Transformation::new().crop("limit").width(800));
        assert_eq!(
            rep.to_value(),
            json!({"transformation": [{"crop": "limit", "width": 800}]})
        );
    }

    #[test]
    fn test_representation_serde_matches_to_value() {
        let rep = Representation::new(vec![
            Transformation::new().width(640),
            Transformation::new().bit_rate("800k"),
        ]);
        assert_eq!(serde_json::to_value(&rep).unwrap(), rep.to_value());
    }
}
