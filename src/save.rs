//! Persisted Brick Records
//!
//! Wire shape consumed and produced at the registry boundary for save/load.
//! The transport is owned by an external collaborator; this module only
//! defines the record and its JSON encoding. Hosts that round-trip through
//! form submissions deliver every numeric field as a string, so the
//! deserializers accept both number and string forms.

use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};

/// One brick, as persisted. `rot` is the yaw in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickRecord {
    pub name: String,
    #[serde(deserialize_with = "u32_flexible")]
    pub width_x: u32,
    #[serde(deserialize_with = "u32_flexible")]
    pub height_y: u32,
    #[serde(deserialize_with = "u32_flexible")]
    pub depth_z: u32,
    #[serde(deserialize_with = "f32_flexible")]
    pub x: f32,
    #[serde(deserialize_with = "f32_flexible")]
    pub y: f32,
    #[serde(deserialize_with = "f32_flexible")]
    pub z: f32,
    #[serde(deserialize_with = "f32_flexible")]
    pub color_r: f32,
    #[serde(deserialize_with = "f32_flexible")]
    pub color_g: f32,
    #[serde(deserialize_with = "f32_flexible")]
    pub color_b: f32,
    #[serde(deserialize_with = "f32_flexible")]
    pub rot: f32,
}

/// A numeric field that may arrive as a JSON number or its string form.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn f32_flexible<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n as f32),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f32>()
            .map_err(|_| D::Error::custom(format!("invalid numeric string: {s:?}"))),
    }
}

fn u32_flexible<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f32_flexible(deserializer)?;
    if value < 0.0 || value.fract() != 0.0 {
        return Err(D::Error::custom(format!("expected a whole number, got {value}")));
    }
    Ok(value as u32)
}

/// Encode records for the save collaborator.
pub fn records_to_json(records: &[BrickRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// Decode records from the load collaborator.
pub fn records_from_json(json: &str) -> serde_json::Result<Vec<BrickRecord>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let record = BrickRecord {
            name: "Brick2x4".into(),
            width_x: 2,
            height_y: 1,
            depth_z: 4,
            x: 1.0,
            y: 0.0,
            z: 2.0,
            color_r: 0.0,
            color_g: 1.0,
            color_b: 0.0,
            rot: 90.0,
        };
        let json = records_to_json(std::slice::from_ref(&record)).unwrap();
        assert!(json.contains("\"widthX\":2"));
        assert!(json.contains("\"colorG\":1.0"));
        assert!(json.contains("\"rot\":90.0"));

        let back = records_from_json(&json).unwrap();
        assert_eq!(back, vec![record]);
    }

    #[test]
    fn coerces_string_numerics_on_load() {
        let json = r#"[{
            "name": "Brick1x1",
            "widthX": "1", "heightY": "1", "depthZ": "1",
            "x": "3", "y": "0", "z": "-2.0",
            "colorR": "1", "colorG": "0", "colorB": "0",
            "rot": "0"
        }]"#;
        let records = records_from_json(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].width_x, 1);
        assert_eq!(records[0].z, -2.0);
        assert_eq!(records[0].color_r, 1.0);
    }

    #[test]
    fn rejects_fractional_dimension_strings() {
        let json = r#"[{
            "name": "bad",
            "widthX": "1.5", "heightY": "1", "depthZ": "1",
            "x": 0, "y": 0, "z": 0,
            "colorR": 1, "colorG": 0, "colorB": 0,
            "rot": 0
        }]"#;
        assert!(records_from_json(json).is_err());
    }
}
