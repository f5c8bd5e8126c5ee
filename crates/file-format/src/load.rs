use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use susp_types::{BlockData, CellValue, PointTable, SheetSchema, SideValues, VehicleSetup, WheelTable};
use tracing::{debug, info, instrument};

use crate::errors::LoadError;
use crate::save::VEHICLE_SETUP_FILE;

pub const FRONT_SUSPENSION_FILE: &str = "Front_Suspension.json";
pub const REAR_SUSPENSION_FILE: &str = "Rear_Suspension.json";

/// Everything the geometry builder needs for one car.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDocuments {
    pub front: SheetSchema,
    pub rear: SheetSchema,
    pub setup: VehicleSetup,
}

/// Load the front, rear and setup documents from a results directory.
/// All three files are required.
#[instrument]
pub fn load_car_documents(dir: &Path) -> Result<CarDocuments, LoadError> {
    let front = load_document(dir, FRONT_SUSPENSION_FILE, parse_sheet_schema)?;
    let rear = load_document(dir, REAR_SUSPENSION_FILE, parse_sheet_schema)?;
    let setup = load_document(dir, VEHICLE_SETUP_FILE, parse_vehicle_setup)?;

    info!(
        front_blocks = front.len(),
        rear_blocks = rear.len(),
        reference_distance = ?setup.reference_distance,
        "loaded car documents"
    );
    Ok(CarDocuments { front, rear, setup })
}

fn load_document<T>(
    dir: &Path,
    file: &str,
    parse: fn(&str) -> Result<T, String>,
) -> Result<T, LoadError> {
    let path = dir.join(file);
    if !path.is_file() {
        return Err(LoadError::MissingFile { path });
    }
    let text = fs::read_to_string(&path).map_err(|e| LoadError::ReadFailed {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    parse(&text).map_err(|reason| LoadError::ParseError { path, reason })
}

/// Parse a per-sheet document. Only the top level must be a JSON object;
/// blocks and entries that do not have the expected shape are dropped.
pub fn parse_sheet_schema(json: &str) -> Result<SheetSchema, String> {
    let value: Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
    let Value::Object(blocks) = value else {
        return Err("top level is not an object".to_string());
    };

    let mut schema = SheetSchema::new();
    for (name, block) in blocks {
        let Value::Object(entries) = block else {
            debug!(block = %name, "not an object, skipped");
            continue;
        };
        let data = if name.to_lowercase().starts_with("wheels") {
            BlockData::Parameters(parameter_entries(&entries))
        } else {
            BlockData::Points(point_entries(&name, &entries))
        };
        schema.insert(name, data);
    }
    Ok(schema)
}

fn point_entries(block: &str, entries: &Map<String, Value>) -> PointTable {
    let mut points = PointTable::new();
    for (name, value) in entries {
        match as_vector(value) {
            Some(xyz) => {
                points.insert(name.clone(), xyz);
            }
            None => debug!(block, point = %name, "not a 3-vector, skipped"),
        }
    }
    points
}

fn as_vector(value: &Value) -> Option<[f64; 3]> {
    match value.as_array()?.as_slice() {
        [x, y, z] => Some([x.as_f64()?, y.as_f64()?, z.as_f64()?]),
        _ => None,
    }
}

fn parameter_entries(entries: &Map<String, Value>) -> WheelTable {
    entries
        .iter()
        .filter_map(|(name, value)| {
            let sides = value.as_object()?;
            let cell = |side: &str| sides.get(side).map(as_cell).unwrap_or_default();
            Some((name.clone(), SideValues::new(cell("left"), cell("right"))))
        })
        .collect()
}

fn as_cell(value: &Value) -> CellValue {
    match value {
        Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or_default(),
        Value::String(s) => CellValue::Text(s.clone()),
        _ => CellValue::Empty,
    }
}

/// Parse `Vehicle_Setup.json`. A non-numeric reference distance reads as
/// unknown.
pub fn parse_vehicle_setup(json: &str) -> Result<VehicleSetup, String> {
    let value: Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
    let Value::Object(fields) = value else {
        return Err("top level is not an object".to_string());
    };
    Ok(VehicleSetup::new(
        fields.get("Reference distance").and_then(Value::as_f64),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_points() {
        let schema = parse_sheet_schema(
            r#"{
                "Double A-Arm": {
                    "CHAS_UppFor_L": [1, 2.5, 3],
                    "Short_L": [1, 2],
                    "Text_L": [1, "x", 3],
                    "Scalar": 4
                },
                "Notes": "free text"
            }"#,
        )
        .unwrap();
        assert_eq!(schema.len(), 1);
        let points = schema.get("Double A-Arm").unwrap().points().unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points["CHAS_UppFor_L"], [1.0, 2.5, 3.0]);
    }

    #[test]
    fn test_wheels_block_keeps_raw_values() {
        let schema = parse_sheet_schema(
            r#"{"Wheels": {
                "Tire Diameter": {"left": 500, "right": "510"},
                "Comment": {"left": null},
                "Broken": 3
            }}"#,
        )
        .unwrap();
        let wheels = schema.wheels().unwrap();
        assert_eq!(wheels.len(), 2);
        assert_eq!(wheels["Tire Diameter"].left, CellValue::Number(500.0));
        assert_eq!(wheels["Tire Diameter"].right, CellValue::text("510"));
        assert_eq!(wheels["Comment"].right, CellValue::Empty);
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(parse_sheet_schema("[1, 2]").is_err());
        assert!(parse_sheet_schema("not json").is_err());
    }

    #[test]
    fn test_setup_values() {
        let setup = parse_vehicle_setup(r#"{"Reference distance": 1600}"#).unwrap();
        assert_eq!(setup.reference_distance, Some(1600.0));
        let setup = parse_vehicle_setup(r#"{"Reference distance": null}"#).unwrap();
        assert_eq!(setup.reference_distance, None);
        let setup = parse_vehicle_setup(r#"{}"#).unwrap();
        assert_eq!(setup.reference_distance, None);
    }
}
