use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::cell::CellValue;

/// Which side of the vehicle a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Suffix appended to point names: `_L` / `_R`.
    pub fn suffix(self) -> &'static str {
        match self {
            Side::Left => "_L",
            Side::Right => "_R",
        }
    }

    /// Lateral sign: +1 for left, -1 for right.
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point name (with `_L`/`_R` suffix) to coordinates.
pub type PointTable = BTreeMap<String, [f64; 3]>;

/// A wheel parameter's value on each side, kept as read from the sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SideValues {
    #[serde(default)]
    pub left: CellValue,
    #[serde(default)]
    pub right: CellValue,
}

impl SideValues {
    pub fn new(left: impl Into<CellValue>, right: impl Into<CellValue>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn get(&self, side: Side) -> &CellValue {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Parameter name to per-side values.
pub type WheelTable = BTreeMap<String, SideValues>;

/// The content of one named block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockData {
    Points(PointTable),
    Parameters(WheelTable),
}

impl BlockData {
    pub fn points(&self) -> Option<&PointTable> {
        match self {
            BlockData::Points(p) => Some(p),
            BlockData::Parameters(_) => None,
        }
    }

    pub fn parameters(&self) -> Option<&WheelTable> {
        match self {
            BlockData::Parameters(p) => Some(p),
            BlockData::Points(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            BlockData::Points(p) => p.len(),
            BlockData::Parameters(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalized content of one sheet: block name to block data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetSchema {
    pub blocks: BTreeMap<String, BlockData>,
}

impl SheetSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, data: BlockData) {
        self.blocks.insert(name.into(), data);
    }

    pub fn get(&self, name: &str) -> Option<&BlockData> {
        self.blocks.get(name)
    }

    /// Every point entry as `(block name, point name, coordinates)`.
    pub fn points(&self) -> impl Iterator<Item = (&str, &str, [f64; 3])> {
        self.blocks.iter().flat_map(|(block, data)| {
            data.points()
                .into_iter()
                .flat_map(move |table| {
                    table
                        .iter()
                        .map(move |(name, xyz)| (block.as_str(), name.as_str(), *xyz))
                })
        })
    }

    /// Look up a point by its full name (e.g. `CHAS_UppFor_L`) across all
    /// blocks. The first block in name order wins.
    pub fn find_point(&self, name: &str) -> Option<[f64; 3]> {
        self.blocks
            .values()
            .filter_map(BlockData::points)
            .find_map(|table| table.get(name).copied())
    }

    /// The wheels parameter table: the first parameter block whose name
    /// starts with "wheels" (case-insensitive).
    pub fn wheels(&self) -> Option<&WheelTable> {
        self.blocks.iter().find_map(|(name, data)| {
            if name.to_lowercase().starts_with("wheels") {
                data.parameters()
            } else {
                None
            }
        })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Every sheet of a workbook, by sheet name.
pub type WorkbookSchema = BTreeMap<String, SheetSchema>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SheetSchema {
        let mut schema = SheetSchema::new();
        let mut points = PointTable::new();
        points.insert("CHAS_UppFor_L".into(), [100.0, 200.0, 50.0]);
        points.insert("CHAS_UppFor_R".into(), [100.0, -200.0, 50.0]);
        schema.insert("Double A-Arm", BlockData::Points(points));

        let mut wheels = WheelTable::new();
        wheels.insert("Tire Diameter".into(), SideValues::new(500.0, 500.0));
        schema.insert("Wheels", BlockData::Parameters(wheels));
        schema
    }

    #[test]
    fn test_schema_json_layout() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json["Double A-Arm"]["CHAS_UppFor_R"],
            serde_json::json!([100.0, -200.0, 50.0])
        );
        assert_eq!(
            json["Wheels"]["Tire Diameter"],
            serde_json::json!({"left": 500.0, "right": 500.0})
        );
    }

    #[test]
    fn test_schema_json_parses_back() {
        let text = serde_json::to_string(&sample()).unwrap();
        let back: SheetSchema = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_point_iteration_and_lookup() {
        let schema = sample();
        let names: Vec<_> = schema.points().map(|(b, p, _)| format!("{b}_{p}")).collect();
        assert_eq!(
            names,
            vec!["Double A-Arm_CHAS_UppFor_L", "Double A-Arm_CHAS_UppFor_R"]
        );
        assert_eq!(
            schema.find_point("CHAS_UppFor_R"),
            Some([100.0, -200.0, 50.0])
        );
        assert_eq!(schema.find_point("missing"), None);
    }

    #[test]
    fn test_wheels_lookup_is_case_insensitive() {
        let schema = sample();
        assert!(schema.wheels().unwrap().contains_key("Tire Diameter"));

        let mut other = SheetSchema::new();
        other.insert("WHEELS rear", BlockData::Parameters(WheelTable::new()));
        assert!(other.wheels().is_some());
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.suffix(), "_L");
        assert_eq!(Side::Right.sign(), -1.0);
        assert_eq!(Side::Right.as_str(), "right");
    }
}
