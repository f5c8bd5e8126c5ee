use solid_kernel::{Kernel, KernelSolidHandle};
use susp_types::{Side, WheelTable};
use tracing::{debug, instrument};

use crate::config::BuildConfig;
use crate::error::GeometryError;
use crate::scene::SceneNode;

pub const TIRE_DIAMETER: &str = "Tire Diameter";
pub const RIM_DIAMETER: &str = "Rim Diameter";
pub const TIRE_WIDTH: &str = "Tire Width";
pub const HALF_TRACK: &str = "Half Track";
pub const LATERAL_OFFSET: &str = "Lateral Offset";
pub const LONGITUDINAL_OFFSET: &str = "Longitudinal Offset";
pub const VERTICAL_OFFSET: &str = "Vertical Offset";
pub const STATIC_CAMBER: &str = "Static Camber";
pub const STATIC_TOE: &str = "Static Toe";

const ORIGIN: [f64; 3] = [0.0; 3];
const X_AXIS: [f64; 3] = [1.0, 0.0, 0.0];
const Z_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

/// One side's wheel parameters, lengths in model units and angles in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSpec {
    pub side: Side,
    pub tire_diameter: f64,
    pub rim_diameter: f64,
    pub tire_width: f64,
    /// Centerline to wheel center, used as is.
    pub half_track: f64,
    pub lateral_offset: f64,
    pub longitudinal_offset: f64,
    pub vertical_offset: f64,
    pub static_camber: f64,
    pub static_toe: f64,
}

impl WheelSpec {
    /// Read every required parameter for `side`. A missing or non-numeric
    /// value is an error.
    pub fn from_table(table: &WheelTable, side: Side) -> Result<Self, GeometryError> {
        let get = |name: &str| -> Result<f64, GeometryError> {
            let values = table
                .get(name)
                .ok_or_else(|| GeometryError::MissingWheelParameter {
                    name: name.to_string(),
                    side,
                })?;
            let cell = values.get(side);
            cell.as_f64()
                .ok_or_else(|| GeometryError::InvalidWheelParameter {
                    name: name.to_string(),
                    side,
                    value: format!("{cell:?}"),
                })
        };

        Ok(Self {
            side,
            tire_diameter: get(TIRE_DIAMETER)?,
            rim_diameter: get(RIM_DIAMETER)?,
            tire_width: get(TIRE_WIDTH)?,
            half_track: get(HALF_TRACK)?,
            lateral_offset: get(LATERAL_OFFSET)?,
            longitudinal_offset: get(LONGITUDINAL_OFFSET)?,
            vertical_offset: get(VERTICAL_OFFSET)?,
            static_camber: get(STATIC_CAMBER)?,
            static_toe: get(STATIC_TOE)?,
        })
    }

    /// Wheel center: the tire sits on the ground plane lifted by its radius.
    pub fn center(&self) -> [f64; 3] {
        [
            self.longitudinal_offset,
            self.side.sign() * (self.half_track + self.lateral_offset),
            self.vertical_offset + self.tire_diameter / 2.0,
        ]
    }
}

/// Build one tire and pose it. Order is fixed: align the axis with Y,
/// camber about X, toe about Z, then move to the wheel center.
#[instrument(skip(kernel), fields(side = %spec.side))]
pub fn draw_wheel(
    kernel: &mut dyn Kernel,
    spec: &WheelSpec,
) -> Result<KernelSolidHandle, GeometryError> {
    let tire = kernel.make_tube(
        spec.tire_diameter / 2.0,
        spec.rim_diameter / 2.0,
        spec.tire_width,
    )?;
    let aligned = kernel.rotate(&tire, ORIGIN, X_AXIS, (-90.0f64).to_radians())?;
    let cambered = kernel.rotate(&aligned, ORIGIN, X_AXIS, spec.static_camber.to_radians())?;
    let toed = kernel.rotate(&cambered, ORIGIN, Z_AXIS, spec.static_toe.to_radians())?;
    let center = spec.center();
    debug!(?center, "wheel placed");
    Ok(kernel.translate(&toed, center)?)
}

/// Both wheels as `Wheel_left` / `Wheel_right`.
pub fn draw_wheels(
    kernel: &mut dyn Kernel,
    table: &WheelTable,
    config: &BuildConfig,
) -> Result<Vec<SceneNode>, GeometryError> {
    Side::BOTH
        .iter()
        .map(|&side| {
            let spec = WheelSpec::from_table(table, side)?;
            let handle = draw_wheel(kernel, &spec)?;
            Ok(SceneNode::solid(format!("Wheel_{side}"), handle).with_color(config.wheel_color))
        })
        .collect()
}
