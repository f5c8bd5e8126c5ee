//! Turns extracted suspension schemas into a colored 3D scene.
//!
//! Every hardpoint becomes a marker sphere, each side's wheel becomes a
//! tire tube posed by camber and toe, and links are drawn between
//! configured hardpoint pairs. Front and rear suspensions are grouped under
//! a single car assembly, the rear shifted back by the reference distance.
//!
//! Geometry is produced through the [`solid_kernel::Kernel`] trait so the
//! whole pipeline runs against `MockKernel` in tests.

pub mod assembly;
pub mod config;
pub mod error;
pub mod links;
pub mod points;
pub mod scene;
pub mod wheels;

pub use assembly::{build_car, build_suspension, BuildResult, Diagnostics};
pub use config::{BuildConfig, LinkSpec};
pub use error::GeometryError;
pub use links::{draw_link, draw_links, link_geometry, LinkGeometry};
pub use points::{draw_points, marker_color};
pub use scene::{PlacedSolid, SceneContent, SceneNode};
pub use wheels::{draw_wheel, draw_wheels, WheelSpec};
