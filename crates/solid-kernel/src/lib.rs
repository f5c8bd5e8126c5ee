pub mod mock_kernel;
pub mod placement;
pub mod primitives;
pub mod traits;
pub mod truck_kernel;
pub mod types;

pub use mock_kernel::{KernelCall, MockKernel, MockShape, MockSolid};
pub use placement::Placement;
pub use traits::*;
pub use truck_kernel::TruckKernel;
pub use types::*;
