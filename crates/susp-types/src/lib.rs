pub mod cell;
pub mod schema;
pub mod setup;

pub use cell::*;
pub use schema::*;
pub use setup::*;
