//! On-disk formats: the per-sheet JSON documents written by the extractor
//! and read back by the geometry builder, and STEP export of a built scene.

pub mod errors;
pub mod load;
pub mod save;
pub mod step_export;

pub use errors::{ExportError, LoadError, SaveError};
pub use load::{
    load_car_documents, parse_sheet_schema, parse_vehicle_setup, CarDocuments,
    FRONT_SUSPENSION_FILE, REAR_SUSPENSION_FILE,
};
pub use save::{save_sheets, save_vehicle_setup, sheet_file_name, VEHICLE_SETUP_FILE};
pub use step_export::{color_table, color_table_path, export_step, write_color_table, write_step};
