//! File I/O operations.

mod atomic;
mod mapping;
mod workspace;

pub use mapping::{
    decode_rules, encode_rules, ensure_json_extension, export_rules, import_rules, read_rules,
};
pub use workspace::{load_workspace, save_workspace};
