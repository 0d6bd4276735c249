//! Persistent storage for material mappings.
//!
//! Two file kinds are handled here:
//!
//! - **Mapping files**: a pretty-printed JSON array of
//!   `{"old_material": ..., "new_material": ...}` records, used to share a
//!   rule list between documents.
//! - **Workspace documents**: the scene and its rule list together, loaded
//!   and saved around each command.
//!
//! Writes go through a temp file and a rename. Reads are parsed in full
//! before anything in memory changes.

mod error;
mod io;
mod types;

pub use error::{PersistenceError, Result};
pub use io::{
    decode_rules, encode_rules, ensure_json_extension, export_rules, import_rules,
    load_workspace, read_rules, save_workspace,
};
pub use types::{CURRENT_SCHEMA_VERSION, MAPPING_EXTENSION, MappingRecord, WorkspaceDocument};
