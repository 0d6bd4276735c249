//! Export and import of rule lists as JSON arrays of records.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use remap_core::{MergeOutcome, Session};
use remap_model::{Rule, RuleList};

use crate::error::{PersistenceError, Result};
use crate::io::atomic::write_atomic;
use crate::types::{MAPPING_EXTENSION, MappingRecord};

/// Append `.json` unless the path already ends with it (any case).
///
/// The extension is appended, not substituted: `map.txt` becomes
/// `map.txt.json`. An empty path is returned unchanged.
pub fn ensure_json_extension(path: &Path) -> PathBuf {
    let raw = path.as_os_str();
    let suffix = format!(".{MAPPING_EXTENSION}");
    if raw.is_empty() || raw.to_string_lossy().to_lowercase().ends_with(&suffix) {
        return path.to_path_buf();
    }
    let mut with_ext = raw.to_owned();
    with_ext.push(suffix);
    PathBuf::from(with_ext)
}

/// Encode rules as a pretty-printed JSON array with four-space indents.
pub fn encode_rules(rules: &RuleList) -> Result<Vec<u8>> {
    let records: Vec<MappingRecord> = rules.iter().map(MappingRecord::from).collect();
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    records
        .serialize(&mut serializer)
        .map_err(|source| PersistenceError::Serialization { source })?;
    Ok(out)
}

/// Decode a JSON array of records.
pub fn decode_rules(bytes: &[u8], path: &Path) -> Result<Vec<Rule>> {
    let records: Vec<MappingRecord> =
        serde_json::from_slice(bytes).map_err(|source| PersistenceError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(records.into_iter().map(Rule::from).collect())
}

/// Write every rule, empty and partial ones included, to `path`.
///
/// Returns the path actually written, which carries a `.json` extension.
///
/// An empty path is rejected before anything touches the disk.
pub fn export_rules(rules: &RuleList, path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(PersistenceError::io(
            "write",
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "empty export path"),
        ));
    }
    let path = ensure_json_extension(path);
    let bytes = encode_rules(rules)?;
    write_atomic(&path, &bytes)?;
    tracing::info!(rules = rules.len(), path = %path.display(), "exported material mapping");
    Ok(path)
}

/// Read the records stored at `path`.
pub fn read_rules(path: &Path) -> Result<Vec<Rule>> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::io("read", path, e))?;
    decode_rules(&bytes, path)
}

/// Read `path` and merge its records into the session.
///
/// The file is parsed in full before the merge, so a read or parse failure
/// leaves the rule list as it was.
pub fn import_rules(session: &mut Session, path: &Path) -> Result<MergeOutcome> {
    let entries = read_rules(path)?;
    let outcome = session.merge_imported(&entries);
    tracing::info!(
        entries = entries.len(),
        filled = outcome.filled,
        appended = outcome.appended,
        path = %path.display(),
        "imported material mapping"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn extension_is_appended_only_when_missing() {
        assert_eq!(
            ensure_json_extension(Path::new("out/Material_Mapping")),
            PathBuf::from("out/Material_Mapping.json")
        );
        assert_eq!(
            ensure_json_extension(Path::new("map.JSON")),
            PathBuf::from("map.JSON")
        );
        assert_eq!(
            ensure_json_extension(Path::new("map.txt")),
            PathBuf::from("map.txt.json")
        );
        assert_eq!(ensure_json_extension(Path::new("")), PathBuf::new());
    }

    #[test]
    fn export_layout_is_stable() {
        let rules: RuleList = vec![Rule::new("Red", "Blue"), Rule::default()].into();
        let text = String::from_utf8(encode_rules(&rules).unwrap()).unwrap();
        insta::assert_snapshot!(text, @r#"
        [
            {
                "old_material": "Red",
                "new_material": "Blue"
            },
            {
                "old_material": "",
                "new_material": ""
            }
        ]
        "#);
    }

    #[test]
    fn non_ascii_labels_are_written_verbatim() {
        let rules: RuleList = vec![Rule::new("木材", "Wood")].into();
        let text = String::from_utf8(encode_rules(&rules).unwrap()).unwrap();
        assert!(text.contains("木材"));
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let rules = decode_rules(
            br#"[{"old_material": "Red"}, {"new_material": "Blue", "extra": 1}, {}]"#,
            Path::new("inline.json"),
        )
        .unwrap();
        assert_eq!(
            rules,
            vec![Rule::from_old("Red"), Rule::new("", "Blue"), Rule::default()]
        );
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let cases: [&[u8]; 3] = [
            br#"{"old_material": "Red"}"#,
            br#"[{"old_material": 5}]"#,
            b"not json",
        ];
        for bad in cases {
            let err = decode_rules(bad, Path::new("bad.json")).unwrap_err();
            assert!(matches!(err, PersistenceError::Malformed { .. }));
        }
    }

    #[test]
    fn export_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("mapping");
        let written = export_rules(&RuleList::new(), &path).unwrap();
        assert_eq!(written, dir.path().join("nested").join("mapping.json"));
        assert_eq!(fs::read_to_string(written).unwrap(), "[]");
    }
}
