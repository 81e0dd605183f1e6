use super::*;
use crate::{CompatEntry, CompatKey};

fn sample_table() -> CompatTable {
    let mut table = CompatTable::new();
    table.insert(
        CompatKey::new("Rat", "Ox"),
        CompatEntry::new(
            "Rat × Ox — Steady Alliance",
            "Grounded and dependable.",
            "Rat's quick wit meets Ox's patience.",
        ),
    );
    table.insert(
        CompatKey::new("Dog", "Tiger"),
        CompatEntry::new("Dog × Tiger — Loyal Guard", "Side by side.", "Trust first."),
    );
    table
}

#[test]
fn pretty_printed_with_sorted_keys() {
    let json = to_artifact_string(&sample_table()).unwrap();
    let expected = r#"{
  "Dog-Tiger": {
    "heading": "Dog × Tiger — Loyal Guard",
    "tagline": "Side by side.",
    "description": "Trust first."
  },
  "Ox-Rat": {
    "heading": "Rat × Ox — Steady Alliance",
    "tagline": "Grounded and dependable.",
    "description": "Rat's quick wit meets Ox's patience."
  }
}
"#;
    assert_eq!(json, expected);
}

#[test]
fn non_ascii_is_not_escaped() {
    let json = to_artifact_string(&sample_table()).unwrap();
    assert!(json.contains('×'));
    assert!(json.contains('—'));
    assert!(!json.contains("\\u"));
}

#[test]
fn empty_table_is_empty_object() {
    assert_eq!(to_artifact_string(&CompatTable::new()).unwrap(), "{}\n");
}

#[test]
fn write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output").join("chinese_compat_full.json");

    write_artifact(&path, &sample_table()).unwrap();
    let loaded = read_artifact(&path).unwrap();

    assert_eq!(loaded, sample_table());
}

#[test]
fn missing_artifact_is_distinct_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_artifact(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ArtifactError::Missing { .. }), "got {err:?}");
}

#[test]
fn malformed_artifact_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"Ox-Rat": {"heading": 3}}"#).unwrap();

    let err = read_artifact(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Json { .. }), "got {err:?}");
    assert!(err.to_string().contains("bad.json"));
}
