use std::fs;

use maintenance_index::MaintenanceIndex;
use maintenance_index::export::{ExportError, export_to_file};
use pretty_assertions::assert_eq;

fn sample_index() -> MaintenanceIndex {
    let mut index = MaintenanceIndex::new();
    let _ = index.insert("2024-03-05", "Tire rotation", 30.0);
    let _ = index.insert("2024-01-10", "Oil change", 49.99);
    let _ = index.insert("2024-02-20", "New tires", 400.0);
    index
}

#[test]
fn export_writes_sorted_report() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("civic.txt");

    let written = export_to_file(&sample_index(), &path).expect("export succeeds");

    assert_eq!(written, 3);
    assert_eq!(
        fs::read_to_string(&path).expect("exported file"),
        "=== Maintenance Records (by Date) ===\n\
         Date: 2024-01-10 | Description: Oil change | Cost: $49.99\n\
         Date: 2024-02-20 | Description: New tires | Cost: $400\n\
         Date: 2024-03-05 | Description: Tire rotation | Cost: $30\n\
         ======================================\n"
    );
}

#[test]
fn export_replaces_previous_contents() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("civic.txt");
    fs::write(&path, "stale contents that are much longer than the new report ".repeat(20)).expect("seed file");

    export_to_file(&MaintenanceIndex::new(), &path).expect("export succeeds");

    assert_eq!(
        fs::read_to_string(&path).expect("exported file"),
        "=== Maintenance Records (by Date) ===\n======================================\n"
    );
}

#[test]
fn export_into_missing_directory_reports_create_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("no-such-dir").join("civic.txt");

    let error = export_to_file(&sample_index(), &path).expect_err("directory does not exist");

    assert!(matches!(error, ExportError::Create { .. }));
    assert_eq!(error.to_string(), format!("failed to open {}", path.display()));
    assert!(std::error::Error::source(&error).is_some());
}
