//! Integration tests for loading the catalog file shipped in `config/`.

use roi_catalog::{Catalog, CatalogError, Selection};

/// Path to the catalog file relative to the workspace root
const CATALOG_PATH: &str = "config/catalog.yaml";

fn catalog_path() -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    workspace_root.join(CATALOG_PATH).to_string_lossy().to_string()
}

#[test]
fn test_shipped_file_matches_builtin() {
    let loaded = Catalog::load(&catalog_path()).unwrap();
    assert_eq!(&loaded, Catalog::builtin());
}

#[test]
fn test_loaded_catalog_drives_selection() {
    let loaded = Catalog::load(&catalog_path()).unwrap();
    let mut selection = Selection::from_ids(["fleet"], &loaded);
    selection.toggle("booking", &loaded);
    assert_eq!(selection.ids(), ["booking"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Catalog::load("does/not/exist.yaml").unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
