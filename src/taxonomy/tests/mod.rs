//! Unit tests for the skill taxonomy.

mod mapper_tests;

use camino::Utf8PathBuf;

/// Path of the checked-in OASF schema fixture.
pub(super) fn fixture_schema_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/taxonomy/schema")
}
