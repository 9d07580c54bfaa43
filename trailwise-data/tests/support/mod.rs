use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;
use tempfile::{Builder, TempPath};

/// Path to a checked-in fixture file.
pub fn fixture(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Write `contents` to a temporary file ending in `suffix`.
pub fn write_temp(suffix: &str, contents: &str) -> TempPath {
    let mut file = Builder::new()
        .prefix("trailwise")
        .suffix(suffix)
        .tempfile()
        .unwrap_or_else(|err| panic!("failed to create temporary {suffix} file: {err}"));
    file.write_all(contents.as_bytes())
        .unwrap_or_else(|err| panic!("failed to write temporary {suffix} file: {err}"));
    file.flush()
        .unwrap_or_else(|err| panic!("failed to flush temporary {suffix} file: {err}"));
    file.into_temp_path()
}

/// View a temporary path as UTF-8.
pub fn utf8(path: &std::path::Path) -> &Utf8Path {
    Utf8Path::from_path(path).unwrap_or_else(|| panic!("non-UTF-8 temp path {path:?}"))
}

/// Header shared by the CSV trail fixtures.
pub const TRAIL_HEADER: &str = "id,name,region,start_lat,start_lon,end_lat,end_lon,length_km,elevation_gain,difficulty,terrain_type,tags";
