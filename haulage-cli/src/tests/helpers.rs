//! Test helpers for trip request files and CLI argument sets.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// New York to Philadelphia to Washington with a fresh duty cycle.
pub(super) const EAST_COAST_REQUEST: &str = r#"{
  "current": { "name": "New York, NY", "latitude": 40.7128, "longitude": -74.0060 },
  "pickup": { "name": "Philadelphia, PA", "latitude": 39.9526, "longitude": -75.1652 },
  "dropoff": { "name": "Washington, DC", "latitude": 38.9072, "longitude": -77.0369 },
  "current_cycle_hours": 0.0,
  "driver_name": "John Doe",
  "home_terminal": "Newark, NJ"
}"#;

/// The same trip with the pickup pushed off the map.
pub(super) const OUT_OF_RANGE_REQUEST: &str = r#"{
  "current": { "name": "New York, NY", "latitude": 40.7128, "longitude": -74.0060 },
  "pickup": { "name": "Nowhere", "latitude": 95.0, "longitude": -75.1652 },
  "dropoff": { "name": "Washington, DC", "latitude": 38.9072, "longitude": -77.0369 },
  "current_cycle_hours": 0.0
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write file");
}

/// Temporary directory addressed through UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `request.json` and return its path.
    pub(super) fn request(&self, contents: &str) -> Utf8PathBuf {
        let path = self.path("request.json");
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// Arguments for a trip departing on 11 March 2024 at the default time.
pub(super) fn trip_args(request_path: Utf8PathBuf) -> crate::plan::TripArgs {
    crate::plan::TripArgs {
        request_path: Some(request_path),
        start_date: Some("2024-03-11".to_owned()),
        ..crate::plan::TripArgs::default()
    }
}
