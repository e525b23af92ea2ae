//! Capture session naming.
//!
//! Each capture run gets its own directory named after its start time, and
//! every shot is numbered per sensor: `tof1_0000`, `ir2_0013`, ...

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tracing::info;

use crate::depth_pipeline::common::error::{DepthError, Result};

/// Directory capture sessions are created in by default.
pub const DEFAULT_SESSION_ROOT: &str = "cal_data";

const SESSION_DIR_FORMAT: &str = "%y%m%d_%H%M%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    /// Time-of-flight depth sensor
    Tof,
    /// Infrared sensor
    Ir,
    /// Visible light sensor
    Vis,
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self {
            SensorKind::Tof => "tof",
            SensorKind::Ir => "ir",
            SensorKind::Vis => "vis",
        };
        f.write_str(prefix)
    }
}

/// Session directory for a run started at `started`.
pub fn session_dir<Tz: TimeZone>(root: &Path, started: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: fmt::Display,
{
    root.join(started.format(SESSION_DIR_FORMAT).to_string())
}

/// Creates the session directory for a run starting now.
pub fn create_session_dir(root: &Path) -> Result<PathBuf> {
    let dir = session_dir(root, &Local::now());
    std::fs::create_dir_all(&dir)
        .map_err(|e| DepthError::OutputWriteError(format!("{}: {}", dir.display(), e)))?;
    info!(dir = %dir.display(), "Created capture session directory");
    Ok(dir)
}

/// File stem of shot `count` from the `camera_number`-th sensor of a kind.
///
/// Camera numbers start at 1, shot counts at 0.
pub fn capture_stem(sensor: SensorKind, camera_number: usize, count: usize) -> String {
    format!("{sensor}{camera_number}_{count:04}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_capture_stems() {
        assert_eq!(capture_stem(SensorKind::Tof, 1, 0), "tof1_0000");
        assert_eq!(capture_stem(SensorKind::Ir, 2, 13), "ir2_0013");
        assert_eq!(capture_stem(SensorKind::Vis, 1, 12345), "vis1_12345");
    }

    #[test]
    fn test_session_dir_name() {
        let started = Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        let dir = session_dir(Path::new(DEFAULT_SESSION_ROOT), &started);
        assert_eq!(dir, Path::new("cal_data").join("230405_060708"));
    }

    #[test]
    fn test_create_session_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = create_session_dir(root.path()).unwrap();
        assert!(dir.is_dir());
        assert!(dir.starts_with(root.path()));
    }
}
