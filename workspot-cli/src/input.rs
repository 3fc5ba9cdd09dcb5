//! Loading place lists from disk through capability-based IO.

use std::io::{self, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use log::{info, warn};
use workspot_core::Place;
use workspot_data::ingest_str;

use crate::CliError;

/// Open a UTF-8 file path using ambient authority.
fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether a path exists and is a regular file.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Ensure `path` names an existing regular file.
pub(crate) fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and decode the place list stored at `path`.
pub(crate) fn load_places(path: &Utf8Path) -> Result<Vec<Place>, CliError> {
    let read_error = |source| CliError::ReadPlaces {
        path: path.to_path_buf(),
        source,
    };
    let mut file = open_utf8_file(path).map_err(read_error)?;
    let mut json = String::new();
    file.read_to_string(&mut json).map_err(read_error)?;

    let ingested = ingest_str(&json).map_err(|source| CliError::ParsePlaces {
        path: path.to_path_buf(),
        source,
    })?;
    if ingested.summary.skipped > 0 {
        warn!(
            "skipped {} of {} records in {path}",
            ingested.summary.skipped, ingested.summary.records
        );
    }
    info!("loaded {} places from {path}", ingested.places.len());
    Ok(ingested.places)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
        (tmp, root)
    }

    #[rstest]
    fn require_file_accepts_regular_files() {
        let (_tmp, root) = workspace();
        let path = root.join("places.json");
        fs::write(&path, "[]").expect("write places");
        assert!(require_file(&path, "places").is_ok());
    }

    #[rstest]
    fn require_file_reports_missing_paths() {
        let (_tmp, root) = workspace();
        let err = require_file(&root.join("absent.json"), "places").expect_err("missing file");
        assert!(matches!(err, CliError::MissingSourceFile { field: "places", .. }));
    }

    #[rstest]
    fn require_file_rejects_directories() {
        let (_tmp, root) = workspace();
        let err = require_file(&root, "places").expect_err("directory");
        assert!(matches!(err, CliError::SourcePathNotFile { .. }));
    }

    #[rstest]
    fn load_places_reports_decode_errors_with_the_path() {
        let (_tmp, root) = workspace();
        let path = root.join("broken.json");
        fs::write(&path, "{ not json").expect("write places");
        match load_places(&path).expect_err("decode should fail") {
            CliError::ParsePlaces { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected ParsePlaces, found {other:?}"),
        }
    }
}
