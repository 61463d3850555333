//! Snapshot documents stored on disk
//!
//! ```text
//! <root>/lineup.json
//! <root>/status/<channel id>.json
//! <root>/guide/<channel id>.json
//! ```

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::FeedSource;
use crate::errors::{SourceError, SourceResult};
use crate::models::{GuideData, Lineup, StatusDocument};

pub const LINEUP_FILE: &str = "lineup.json";
pub const STATUS_DIR: &str = "status";
pub const GUIDE_DIR: &str = "guide";

/// [`FeedSource`] reading a snapshot directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn lineup_path(&self) -> PathBuf {
        self.root.join(LINEUP_FILE)
    }

    pub fn status_path(&self, channel_id: &str) -> PathBuf {
        self.root.join(STATUS_DIR).join(format!("{channel_id}.json"))
    }

    pub fn guide_path(&self, channel_id: &str) -> PathBuf {
        self.root.join(GUIDE_DIR).join(format!("{channel_id}.json"))
    }

    /// Read and decode one per-channel document; a missing file is reported
    /// as [`SourceError::MissingChannel`]
    fn read_channel_document<T: DeserializeOwned>(
        &self,
        path: PathBuf,
        channel_id: &str,
        kind: &str,
    ) -> SourceResult<T> {
        if !path.is_file() {
            return Err(SourceError::missing_channel(channel_id, kind));
        }
        read_json(&path)
    }
}

impl FeedSource for DirectorySource {
    fn lineup(&self) -> SourceResult<Lineup> {
        read_json(&self.lineup_path())
    }

    fn channel_status(&self, channel_id: &str) -> SourceResult<StatusDocument> {
        self.read_channel_document(self.status_path(channel_id), channel_id, "status")
    }

    fn guide(&self, channel_id: &str) -> SourceResult<GuideData> {
        self.read_channel_document(self.guide_path(channel_id), channel_id, "guide")
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> SourceResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
    debug!("Read {} bytes from {:?}", contents.len(), path);
    serde_json::from_str(&contents).map_err(|e| SourceError::decode(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_paths() {
        let source = DirectorySource::new("/data/snap");
        assert_eq!(source.lineup_path(), PathBuf::from("/data/snap/lineup.json"));
        assert_eq!(source.status_path("abc"), PathBuf::from("/data/snap/status/abc.json"));
        assert_eq!(source.guide_path("abc"), PathBuf::from("/data/snap/guide/abc.json"));
    }

    #[test]
    fn test_reads_documents() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "lineup.json",
            r#"{"channel": [{"display-name": "A", "id": "a"}]}"#,
        );
        write(
            dir.path(),
            "status/a.json",
            r#"{"rss": {"channel": {"title": "A TV"}}}"#,
        );
        write(
            dir.path(),
            "guide/a.json",
            r#"{"programme": [{"title": {"value": "News"}, "start": "20210422030000",
                               "stop": "20210422040000", "channel": "a"}]}"#,
        );

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.lineup().unwrap().channels[0].id, "a");
        assert_eq!(source.channel_status("a").unwrap().rss.channel.title, "A TV");
        assert_eq!(source.guide("a").unwrap().programs[0].title.value, "News");
    }

    #[test]
    fn test_missing_lineup_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DirectorySource::new(dir.path()).lineup().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_missing_channel_document() {
        let dir = tempfile::tempdir().unwrap();
        let err = DirectorySource::new(dir.path()).guide("zzz").unwrap_err();
        match err {
            SourceError::MissingChannel { channel_id, kind } => {
                assert_eq!(channel_id, "zzz");
                assert_eq!(kind, "guide");
            }
            other => panic!("Expected MissingChannel, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "status/a.json", "{not json");
        let err = DirectorySource::new(dir.path()).channel_status("a").unwrap_err();
        assert!(matches!(err, SourceError::Decode { .. }));
    }
}
