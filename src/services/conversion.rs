//! Conversion of a feed snapshot into playlist and guide documents

use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppResult;
use crate::ingestor::{DirectorySource, Snapshot, load_snapshot};
use crate::models::{GuideChannel, PlaylistEntry, Programme};
use crate::proxy::{XmltvWriter, map_guide_channel, map_programme, playlist_entry, render_playlist};

/// Statistics about one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStatistics {
    pub channels: usize,
    pub programmes_written: usize,
    pub programmes_failed: usize,
    pub generation_time_ms: u64,
}

/// Rendered documents of one conversion run
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub playlist: String,
    pub xmltv: String,
    pub statistics: ConversionStatistics,
}

/// Entities produced from a snapshot, before rendering
#[derive(Debug, Clone, Default)]
pub struct GuideEntities {
    pub channels: Vec<GuideChannel>,
    pub playlist: Vec<PlaylistEntry>,
    pub programmes: Vec<Programme>,
    pub programmes_failed: usize,
}

/// Converts snapshots into M3U and XMLTV documents
#[derive(Debug, Clone)]
pub struct GuideConverter {
    xmltv_writer: XmltvWriter,
}

impl GuideConverter {
    pub fn new(xmltv_writer: XmltvWriter) -> Self {
        Self { xmltv_writer }
    }

    /// Map every channel and programme of `snapshot`
    ///
    /// A programme with an unparseable timestamp is logged and left out; the
    /// rest of the run is unaffected.
    pub fn build_entities(&self, snapshot: &Snapshot) -> GuideEntities {
        let mut entities = GuideEntities::default();

        for channel in &snapshot.channels {
            let status = &channel.status;
            entities.channels.push(map_guide_channel(status));
            entities.playlist.push(playlist_entry(status));

            for program in &channel.guide.programs {
                match map_programme(program, status.channel.category_names()) {
                    Ok(programme) => entities.programmes.push(programme),
                    Err(e) => {
                        warn!(
                            "Skipping programme '{}' on channel {}: {}",
                            program.title.value, status.id, e
                        );
                        entities.programmes_failed += 1;
                    }
                }
            }
        }

        entities
    }

    /// Produce both documents for `snapshot`
    pub fn convert(&self, snapshot: &Snapshot) -> ConversionOutput {
        let start_time = Instant::now();

        let entities = self.build_entities(snapshot);
        let playlist = render_playlist(&entities.playlist);
        let xmltv = self
            .xmltv_writer
            .write(&entities.channels, &entities.programmes);

        let statistics = ConversionStatistics {
            channels: entities.channels.len(),
            programmes_written: entities.programmes.len(),
            programmes_failed: entities.programmes_failed,
            generation_time_ms: elapsed_millis(start_time.elapsed()),
        };

        info!(
            "Conversion completed: {} channels, {} programmes, {} failed, {}ms",
            statistics.channels,
            statistics.programmes_written,
            statistics.programmes_failed,
            statistics.generation_time_ms
        );

        ConversionOutput {
            playlist,
            xmltv,
            statistics,
        }
    }
}

/// Run a full conversion as described by `config`: read the snapshot
/// directory, render both documents and write them to their output paths
pub fn run_conversion(config: &Config) -> AppResult<ConversionStatistics> {
    info!("Reading snapshot from {:?}", config.input.snapshot_dir);
    let snapshot = load_snapshot(&DirectorySource::new(&config.input.snapshot_dir))?;

    let converter = GuideConverter::new(XmltvWriter::new(
        config.xmltv.generator_info_name.as_str(),
    ));
    let output = converter.convert(&snapshot);

    write_document(&config.output.m3u_path, &output.playlist)?;
    write_document(&config.output.xmltv_path, &output.xmltv)?;

    Ok(output.statistics)
}

/// Whole milliseconds, saturating at `u64::MAX`
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn write_document(path: &Path, contents: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    info!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
