//! Feed snapshot ingestion
//!
//! A snapshot is the set of STIRR documents captured for one conversion run:
//! the lineup, plus one status document and one guide document per channel.
//! [`FeedSource`] abstracts where those documents come from; [`load_snapshot`]
//! walks the lineup and pairs every channel with its documents.

use tracing::{debug, info, warn};

use crate::errors::SourceResult;
use crate::models::{ChannelStatus, GuideData, Lineup, StatusDocument};

pub mod directory;

pub use directory::DirectorySource;

/// Provider of decoded feed documents
pub trait FeedSource {
    /// The channel lineup
    fn lineup(&self) -> SourceResult<Lineup>;

    /// "Currently airing" document for a raw channel id
    fn channel_status(&self, channel_id: &str) -> SourceResult<StatusDocument>;

    /// Programme guide for a raw channel id
    fn guide(&self, channel_id: &str) -> SourceResult<GuideData>;
}

/// One lineup channel with everything needed to render it
#[derive(Debug, Clone)]
pub struct ChannelSnapshot {
    pub status: ChannelStatus,
    pub guide: GuideData,
}

/// Every renderable channel of a run, in lineup order
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub channels: Vec<ChannelSnapshot>,
    /// Raw ids of lineup channels dropped for lack of a status document
    pub skipped_channels: Vec<String>,
}

/// Load the lineup and the per-channel documents from `source`
///
/// Only the lineup is mandatory. A channel without a usable status document is
/// skipped; a channel without a usable guide is kept with no programmes.
pub fn load_snapshot<S: FeedSource + ?Sized>(source: &S) -> SourceResult<Snapshot> {
    let lineup = source.lineup()?;
    info!("Loaded lineup with {} channels", lineup.channels.len());

    let mut snapshot = Snapshot::default();

    for (index, channel) in lineup.channels.into_iter().enumerate() {
        let number = u32::try_from(index + 1).unwrap_or(u32::MAX);

        let feed = match source.channel_status(&channel.id) {
            Ok(feed) => feed,
            Err(e) => {
                warn!("Skipping channel {} ({}): {}", channel.id, channel.display_name, e);
                snapshot.skipped_channels.push(channel.id);
                continue;
            }
        };

        let guide = source.guide(&channel.id).unwrap_or_else(|e| {
            warn!("No guide for channel {} ({}): {}", channel.id, channel.display_name, e);
            GuideData::default()
        });

        debug!(
            "Channel #{} {}: {} programmes",
            number,
            channel.id,
            guide.programs.len()
        );

        snapshot.channels.push(ChannelSnapshot {
            status: ChannelStatus::new(channel, number, feed),
            guide,
        });
    }

    info!(
        "Snapshot loaded: channels={} skipped={}",
        snapshot.channels.len(),
        snapshot.skipped_channels.len()
    );

    Ok(snapshot)
}
