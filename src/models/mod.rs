
pub mod stirr;

pub use stirr::{
    CategoryTag, GuideData, Image, Lineup, RawChannel, RawProgram, StatusDocument, TextElement,
};

/// Prefix that scopes STIRR channel ids inside a shared guide document
pub const CHANNEL_NAMESPACE: &str = "stirr-";

/// XMLTV episode numbering system for human readable codes
pub const ONSCREEN_SYSTEM: &str = "onscreen";

/// Namespace a raw STIRR channel id for use in the output documents
pub fn namespaced_channel_id(raw_id: &str) -> String {
    format!("{CHANNEL_NAMESPACE}{raw_id}")
}

/// A lineup channel paired with the "currently airing" document fetched for it
#[derive(Debug, Clone)]
pub struct ChannelStatus {
    /// Namespaced channel id (see [`namespaced_channel_id`])
    pub id: String,
    /// 1-based position of the channel in the lineup
    pub number: u32,
    pub channel: RawChannel,
    pub feed: StatusDocument,
}

impl ChannelStatus {
    pub fn new(channel: RawChannel, number: u32, feed: StatusDocument) -> Self {
        Self {
            id: namespaced_channel_id(&channel.id),
            number,
            channel,
            feed,
        }
    }

    /// Channel title as reported by the status feed (untrimmed)
    pub fn title(&self) -> &str {
        &self.feed.rss.channel.title
    }

    /// Logo of the programme currently airing
    pub fn logo_url(&self) -> &str {
        &self.feed.rss.channel.item.media_content.logo.url
    }

    /// Stream link of the programme currently airing
    pub fn stream_url(&self) -> &str {
        &self.feed.rss.channel.item.link
    }
}

/// A programme after metadata extraction and category normalization
///
/// `season` is only meaningful when `episode` is non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedProgram {
    pub title: String,
    pub description: String,
    /// 0 when absent
    pub season: u32,
    /// 0 when absent
    pub episode: u32,
    /// Empty when absent
    pub rating: String,
    pub categories: Vec<String>,
    pub is_live: bool,
    /// Raw (un-namespaced) channel reference
    pub channel: String,
}

/// Presence marker: the element exists only for live programmes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveMarker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeNum {
    pub system: String,
    pub value: String,
}

impl EpisodeNum {
    pub fn onscreen<S: Into<String>>(value: S) -> Self {
        Self {
            system: ONSCREEN_SYSTEM.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub value: String,
}

/// Finished XMLTV programme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Programme {
    pub titles: Vec<TextElement>,
    pub descriptions: Vec<TextElement>,
    pub categories: Vec<TextElement>,
    /// Wire formatted start (`YYYYMMDDHHMMSS`, UTC)
    pub start: String,
    /// Wire formatted stop (`YYYYMMDDHHMMSS`, UTC)
    pub stop: String,
    pub live: Option<LiveMarker>,
    /// Namespaced channel id
    pub channel: String,
    pub episode_nums: Vec<EpisodeNum>,
    pub ratings: Vec<Rating>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// Finished XMLTV channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideChannel {
    pub id: String,
    pub display_names: Vec<TextElement>,
    pub icons: Vec<Icon>,
}

/// One M3U playlist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub channel_id: String,
    pub logo_url: String,
    pub title: String,
    pub stream_url: String,
}
