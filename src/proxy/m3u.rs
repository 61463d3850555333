//! M3U playlist rendering

use tracing::{debug, info};

use crate::models::{ChannelStatus, PlaylistEntry};

/// First line of every playlist document
pub const M3U_HEADER: &str = "#EXTM3U";

/// Build the playlist entry for a channel from its airing status
pub fn playlist_entry(status: &ChannelStatus) -> PlaylistEntry {
    PlaylistEntry {
        channel_id: status.id.clone(),
        logo_url: status.logo_url().to_string(),
        title: status.title().to_string(),
        stream_url: status.stream_url().to_string(),
    }
}

impl PlaylistEntry {
    /// Render as `#EXTINF` header + stream URL (no trailing newline)
    ///
    /// Newlines inside the attribute header are removed so a stray line
    /// break in a title or URL cannot split the entry.
    pub fn to_m3u(&self) -> String {
        let header = [
            "#EXTINF:0".to_string(),
            format!("channel-id=\"{}\"", self.channel_id),
            format!("tvg-logo=\"{}\"", self.logo_url),
            format!("tvg-name=\"{}\"", self.title),
        ]
        .join(" ")
        .replace('\n', "");

        format!("{}, {}\n{}", header, self.title, self.stream_url)
    }
}

/// Render a complete playlist document
pub fn render_playlist(entries: &[PlaylistEntry]) -> String {
    let mut m3u = format!("{M3U_HEADER}\n");

    for entry in entries {
        let line = entry.to_m3u();
        debug!("M3U entry for {}: '{}'", entry.channel_id, line);
        m3u.push_str(&line);
        m3u.push('\n');
    }

    info!("Generated M3U playlist: channels={} bytes={}", entries.len(), m3u.len());
    m3u
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawChannel, StatusDocument};

    fn entry(title: &str) -> PlaylistEntry {
        PlaylistEntry {
            channel_id: "stirr-abc".to_string(),
            logo_url: "https://img.example/l.png".to_string(),
            title: title.to_string(),
            stream_url: "https://stream.example/live.m3u8".to_string(),
        }
    }

    #[test]
    fn test_to_m3u_exact_format() {
        assert_eq!(
            entry("Local Now").to_m3u(),
            "#EXTINF:0 channel-id=\"stirr-abc\" tvg-logo=\"https://img.example/l.png\" tvg-name=\"Local Now\", Local Now\nhttps://stream.example/live.m3u8"
        );
    }

    #[test]
    fn test_newlines_stripped_from_header() {
        let line = entry("Local\nNow").to_m3u();
        let (header, _) = line.split_once(", ").unwrap();
        assert_eq!(
            header,
            "#EXTINF:0 channel-id=\"stirr-abc\" tvg-logo=\"https://img.example/l.png\" tvg-name=\"LocalNow\""
        );
    }

    #[test]
    fn test_playlist_entry_from_status() {
        let mut feed = StatusDocument::default();
        feed.rss.channel.title = "Local Now".to_string();
        feed.rss.channel.item.link = "https://stream.example/x.m3u8".to_string();
        feed.rss.channel.item.media_content.logo.url = "https://img.example/x.png".to_string();
        let channel = RawChannel {
            id: "x1".to_string(),
            ..Default::default()
        };

        let entry = playlist_entry(&ChannelStatus::new(channel, 1, feed));
        assert_eq!(entry.channel_id, "stirr-x1");
        assert_eq!(entry.logo_url, "https://img.example/x.png");
        assert_eq!(entry.title, "Local Now");
        assert_eq!(entry.stream_url, "https://stream.example/x.m3u8");
    }

    #[test]
    fn test_render_playlist() {
        let m3u = render_playlist(&[entry("A"), entry("B")]);
        let lines: Vec<&str> = m3u.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "#EXTM3U");
        assert!(lines[1].ends_with("tvg-name=\"A\", A"));
        assert_eq!(lines[2], "https://stream.example/live.m3u8");
        assert!(lines[3].ends_with("tvg-name=\"B\", B"));
        assert!(m3u.ends_with('\n'));
    }

    #[test]
    fn test_render_empty_playlist() {
        assert_eq!(render_playlist(&[]), "#EXTM3U\n");
    }
}
