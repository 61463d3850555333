//! Guide channel mapping

use crate::models::{ChannelStatus, GuideChannel, Icon, TextElement};

/// Presentation width advertised for every channel icon
pub const ICON_WIDTH: u32 = 340;
/// Presentation height advertised for every channel icon
pub const ICON_HEIGHT: u32 = 255;

/// Build the XMLTV channel for a lineup channel and its airing status
///
/// Both the channel title and the lineup number are listed as display names
/// so guide consumers can match either. The icon always advertises
/// [`ICON_WIDTH`]x[`ICON_HEIGHT`], whatever the size of the source image.
pub fn map_guide_channel(status: &ChannelStatus) -> GuideChannel {
    GuideChannel {
        id: status.id.clone(),
        display_names: vec![
            TextElement::new(status.title().trim()),
            TextElement::new(status.number.to_string()),
        ],
        icons: vec![Icon {
            src: status.logo_url().to_string(),
            width: ICON_WIDTH,
            height: ICON_HEIGHT,
        }],
    }
}
