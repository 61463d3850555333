//! Output entity mapping and document generation
//!
//! - [`programme`]: raw programme -> XMLTV programme
//! - [`channel`]: channel status -> XMLTV channel
//! - [`m3u`]: channel status -> playlist entry, playlist document
//! - [`epg_generator`]: XMLTV document

pub mod channel;
pub mod epg_generator;
pub mod m3u;
pub mod programme;

pub use channel::{ICON_HEIGHT, ICON_WIDTH, map_guide_channel};
pub use epg_generator::XmltvWriter;
pub use m3u::{playlist_entry, render_playlist};
pub use programme::map_programme;
