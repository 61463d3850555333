//! XMLTV document generation
//!
//! Channels and programmes are written by hand with every text node and
//! attribute passed through `quick_xml::escape::escape`. Element order inside
//! a programme follows the XMLTV DTD.

use quick_xml::escape::escape;
use tracing::info;

use crate::models::{GuideChannel, Programme};

/// UTC offset appended to wire timestamps in XMLTV time attributes
const XMLTV_UTC_OFFSET: &str = "+0000";

/// Writes XMLTV documents for a set of channels and programmes
#[derive(Debug, Clone)]
pub struct XmltvWriter {
    generator_info_name: String,
}

impl XmltvWriter {
    pub fn new<S: Into<String>>(generator_info_name: S) -> Self {
        Self {
            generator_info_name: generator_info_name.into(),
        }
    }

    /// Render a complete XMLTV document; channels precede programmes
    pub fn write(&self, channels: &[GuideChannel], programmes: &[Programme]) -> String {
        let mut xmltv = self.header();

        for channel in channels {
            self.write_channel(&mut xmltv, channel);
        }

        for programme in programmes {
            self.write_programme(&mut xmltv, programme);
        }

        xmltv.push_str("</tv>\n");

        info!(
            "XMLTV generation completed: channels={} programmes={} bytes={}",
            channels.len(),
            programmes.len(),
            xmltv.len()
        );

        xmltv
    }

    /// Document with no channels or programmes
    pub fn write_empty(&self) -> String {
        let mut xmltv = self.header();
        xmltv.push_str("</tv>\n");
        xmltv
    }

    fn header(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE tv SYSTEM \"xmltv.dtd\">\n<tv generator-info-name=\"{}\">\n",
            escape(self.generator_info_name.as_str())
        )
    }

    fn write_channel(&self, xmltv: &mut String, channel: &GuideChannel) {
        xmltv.push_str(&format!("  <channel id=\"{}\">\n", escape(channel.id.as_str())));

        for name in &channel.display_names {
            xmltv.push_str(&format!(
                "    <display-name>{}</display-name>\n",
                escape(name.value.as_str())
            ));
        }

        for icon in &channel.icons {
            xmltv.push_str(&format!(
                "    <icon src=\"{}\" width=\"{}\" height=\"{}\"/>\n",
                escape(icon.src.as_str()),
                icon.width,
                icon.height
            ));
        }

        xmltv.push_str("  </channel>\n");
    }

    fn write_programme(&self, xmltv: &mut String, programme: &Programme) {
        xmltv.push_str(&format!(
            "  <programme start=\"{} {XMLTV_UTC_OFFSET}\" stop=\"{} {XMLTV_UTC_OFFSET}\" channel=\"{}\">\n",
            programme.start,
            programme.stop,
            escape(programme.channel.as_str())
        ));

        for title in &programme.titles {
            xmltv.push_str(&format!("    <title>{}</title>\n", escape(title.value.as_str())));
        }

        // An empty description value is written as no element at all
        for desc in programme.descriptions.iter().filter(|d| !d.value.is_empty()) {
            xmltv.push_str(&format!("    <desc>{}</desc>\n", escape(desc.value.as_str())));
        }

        for category in &programme.categories {
            xmltv.push_str(&format!(
                "    <category>{}</category>\n",
                escape(category.value.as_str())
            ));
        }

        for episode in &programme.episode_nums {
            xmltv.push_str(&format!(
                "    <episode-num system=\"{}\">{}</episode-num>\n",
                escape(episode.system.as_str()),
                escape(episode.value.as_str())
            ));
        }

        if programme.live.is_some() {
            xmltv.push_str("    <live/>\n");
        }

        for rating in &programme.ratings {
            xmltv.push_str(&format!(
                "    <rating>\n      <value>{}</value>\n    </rating>\n",
                escape(rating.value.as_str())
            ));
        }

        xmltv.push_str("  </programme>\n");
    }
}
