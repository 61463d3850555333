//! Wire shapes of the STIRR feed documents
//!
//! These mirror the JSON bodies as the service returns them. Fields the
//! converter never reads are left out; serde ignores unknown keys.

use serde::Deserialize;

/// Lineup document: every channel the service currently offers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lineup {
    #[serde(rename = "channel", default, deserialize_with = "feed_serde::nullable")]
    pub channels: Vec<RawChannel>,
}

/// A channel as listed in the lineup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChannel {
    #[serde(rename = "display-name", default)]
    pub display_name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "feed_serde::nullable")]
    pub categories: Vec<CategoryTag>,
}

impl RawChannel {
    /// Category names in feed order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

/// A `{name, uuid}` category tag; only the name is used
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryTag {
    #[serde(default)]
    pub name: String,
}

/// Text node with an optional language, used for titles, descriptions and
/// categories in both the guide feed and the XMLTV output
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextElement {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub lang: Option<String>,
}

impl TextElement {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            lang: None,
        }
    }
}

/// Guide document for a single channel
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuideData {
    #[serde(rename = "programme", default, deserialize_with = "feed_serde::nullable")]
    pub programs: Vec<RawProgram>,
}

/// A programme as published in the guide feed
///
/// `start` and `stop` stay as wire text here so a malformed timestamp only
/// fails the programme that carries it, not the whole guide document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProgram {
    #[serde(default, deserialize_with = "feed_serde::nullable")]
    pub title: TextElement,
    #[serde(
        rename = "sinclair:isLiveProgram",
        default,
        deserialize_with = "feed_serde::string_bool"
    )]
    pub is_live: bool,
    #[serde(rename = "desc", default, deserialize_with = "feed_serde::nullable")]
    pub description: TextElement,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub stop: String,
    #[serde(default)]
    pub channel: String,
    #[serde(rename = "category", default, deserialize_with = "feed_serde::nullable")]
    pub categories: Vec<TextElement>,
}

impl RawProgram {
    /// Raw category labels in feed order
    pub fn category_values(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.value.as_str())
    }
}

/// Channel status document: what is airing on a channel right now
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusDocument {
    #[serde(default, deserialize_with = "feed_serde::nullable")]
    pub rss: StatusRss,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusRss {
    #[serde(default, deserialize_with = "feed_serde::nullable")]
    pub channel: StatusChannel,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusChannel {
    #[serde(default, deserialize_with = "feed_serde::nullable")]
    pub item: StatusItem,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusItem {
    /// Physical stream URL of the live programme
    #[serde(default)]
    pub link: String,
    #[serde(rename = "media:content", default, deserialize_with = "feed_serde::nullable")]
    pub media_content: MediaContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaContent {
    #[serde(rename = "sinclair:logo", default, deserialize_with = "feed_serde::nullable")]
    pub logo: Image,
}

/// Image reference; the published dimensions are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: String,
}

/// serde helpers for the feed's loosely typed JSON
pub mod feed_serde {
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer};
    use std::fmt;

    /// Treat an explicit `null` like a missing field
    pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Booleans sent as `"true"` / `"false"` (native booleans also accepted)
    pub fn string_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoolVisitor;

        impl<'de> Visitor<'de> for BoolVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean or a string containing \"true\" or \"false\"")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match value.trim() {
                    "" => Ok(false),
                    other => other.parse::<bool>().map_err(|_| {
                        de::Error::custom(format!("Invalid boolean string '{value}'"))
                    }),
                }
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(false)
            }
        }

        deserializer.deserialize_any(BoolVisitor)
    }
}
