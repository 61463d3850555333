//! Season, episode and rating extraction from free text
//!
//! STIRR does not publish structured episode metadata. Instead it is embedded
//! in the programme text in a handful of recognisable shapes:
//!
//! - title suffix: `"Big Show (S2,E5)"`
//! - description prefix: `"S3E10: A rescue mission"`, `"E4 - Solo run"`
//! - description tag: `"[Rated PG-13]"`, `"[Not Rated]"`
//!
//! The stages run in that order. When both the title and the description
//! carry a season/episode, the description wins: its values overwrite the
//! title's, including resetting the season to 0 when the description only
//! names an episode.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Title suffix: `<name> (S<season>,E<episode>)` at the very end of the title.
///
/// Digit and whitespace classes are ASCII only: `[0-9]` and `[\t\n\f\r ]`.
///
/// Groups: 1 = name (trimmed afterwards), 2 = season digits, 3 = episode digits.
static TITLE_EPISODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+)[\t\n\f\r ]*\(S([0-9]+),E([0-9]+)\)$")
        .expect("title episode pattern is valid")
});

/// Description prefix: optional whitespace, optional `S<season>` followed by
/// one optional separator from `[ :,]`, then `E<episode>`, one separator from
/// `[: -]` with optional whitespace on either side, and the remaining text.
/// `"E4 - Solo run"` therefore yields `"Solo run"`, not `"- Solo run"`.
///
/// Digit and whitespace classes are ASCII only, as in the title pattern.
///
/// Groups: 1 = season digits (optional), 2 = episode digits, 3 = rest.
static DESCRIPTION_EPISODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\t\n\f\r ]*(?:S([0-9]+)[ :,]?)?E([0-9]+)[\t\n\f\r ]*[: -][\t\n\f\r ]*(.+)$")
        .expect("description episode pattern is valid")
});

/// Rating tag anywhere in the text: `[Rated <code>]` (shortest code) or the
/// literal `[Not Rated]`.
///
/// Groups: 1 = rating code, absent for `[Not Rated]`.
static RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:Not Rated|Rated (.+?))\]").expect("rating pattern is valid")
});

/// Rating code emitted for `[Not Rated]`
pub const NOT_RATED_CODE: &str = "NR";

/// Result of running every extraction stage over one programme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub title: String,
    pub description: String,
    /// 0 when absent
    pub season: u32,
    /// 0 when absent
    pub episode: u32,
    /// Empty when absent
    pub rating: String,
}

impl ExtractedMetadata {
    pub fn has_rating(&self) -> bool {
        !self.rating.is_empty()
    }
}

/// Run title, description and rating extraction in order
pub fn extract_metadata(title: &str, description: &str) -> ExtractedMetadata {
    let mut meta = ExtractedMetadata {
        title: title.to_string(),
        description: description.to_string(),
        ..Default::default()
    };

    if let Some(caps) = TITLE_EPISODE_RE.captures(title) {
        meta.title = caps[1].trim().to_string();
        meta.season = number_at(&caps, 2);
        meta.episode = number_at(&caps, 3);
    }

    if let Some(caps) = DESCRIPTION_EPISODE_RE.captures(description) {
        meta.description = caps[3].trim().to_string();
        meta.season = number_at(&caps, 1);
        meta.episode = number_at(&caps, 2);
    }

    if let Some(rating) = extract_rating(&meta.description) {
        meta.rating = rating;
    }

    meta
}

/// Find a rating tag in `text`
pub fn extract_rating(text: &str) -> Option<String> {
    RATING_RE.captures(text).map(|caps| match caps.get(1) {
        Some(code) => code.as_str().to_string(),
        None => NOT_RATED_CODE.to_string(),
    })
}

/// Numeric capture group; missing or unparseable (overflowing) digits read as 0
fn number_at(caps: &Captures<'_>, group: usize) -> u32 {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
