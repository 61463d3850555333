//! Programme mapping: raw guide programme -> finished XMLTV programme

use tracing::debug;

use crate::models::{
    LiveMarker, NormalizedProgram, Programme, Rating, RawProgram, TextElement,
    namespaced_channel_id,
};
use crate::normalization::{episode_nums, normalize_program};
use crate::utils::datetime::{ParseError, WireTime};

/// Build the guide programme for `program`, airing on a channel tagged with
/// `channel_categories`
///
/// Fails only when `start` or `stop` is not a valid wire timestamp.
pub fn map_programme<'a, C>(program: &RawProgram, channel_categories: C) -> Result<Programme, ParseError>
where
    C: IntoIterator<Item = &'a str>,
{
    let start = WireTime::format(&WireTime::parse(&program.start)?);
    let stop = WireTime::format(&WireTime::parse(&program.stop)?);

    let normalized = normalize_program(program, channel_categories);
    debug!(
        "Normalized programme '{}' on {}: season={} episode={} rating='{}' categories={:?}",
        normalized.title,
        normalized.channel,
        normalized.season,
        normalized.episode,
        normalized.rating,
        normalized.categories
    );

    Ok(build_programme(normalized, start, stop))
}

/// Assemble a programme from already-normalized fields and formatted times
pub fn build_programme(normalized: NormalizedProgram, start: String, stop: String) -> Programme {
    let ratings = if normalized.rating.is_empty() {
        Vec::new()
    } else {
        vec![Rating {
            value: normalized.rating,
        }]
    };

    Programme {
        titles: vec![TextElement::new(normalized.title)],
        descriptions: vec![TextElement::new(normalized.description)],
        categories: normalized
            .categories
            .into_iter()
            .map(TextElement::new)
            .collect(),
        start,
        stop,
        live: normalized.is_live.then_some(LiveMarker),
        channel: namespaced_channel_id(&normalized.channel),
        episode_nums: episode_nums(normalized.season, normalized.episode),
        ratings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn raw(title: &str, description: &str) -> RawProgram {
        RawProgram {
            title: TextElement::new(title),
            description: TextElement::new(description),
            start: "20210422030000".to_string(),
            stop: "20210422043000".to_string(),
            channel: "abc123".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_map_news_scenario() {
        let programme =
            map_programme(&raw("News (S1,E1)", "[Rated TV-14] Top stories"), ["News", "Other"])
                .unwrap();

        assert_eq!(programme.titles, vec![TextElement::new("News")]);
        assert_eq!(
            programme.descriptions,
            vec![TextElement::new("[Rated TV-14] Top stories")]
        );
        assert_eq!(
            programme.categories,
            vec![TextElement::new("News"), TextElement::new("Movie")]
        );
        assert_eq!(programme.episode_nums.len(), 1);
        assert_eq!(programme.episode_nums[0].value, "S1E1");
        assert_eq!(programme.episode_nums[0].system, "onscreen");
        assert_eq!(programme.ratings, vec![Rating { value: "TV-14".to_string() }]);
        assert_eq!(programme.channel, "stirr-abc123");
        assert_eq!(programme.start, "20210422030000");
        assert_eq!(programme.stop, "20210422043000");
        assert_eq!(programme.live, None);
    }

    #[test]
    fn test_optional_fields_absent() {
        let programme = map_programme(&raw("Weather", "Forecast"), NONE).unwrap();
        assert!(programme.episode_nums.is_empty());
        assert!(programme.ratings.is_empty());
        assert!(programme.categories.is_empty());
        assert!(programme.live.is_none());
    }

    #[test]
    fn test_live_marker_present_only_when_live() {
        let mut program = raw("Game Day", "");
        program.is_live = true;
        let programme = map_programme(&program, NONE).unwrap();
        assert_eq!(programme.live, Some(LiveMarker));
    }

    #[test]
    fn test_season_without_episode_emits_no_code() {
        let normalized = NormalizedProgram {
            title: "Show".to_string(),
            season: 3,
            episode: 0,
            channel: "x".to_string(),
            ..Default::default()
        };
        let programme = build_programme(normalized, String::new(), String::new());
        assert!(programme.episode_nums.is_empty());
    }

    #[test]
    fn test_invalid_start_fails_programme() {
        let mut program = raw("News", "");
        program.start = "2021-04-22".to_string();
        let err = map_programme(&program, NONE).unwrap_err();
        assert_eq!(err.text(), "2021-04-22");
    }

    #[test]
    fn test_invalid_stop_fails_programme() {
        let mut program = raw("News", "");
        program.stop = "20210431000000".to_string();
        let err = map_programme(&program, NONE).unwrap_err();
        assert!(matches!(err, ParseError::InvalidDate { .. }));
    }
}
