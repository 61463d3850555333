//! Metadata normalization pipeline
//!
//! Turns a raw guide programme into a [`NormalizedProgram`]:
//!
//! 1. [`metadata`] pulls season/episode/rating out of the title and description
//! 2. [`categories`] merges channel and programme tags into canonical labels
//! 3. a rating marks the programme as a film (`Movie` category)
//!
//! [`episode`] renders the resulting season/episode for the guide output.

pub mod categories;
pub mod episode;
pub mod metadata;

pub use categories::{MOVIE_CATEGORY, ensure_movie_category, merge_categories};
pub use episode::{episode_nums, onscreen_episode_code};
pub use metadata::{ExtractedMetadata, extract_metadata};

use crate::models::{NormalizedProgram, RawProgram};

/// Normalize one programme against the categories of the channel airing it
pub fn normalize_program<'a, C>(program: &RawProgram, channel_categories: C) -> NormalizedProgram
where
    C: IntoIterator<Item = &'a str>,
{
    let meta = extract_metadata(&program.title.value, &program.description.value);

    let mut categories = merge_categories(channel_categories, program.category_values());
    if meta.has_rating() {
        ensure_movie_category(&mut categories);
    }

    NormalizedProgram {
        title: meta.title,
        description: meta.description,
        season: meta.season,
        episode: meta.episode,
        rating: meta.rating,
        categories,
        is_live: program.is_live,
        channel: program.channel.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextElement;

    const NONE: [&str; 0] = [];

    fn program(title: &str, description: &str, categories: &[&str]) -> RawProgram {
        RawProgram {
            title: TextElement::new(title),
            description: TextElement::new(description),
            start: "20210422030000".to_string(),
            stop: "20210422040000".to_string(),
            channel: "abc123".to_string(),
            categories: categories.iter().map(|c| TextElement::new(*c)).collect(),
            is_live: false,
        }
    }

    #[test]
    fn test_normalize_news_scenario() {
        let raw = program("News (S1,E1)", "[Rated TV-14] Top stories", &[]);
        let normalized = normalize_program(&raw, ["News", "Other"]);

        assert_eq!(normalized.title, "News");
        assert_eq!(normalized.description, "[Rated TV-14] Top stories");
        assert_eq!(normalized.season, 1);
        assert_eq!(normalized.episode, 1);
        assert_eq!(normalized.rating, "TV-14");
        assert_eq!(normalized.categories, vec!["News", "Movie"]);
        assert_eq!(normalized.channel, "abc123");
    }

    #[test]
    fn test_rating_does_not_duplicate_channel_movie() {
        let raw = program("Feature", "A film [Not Rated]", &["Movies"]);
        let normalized = normalize_program(&raw, ["Movies"]);

        // Both sources contribute a "Movie"; the rating adds nothing further
        assert_eq!(normalized.categories, vec!["Movie", "Movie"]);
        assert_eq!(normalized.rating, "NR");
    }

    #[test]
    fn test_no_rating_no_movie() {
        let raw = program("Weather", "Forecast", &["HD Unknown"]);
        let normalized = normalize_program(&raw, ["Local"]);
        assert_eq!(normalized.categories, vec!["Local", "HD"]);
        assert!(normalized.rating.is_empty());
    }

    #[test]
    fn test_live_flag_carried() {
        let mut raw = program("Game Day", "", &[]);
        raw.is_live = true;
        assert!(normalize_program(&raw, NONE).is_live);
    }

    #[test]
    fn test_normalizing_twice_is_a_no_op() {
        let raw = program("Big Show (S2,E5)", "S2E5: Finale", &["Drama"]);
        let first = normalize_program(&raw, ["Entertainment"]);

        let again = program(&first.title, &first.description, &[]);
        let second = normalize_program(&again, NONE);
        assert_eq!(second.title, first.title);
        assert_eq!(second.description, first.description);
        assert_eq!((second.season, second.episode), (0, 0));
    }
}
