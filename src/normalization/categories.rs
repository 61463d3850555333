//! Category merging and canonicalization
//!
//! A programme's categories come from two places: the tags on its channel in
//! the lineup, and the tags on the programme itself. Channel tags are emitted
//! first, then programme tags, each in feed order.
//!
//! Duplicates across the two sources are kept. The only membership check is
//! [`ensure_movie_category`], used when a rating tag marks the programme as a
//! film.

/// Canonical film category
pub const MOVIE_CATEGORY: &str = "Movie";

/// Where a category label came from; programme tags get extra cleanup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    Channel,
    Program,
}

/// Canonical form of one label, or `None` when the label is dropped
pub fn canonicalize_category(label: &str, source: CategorySource) -> Option<&str> {
    match (label, source) {
        ("" | "Other", _) => None,
        ("Movies", _) => Some(MOVIE_CATEGORY),
        ("category", CategorySource::Program) => None,
        ("HD Unknown", CategorySource::Program) => Some("HD"),
        (other, _) => Some(other),
    }
}

/// Merge channel and programme labels into one ordered list
pub fn merge_categories<'c, 'p, C, P>(channel_categories: C, program_categories: P) -> Vec<String>
where
    C: IntoIterator<Item = &'c str>,
    P: IntoIterator<Item = &'p str>,
{
    let channel = channel_categories
        .into_iter()
        .filter_map(|label| canonicalize_category(label, CategorySource::Channel))
        .map(str::to_string);
    let program = program_categories
        .into_iter()
        .filter_map(|label| canonicalize_category(label, CategorySource::Program))
        .map(str::to_string);

    channel.chain(program).collect()
}

/// Append [`MOVIE_CATEGORY`] unless an identical label is already present
pub fn ensure_movie_category(categories: &mut Vec<String>) {
    if !categories.iter().any(|c| c == MOVIE_CATEGORY) {
        categories.push(MOVIE_CATEGORY.to_string());
    }
}
