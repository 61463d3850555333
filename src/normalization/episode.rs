//! On-screen episode codes (`S2E5`, `E7`)

use crate::models::EpisodeNum;

/// Render a season/episode pair as an on-screen code
///
/// No code is produced without an episode number, whatever the season says.
/// Numbers are not zero padded.
pub fn onscreen_episode_code(season: u32, episode: u32) -> Option<String> {
    match (season, episode) {
        (_, 0) => None,
        (0, episode) => Some(format!("E{episode}")),
        (season, episode) => Some(format!("S{season}E{episode}")),
    }
}

/// XMLTV episode numbers for a season/episode pair (empty or one element)
pub fn episode_nums(season: u32, episode: u32) -> Vec<EpisodeNum> {
    onscreen_episode_code(season, episode)
        .map(EpisodeNum::onscreen)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, None)]
    #[case(4, 0, None)]
    #[case(0, 7, Some("E7"))]
    #[case(2, 5, Some("S2E5"))]
    #[case(12, 105, Some("S12E105"))]
    #[case(1, 1, Some("S1E1"))]
    fn test_onscreen_episode_code(
        #[case] season: u32,
        #[case] episode: u32,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(onscreen_episode_code(season, episode).as_deref(), expected);
    }

    #[test]
    fn test_episode_nums_use_onscreen_system() {
        let nums = episode_nums(2, 5);
        assert_eq!(nums.len(), 1);
        assert_eq!(nums[0].system, "onscreen");
        assert_eq!(nums[0].value, "S2E5");

        assert!(episode_nums(3, 0).is_empty());
    }
}
