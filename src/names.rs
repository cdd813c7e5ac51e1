//! Local player-name bookkeeping
//!
//! The session manager owns the authoritative roster; the receiver keeps
//! its own small index of display names, captured from join requests, so
//! announcements on the shared screen can be worded with names. Lookups
//! may legitimately miss, since a player can reach the playing state
//! without a join observed on the current run, and a miss renders as a
//! blank name rather than an error.

use std::collections::HashMap;

use rustrict::CensorStr;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Maps player identifiers to the display names they joined with
///
/// Names are normalized on the way in and may be overwritten by a later
/// join from the same player. The index is reset whenever a run starts.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NameIndex {
    /// Mapping from player ID to the normalized display name
    mapping: HashMap<PlayerId, String>,
}

impl NameIndex {
    /// Normalizes a display name arriving from a join request
    ///
    /// Surrounding whitespace is stripped and inappropriate content is
    /// censored in place. Unlike a lobby with reserved names, joins are
    /// never rejected here, so an unusable name degrades to an empty one
    /// instead of failing the join.
    pub fn normalize(name: &str) -> String {
        rustrict::trim_whitespace(name).censor()
    }

    /// Records a player's display name, replacing any previous entry.
    ///
    /// Returns the name as stored, after normalization.
    pub fn record(&mut self, id: PlayerId, name: &str) -> String {
        let name = Self::normalize(name);
        self.mapping.insert(id, name.clone());
        name
    }

    /// Retrieves the recorded name for a player.
    pub fn get(&self, id: &PlayerId) -> Option<&str> {
        self.mapping.get(id).map(String::as_str)
    }

    /// Retrieves the recorded name for a player, rendering a miss as the
    /// empty string.
    pub fn display(&self, id: &PlayerId) -> &str {
        self.get(id).unwrap_or_default()
    }

    /// Number of players with a recorded name.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether no names are recorded.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Drops every recorded name.
    pub fn clear(&mut self) {
        self.mapping.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut names = NameIndex::default();
        let id = PlayerId::random();

        let stored = names.record(id.clone(), "TestPlayer");

        assert_eq!(stored, "TestPlayer");
        assert_eq!(names.get(&id), Some("TestPlayer"));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_record_overwrites_previous_name() {
        let mut names = NameIndex::default();
        let id = PlayerId::random();

        names.record(id.clone(), "FirstName");
        names.record(id.clone(), "SecondName");

        assert_eq!(names.get(&id), Some("SecondName"));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_whitespace_trimming() {
        let mut names = NameIndex::default();
        let id = PlayerId::random();

        let stored = names.record(id.clone(), "  TestPlayer  ");

        assert_eq!(stored, "TestPlayer");
        assert_eq!(names.get(&id), Some("TestPlayer"));
    }

    #[test]
    fn test_blank_names_stay_blank() {
        let mut names = NameIndex::default();
        let id = PlayerId::random();

        assert_eq!(names.record(id.clone(), ""), "");
        assert_eq!(names.record(id.clone(), "   \t\n"), "");
        assert_eq!(names.get(&id), Some(""));
    }

    #[test]
    fn test_inappropriate_content_is_censored() {
        let mut names = NameIndex::default();
        let id = PlayerId::random();

        // Words rustrict flags should come out masked, not rejected
        for name in ["damn", "fuck", "shit"] {
            let stored = names.record(id.clone(), name);
            assert_ne!(stored, name, "expected '{name}' to be censored");
            assert!(!stored.is_empty());
        }
    }

    #[test]
    fn test_display_renders_miss_as_blank() {
        let names = NameIndex::default();
        let id = PlayerId::random();

        assert_eq!(names.get(&id), None);
        assert_eq!(names.display(&id), "");
    }

    #[test]
    fn test_duplicate_names_across_players_are_allowed() {
        let mut names = NameIndex::default();
        let id1 = PlayerId::random();
        let id2 = PlayerId::random();

        names.record(id1.clone(), "Player");
        names.record(id2.clone(), "Player");

        assert_eq!(names.get(&id1), Some("Player"));
        assert_eq!(names.get(&id2), Some("Player"));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_clear_empties_the_index() {
        let mut names = NameIndex::default();
        names.record(PlayerId::random(), "Player1");
        names.record(PlayerId::random(), "Player2");

        names.clear();

        assert!(names.is_empty());
        assert_eq!(names.len(), 0);
    }

    #[test]
    fn test_unicode_names_survive() {
        let mut names = NameIndex::default();
        let id = PlayerId::random();

        let unicode_name = "Плеер测试";
        let stored = names.record(id.clone(), unicode_name);

        assert_eq!(stored, unicode_name);
        assert_eq!(names.display(&id), unicode_name);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut original = NameIndex::default();
        let id = PlayerId::random();
        original.record(id.clone(), "Player1");

        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: NameIndex = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.get(&id), Some("Player1"));
    }
}
