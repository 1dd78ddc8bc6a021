//! User identity and badge decoding.

use std::collections::HashMap;

use crate::message::Tags;

/// The chatter a line is attributed to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Numeric account id (`user-id`), kept as sent.
    pub id: String,
    /// Login name, lower-case.
    pub name: String,
    /// Name as the user chose to style it (`display-name`).
    pub display_name: String,
    /// Hex colour such as `#FF0000`, empty when the user never picked one.
    pub color: String,
    /// Badge name to badge level, e.g. `subscriber` → `6`.
    pub badges: HashMap<String, i64>,
}

impl User {
    /// Level of a badge, if the user wears it.
    pub fn badge(&self, name: &str) -> Option<i64> {
        self.badges.get(name).copied()
    }

    pub fn is_broadcaster(&self) -> bool {
        self.badges.contains_key("broadcaster")
    }

    pub fn is_moderator(&self) -> bool {
        self.badges.contains_key("moderator")
    }
}

/// Decode the user identity of a line.
///
/// `source_username` is the nickname from the line's prefix. Lines such as
/// USERSTATE carry no prefix nick; the login is then derived from
/// `display-name`.
pub fn parse_user(tags: &Tags, source_username: &str) -> User {
    let display_name = tags.get_or_empty("display-name");
    let name = if source_username.is_empty() && !display_name.is_empty() {
        display_name.to_lowercase().replacen(' ', "", 1)
    } else {
        source_username.to_owned()
    };

    User {
        id: tags.get_or_empty("user-id").to_owned(),
        name,
        display_name: display_name.to_owned(),
        color: tags.get_or_empty("color").to_owned(),
        badges: parse_badges(tags.get_or_empty("badges")),
    }
}

/// Decode a `badges` tag value (`name/level,name/level`).
///
/// Pairs without a `/level` half are skipped. Levels that are not numbers,
/// such as the `blue-1` of prediction badges, decode as `0`.
pub fn parse_badges(raw: &str) -> HashMap<String, i64> {
    raw.split(',')
        .filter_map(|badge| badge.split_once('/'))
        .map(|(name, level)| (name.to_owned(), level.parse().unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges() {
        let badges = parse_badges("subscriber/6,premium/1");
        assert_eq!(badges.len(), 2);
        assert_eq!(badges["subscriber"], 6);
        assert_eq!(badges["premium"], 1);
    }

    #[test]
    fn test_badges_skip_malformed_pairs() {
        let badges = parse_badges("moderator/1,broken,predictions/blue-1,");
        assert_eq!(badges.len(), 2);
        assert_eq!(badges["moderator"], 1);
        assert_eq!(badges["predictions"], 0);
        assert!(parse_badges("").is_empty());
    }

    #[test]
    fn test_user_from_prefix_and_tags() {
        let tags = Tags::parse(
            "badges=broadcaster/1;color=#FF0000;display-name=Redflamingo13;user-id=78424343",
        );
        let user = parse_user(&tags, "redflamingo13");
        assert_eq!(user.id, "78424343");
        assert_eq!(user.name, "redflamingo13");
        assert_eq!(user.display_name, "Redflamingo13");
        assert_eq!(user.color, "#FF0000");
        assert!(user.is_broadcaster());
        assert!(!user.is_moderator());
        assert_eq!(user.badge("broadcaster"), Some(1));
    }

    #[test]
    fn test_name_derived_from_display_name() {
        // \s is an escaped space; only the first one is removed
        let tags = Tags::parse("display-name=Some\\sCool\\sName");
        let user = parse_user(&tags, "");
        assert_eq!(user.name, "somecool name");
        assert_eq!(user.display_name, "Some Cool Name");
    }

    #[test]
    fn test_empty_user() {
        let user = parse_user(&Tags::default(), "");
        assert_eq!(user, User::default());
    }
}
