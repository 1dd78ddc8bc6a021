//! Tag block decoding and IRCv3 tag value escaping.

use std::collections::HashMap;
use std::fmt::{Result as FmtResult, Write};

/// Decoded tag block of a single line.
///
/// Maps tag names to their unescaped values. A tag sent without `=` maps
/// to the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tags(HashMap<String, String>);

impl Tags {
    /// Decode a tag block, with or without its leading `@`.
    ///
    /// Never fails: an empty block yields an empty map and empty entries
    /// (`a=1;;b=2`) are skipped. A repeated key keeps the last value.
    ///
    /// ```
    /// use tmi_proto::Tags;
    ///
    /// let tags = Tags::parse("@display-name=Foo;ban-reason=being\\smean;flags");
    /// assert_eq!(tags.get("display-name"), Some("Foo"));
    /// assert_eq!(tags.get("ban-reason"), Some("being mean"));
    /// assert_eq!(tags.get("flags"), Some(""));
    /// ```
    pub fn parse(block: &str) -> Tags {
        let block = block.strip_prefix('@').unwrap_or(block);
        let map = block
            .split(';')
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) => (key.to_owned(), unescape_tag_value(value)),
                None => (entry.to_owned(), String::new()),
            })
            .collect();
        Tags(map)
    }

    /// Value of a tag, if the line carried it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value of a tag, or the empty string when absent.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Whether the line carried this tag at all.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Tags {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Tags(iter.into_iter().collect())
    }
}

/// Escape a tag value for serialization.
///
/// Escapes special characters according to the IRCv3 message-tags spec.
/// Line breaks are written as `\r`/`\n` but [`Tags::parse`] drops them,
/// since a decoded tag value never spans lines.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match c {
            ';' => f.write_str("\\:")?,
            ' ' => f.write_str("\\s")?,
            '\\' => f.write_str("\\\\")?,
            '\r' => f.write_str("\\r")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Unescape a tag value from wire format.
///
/// `\s` becomes a space, `\:` a semicolon and `\\` a backslash. Escaped
/// line breaks (`\n`, `\r`) are removed rather than replaced.
pub(crate) fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match iter.next() {
            Some(':') => unescaped.push(';'),
            Some('s') => unescaped.push(' '),
            Some('\\') => unescaped.push('\\'),
            Some('r') | Some('n') => {}
            Some(c) => unescaped.push(c),
            None => break,
        }
    }
    unescaped
}
