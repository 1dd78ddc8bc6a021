//! Emote span decoding.

/// One emote used in a message body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Emote {
    /// Text the emote replaced, taken from its first occurrence.
    pub name: String,
    /// Emote id as sent by the server.
    pub id: String,
    /// How many times the emote occurs in the body.
    pub count: usize,
}

/// Decode an `emotes` tag value against the message body it indexes.
///
/// The value is `/`-separated groups of `id:first-last,first-last`. Offsets
/// count Unicode scalar values and are inclusive on both ends. A range that
/// is malformed or falls outside the body leaves the emote's name empty;
/// a group without `:` is skipped.
///
/// ```
/// use tmi_proto::fields::parse_emotes;
///
/// let emotes = parse_emotes("25:0-4,12-16/1902:6-10", "Kappa Keepo Kappa");
/// assert_eq!(emotes[0].name, "Kappa");
/// assert_eq!(emotes[0].count, 2);
/// assert_eq!(emotes[1].name, "Keepo");
/// ```
pub fn parse_emotes(raw: &str, body: &str) -> Vec<Emote> {
    if raw.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = body.chars().collect();

    raw.split('/')
        .filter_map(|group| group.split_once(':'))
        .map(|(id, ranges)| {
            let first = ranges.split(',').next().unwrap_or_default();
            Emote {
                name: span(&chars, first).unwrap_or_default(),
                id: id.to_owned(),
                count: ranges.split(',').count(),
            }
        })
        .collect()
}

/// Text covered by an inclusive `first-last` range.
fn span(chars: &[char], range: &str) -> Option<String> {
    let (first, last) = range.split_once('-')?;
    let first: usize = first.parse().ok()?;
    let last: usize = last.parse().ok()?;
    if first > last {
        return None;
    }
    chars.get(first..=last).map(|s| s.iter().collect())
}
