//! Word banks: three difficulty groups of lowercase-letter words.

use serde::{Deserialize, Serialize};

/// The three difficulty groups of a bank, easiest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroups {
    pub easy: Vec<String>,
    pub medium: Vec<String>,
    pub hard: Vec<String>,
}

impl WordGroups {
    /// Split a flat import list into three groups by word length,
    /// shortest third first.
    pub fn from_flat_list(words: &[String]) -> Self {
        let mut sorted = normalize_words(words.iter().map(String::as_str));
        sorted.sort_by_key(|w| w.len());
        let n = sorted.len();
        let s1 = n / 3;
        let s2 = 2 * n / 3;
        let hard = sorted.split_off(s2);
        let medium = sorted.split_off(s1);
        Self {
            easy: sorted,
            medium,
            hard,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.easy.is_empty() && self.medium.is_empty() && self.hard.is_empty()
    }

    /// Total words across all groups.
    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }
}

/// A named, selectable word bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBank {
    pub id: String,
    pub name: String,
    pub groups: WordGroups,
}

impl WordBank {
    pub fn new(id: impl Into<String>, name: impl Into<String>, groups: WordGroups) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            groups,
        }
    }

    /// The built-in bank: single letters, digraphs and two-letter words,
    /// then 3-5 letter words and common roots. Non-empty by construction.
    pub fn default_bank() -> Self {
        let easy: Vec<String> = (b'a'..=b'z').map(|c| (c as char).to_string()).collect();

        let medium = normalize_words(
            [
                "er", "tr", "ie", "ei", "th", "ch", "sh", "ph", "wh", "qu", "st", "pr", "br",
                "cr", "dr", "fr", "gr", "pl", "cl", "bl", "fl", "gl", "sl", "sp", "sk", "sm",
                "sn", "sw", "tw", "we", "be", "do", "go", "he", "if", "in", "is", "it", "me",
                "no", "on", "or", "to", "up", "us", "an", "as", "at", "by", "ox", "my", "of",
                "am", "so", "hi", "ok",
            ]
            .into_iter(),
        );

        let hard = normalize_words(
            [
                "the", "and", "for", "you", "are", "make", "play", "game", "type", "code",
                "ring", "star", "hand", "time", "true", "fire", "wind", "iron", "wood",
                "stone", "arrow", "guard", "laser", "pixel", "combo", "skill", "focus",
                "valor", "storm", "night", "light", "tower", "magic", "swift", "brave",
                "steel", "armor", "forge", "flame", "frost", "earth", "river", "plain",
                "mount", "field", "realm", "crown", "blade", "quest", "trail", "march",
                "tion", "ment", "able", "ance", "ence", "ness", "pre", "post", "over",
                "under", "anti", "auto", "bio",
            ]
            .into_iter(),
        );

        Self::new(
            "default",
            "Default bank",
            WordGroups { easy, medium, hard },
        )
    }
}

/// Lowercase, trim, drop anything that is not purely ASCII letters,
/// drop duplicates (first occurrence wins).
pub fn normalize_words<'a>(words: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for raw in words {
        let word = raw.trim().to_ascii_lowercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            continue;
        }
        if out.iter().any(|seen| *seen == word) {
            continue;
        }
        out.push(word);
    }
    out
}

/// Split free text on non-letter runs and normalize the tokens.
pub fn parse_bulk(text: &str) -> Vec<String> {
    normalize_words(text.split(|c: char| !c.is_ascii_alphabetic()))
}
