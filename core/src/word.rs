use alloc::string::String;
use core::fmt;
use core::ops::Deref;
use serde::{Deserialize, Serialize};

use crate::*;

/// Canonical form used for every word comparison: surrounding whitespace removed, ASCII
/// uppercased.
pub fn normalize_word(text: &str) -> String {
    text.trim().to_ascii_uppercase()
}

/// Set of letters a level is built from. An empty alphabet only restricts words to A-Z.
///
/// Serialized as the letters string, e.g. `"ACT"`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    mask: u32,
}

impl Alphabet {
    pub const fn unrestricted() -> Self {
        Self { mask: 0 }
    }

    /// Parses the level `letters` string. Whitespace and commas are separators, repeats are
    /// allowed.
    pub fn parse(letters: &str) -> Result<Self> {
        let mut mask = 0;
        for ch in letters.chars() {
            if ch.is_whitespace() || ch == ',' {
                continue;
            }
            let upper = ch.to_ascii_uppercase();
            let bit = letter_bit(upper).ok_or_else(|| LevelError::InvalidCharacter {
                word: normalize_word(letters),
                ch,
            })?;
            mask |= bit;
        }
        Ok(Self { mask })
    }

    pub const fn is_unrestricted(&self) -> bool {
        self.mask == 0
    }

    pub const fn len(&self) -> u32 {
        self.mask.count_ones()
    }

    pub fn allows(&self, ch: char) -> bool {
        match letter_bit(ch) {
            Some(bit) => self.is_unrestricted() || self.mask & bit != 0,
            None => false,
        }
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + use<> {
        let mask = self.mask;
        ('A'..='Z').filter(move |&ch| letter_bit(ch).is_some_and(|bit| mask & bit != 0))
    }
}

impl TryFrom<String> for Alphabet {
    type Error = LevelError;

    fn try_from(letters: String) -> Result<Self> {
        Self::parse(&letters)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.letters().collect()
    }
}

fn letter_bit(ch: char) -> Option<u32> {
    ch.is_ascii_uppercase().then(|| 1 << (ch as u32 - 'A' as u32))
}

/// Bounds applied to words read back from storage, where the level's own config is not known.
const STORED_WORD: LayoutConfig = LayoutConfig::new_unchecked(1, usize::MAX, 1);

/// A validated, uppercase level word.
///
/// Deserializing goes through the same checks as [`Word::new`], minus the level-specific length
/// bounds and alphabet, so a stored word is always non-empty and A-Z only.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    pub fn new(text: &str, alphabet: &Alphabet, config: &LayoutConfig) -> Result<Self> {
        let word = normalize_word(text);

        if let Some(ch) = word.chars().find(|ch| !ch.is_ascii_uppercase()) {
            return Err(LevelError::InvalidCharacter { word, ch });
        }

        // A-Z only from here on, so byte length equals letter count
        let len = word.len();
        if !config.accepts_len(len) {
            return Err(LevelError::InvalidLength {
                word,
                len,
                min: config.min_word_len,
                max: config.max_word_len,
            });
        }

        if let Some(ch) = word.chars().find(|&ch| !alphabet.allows(ch)) {
            return Err(LevelError::LetterNotInAlphabet { word, ch });
        }

        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letter_count(&self) -> usize {
        self.0.len()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Word {
    type Error = LevelError;

    fn try_from(text: String) -> Result<Self> {
        Self::new(&text, &Alphabet::unrestricted(), &STORED_WORD)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
