//! Telephone keypad mapping and letter-combination enumeration.

use std::fmt;

/// 2..=9 的字母，依撥號盤順序排列。0 與 1 沒有字母。
const DIAL_PAD: [&str; 8] = ["abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz"];

/// A digit that carries letters on the keypad (2 through 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeypadDigit(u8);

impl KeypadDigit {
    pub fn new(digit: char) -> Option<Self> {
        match digit {
            '2'..='9' => Some(Self(digit as u8 - b'0')),
            _ => None,
        }
    }

    /// Letters for this digit, in keypad order (e.g. `2` -> `"abc"`).
    pub fn letters(self) -> &'static str {
        DIAL_PAD[usize::from(self.0 - 2)]
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for KeypadDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Lazily enumerates every letter string a digit sequence can spell.
///
/// The first digit's letters vary slowest, so `23` yields
/// `ad, ae, af, bd, ...`.
#[derive(Debug, Clone)]
pub struct LetterCombinations {
    pools: Vec<&'static [u8]>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl LetterCombinations {
    pub fn new(digits: &[KeypadDigit]) -> Self {
        Self {
            pools: digits.iter().map(|d| d.letters().as_bytes()).collect(),
            indices: vec![0; digits.len()],
            exhausted: digits.is_empty(),
        }
    }

    // 像里程表一樣從最後一位進位
    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.pools[pos].len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for LetterCombinations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let word = self
            .pools
            .iter()
            .zip(&self.indices)
            .map(|(pool, &i)| char::from(pool[i]))
            .collect();
        self.advance();
        Some(word)
    }
}

pub fn letter_combinations(digits: &[KeypadDigit]) -> LetterCombinations {
    LetterCombinations::new(digits)
}
