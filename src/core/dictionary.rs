use crate::domain::ports::WordOracle;
use crate::utils::error::{Result, VanityError};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 編進 binary 的英文字表
const EMBEDDED_WORDS: &str = include_str!("../../data/words.txt");

/// Hash-set backed word list used as the [`WordOracle`].
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().filter_map(|w| normalize(w.as_ref())).collect(),
        }
    }

    /// 一行一個單字；空行與 `#` 開頭的註解會被略過
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(word) = normalize(&line) {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| VanityError::DictionaryError {
            message: format!("cannot open {}: {}", path.display(), e),
        })?;

        let set = Self::from_reader(BufReader::new(file))?;
        if set.is_empty() {
            return Err(VanityError::DictionaryError {
                message: format!("{} contains no usable words", path.display()),
            });
        }

        tracing::info!("Loaded {} words from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn embedded() -> Self {
        Self::from_words(EMBEDDED_WORDS.lines())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for WordSet {
    fn is_word(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || word.starts_with('#') {
        return None;
    }
    // 撥號盤只有 a-z，其他字元的詞不可能被拼出來
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_lowercase())
}

/// 有設定路徑就讀檔，否則用內建字表
pub fn load_dictionary(path: Option<&str>) -> Result<WordSet> {
    match path {
        Some(path) => WordSet::from_file(path),
        None => {
            let set = WordSet::embedded();
            tracing::debug!("Using embedded word list ({} words)", set.len());
            Ok(set)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_reader_normalizes_entries() {
        let input = "# header\nBug\n\n  lens \nnon-word\ncafé\nkens\n";
        let set = WordSet::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.is_word("bug"));
        assert!(set.is_word("lens"));
        assert!(set.is_word("kens"));
        assert!(!set.is_word("Bug"));
        assert!(!set.is_word("non-word"));
    }

    #[test]
    fn test_embedded_word_list() {
        let set = WordSet::embedded();
        assert!(set.len() > 5_000);
        assert!(set.is_word("bug"));
        assert!(set.is_word("lens"));
        assert!(set.is_word("vert"));
        assert!(!set.is_word("zzzq"));
        // 只收 3、4 個字母的單字
        assert!(!set.is_word("phone"));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"cab\nbead\n").unwrap();

        let set = load_dictionary(temp_file.path().to_str()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.is_word("bead"));
    }

    #[test]
    fn test_missing_file_is_dictionary_error() {
        let err = load_dictionary(Some("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, VanityError::DictionaryError { .. }));
    }

    #[test]
    fn test_empty_file_is_dictionary_error() {
        let temp_file = NamedTempFile::new().unwrap();
        let err = WordSet::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, VanityError::DictionaryError { .. }));
    }
}
