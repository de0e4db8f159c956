use crate::core::dial_pad::{letter_combinations, KeypadDigit};
use crate::core::parser::{parse_phone_number, ParsedNumber};
use crate::domain::model::{VanityResult, MAX_CANDIDATES};
use crate::domain::ports::WordOracle;
use crate::utils::error::Result;

/// Turns a phone number into up to [`MAX_CANDIDATES`] vanity renderings.
///
/// Pure: the same number and dictionary always give the same ordered output.
pub struct VanityGenerator<D: WordOracle> {
    dictionary: D,
}

impl<D: WordOracle> VanityGenerator<D> {
    pub fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    /// Parses `raw` and generates candidates. Fails only with `InvalidNumber`.
    pub fn generate(&self, raw: &str) -> Result<VanityResult> {
        let number = parse_phone_number(raw)?;
        Ok(self.generate_for(&number))
    }

    pub fn generate_for(&self, number: &ParsedNumber) -> VanityResult {
        let three_letter_words = self.words_for(number.first_group());
        let four_letter_words = self.words_for(number.second_group());

        tracing::debug!(
            "area {}: 3-letter words {:?}, 4-letter words {:?}",
            number.area_code(),
            three_letter_words,
            four_letter_words
        );

        assemble(
            number.area_code(),
            &number.first_group_digits(),
            &three_letter_words,
            &four_letter_words,
        )
    }

    /// 依列舉順序保留字典裡有的組合
    fn words_for(&self, digits: &[KeypadDigit]) -> Vec<String> {
        letter_combinations(digits)
            .filter(|word| self.dictionary.is_word(word))
            .collect()
    }
}

/// Word+word pairs come first (outer loop over 3-letter words), then the
/// digit-led `{digits}-{word}` forms fill whatever room is left. With no
/// 3-letter words the first part is empty and only digit-led forms remain.
fn assemble(
    area_code: &str,
    leading_digits: &str,
    three_letter_words: &[String],
    four_letter_words: &[String],
) -> VanityResult {
    let word_pairs = three_letter_words.iter().flat_map(move |lead| {
        four_letter_words
            .iter()
            .map(move |tail| (lead.as_str(), tail.as_str()))
    });
    let digit_pairs = four_letter_words
        .iter()
        .map(move |tail| (leading_digits, tail.as_str()));

    let candidates = word_pairs
        .chain(digit_pairs)
        .take(MAX_CANDIDATES)
        .map(|(lead, tail)| format!("{}-{}-{}", area_code, lead, tail).to_uppercase())
        .collect();

    VanityResult::new(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn generator(words: &[&str]) -> VanityGenerator<HashSet<String>> {
        VanityGenerator::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_word_pairs_then_digit_fallback() {
        let generator = generator(&["bug", "kens", "lens"]);
        let result = generator.generate("+12072845367").unwrap();

        assert_eq!(
            result.as_slice(),
            [
                "207-BUG-KENS",
                "207-BUG-LENS",
                "207-284-KENS",
                "207-284-LENS",
            ]
        );
    }

    #[test]
    fn test_cap_reached_by_word_pairs() {
        let generator = generator(&["aug", "bug", "kens", "lens", "leos"]);
        let result = generator.generate("+12072845367").unwrap();

        assert_eq!(
            result.as_slice(),
            [
                "207-AUG-KENS",
                "207-AUG-LENS",
                "207-AUG-LEOS",
                "207-BUG-KENS",
                "207-BUG-LENS",
            ]
        );
    }

    #[test]
    fn test_digit_fallback_only_when_no_three_letter_word() {
        let generator = generator(&["kens", "lens"]);
        let result = generator.generate("+12072845367").unwrap();

        assert_eq!(result.as_slice(), ["207-284-KENS", "207-284-LENS"]);
    }

    #[test]
    fn test_three_letter_word_without_four_letter_word() {
        let generator = generator(&["bug"]);
        let result = generator.generate("+12072845367").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let generator = generator(&[]);
        let result = generator.generate("+12072845367").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_number_propagates() {
        let generator = generator(&["bug", "lens"]);
        let err = generator.generate("+12072845317").unwrap_err();
        assert!(err.is_invalid_number());
    }

    #[test]
    fn test_assemble_respects_cap_in_fallback() {
        let four: Vec<String> = ["aaaa", "bbbb", "cccc", "dddd", "eeee", "ffff"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let result = assemble("207", "284", &[], &four);

        assert_eq!(result.len(), MAX_CANDIDATES);
        assert_eq!(result.as_slice()[4], "207-284-EEEE");
    }
}
