use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;

use crate::morph::Lemmatizer;

/// Normalizes one raw ingredient cell into a comma-joined list of unique
/// canonical lemmas.
///
/// A cell holds comma-separated phrases ("2 ст.л. сахара, 500г муки"); each
/// phrase is reduced to its head word (first word left after numerals and
/// unit words are stripped), the head word is resolved to its lemma, and
/// duplicates within the cell are dropped, preserving first-seen order.
pub struct IngredientNormalizer<'a> {
    units: HashSet<String>,
    numerals: Regex,
    morph: &'a dyn Lemmatizer,
}

impl<'a> IngredientNormalizer<'a> {
    /// Build a normalizer over a unit vocabulary and an analyzer.
    /// Vocabulary entries are expected lowercase; matching is exact-word.
    pub fn new(
        units: impl IntoIterator<Item = String>,
        morph: &'a dyn Lemmatizer,
    ) -> Result<Self> {
        Ok(IngredientNormalizer {
            units: units.into_iter().collect(),
            // Digit runs with decimal/fraction separators and common
            // fraction glyphs. Stripped at word edges only, so abbreviated
            // units like "ст.л." keep their inner dots and still match the
            // vocabulary.
            numerals: Regex::new(r"^[\d.,/½¼¾]+|[\d.,/½¼¾]+$")?,
            morph,
        })
    }

    /// Normalize one cell. A cell that parses to nothing yields the empty
    /// string; malformed input never errors.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = raw.replace('\u{a0}', " ");
        let mut lemmas: Vec<String> = Vec::new();

        // Comma is both the phrase separator and a decimal separator, so
        // "1,5 кг" reads as two phrases; the numeral halves strip to
        // nothing either way.
        for phrase in cleaned.trim().split(',') {
            let phrase = phrase.trim().to_lowercase();

            let head = phrase.split_whitespace().find_map(|word| {
                let word = self.numerals.replace_all(word, "");
                if word.is_empty() || self.units.contains(word.as_ref()) {
                    None
                } else {
                    Some(word.into_owned())
                }
            });
            let Some(head) = head else {
                continue;
            };

            if let Some(lemma) = self.morph.lemmatize(&head) {
                if !lemma.is_empty() && !lemmas.contains(&lemma) {
                    lemmas.push(lemma);
                }
            }
        }

        lemmas.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::morph::DictLemmatizer;

    /// Analyzer that never produces a parse.
    struct NoParse;

    impl Lemmatizer for NoParse {
        fn lemmatize(&self, _word: &str) -> Option<String> {
            None
        }
    }

    fn normalizer(morph: &dyn Lemmatizer) -> IngredientNormalizer<'_> {
        IngredientNormalizer::new(Config::default().unit_vocabulary(), morph).unwrap()
    }

    #[test]
    fn test_empty_cell() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        assert_eq!(norm.normalize(""), "");
        assert_eq!(norm.normalize("   "), "");
    }

    #[test]
    fn test_unit_and_numeral_stripping() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        assert_eq!(norm.normalize("2 ст.л. муки"), "мука");
        assert_eq!(norm.normalize("500г муки"), "мука");
    }

    #[test]
    fn test_duplicate_suppression() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        assert_eq!(norm.normalize("1 кг сахара, 2 ложки сахара"), "сахар");
    }

    #[test]
    fn test_fraction_glyphs_and_order() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        assert_eq!(norm.normalize("½ ч.л. соли, щепотка перца"), "соль, перец");
    }

    #[test]
    fn test_nbsp_equivalent_to_space() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        assert_eq!(
            norm.normalize("2\u{a0}ст.л.\u{a0}сахара"),
            norm.normalize("2 ст.л. сахара")
        );
    }

    #[test]
    fn test_units_only_phrase_contributes_nothing() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        assert_eq!(norm.normalize("2 кг"), "");
        assert_eq!(norm.normalize("1/2 стакана, 3 шт."), "");
    }

    #[test]
    fn test_case_folding() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        assert_eq!(norm.normalize("2 КГ Сахара"), "сахар");
    }

    #[test]
    fn test_lemma_count_bounded_by_phrase_count() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        let input = "1 кг сахара, 2 ст.л. муки, щепотка соли";
        let phrases = input.split(',').count();
        let output = norm.normalize(input);
        assert!(output.split(", ").count() <= phrases);
    }

    #[test]
    fn test_idempotence_on_normalized_input() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        let once = norm.normalize("2 ст.л. муки, 1 кг сахара, соль");
        assert_eq!(norm.normalize(&once), once);
    }

    // "по вкусу" is a two-word vocabulary entry and can never match a
    // single split word; only the surrounding words are filtered.
    #[test]
    fn test_multiword_unit_entry_does_not_match() {
        let morph = DictLemmatizer::new();
        let norm = normalizer(&morph);
        assert_eq!(norm.normalize("соль по вкусу"), "соль");
        assert_eq!(norm.normalize("по вкусу"), "по");
    }

    #[test]
    fn test_no_parse_contributes_nothing() {
        let morph = NoParse;
        let norm = normalizer(&morph);
        assert_eq!(norm.normalize("1 кг сахара, 2 ст.л. муки"), "");
    }
}
