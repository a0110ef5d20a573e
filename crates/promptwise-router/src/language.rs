// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-frequency language detection for French, Arabic and English.
//!
//! Arabic is recognised by script. French and English are told apart by
//! counting common function words, with French-only accented letters as a
//! tie-breaker signal.

use promptwise_core::Language;
use serde::Serialize;

/// Share of alphabetic characters in Arabic script needed to call a text Arabic.
const ARABIC_SCRIPT_RATIO: f32 = 0.3;

/// Cap on the extra French hits contributed by accented letters.
const MAX_ACCENT_HITS: usize = 3;

const FRENCH_WORDS: &[&str] = &[
    "le", "la", "les", "des", "du", "un", "une", "est", "et", "pour", "avec", "dans", "sur",
    "que", "qui", "pas", "je", "vous", "nous", "ce", "cette", "mon", "votre",
];

const ENGLISH_WORDS: &[&str] = &[
    "the", "and", "is", "are", "for", "with", "in", "on", "that", "this", "to", "of", "it",
    "you", "we", "my", "your", "not", "be", "an", "a",
];

const FRENCH_ACCENTS: &[char] = &['é', 'è', 'ê', 'à', 'ç', 'ù', 'î', 'ô', 'œ'];

/// Detected language with a confidence in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LanguageDetection {
    pub language: Language,
    pub confidence: f32,
}

fn is_arabic_script(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

/// Detect the language of `text`, falling back to `default` when undecided.
pub fn detect_language(text: &str, default: Language) -> LanguageDetection {
    let alphabetic = text.chars().filter(|c| c.is_alphabetic()).count();
    if alphabetic > 0 {
        let arabic = text
            .chars()
            .filter(|c| c.is_alphabetic() && is_arabic_script(*c))
            .count();
        let ratio = arabic as f32 / alphabetic as f32;
        if ratio >= ARABIC_SCRIPT_RATIO {
            return LanguageDetection {
                language: Language::Arabic,
                confidence: ratio,
            };
        }
    }

    let lower = text.to_lowercase();
    let mut french = 0usize;
    let mut english = 0usize;
    for word in lower
        .split(|c: char| !c.is_alphabetic() && c != '\'')
        .filter(|w| !w.is_empty())
    {
        // Elided articles: "l'histoire", "d'un".
        let word = word.rsplit('\'').next().unwrap_or(word);
        if FRENCH_WORDS.contains(&word) {
            french += 1;
        }
        if ENGLISH_WORDS.contains(&word) {
            english += 1;
        }
    }
    french += lower
        .chars()
        .filter(|c| FRENCH_ACCENTS.contains(c))
        .count()
        .min(MAX_ACCENT_HITS);

    let total = french + english;
    let (language, hits) = match french.cmp(&english) {
        std::cmp::Ordering::Greater => (Language::French, french),
        std::cmp::Ordering::Less => (Language::English, english),
        std::cmp::Ordering::Equal => {
            return LanguageDetection {
                language: default,
                confidence: 0.0,
            };
        }
    };

    LanguageDetection {
        language,
        confidence: hits as f32 / total as f32,
    }
}
