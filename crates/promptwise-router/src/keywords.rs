// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed keyword tables used by the complexity classifier.
//!
//! Keywords are matched as raw substrings of the lower-cased input, so
//! multi-word phrases and word fragments both count. The lists are mostly
//! French: English synonyms (e.g. "creative") deliberately do not match.

/// Weight added per distinct creative keyword found.
pub const CREATIVE_WEIGHT: u32 = 2;
/// Weight added per distinct technical keyword found.
pub const TECHNICAL_WEIGHT: u32 = 1;
/// Weight added per distinct analytical keyword found.
pub const ANALYTICAL_WEIGHT: u32 = 1;
/// Weight added per distinct complexity indicator found.
pub const COMPLEX_WEIGHT: u32 = 2;
/// Weight added when the domain belongs to one of the domain sets.
pub const DOMAIN_WEIGHT: u32 = 1;

/// Creative writing and storytelling vocabulary.
pub const CREATIVE_KEYWORDS: &[&str] = &[
    "créatif",
    "créative",
    "créativité",
    "histoire",
    "poème",
    "poésie",
    "artistique",
    "storytelling",
    "narratif",
    "imagination",
    "fiction",
    "scénario",
];

/// Software and engineering vocabulary.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "code",
    "programmation",
    "développement",
    "algorithme",
    "base de données",
    "technique",
    "debug",
    "architecture",
    "logiciel",
    "api rest",
];

/// Analysis and research vocabulary.
pub const ANALYTICAL_KEYWORDS: &[&str] = &[
    "analyse",
    "analyser",
    "comparer",
    "évaluer",
    "statistique",
    "recherche",
    "rapport",
    "tendance",
    "données",
];

/// Phrases signalling a demanding, multi-part request.
pub const COMPLEX_INDICATORS: &[&str] = &[
    "complexe",
    "détaillé",
    "approfondi",
    "exhaustif",
    "plusieurs étapes",
    "multidimensionnel",
    "stratégique",
    "sophistiqué",
];

/// Domain identifiers that mark a prompt as creative.
pub const CREATIVE_DOMAINS: &[&str] = &[
    "marketing",
    "art",
    "design",
    "writing",
    "entertainment",
    "content-creation",
];

/// Domain identifiers that mark a prompt as technical.
pub const TECHNICAL_DOMAINS: &[&str] = &[
    "development",
    "technology",
    "engineering",
    "data-science",
    "cybersecurity",
    "devops",
];

/// Count the distinct keywords of `list` that occur in `haystack`.
///
/// Repeated occurrences of one keyword count once.
pub fn distinct_hits(haystack: &str, list: &[&str]) -> u32 {
    list.iter().filter(|kw| haystack.contains(**kw)).count() as u32
}
