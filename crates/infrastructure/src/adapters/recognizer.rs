//! Rule-based entity recognizer
//!
//! Production implementation of `EntityRecognizerPort`. Tags date and
//! location spans via an Aho-Corasick scan over a fixed lexicon, plus any
//! custom location patterns registered at construction (foreign place
//! names the built-in lexicon lacks). Immutable after construction, so it
//! is safe to share across concurrent parses.

use aho_corasick::{AhoCorasick, MatchKind};
use application::{ApplicationError, EntityRecognizerPort};
use domain::{EntityLabel, RecognizedEntity};

/// Built-in date expressions
const DATE_TERMS: [&str; 5] = ["오늘", "내일", "모레", "글피", "주말"];

/// Built-in domestic place names
const LOCATION_TERMS: [&str; 9] = [
    "서울", "부산", "인천", "대구", "광주", "대전", "울산", "세종", "제주",
];

/// Lexicon-driven recognizer over literal patterns
pub struct RuleRecognizer {
    automaton: AhoCorasick,
    /// Label for each pattern, indexed by pattern id
    labels: Vec<EntityLabel>,
}

impl std::fmt::Debug for RuleRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRecognizer")
            .field("patterns", &self.labels.len())
            .finish_non_exhaustive()
    }
}

impl RuleRecognizer {
    /// Build a recognizer from the built-in lexicon plus custom
    /// location patterns
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when the pattern set
    /// cannot be compiled.
    pub fn new(extra_locations: &[String]) -> Result<Self, ApplicationError> {
        let mut patterns: Vec<&str> = Vec::new();
        let mut labels: Vec<EntityLabel> = Vec::new();

        for term in DATE_TERMS {
            patterns.push(term);
            labels.push(EntityLabel::Date);
        }
        for term in LOCATION_TERMS {
            patterns.push(term);
            labels.push(EntityLabel::Location);
        }
        for term in extra_locations {
            patterns.push(term.as_str());
            labels.push(EntityLabel::Location);
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| {
                ApplicationError::Configuration(format!("Invalid recognizer patterns: {e}"))
            })?;

        Ok(Self { automaton, labels })
    }
}

impl EntityRecognizerPort for RuleRecognizer {
    fn recognize(&self, query: &str) -> Result<Vec<RecognizedEntity>, ApplicationError> {
        let entities = self
            .automaton
            .find_iter(query)
            .map(|m| {
                RecognizedEntity::new(
                    self.labels[m.pattern().as_usize()].clone(),
                    &query[m.start()..m.end()],
                    m.start(),
                )
            })
            .collect();
        Ok(entities)
    }
}
