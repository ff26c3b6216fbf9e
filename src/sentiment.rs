//! Sentiment Lexicon Scoring
//!
//! Derives a signed polarity scalar from free-text review bodies by matching
//! normalized tokens against a keyword lexicon. The resulting score feeds
//! the `sentiment` half of an edge weight pair.
//!
//! # Lexicon Format
//!
//! A plain text file, one keyword per line, tab-separated:
//!
//! ```text
//! # SentiWordNet-style strengths
//! 0.625\t0.0\tgood
//! 0.0\t0.75\tterrible
//! ```
//!
//! Lines starting with `#` are comments; blank lines are skipped. The two
//! leading columns are the keyword's positive and negative strengths.
//!
//! # Scoring
//!
//! Review text is normalized (lowercased, whitespace-split, every
//! non-alphabetic character stripped from each token), matched tokens
//! accumulate positive and negative strength, and the score is the net
//! strength averaged over the matched-keyword count, rounded to 3 decimals.
//! A review that matches no keywords has no derivable polarity and scoring
//! reports [`ReelError::NoKeywords`] rather than dividing by zero.
//!
//! # Example
//!
//! ```
//! use reel::SentimentLexicon;
//!
//! let lexicon = SentimentLexicon::from_reader("0.5\t0.0\tgreat\n0.0\t0.5\tdull\n".as_bytes())?;
//! let score = lexicon.score("A great, GREAT film")?;
//! assert_eq!(score, 0.5);
//! # Ok::<(), reel::ReelError>(())
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{ReelError, Result};

/// Split text into lowercase tokens with all non-alphabetic characters
/// stripped.
///
/// Tokens that strip down to nothing (e.g. `"42"`) are kept empty; they can
/// never match a lexicon keyword, so scoring ignores them naturally.
///
/// ```
/// use reel::sentiment::normalized_words;
///
/// let words = normalized_words("I'm eating an ice cream.");
/// assert_eq!(words, vec!["im", "eating", "an", "ice", "cream"]);
/// ```
pub fn normalized_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|token| token.chars().filter(|c| c.is_alphabetic()).collect())
        .collect()
}

/// A keyword-to-strengths sentiment lexicon.
///
/// Each keyword carries a `(positive, negative)` strength pair; the scorer
/// nets the two across all matched tokens in a review.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    entries: HashMap<String, (f64, f64)>,
}

impl SentimentLexicon {
    /// Load a lexicon from a tab-separated file.
    ///
    /// # Errors
    ///
    /// [`ReelError::Io`] if the file cannot be read, and
    /// [`ReelError::LexiconParse`] naming the offending line if a data line
    /// is not `positive<TAB>negative<TAB>word`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Load a lexicon from any reader. See [`from_path`].
    ///
    /// [`from_path`]: SentimentLexicon::from_path
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut entries = HashMap::new();
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parse = |field: &str| -> Result<f64> {
                field.parse().map_err(|_| ReelError::LexiconParse {
                    line: i + 1,
                    message: format!("expected a strength value, got '{field}'"),
                })
            };
            match line.split('\t').collect::<Vec<_>>().as_slice() {
                [positive, negative, word] => {
                    entries.insert(word.to_string(), (parse(positive)?, parse(negative)?));
                }
                fields => {
                    return Err(ReelError::LexiconParse {
                        line: i + 1,
                        message: format!("expected 3 tab-separated fields, got {}", fields.len()),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// Number of keywords in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the lexicon carries the given (already normalized) keyword.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Score a review: net matched strength averaged over the matched
    /// count, rounded to 3 decimals.
    ///
    /// # Errors
    ///
    /// [`ReelError::NoKeywords`] if no normalized token matches the
    /// lexicon. Callers that want a neutral default map this to `0.0`.
    pub fn score(&self, review: &str) -> Result<f64> {
        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut matched = 0usize;

        for word in normalized_words(review) {
            if let Some(&(pos, neg)) = self.entries.get(&word) {
                matched += 1;
                positive += pos;
                negative += neg;
            }
        }

        if matched == 0 {
            return Err(ReelError::NoKeywords);
        }
        let overall = (positive - negative) / matched as f64;
        Ok((overall * 1000.0).round() / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> SentimentLexicon {
        SentimentLexicon::from_reader(
            "# test lexicon\n\
             0.625\t0.0\tgood\n\
             0.0\t0.75\tterrible\n\
             0.25\t0.125\tokay\n"
                .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_normalized_words() {
        assert_eq!(
            normalized_words("I'm eating an ice cream."),
            vec!["im", "eating", "an", "ice", "cream"]
        );
        // Digits strip to empty tokens, uppercase folds.
        assert_eq!(normalized_words("Se7en ROCKS"), vec!["seen", "rocks"]);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let lex = lexicon();
        assert_eq!(lex.len(), 3);
        assert!(lex.contains("good"));
        assert!(!lex.contains("#"));
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        let err = SentimentLexicon::from_reader("0.5\tgood\n".as_bytes()).unwrap_err();
        match err {
            ReelError::LexiconParse { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }

        let err = SentimentLexicon::from_reader("high\t0.0\tgood\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReelError::LexiconParse { line: 1, .. }));
    }

    #[test]
    fn test_score_nets_and_averages() {
        let lex = lexicon();
        // good (+0.625) and terrible (-0.75) over 2 matches.
        let score = lex.score("A good start, a terrible end").unwrap();
        assert_eq!(score, -0.063);
    }

    #[test]
    fn test_score_repeated_matches_count() {
        let lex = lexicon();
        // good twice and terrible once: (1.25 - 0.75) / 3.
        let score = lex.score("good good terrible").unwrap();
        assert_eq!(score, 0.167);
    }

    #[test]
    fn test_score_without_matches_is_an_error() {
        let lex = lexicon();
        assert!(matches!(
            lex.score("nothing relevant here").unwrap_err(),
            ReelError::NoKeywords
        ));
        assert!(matches!(lex.score("").unwrap_err(), ReelError::NoKeywords));
    }

    #[test]
    fn test_score_matches_case_insensitively() {
        let lex = lexicon();
        assert_eq!(lex.score("GOOD!").unwrap(), 0.625);
    }
}
