//! Content filter - binary classifier for disallowed text
//!
//! Purely lexical: a case-insensitive substring match against a fixed
//! denylist. It will both under- and over-block; that is the design of
//! the list, not a bug to paper over here.

/// Default denylist of disallowed terms
const DEFAULT_DENYLIST: [&str; 10] = [
    "damn", "hell", "stupid", "idiot", "hate", "dumb", "loser", "suck", "crap", "shut up",
];

/// Stateless, deterministic content filter
#[derive(Debug, Clone)]
pub struct ContentFilter {
    terms: Vec<String>,
}

impl ContentFilter {
    /// Create a filter with a custom term list (terms matched lowercase)
    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Check whether the text contains any disallowed term
    pub fn is_flagged(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.terms.iter().any(|term| lower.contains(term))
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::with_terms(DEFAULT_DENYLIST)
    }
}
