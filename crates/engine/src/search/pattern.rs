//! Title pattern matching
//!
//! A pattern is literal text with optional wildcard markers (`%` or `*`).
//! Matching is case-insensitive and "contains": the literal segments must
//! appear in the title in order, anywhere. `%test%`, `test` and `*test`
//! all match "My Test Board".

/// Characters treated as "any run of characters"
pub const WILDCARDS: &[char] = &['%', '*'];

/// Compiled title pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePattern {
    segments: Vec<String>,
}

impl TitlePattern {
    /// Compile a pattern
    ///
    /// # Example
    ///
    /// ```
    /// use dashstore_engine::search::TitlePattern;
    ///
    /// let p = TitlePattern::parse("%test%");
    /// assert!(p.matches("test dash 23"));
    /// assert!(p.matches("My TEST"));
    /// assert!(!p.matches("tes t"));
    /// ```
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split(WILDCARDS)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .collect();
        TitlePattern { segments }
    }

    /// Whether the pattern matches every title (empty or wildcards only)
    pub fn is_match_all(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether `title` contains the literal segments in order
    pub fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        let mut rest = title.as_str();
        for segment in &self.segments {
            match rest.find(segment.as_str()) {
                Some(at) => rest = &rest[at + segment.len()..],
                None => return false,
            }
        }
        true
    }
}
