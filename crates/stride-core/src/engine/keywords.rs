//! Keyword sets shared by the classifier, analyzer, synthesizer and advisor.
//!
//! Matching is plain substring containment on the lower-cased goal text, so
//! "learning" matches `learn` and "startup" matches `art`. Precedence is
//! decided by the order in which callers consult these sets, not here.

/// A named list of keywords, any one of which triggers a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(name: &'static str, words: &'static [&'static str]) -> Self {
        Self { name, words }
    }

    /// True when any keyword occurs in `lowered` (already lower-cased text).
    pub fn matches(&self, lowered: &str) -> bool {
        self.words.iter().any(|word| lowered.contains(word))
    }
}

/// Lower-cased goal text plus its whitespace word count.
#[derive(Debug, Clone)]
pub struct GoalText {
    lowered: String,
    word_count: usize,
}

impl GoalText {
    pub fn new(goal: &str) -> Self {
        Self {
            lowered: goal.to_lowercase(),
            word_count: goal.split_whitespace().count(),
        }
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn contains_any(&self, set: &KeywordSet) -> bool {
        set.matches(&self.lowered)
    }
}

// Classifier vocabulary
pub const CLASSIFY_LEARNING: KeywordSet =
    KeywordSet::new("learning", &["learn", "skill", "study", "master", "course"]);
pub const CLASSIFY_BUSINESS: KeywordSet = KeywordSet::new(
    "business",
    &["business", "startup", "company", "entrepreneur"],
);
pub const CLASSIFY_HEALTH: KeywordSet = KeywordSet::new(
    "health",
    &["fitness", "health", "exercise", "diet", "weight"],
);
pub const CLASSIFY_CREATIVE: KeywordSet = KeywordSet::new(
    "creative",
    &["create", "build", "design", "write", "paint", "art"],
);
pub const CLASSIFY_TRAVEL: KeywordSet = KeywordSet::new("travel", &["travel", "visit", "explore"]);
pub const CLASSIFY_FINANCIAL: KeywordSet = KeywordSet::new(
    "financial",
    &["save", "invest", "money", "financial"],
);

// Complexity analyzer vocabulary
pub const ANALYZE_LEARNING: KeywordSet = KeywordSet::new(
    "learning",
    &["learn", "master", "become expert", "study"],
);
pub const ANALYZE_BUSINESS: KeywordSet = CLASSIFY_BUSINESS;
pub const ANALYZE_HEALTH: KeywordSet = CLASSIFY_HEALTH;
pub const ANALYZE_CREATIVE: KeywordSet = KeywordSet::new(
    "creative",
    &["create", "build", "design", "write", "paint"],
);

// Task synthesizer vocabulary
pub const TASKS_LEARNING: KeywordSet = CLASSIFY_LEARNING;
pub const TASKS_BUSINESS: KeywordSet = KeywordSet::new(
    "business",
    &["business", "startup", "company", "entrepreneur", "launch"],
);
pub const TASKS_HEALTH: KeywordSet = KeywordSet::new(
    "health",
    &["fitness", "health", "exercise", "diet", "weight", "workout"],
);
pub const TASKS_CREATIVE: KeywordSet = KeywordSet::new(
    "creative",
    &["create", "build", "design", "write", "paint", "art", "content"],
);

// Advisory vocabulary
pub const ADVICE_LEARNING: KeywordSet = KeywordSet::new("learning", &["learn"]);
pub const ADVICE_BUSINESS: KeywordSet = KeywordSet::new("business", &["business", "startup"]);
pub const ADVICE_HEALTH: KeywordSet = KeywordSet::new("health", &["fitness", "health"]);
