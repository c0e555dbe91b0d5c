//! Word-difference scoring between a query and an application label.
//!
//! A label matches when the (lowercased) query starts at one of the label's
//! word starts, found by walking the label word by word. The score of a match
//! is the number of characters the label has beyond the query, so smaller
//! scores mean closer matches and an exact (case-insensitive) label match
//! scores `0`.

use std::borrow::Cow;
use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// The closeness of a label to a query.
///
/// | Variant          | Meaning                                           |
/// |------------------|---------------------------------------------------|
/// | `Difference(0)`  | Label equals the query, ignoring case             |
/// | `Difference(n)`  | Query prefixes a word; label is `n` chars longer  |
/// | `NoMatch`        | Query does not prefix any word of the label       |
///
/// # Ordering
///
/// `MatchScore` orders by closeness: a smaller difference compares as
/// [`Ordering::Less`], and [`MatchScore::NoMatch`] compares greater than
/// every difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchScore {
    /// The label matched; the payload is the label's extra character count.
    Difference(usize),
    /// Sentinel marking an unrelated label. Never reaches the output.
    NoMatch,
}

impl MatchScore {
    /// Returns the difference, or `None` for [`MatchScore::NoMatch`].
    pub fn difference(self) -> Option<usize> {
        match self {
            MatchScore::Difference(d) => Some(d),
            MatchScore::NoMatch => None,
        }
    }

    /// Returns `true` unless this is the [`MatchScore::NoMatch`] sentinel.
    pub fn is_match(self) -> bool {
        !matches!(self, MatchScore::NoMatch)
    }
}

impl PartialOrd for MatchScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MatchScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MatchScore::Difference(a), MatchScore::Difference(b)) => a.cmp(b),
            (MatchScore::Difference(_), MatchScore::NoMatch) => Ordering::Less,
            (MatchScore::NoMatch, MatchScore::Difference(_)) => Ordering::Greater,
            (MatchScore::NoMatch, MatchScore::NoMatch) => Ordering::Equal,
        }
    }
}

/// Scores a label against a query.
///
/// Implementations must keep [`MatchScore::NoMatch`] a strict exclusion
/// signal and keep smaller differences meaning closer matches. Any
/// `Fn(&str, &str) -> MatchScore` closure is a `WordMatcher`.
pub trait WordMatcher {
    /// Computes the word difference of `label` with respect to `query`.
    fn word_difference(&self, label: &str, query: &str) -> MatchScore;

    /// Returns a scorer for many labels against one `query`.
    ///
    /// Called once per search execution. The default scorer forwards to
    /// [`word_difference`](Self::word_difference); matchers with costly query
    /// setup override it to do that setup once.
    fn prepare<'a>(&'a self, query: &'a str) -> impl FnMut(&str) -> MatchScore + 'a {
        move |label: &str| self.word_difference(label, query)
    }
}

impl<F> WordMatcher for F
where
    F: Fn(&str, &str) -> MatchScore,
{
    fn word_difference(&self, label: &str, query: &str) -> MatchScore {
        self(label, query)
    }
}

/// The default word-prefix matcher.
///
/// # Examples
///
/// ```
/// use appsearch::matching::{MatchScore, PrefixWordMatcher, WordMatcher};
///
/// let matcher = PrefixWordMatcher::default();
/// assert_eq!(matcher.word_difference("Calculator", "calc"), MatchScore::Difference(6));
/// assert_eq!(matcher.word_difference("Google Maps", "map"), MatchScore::Difference(8));
/// assert_eq!(matcher.word_difference("Calendar", "calc"), MatchScore::NoMatch);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixWordMatcher {
    /// Strip combining marks from both sides before comparing.
    pub strip_diacritics: bool,
}

impl WordMatcher for PrefixWordMatcher {
    fn word_difference(&self, label: &str, query: &str) -> MatchScore {
        get_word_difference(label, query, self.strip_diacritics)
    }

    fn prepare<'a>(&'a self, query: &'a str) -> impl FnMut(&str) -> MatchScore + 'a {
        let pq = PreparedQuery::new(query, self.strip_diacritics);
        let mut buf = String::new();
        move |label: &str| pq.word_difference(label, &mut buf)
    }
}

/// Prepare a string for comparison by optionally stripping diacritics.
///
/// When `strip_diacritics` is `true`, applies Unicode NFD decomposition and
/// removes combining marks, so "cafe\u{0301}" compares like "cafe". Returns
/// [`Cow::Borrowed`] whenever nothing had to be removed.
///
/// # Examples
///
/// ```
/// use appsearch::matching::prepare_value_for_comparison;
///
/// assert_eq!(prepare_value_for_comparison("Caf\u{00e9}", true), "Cafe");
/// assert_eq!(prepare_value_for_comparison("Caf\u{00e9}", false), "Caf\u{00e9}");
/// ```
pub fn prepare_value_for_comparison(s: &str, strip_diacritics: bool) -> Cow<'_, str> {
    if !strip_diacritics || s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();

    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

/// Lowercase `s` into `buf`, reusing the buffer's allocation.
fn lowercase_into(s: &str, buf: &mut String) {
    buf.clear();
    buf.reserve(s.len());
    if s.is_ascii() {
        buf.extend(s.as_bytes().iter().map(|&b| b.to_ascii_lowercase() as char));
    } else {
        for c in s.chars() {
            buf.extend(c.to_lowercase());
        }
    }
}

/// Word separators: Unicode whitespace minus the no-break spaces, plus the
/// ASCII information separators U+001C..U+001F. U+0085 does not separate.
fn is_word_break(c: char) -> bool {
    match c {
        '\u{00a0}' | '\u{2007}' | '\u{202f}' | '\u{0085}' => false,
        '\u{001c}'..='\u{001f}' => true,
        c => c.is_whitespace(),
    }
}

/// Byte length of the longest common char prefix of `a` and `b`.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

/// Walks `label` word by word looking for `query` at a word start.
///
/// A failed attempt consumes the characters it already matched before
/// skipping to the next word, so a query spanning several words cannot
/// restart inside a word it has already consumed.
fn matches_at_word_start(label: &str, query: &str) -> bool {
    let mut rest = label;
    while !rest.is_empty() {
        let matched = common_prefix_len(rest, query);
        if matched == query.len() {
            return true;
        }
        rest = rest[matched..]
            .trim_start_matches(|c| !is_word_break(c))
            .trim_start_matches(is_word_break);
    }
    false
}

fn char_count(s: &str) -> usize {
    if s.is_ascii() { s.len() } else { s.chars().count() }
}

/// A query prepared once per execution and scored against many labels.
///
/// Holds the lowercased query, its character count, and a `memmem` finder.
/// Labels that do not contain the query anywhere are rejected by the finder
/// before the word walk runs.
pub struct PreparedQuery {
    lower: String,
    char_count: usize,
    strip_diacritics: bool,
    finder: Option<memchr::memmem::Finder<'static>>,
}

impl PreparedQuery {
    /// Prepares `query` for repeated scoring.
    pub fn new(query: &str, strip_diacritics: bool) -> Self {
        let mut lower = String::new();
        lowercase_into(&prepare_value_for_comparison(query, strip_diacritics), &mut lower);
        let char_count = char_count(&lower);
        // memmem panics on empty needles; an empty query never matches anyway.
        let finder = if lower.is_empty() {
            None
        } else {
            Some(memchr::memmem::Finder::new(lower.as_bytes()).into_owned())
        };
        Self {
            lower,
            char_count,
            strip_diacritics,
            finder,
        }
    }

    /// The lowercased, prepared query text.
    pub fn as_str(&self) -> &str {
        &self.lower
    }

    /// Scores `label` against this query, using `buf` as scratch space.
    ///
    /// # Arguments
    ///
    /// * `label` - The application label being evaluated
    /// * `buf` - Reusable buffer for the lowercased label
    pub fn word_difference(&self, label: &str, buf: &mut String) -> MatchScore {
        let Some(finder) = &self.finder else {
            return MatchScore::NoMatch;
        };
        if label.is_empty() {
            return MatchScore::NoMatch;
        }

        lowercase_into(
            &prepare_value_for_comparison(label, self.strip_diacritics),
            buf,
        );
        let label_chars = char_count(buf);
        if self.char_count > label_chars {
            return MatchScore::NoMatch;
        }

        // Every word-start match is also a plain substring hit.
        if finder.find(buf.as_bytes()).is_none() {
            return MatchScore::NoMatch;
        }

        if matches_at_word_start(buf.as_str(), &self.lower) {
            MatchScore::Difference(label_chars - self.char_count)
        } else {
            MatchScore::NoMatch
        }
    }
}

/// Compute the word difference between an application label and a query.
///
/// Both inputs are lowercased (and diacritics-stripped when requested). The
/// label is walked word by word: at each word start the query is compared
/// character by character. A full match wins; on a mismatch the walk skips
/// the characters already compared, then the rest of that word and the
/// whitespace after it.
///
/// # Arguments
///
/// * `label` - The candidate's display label
/// * `query` - The user's search query
/// * `strip_diacritics` - If `true`, combining marks are removed first
///
/// # Returns
///
/// - [`MatchScore::NoMatch`] if either string is empty, the query is longer
///   than the label, or the walk finds no word start matching the query
/// - `MatchScore::Difference(label_chars - query_chars)` otherwise
///
/// # Examples
///
/// ```
/// use appsearch::matching::{MatchScore, get_word_difference};
///
/// assert_eq!(get_word_difference("Maps", "maps", false), MatchScore::Difference(0));
/// assert_eq!(get_word_difference("Play Store", "st", false), MatchScore::Difference(8));
/// assert_eq!(get_word_difference("Playstore", "store", false), MatchScore::NoMatch);
/// assert_eq!(get_word_difference("Maps", "", false), MatchScore::NoMatch);
/// ```
pub fn get_word_difference(label: &str, query: &str, strip_diacritics: bool) -> MatchScore {
    let pq = PreparedQuery::new(query, strip_diacritics);
    let mut buf = String::new();
    pq.word_difference(label, &mut buf)
}
