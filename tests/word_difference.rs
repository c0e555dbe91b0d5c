//! Integration tests for word-difference scoring and rank assignment.
//!
//! Tests exercise only the public API exported from `appsearch`.

use appsearch::{
    MatchScore, PrefixWordMatcher, RankPolicy, RankTier, WordMatcher, get_word_difference,
};

/// A query prefixing the whole label scores the leftover character count.
#[test]
fn label_prefix() {
    assert_eq!(
        get_word_difference("Calculator", "Calc", false),
        MatchScore::Difference(6)
    );
}

/// A query that only appears inside a word is unrelated.
#[test]
fn mid_word_is_unrelated() {
    assert_eq!(get_word_difference("Calendar", "Calc", false), MatchScore::NoMatch);
    assert_eq!(get_word_difference("Podcasts", "cast", false), MatchScore::NoMatch);
}

/// Any whitespace-delimited word can be prefixed.
#[test]
fn later_word_prefix() {
    assert_eq!(
        get_word_difference("Android Auto", "auto", false),
        MatchScore::Difference(8)
    );
}

/// A multi-word query does not restart inside words a failed attempt consumed.
#[test]
fn repeated_word_is_not_rescanned() {
    assert_eq!(
        get_word_difference("Google Google Maps", "google maps", false),
        MatchScore::NoMatch
    );
    assert_eq!(get_word_difference("a a b", "a b", false), MatchScore::NoMatch);
    assert_eq!(
        get_word_difference("Google Maps", "google maps", false),
        MatchScore::Difference(0)
    );
}

/// A no-break space glues two words together.
#[test]
fn no_break_space_joins_words() {
    assert_eq!(get_word_difference("Wi\u{00a0}Fi", "fi", false), MatchScore::NoMatch);
    assert_eq!(get_word_difference("Wi Fi", "fi", false), MatchScore::Difference(3));
}

/// An exact label match, ignoring case, scores zero and ranks close.
#[test]
fn exact_label_is_closest() {
    let score = get_word_difference("YouTube", "youtube", false);
    assert_eq!(score, MatchScore::Difference(0));
    assert_eq!(RankPolicy::default().assign(score), Some(RankTier::CLOSE));
}

/// Longer leftovers fall into the far tier.
#[test]
fn long_label_ranks_far() {
    let score = get_word_difference("Files by Google", "files", false);
    assert_eq!(score, MatchScore::Difference(10));
    assert_eq!(RankPolicy::default().assign(score), Some(RankTier::FAR));
}

/// The tier boundary sits exactly at the threshold.
#[test]
fn tier_boundary() {
    let policy = RankPolicy::default();
    // "Phone" vs "p": 4 leftover chars.
    assert_eq!(
        policy.assign(get_word_difference("Phone", "p", false)),
        Some(RankTier::CLOSE)
    );
    // "Settings" vs "se": 6 leftover chars.
    assert_eq!(
        policy.assign(get_word_difference("Settings", "se", false)),
        Some(RankTier::FAR)
    );
}

/// Closer matches never rank behind farther ones.
#[test]
fn closeness_is_monotonic() {
    let policy = RankPolicy::default();
    let close = get_word_difference("Maps", "ma", false);
    let far = get_word_difference("Maps and Navigation", "ma", false);
    assert!(close < far);
    assert!(policy.assign(close) <= policy.assign(far));
}

/// The matcher struct honors its diacritics flag.
#[test]
fn matcher_struct_strips_diacritics_on_request() {
    let keep = PrefixWordMatcher::default();
    let strip = PrefixWordMatcher {
        strip_diacritics: true,
    };
    assert_eq!(keep.word_difference("M\u{00fa}sica", "musica"), MatchScore::NoMatch);
    assert_eq!(
        strip.word_difference("M\u{00fa}sica", "musica"),
        MatchScore::Difference(0)
    );
}
