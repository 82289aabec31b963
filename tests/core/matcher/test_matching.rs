// Lexical matching scenarios

use crate::common::EVENT_FAQ;
use lexis::core::matcher::{
    Corpus, LexicalMatcher, StopWordSet, SynonymTable, Vocabulary, DEFAULT_THRESHOLD,
};
use lexis::core::types::{MatchOutcome, NO_DATA_ANSWER, NO_MATCH_ANSWER};

fn two_entry_matcher() -> LexicalMatcher {
    LexicalMatcher::new(Corpus::from_pairs(EVENT_FAQ[..2].to_vec()), Vocabulary::default())
}

fn register_sign_vocabulary() -> Vocabulary {
    let mut synonyms = SynonymTable::new();
    synonyms.insert("register".to_string(), ["sign".to_string()].into());
    synonyms.insert("sign".to_string(), ["register".to_string()].into());
    Vocabulary::new(synonyms, StopWordSet::new())
}

#[test]
fn test_sign_up_matches_registration() {
    let result = two_entry_matcher().match_query("How can I sign up?", DEFAULT_THRESHOLD);

    assert_eq!(result.outcome, MatchOutcome::Matched);
    assert_eq!(
        result.matched_question.as_deref(),
        Some("How do I register for the event?")
    );
    assert_eq!(result.answer, EVENT_FAQ[0].1);
    assert!(result.confidence > DEFAULT_THRESHOLD);
}

#[test]
fn test_weather_has_no_match() {
    let result = two_entry_matcher().match_query("What's the weather like?", DEFAULT_THRESHOLD);

    assert_eq!(result.outcome, MatchOutcome::NoConfidentMatch);
    assert!(result.matched_question.is_none());
    assert!(result.confidence < DEFAULT_THRESHOLD);
    assert_eq!(result.answer, NO_MATCH_ANSWER);
}

#[test]
fn test_empty_corpus_is_not_an_error() {
    let matcher = LexicalMatcher::default();
    let result = matcher.match_query("anything", DEFAULT_THRESHOLD);

    assert_eq!(result.outcome, MatchOutcome::EmptyCorpus);
    assert_eq!(result.confidence, 0.0);
    assert!(result.matched_question.is_none());
    assert_eq!(result.answer, NO_DATA_ANSWER);
}

#[test]
fn test_synonym_query_scores_at_least_unrelated_query() {
    let corpus = Corpus::from_pairs([("How do I register?", "A")]);
    let with_synonyms = LexicalMatcher::new(corpus.clone(), register_sign_vocabulary());
    let without_synonyms = LexicalMatcher::new(corpus, Vocabulary::empty());

    let synonym_score = with_synonyms.match_query("How can I sign?", 0.0).confidence;
    let unrelated_score = with_synonyms.match_query("How can I leave?", 0.0).confidence;
    let plain_score = without_synonyms.match_query("How can I sign?", 0.0).confidence;

    assert!(synonym_score >= unrelated_score);
    assert!(synonym_score > plain_score);
}

#[test]
fn test_synonym_expansion_is_one_level() {
    let mut synonyms = SynonymTable::new();
    synonyms.insert("a".to_string(), ["b".to_string()].into());
    synonyms.insert("b".to_string(), ["c".to_string()].into());
    let matcher = LexicalMatcher::new(Corpus::new(), Vocabulary::new(synonyms, StopWordSet::new()));

    let expanded = matcher.expand_with_synonyms(&["a".to_string()].into());
    assert!(expanded.contains("a"));
    assert!(expanded.contains("b"));
    assert!(!expanded.contains("c"));
}

#[test]
fn test_full_faq_routes_each_topic() {
    let matcher = LexicalMatcher::new(Corpus::from_pairs(EVENT_FAQ.to_vec()), Vocabulary::default());

    let cases = [
        ("How much does it cost?", "Is there a registration fee?"),
        ("What is the location?", "Where is the venue located?"),
        ("What time does it begin?", "When does the workshop start?"),
    ];

    for (query, expected) in cases {
        let result = matcher.match_query(query, DEFAULT_THRESHOLD);
        assert_eq!(
            result.matched_question.as_deref(),
            Some(expected),
            "query {query:?} routed to the wrong entry"
        );
    }
}

#[test]
fn test_threshold_boundaries() {
    let matcher = two_entry_matcher();
    let confidence = matcher
        .match_query("How can I sign up?", DEFAULT_THRESHOLD)
        .confidence;

    // A score equal to the threshold still matches
    assert!(matcher.match_query("How can I sign up?", confidence).is_match());
    assert!(!matcher.match_query("How can I sign up?", 1.0).is_match());
    assert!(matcher.match_query("What's the weather like?", 0.0).is_match());
}

#[test]
fn test_rank_orders_and_limits() {
    let matcher = LexicalMatcher::new(Corpus::from_pairs(EVENT_FAQ.to_vec()), Vocabulary::default());
    let ranked = matcher.rank("Is registration free or is there a fee?", 2);

    assert!(ranked.len() <= 2);
    assert_eq!(ranked[0].question, "Is there a registration fee?");
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(ranked.iter().all(|e| e.score > 0.0));
}

#[test]
fn test_match_is_deterministic() {
    let matcher = LexicalMatcher::new(Corpus::from_pairs(EVENT_FAQ.to_vec()), Vocabulary::default());
    let first = matcher.match_query("Where do I pay the fee?", DEFAULT_THRESHOLD);
    let second = matcher.match_query("Where do I pay the fee?", DEFAULT_THRESHOLD);
    assert_eq!(first, second);
}
