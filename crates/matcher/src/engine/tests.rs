use super::*;

fn sample_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_entries(vec![
        CatalogEntry::new("What is your name?", "My full name is Suman Das."),
        CatalogEntry::new(
            "What are your hobbies?",
            "I enjoy playing the guitar, singing, cricket, and online gaming.",
        ),
    ]))
}

fn sample_engine() -> Engine {
    Engine::with_defaults(sample_catalog()).expect("engine builds")
}

#[test]
fn exact_question_matches_with_score_100() {
    let engine = sample_engine();
    let result = engine.answer("What is your name?").expect("catalog non-empty");
    assert!(result.matched);
    assert_eq!(result.score, 100);
    assert_eq!(result.answer, "My full name is Suman Das.");
    assert_eq!(result.matched_question.as_deref(), Some("What is your name?"));
}

#[test]
fn rephrased_question_matches_through_partial_overlap() {
    let engine = sample_engine();
    let result = engine
        .answer("Tell me about your hobbies")
        .expect("catalog non-empty");
    assert!(result.matched, "score {} did not clear threshold", result.score);
    assert_eq!(
        result.answer,
        "I enjoy playing the guitar, singing, cricket, and online gaming."
    );
}

#[test]
fn unrelated_question_falls_back() {
    let engine = sample_engine();
    let result = engine
        .answer("What is the capital of India?")
        .expect("catalog non-empty");
    assert!(!result.matched, "score {} unexpectedly matched", result.score);
    assert_eq!(result.answer, FALLBACK_REPLY);
    assert!(result.matched_question.is_none());
}

#[test]
fn answers_are_deterministic() {
    let engine = sample_engine();
    let first = engine.answer("what do you enjoy playing").expect("non-empty");
    for _ in 0..5 {
        let again = engine.answer("what do you enjoy playing").expect("non-empty");
        assert_eq!(first, again);
    }
}

#[test]
fn threshold_is_a_strict_cutoff() {
    let engine = sample_engine();
    let entry = &engine.catalog().entries()[0];

    let at_threshold = engine.decide(entry, 60);
    assert!(!at_threshold.matched);
    assert_eq!(at_threshold.score, 60);
    assert_eq!(at_threshold.answer, FALLBACK_REPLY);

    let above_threshold = engine.decide(entry, 61);
    assert!(above_threshold.matched);
    assert_eq!(above_threshold.score, 61);
    assert_eq!(above_threshold.answer, entry.answer);
}

#[test]
fn ties_resolve_to_earliest_catalog_entry() {
    let catalog = Arc::new(Catalog::from_entries(vec![
        CatalogEntry::new("What is your favourite colour?", "first answer"),
        CatalogEntry::new("What is your favourite colour?", "second answer"),
    ]));
    let engine = Engine::with_defaults(catalog).expect("engine builds");

    let (entry, score) = engine
        .best_match("what is your favourite colour")
        .expect("catalog non-empty");
    assert_eq!(score, 100);
    assert_eq!(entry.answer, "first answer");

    let result = engine.answer("What is your favourite colour?").expect("non-empty");
    assert_eq!(result.answer, "first answer");
}

#[test]
fn empty_catalog_is_an_error_not_a_default() {
    let engine = Engine::with_defaults(Arc::new(Catalog::default())).expect("engine builds");
    assert!(matches!(engine.best_match("anything"), Err(MatchError::EmptyCatalog)));
    assert!(matches!(engine.answer("anything"), Err(MatchError::EmptyCatalog)));
}

#[test]
fn invalid_threshold_rejected_at_construction() {
    let result = Engine::new(
        sample_catalog(),
        NormalizeConfig::default(),
        MatchConfig { threshold: 200 },
    );
    assert!(matches!(result, Err(MatchError::InvalidConfig(_))));
}

#[test]
fn catalog_keys_are_normalized_like_queries() {
    // The stored question carries case and punctuation; a query that only
    // matches its normalized form must still score 100.
    let catalog = Arc::new(Catalog::from_entries(vec![CatalogEntry::new(
        "WHAT   are your HOBBIES???",
        "answer",
    )]));
    let engine = Engine::with_defaults(catalog).expect("engine builds");
    let (_, score) = engine.best_match("what are your hobby").expect("non-empty");
    assert_eq!(score, 100);
}

#[test]
fn empty_query_falls_back_instead_of_failing() {
    let engine = sample_engine();
    let result = engine.answer("").expect("catalog non-empty");
    assert!(!result.matched);
    assert_eq!(result.answer, FALLBACK_REPLY);
}

#[test]
fn custom_threshold_changes_the_gate() {
    let strict = Engine::new(
        sample_catalog(),
        NormalizeConfig::default(),
        MatchConfig { threshold: 99 },
    )
    .expect("engine builds");

    // Clears the default 60 gate comfortably, but not a 99 gate.
    let result = strict.answer("Tell me about your hobbies").expect("non-empty");
    assert!(!result.matched);
    assert_eq!(result.answer, FALLBACK_REPLY);
}
