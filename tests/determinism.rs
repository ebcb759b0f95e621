use faqbot::{answer, normalize, Catalog, CatalogEntry, NormalizeConfig};

fn sample_catalog() -> Catalog {
    Catalog::from_entries(vec![
        CatalogEntry::new("What is your name?", "My full name is Suman Das."),
        CatalogEntry::new(
            "What are your hobbies?",
            "I enjoy playing the guitar, singing, cricket, and online gaming.",
        ),
        CatalogEntry::new("Where are you from?", "I am from Kolkata, India."),
    ])
}

#[test]
fn repeated_queries_return_identical_results() {
    let catalog = sample_catalog();
    let queries = [
        "What is your name?",
        "tell me about your hobbies",
        "what is the capital of india",
        "",
        "?!?!",
    ];

    for query in queries {
        let first = answer(query, &catalog).expect("catalog non-empty");
        for _ in 0..3 {
            let again = answer(query, &catalog).expect("catalog non-empty");
            assert_eq!(first, again, "nondeterministic result for {query:?}");
        }
    }
}

#[test]
fn equivalent_unicode_forms_normalize_identically() {
    let cfg = NormalizeConfig::default();
    let composed = normalize("Caf\u{00E9} questions", &cfg);
    let decomposed = normalize("Cafe\u{0301} questions", &cfg);
    assert_eq!(composed, decomposed);
}

#[test]
fn equivalent_unicode_queries_get_the_same_answer() {
    let catalog = Catalog::from_entries(vec![CatalogEntry::new(
        "Do you like caf\u{00E9} culture?",
        "Very much so.",
    )]);

    let composed = answer("Do you like caf\u{00E9} culture?", &catalog).expect("non-empty");
    let decomposed = answer("Do you like cafe\u{0301} culture?", &catalog).expect("non-empty");
    assert_eq!(composed, decomposed);
    assert!(composed.matched);
    assert_eq!(composed.score, 100);
}

#[test]
fn catalog_order_is_stable_across_loads() {
    let raw = r#"[
        {"question": "Alpha?", "answer": "a"},
        {"question": "Beta?", "answer": "b"},
        {"question": "Gamma?", "answer": "c"}
    ]"#;
    let first = Catalog::from_reader(raw.as_bytes()).expect("parses");
    let second = Catalog::from_reader(raw.as_bytes()).expect("parses");
    assert_eq!(first.entries(), second.entries());

    let questions: Vec<&str> = first.iter().map(|e| e.question.as_str()).collect();
    assert_eq!(questions, vec!["Alpha?", "Beta?", "Gamma?"]);
}
