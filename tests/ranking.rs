use tf_idf_matcher::{
    cosine_similarity, derive_rating, rank, tokenize, CandidateDocument, DefaultRanker, DefaultTFIDFEngine,
    MatchError, MatcherConfig, QueryDocument, RequestVectors, TermFrequency,
};

fn cand(id: &str, text: &str) -> CandidateDocument {
    CandidateDocument::new(id, text)
}

#[test]
fn tokenizer_example() {
    assert_eq!(tokenize("The Quick, Fox! Fox runs."), vec!["quick", "fox", "fox", "runs"]);
}

#[test]
fn idf_cancellation_scenario() {
    let query = QueryDocument::new("case", "contract dispute settlement");
    let candidates = vec![cand("A", "contract dispute lawyer"), cand("B", "family custody case")];

    let q_tf = TermFrequency::from_text(&query.text);
    let c_tfs: Vec<TermFrequency> = candidates.iter().map(|c| TermFrequency::from_text(&c.text)).collect();
    let vectors = RequestVectors::<f64>::build::<DefaultTFIDFEngine>(&q_tf, &c_tfs, false);

    let ln_1_5 = (3.0f64 / 2.0).ln();
    assert_eq!(vectors.idf.get("contract"), Some(0.0));
    assert_eq!(vectors.idf.get("dispute"), Some(0.0));
    assert_eq!(vectors.query.get("settlement"), Some(ln_1_5));
    assert_eq!(vectors.candidates[0].get("lawyer"), Some(ln_1_5));
    assert_eq!(cosine_similarity(&vectors.query, &vectors.candidates[0]), 0.0);

    let ranked = rank(&query, &candidates).unwrap();
    assert_eq!(ranked.ids(), vec!["A", "B"]);
    for entry in &ranked {
        assert_eq!(entry.score, 0.0);
        assert_eq!(entry.match_percent, 0);
    }
    // shared terms carry no weight, so "lawyer" leads A's keywords
    assert_eq!(ranked.list[0].top_keywords, vec!["lawyer", "contract", "dispute"]);
    assert_eq!(ranked.list[1].top_keywords, vec!["family", "custody", "case"]);
}

#[test]
fn identical_document_scores_one() {
    let text = "wrongful termination employment discrimination claim";
    let query = QueryDocument::new("case", text);
    let candidates = vec![
        cand("other", "real estate closing"),
        cand("same", text),
        cand("third", "tax planning"),
    ];
    let ranked = rank(&query, &candidates).unwrap();
    assert_eq!(ranked.list[0].candidate_id, "same");
    assert_eq!(ranked.list[0].score, 1.0);
    assert_eq!(ranked.list[0].match_percent, 100);
}

#[test]
fn ranking_is_deterministic() {
    let query = QueryDocument::new("case", "medical malpractice surgery negligence hospital");
    let candidates: Vec<CandidateDocument> = [
        "surgery negligence expert",
        "hospital billing disputes",
        "malpractice defense insurance",
        "immigration",
        "medical malpractice hospital negligence",
        "",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| cand(&format!("64f00000000000000000{i:04x}"), text))
    .collect();

    let first = rank(&query, &candidates).unwrap();
    for _ in 0..5 {
        assert_eq!(rank(&query, &candidates).unwrap(), first);
    }
    assert_eq!(first.list[0].candidate_id, "64f000000000000000000004");
}

#[test]
fn cardinality_is_min_of_ten_and_candidates() {
    let query = QueryDocument::new("case", "trademark infringement");
    for n in [0usize, 1, 9, 10, 11, 25] {
        let candidates: Vec<CandidateDocument> = (0..n)
            .map(|i| cand(&format!("id-{i}"), if i % 2 == 0 { "trademark filings" } else { "traffic tickets" }))
            .collect();
        assert_eq!(rank(&query, &candidates).unwrap().len(), n.min(10), "n={n}");
    }
}

#[test]
fn zero_query_vector_ties_keep_input_order() {
    // "bankruptcy" is missing from exactly one document, so its idf is ln(1) = 0
    let query = QueryDocument::new("case", "bankruptcy");
    let candidates: Vec<CandidateDocument> = (0..12)
        .map(|i| cand(&format!("c{i:02}"), if i < 11 { "bankruptcy chapter" } else { "chapter" }))
        .collect();
    let ranked = rank(&query, &candidates).unwrap();
    let expected: Vec<String> = (0..10).map(|i| format!("c{i:02}")).collect();
    assert_eq!(ranked.ids(), expected.iter().map(String::as_str).collect::<Vec<_>>());
    assert!(ranked.iter().all(|c| c.score == 0.0));
}

#[test]
fn negative_idf_terms_still_contribute() {
    // "estate" is in every document, so its idf is negative
    let query = QueryDocument::new("case", "estate probate");
    let candidates = vec![
        cand("a", "estate"),
        cand("b", "estate probate"),
        cand("c", "estate zoning"),
    ];
    let ranked = rank(&query, &candidates).unwrap();
    assert_eq!(ranked.ids(), vec!["b", "a", "c"]);
    assert_eq!(ranked.list[0].score, 1.0);
    assert!(ranked.list[1].score > ranked.list[2].score);
    assert!(ranked.list[2].score > 0.0);
}

#[test]
fn keywords_come_from_the_candidate_text() {
    let query = QueryDocument::new("case", "software license breach");
    let candidates = vec![
        cand("a", "software licensing agreements and open source compliance"),
        cand("b", "breach of contract, commercial leases"),
    ];
    for entry in rank(&query, &candidates).unwrap() {
        let text = &candidates.iter().find(|c| c.id == entry.candidate_id).unwrap().text;
        let own = tokenize(text);
        assert!(entry.top_keywords.len() <= 3);
        assert!(entry.top_keywords.iter().all(|k| own.contains(k)), "{entry:?}");
    }
}

#[test]
fn rating_is_query_independent() {
    let candidates = vec![cand("64f1a2b3c4d5e6f7a8b90123", "tax"), cand("64f1a2b3c4d5e6f7a8b9beef", "divorce")];
    let r1 = rank(&QueryDocument::new("q1", "tax"), &candidates).unwrap();
    let r2 = rank(&QueryDocument::new("q2", "divorce custody"), &candidates).unwrap();
    for id in ["64f1a2b3c4d5e6f7a8b90123", "64f1a2b3c4d5e6f7a8b9beef"] {
        let a = r1.iter().find(|c| c.candidate_id == id).unwrap();
        let b = r2.iter().find(|c| c.candidate_id == id).unwrap();
        assert_eq!(a.rating, b.rating);
        assert_eq!(a.rating, derive_rating(id));
        assert!((4.0..=5.0).contains(&a.rating));
    }
}

#[test]
fn contract_errors_differ_from_empty_results() {
    let query = QueryDocument::new("case", "anything");
    assert!(rank(&query, &[]).unwrap().is_empty());

    let err = rank(&query, &[cand(" ", "text")]).unwrap_err();
    assert!(err.is_contract_violation());
    assert!(matches!(err, MatchError::EmptyCandidateId { index: 0 }));
}

#[test]
fn degenerate_text_scores_zero() {
    let query = QueryDocument::new("case", "the and of it");
    let candidates = vec![cand("a", "!!!"), cand("b", "family law")];
    let ranked = rank(&query, &candidates).unwrap();
    assert!(ranked.iter().all(|c| c.score == 0.0 && !c.score.is_nan()));
    assert_eq!(ranked.ids(), vec!["a", "b"]);
    assert!(ranked.list[0].top_keywords.is_empty());
}

#[test]
fn configured_ranker_truncates() {
    let ranker = DefaultRanker::new(MatcherConfig::from_toml_str("limit = 3\nparallel = false").unwrap()).unwrap();
    let query = QueryDocument::new("case", "visa");
    let candidates: Vec<CandidateDocument> = (0..8).map(|i| cand(&format!("v{i}"), "visa work permit")).collect();
    assert_eq!(ranker.rank(&query, &candidates).unwrap().len(), 3);
}
