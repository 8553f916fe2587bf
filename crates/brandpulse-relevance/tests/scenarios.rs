//! Relevance scenarios against the shipped brand registry and keyword corpus.

use std::path::PathBuf;

use brandpulse_core::{load_brands, load_corpus, BrandRegistry, KeywordCorpus, Post};
use brandpulse_relevance::{evaluate_all, evaluate_brand, BrandMatcher};

fn config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config")
}

fn registry() -> BrandRegistry {
    load_brands(&config_dir().join("brands.yaml")).unwrap()
}

fn corpus() -> KeywordCorpus {
    load_corpus(&config_dir().join("keywords.yaml")).unwrap()
}

fn posts(rows: &[(&str, &str)]) -> Vec<Post> {
    rows.iter()
        .enumerate()
        .map(|(id, (text, origin))| Post {
            id,
            text: (*text).to_string(),
            origin: (*origin).to_string(),
            record: vec![(*text).to_string(), (*origin).to_string()],
        })
        .collect()
}

#[test]
fn chobani_post_with_handle_and_yogurt_is_relevant() {
    let registry = registry();
    let chobani = registry.get("chobani").unwrap();
    let matcher = BrandMatcher::new(chobani, &corpus());
    assert!(matcher.is_relevant("I love @chobani yogurt for breakfast!"));
}

#[test]
fn wallaby_in_unrelated_context_is_not_relevant() {
    let registry = registry();
    let wallaby = registry.get("wallaby").unwrap();
    let matcher = BrandMatcher::new(wallaby, &corpus());
    assert!(!matcher.is_relevant("Wallaby crossing the road"));
    assert!(matcher.is_relevant("Wallaby whole milk yogurt is creamy"));
}

#[test]
fn activia_negative_filter_does_not_leak_into_other_brands() {
    let data = posts(&[
        ("activia benz and a chobani yogurt", "mixed_1.csv"),
        ("activia probiotic", "activia_1.csv"),
    ]);
    let refs: Vec<&Post> = data.iter().collect();
    let registry = registry();
    let results = evaluate_all(&refs, &registry, &corpus(), 0);

    let activia = results.iter().find(|r| r.brand_id == "activia").unwrap();
    assert!(!activia.is_relevant(0));
    assert!(activia.is_relevant(1));

    let chobani = results.iter().find(|r| r.brand_id == "chobani").unwrap();
    assert!(chobani.is_relevant(0));
}

#[test]
fn one_post_can_be_relevant_to_several_brands() {
    let data = posts(&[("chobani vs fage greek yogurt", "a.csv")]);
    let refs: Vec<&Post> = data.iter().collect();
    let registry = registry();
    let results = evaluate_all(&refs, &registry, &corpus(), 0);

    let relevant: Vec<&str> = results
        .iter()
        .filter(|r| r.is_relevant(0))
        .map(|r| r.brand_id.as_str())
        .collect();
    assert_eq!(relevant, vec!["chobani", "fage"]);
}

#[test]
fn evaluating_every_brand_leaves_the_corpus_untouched() {
    let corpus = corpus();
    let before = corpus.clone();
    let data = posts(&[("dannon and wallaby are both fine", "x.csv")]);
    let refs: Vec<&Post> = data.iter().collect();

    let _ = evaluate_all(&refs, &registry(), &corpus, 0);

    assert_eq!(corpus, before);
}

#[test]
fn threshold_fallback_drops_brand_origin_files() {
    let data = posts(&[
        ("maple hill creamery", "maple_hill_1.csv"),
        ("my cat", "maple_hill_2.csv"),
        ("noosa yoghurt", "noosa_1.csv"),
    ]);
    let refs: Vec<&Post> = data.iter().collect();
    let registry = registry();
    let maple_hill = registry.get("maple-hill").unwrap();

    let result = evaluate_brand(&refs, maple_hill, &corpus(), 10);
    assert!(result.below_threshold);
    assert_eq!(result.relevant_count(), 1);
    let ids: Vec<usize> = result.accepted.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2]);
}
