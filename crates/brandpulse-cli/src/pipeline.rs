//! Run orchestration for the CLI commands.

use std::collections::HashSet;

use anyhow::Context;
use brandpulse_core::{
    load_brands, load_corpus, AppConfig, Brand, BrandRegistry, Dataset, KeywordCorpus, Post,
};
use brandpulse_relevance::{evaluate_brand, BrandRelevance};
use brandpulse_sentiment::{score_posts, Classifier, TextClassifier};
use brandpulse_store::{
    load_dataset, write_posts, write_quality_outputs, write_scored_posts, write_top_bigrams,
    write_top_words, SummaryStatistics,
};
use brandpulse_themes::ThemeAggregator;

const COMBINED_FILE: &str = "combined_filtered.csv";

#[derive(Debug, Default)]
pub(crate) struct RunSummary {
    pub processed: usize,
    pub failed: Vec<String>,
    pub combined_rows: usize,
}

/// Loaded inputs shared by every brand in a run.
struct RunInputs {
    registry: BrandRegistry,
    corpus: KeywordCorpus,
    dataset: Dataset,
}

fn load_inputs(config: &AppConfig) -> anyhow::Result<RunInputs> {
    let registry = load_brands(&config.brands_path)
        .with_context(|| format!("loading brands from {}", config.brands_path.display()))?;
    let corpus = load_corpus(&config.keywords_path)
        .with_context(|| format!("loading keywords from {}", config.keywords_path.display()))?;
    let dataset = load_dataset(&config.raw_dir)
        .with_context(|| format!("loading posts from {}", config.raw_dir.display()))?;

    tracing::info!(
        posts = dataset.len(),
        columns = dataset.columns.len(),
        brands = registry.len(),
        "loaded inputs"
    );

    Ok(RunInputs {
        registry,
        corpus,
        dataset,
    })
}

/// One brand if `brand_filter` is set, otherwise the whole registry.
///
/// # Errors
///
/// Returns an error if the filter names no configured brand.
fn select_brands<'r>(
    registry: &'r BrandRegistry,
    brand_filter: Option<&str>,
) -> anyhow::Result<Vec<&'r Brand>> {
    if let Some(id) = brand_filter {
        let brand = registry
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("brand '{id}' not found"))?;
        Ok(vec![brand])
    } else {
        Ok(registry.iter().collect())
    }
}

/// Run the full pipeline for all (or one) brand(s).
///
/// Each brand is filtered, classified, scored and summarised against the same
/// loaded dataset. Per-brand failures are logged and skipped; the combined
/// table holds the union of every successful brand's accepted posts.
///
/// When `dry_run` is `true`, only classification runs and nothing is written.
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded, the classifier cannot be
/// built, the combined outputs cannot be written, or every brand failed.
pub(crate) async fn run_pipeline(
    config: &AppConfig,
    brand_filter: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<RunSummary> {
    let inputs = load_inputs(config)?;
    let brands = select_brands(&inputs.registry, brand_filter)?;
    let posts: Vec<&Post> = inputs.dataset.posts.iter().collect();

    if dry_run {
        for brand in &brands {
            let relevance = evaluate_brand(
                &posts,
                brand,
                &inputs.corpus,
                config.relevancy_threshold,
            );
            println!(
                "dry-run: {}: {} relevant, {} accepted{}",
                brand.id,
                relevance.relevant_count(),
                relevance.accepted.len(),
                if relevance.below_threshold {
                    " (below threshold)"
                } else {
                    ""
                }
            );
        }
        return Ok(RunSummary {
            processed: brands.len(),
            ..RunSummary::default()
        });
    }

    let classifier = Classifier::from_config(config).context("building sentiment classifier")?;
    tracing::info!(backend = %config.sentiment_backend, "sentiment classifier ready");
    let aggregator = ThemeAggregator::new(&inputs.corpus);

    let mut summary = RunSummary::default();
    let mut seen: HashSet<usize> = HashSet::new();
    let mut combined: Vec<&Post> = Vec::new();

    for brand in &brands {
        let relevance = evaluate_brand(&posts, brand, &inputs.corpus, config.relevancy_threshold);

        match process_brand(config, &inputs.dataset, brand, &relevance, &classifier, &aggregator)
            .await
        {
            Ok(()) => {
                summary.processed += 1;
                for &post in &relevance.accepted {
                    if seen.insert(post.id) {
                        combined.push(post);
                    }
                }
            }
            Err(e) => {
                tracing::error!(brand = %brand.id, error = %format!("{e:#}"), "brand failed");
                summary.failed.push(brand.id.clone());
            }
        }
    }

    if !summary.failed.is_empty() {
        tracing::warn!(
            failed_brands = summary.failed.len(),
            total_brands = brands.len(),
            "some brands failed"
        );
    }

    if !brands.is_empty() && summary.failed.len() == brands.len() {
        anyhow::bail!("all {} brands failed", brands.len());
    }

    let combined_path = config.output_dir.join(COMBINED_FILE);
    write_posts(&combined_path, &inputs.dataset, &combined, &[])
        .with_context(|| format!("writing {}", combined_path.display()))?;
    let combined_dataset = inputs.dataset.with_posts(combined.iter().copied());
    write_quality_outputs(&config.output_dir, &combined_dataset)
        .context("writing quality outputs")?;

    summary.combined_rows = combined.len();
    tracing::info!(
        processed = summary.processed,
        combined_rows = summary.combined_rows,
        "run complete"
    );
    Ok(summary)
}

/// Score and summarise one brand's accepted posts into its output directory.
async fn process_brand<C: TextClassifier>(
    config: &AppConfig,
    dataset: &Dataset,
    brand: &Brand,
    relevance: &BrandRelevance<'_>,
    classifier: &C,
    aggregator: &ThemeAggregator,
) -> anyhow::Result<()> {
    let brand_dir = config.brand_dir(&brand.snake_name());

    let records = score_posts(classifier, &relevance.accepted, config.sentiment_batch_size)
        .await
        .context("scoring sentiment")?;
    let sentiments: Vec<(f32, &str)> = records
        .iter()
        .map(|r| (r.score, r.label.as_str()))
        .collect();
    write_scored_posts(
        &brand_dir.join("sentiment.csv"),
        dataset,
        &relevance.accepted,
        &sentiments,
    )?;

    let themes = aggregator.aggregate(relevance.accepted.iter().map(|p| p.text.as_str()));
    write_top_words(&brand_dir.join("top_words.csv"), &themes.top_words(config.top_k))?;
    write_top_bigrams(
        &brand_dir.join("top_bigrams.csv"),
        &themes.top_bigrams(config.top_k),
    )?;

    tracing::info!(
        brand = %brand.id,
        scored = records.len(),
        dir = %brand_dir.display(),
        "brand outputs written"
    );
    Ok(())
}

/// Print the configured brand registry.
///
/// # Errors
///
/// Returns an error if the brands file cannot be loaded.
pub(crate) fn print_brands(config: &AppConfig) -> anyhow::Result<()> {
    let registry = load_brands(&config.brands_path)
        .with_context(|| format!("loading brands from {}", config.brands_path.display()))?;

    for brand in registry.iter() {
        let mut flags = Vec::new();
        if brand.is_nonspecific {
            flags.push("nonspecific");
        }
        if brand.is_food_related {
            flags.push("food-related");
        }
        println!(
            "{:<16} {:<16} {}",
            brand.id,
            brand.display_name,
            flags.join(",")
        );
    }
    Ok(())
}

/// Quality report and statistics over the raw, unfiltered dataset.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the outputs written.
pub(crate) fn run_report(config: &AppConfig) -> anyhow::Result<SummaryStatistics> {
    let dataset = load_dataset(&config.raw_dir)
        .with_context(|| format!("loading posts from {}", config.raw_dir.display()))?;
    let stats =
        write_quality_outputs(&config.output_dir, &dataset).context("writing quality outputs")?;
    tracing::info!(rows = stats.total_rows, "quality report written");
    Ok(stats)
}
