#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::{DEFAULT_PIPELINE_CONFIG, DEFAULT_RENDER_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    ColorFunc, CorpusSource, Error, FileSource, FrequencyTable, MemorySource, PipelineConfig,
    PlacedLabel, RenderConfig, Renderer, SvgWordCloud, WordCloudImage, WordCloudOutcome,
    DEFAULT_LABEL_COLOR,
};
pub mod types;
mod utils;
pub use types::{FieldTag, FieldValue, Frequency, Label, RankedTable, RawCorpus, Record, Weight};
pub use utils::{
    count_by, count_frequencies, decode_corpus, extract_field, extract_publication_year,
    extract_publisher, extract_source, sort_results, split_records, to_weights,
};

use log::{debug, info, warn};

/// Fetches the export named by `config.source_path` and splits it into records.
pub fn load_records<S>(source: &S, config: &PipelineConfig) -> Result<Vec<Record>, Error>
where
    S: CorpusSource + ?Sized,
{
    let bytes = source.fetch(&config.source_path)?;
    let corpus = decode_corpus(&bytes)?;

    let records = split_records(&corpus, &config.record_marker);
    info!("Loaded {} records from {}", records.len(), config.source_path);

    Ok(records)
}

/// Counts the configured field across `records` and ranks the result.
///
/// Records without the field, or with an empty value for it, contribute nothing.
pub fn rank_field(records: &[Record], config: &PipelineConfig) -> RankedTable {
    let field_tag: &FieldTag = &config.field_tag;

    let frequencies = count_by(records, |record| {
        extract_field(record, field_tag).filter(|value| !value.is_empty())
    });

    debug!(
        "Counted {} values of {:?} across {} distinct labels",
        frequencies.total(),
        field_tag,
        frequencies.len()
    );

    sort_results(frequencies)
}

/// Runs the synchronous part of the pipeline on text that is already in memory.
///
/// Returns the number of records found alongside the ranked table.
///
/// # Example
/// ```
/// use journal_cloud::{build_ranked_table, DEFAULT_PIPELINE_CONFIG};
///
/// let corpus = "PT A\nSO Journal X\nPT B\nSO Journal Y\nPT C\nSO Journal X";
///
/// let (record_count, ranked_table) = build_ranked_table(corpus, DEFAULT_PIPELINE_CONFIG);
/// assert_eq!(record_count, 3);
/// assert_eq!(
///     ranked_table,
///     vec![("Journal X".to_string(), 2), ("Journal Y".to_string(), 1)]
/// );
/// ```
pub fn build_ranked_table(corpus: &str, config: &PipelineConfig) -> (usize, RankedTable) {
    let records = split_records(corpus, &config.record_marker);
    if records.is_empty() {
        warn!("0 records found");
    }

    let ranked_table = rank_field(&records, config);

    (records.len(), ranked_table)
}

/// Builds a word cloud from `source` with the default configuration and renderer.
pub fn run_wordcloud<S>(source: &S) -> Result<WordCloudOutcome<WordCloudImage>, Error>
where
    S: CorpusSource + ?Sized,
{
    run_wordcloud_with_custom_config(
        DEFAULT_PIPELINE_CONFIG,
        DEFAULT_RENDER_CONFIG,
        source,
        &SvgWordCloud::default(),
    )
}

/// Fetches, parses, counts, ranks, and renders.
///
/// A fetch failure is returned as-is. When no labels were found the renderer is not
/// called and the outcome carries no artifact.
pub fn run_wordcloud_with_custom_config<S, R>(
    pipeline_config: &PipelineConfig,
    render_config: &RenderConfig,
    source: &S,
    renderer: &R,
) -> Result<WordCloudOutcome<R::Artifact>, Error>
where
    S: CorpusSource + ?Sized,
    R: Renderer + ?Sized,
{
    let records = load_records(source, pipeline_config)?;
    let ranked_table = rank_field(&records, pipeline_config);

    let weights = to_weights(&ranked_table);
    if weights.is_empty() {
        warn!(
            "No {:?} values found in {}; nothing to render",
            pipeline_config.field_tag, pipeline_config.source_path
        );

        return Ok(WordCloudOutcome {
            record_count: records.len(),
            ranked_table,
            artifact: None,
        });
    }

    info!("Rendering {} labels", weights.len());
    let artifact = renderer.render(&weights, render_config)?;

    Ok(WordCloudOutcome {
        record_count: records.len(),
        ranked_table,
        artifact: Some(artifact),
    })
}
