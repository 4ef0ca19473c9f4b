//! Command implementations for the curio CLI.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SearchConfig;
use crate::document::{Artifact, CategoryCatalog, Locale};
use crate::error::{CurioError, Result};
use crate::scoring::CompositeScorer;
use crate::search::{ArtifactHit, ArtifactSearch, SearchRequest};

/// Execute a CLI command.
pub fn execute_command(args: CurioArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_artifacts(search_args.clone(), &args),
        Command::Similar(similar_args) => similar_artifacts(similar_args.clone(), &args),
        Command::Score(score_args) => score_text(score_args.clone(), &args),
    }
}

/// Search the artifacts of a data file.
fn search_artifacts(args: SearchArgs, cli_args: &CurioArgs) -> Result<()> {
    if args.page_size == Some(0) {
        return Err(CurioError::invalid_argument("page size must be at least 1"));
    }

    let search = open_search(&args.data_file, cli_args)?;
    let mut request = SearchRequest::new(args.query.as_str())
        .with_categories(args.categories.iter().map(String::as_str))
        .with_page(args.page)
        .with_locale(args.locale);
    if let Some(page_size) = args.page_size {
        request = request.with_page_size(page_size);
    }

    let page = search.search(&request);
    let results = SearchResults {
        query: args.query,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
        total_items: page.total_items,
        hits: summarize(&page.items, search.catalog(), args.locale),
    };

    output_result("Search completed", &results, cli_args)
}

/// List the artifacts related to one artifact.
fn similar_artifacts(args: SimilarArgs, cli_args: &CurioArgs) -> Result<()> {
    if args.top_k == Some(0) {
        return Err(CurioError::invalid_argument("top-k must be at least 1"));
    }

    let search = open_search(&args.data_file, cli_args)?;
    let top_k = args.top_k.unwrap_or(search.config().similar.top_k);
    let related = search.similar_top_k(&args.id, top_k)?;

    let target = search
        .get(&args.id)
        .ok_or_else(|| CurioError::not_found(format!("artifact '{}'", args.id)))?;
    let results = SimilarResults {
        id: target.id.clone(),
        name: target.name.clone(),
        related: summarize(&related, search.catalog(), args.locale),
    };

    output_result("Related artifacts", &results, cli_args)
}

/// Score one text against a query.
fn score_text(args: ScoreArgs, cli_args: &CurioArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let scorer = CompositeScorer::new(config.weights, config.ngram_size)?;
    let breakdown = scorer.explain(&args.query, &args.text);

    let result = ScoreResult {
        query: args.query,
        text: args.text,
        substring: breakdown.substring,
        words: breakdown.words,
        ngrams: breakdown.ngrams,
        total: breakdown.total,
    };

    output_result("Score", &result, cli_args)
}

fn open_search(data_file: &Path, cli_args: &CurioArgs) -> Result<ArtifactSearch> {
    let config = load_config(cli_args)?;
    let catalog = match &cli_args.catalog {
        Some(path) => {
            log::info!("loading category catalog from {}", path.display());
            CategoryCatalog::from_file(path)?
        }
        None => CategoryCatalog::builtin(),
    };
    let artifacts = load_artifacts(data_file)?;
    log::info!(
        "loaded {} artifacts from {}",
        artifacts.len(),
        data_file.display()
    );

    ArtifactSearch::new(artifacts, catalog, config)
}

fn load_config(cli_args: &CurioArgs) -> Result<SearchConfig> {
    match &cli_args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            SearchConfig::from_file(path)
        }
        None => Ok(SearchConfig::default()),
    }
}

fn summarize(
    hits: &[ArtifactHit<'_>],
    catalog: &CategoryCatalog,
    locale: Locale,
) -> Vec<ArtifactSummary> {
    hits.iter()
        .map(|hit| ArtifactSummary {
            id: hit.artifact.id.clone(),
            name: hit.artifact.name.clone(),
            score: hit.score,
            categories: hit
                .artifact
                .category_names(catalog, locale)
                .map(str::to_string)
                .collect(),
        })
        .collect()
}

/// Load artifacts from a data file.
///
/// The file holds either a JSON array of header → value objects or one such
/// object per line (JSON Lines). Each object is mapped through
/// [`Artifact::from_fields`], numbered from 1 in file order.
pub fn load_artifacts<P: AsRef<Path>>(path: P) -> Result<Vec<Artifact>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_artifacts(&content)
        .map_err(|e| CurioError::data(format!("{}: {e}", path.display())))
}

/// Parse artifacts from the contents of a data file.
pub fn parse_artifacts(content: &str) -> Result<Vec<Artifact>> {
    let content = content.trim_start_matches('\u{feff}');

    let rows: Vec<Value> = if content.trim_start().starts_with('[') {
        serde_json::from_str(content)?
    } else {
        let mut rows = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = serde_json::from_str(line).map_err(|e| {
                CurioError::data(format!("line {}: {e}", line_num + 1))
            })?;
            rows.push(row);
        }
        rows
    };

    rows.iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Object(fields) => Ok(Artifact::from_fields(row_fields(fields), index + 1)),
            _ => Err(CurioError::data(format!(
                "row {} is not an object",
                index + 1
            ))),
        })
        .collect()
}

fn row_fields(fields: &Map<String, Value>) -> Vec<(&str, String)> {
    fields
        .iter()
        .map(|(header, value)| (header.as_str(), cell_text(value)))
        .collect()
}

/// Flatten a JSON value into the cell text a spreadsheet export would hold.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
