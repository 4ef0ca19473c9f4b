//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{CurioArgs, OutputFormat};
use crate::error::Result;

/// Plain-text rendering of a command result.
pub trait HumanReadable {
    fn render_human(&self) -> String;
}

/// One artifact in a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactSummary {
    pub id: String,
    pub name: String,
    pub score: f64,
    /// Display names of the artifact's known categories.
    pub categories: Vec<String>,
}

/// Result structure for search operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub hits: Vec<ArtifactSummary>,
}

/// Result structure for related-item suggestions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarResults {
    pub id: String,
    pub name: String,
    pub related: Vec<ArtifactSummary>,
}

/// Result structure for scoring one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub query: String,
    pub text: String,
    pub substring: f64,
    pub words: f64,
    pub ngrams: f64,
    pub total: f64,
}

fn render_summaries(out: &mut String, summaries: &[ArtifactSummary], first_rank: usize) {
    for (i, summary) in summaries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. [{}] {} (score: {:.3})",
            first_rank + i,
            summary.id,
            summary.name,
            summary.score
        );
        if !summary.categories.is_empty() {
            let _ = writeln!(out, "     {}", summary.categories.join(" · "));
        }
    }
}

impl HumanReadable for SearchResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        if self.total_items == 0 {
            out.push_str("No artifacts found\n");
            return out;
        }

        let _ = writeln!(
            out,
            "Found {} artifacts (page {}/{})",
            self.total_items, self.page, self.total_pages
        );
        out.push_str("─────────────\n");
        render_summaries(&mut out, &self.hits, (self.page - 1) * self.page_size + 1);
        out
    }
}

impl HumanReadable for SimilarResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Related to [{}] {}", self.id, self.name);
        out.push_str("─────────────\n");
        if self.related.is_empty() {
            out.push_str("No related artifacts\n");
        }
        render_summaries(&mut out, &self.related, 1);
        out
    }
}

impl HumanReadable for ScoreResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Substring: {:.4}", self.substring);
        let _ = writeln!(out, "Words:     {:.4}", self.words);
        let _ = writeln!(out, "N-grams:   {:.4}", self.ngrams);
        let _ = writeln!(out, "Total:     {:.4}", self.total);
        out
    }
}

/// Render a result in the requested format.
pub fn format_result<T>(result: &T, format: OutputFormat, pretty: bool) -> Result<String>
where
    T: Serialize + HumanReadable,
{
    match format {
        OutputFormat::Human => Ok(result.render_human()),
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)? + "\n"),
        OutputFormat::Json => Ok(serde_json::to_string(result)? + "\n"),
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T>(message: &str, result: &T, args: &CurioArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", format_result(result, args.output_format, args.pretty)?);
    Ok(())
}
