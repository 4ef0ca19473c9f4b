//! Catalog search over a collection of artifacts.
//!
//! [`ArtifactSearch`] runs the steps of a catalog page request in order:
//!
//! 1. keep the artifacts passing the category filter,
//! 2. rank them against the query, or order them by the fallback order
//!    when the query is empty,
//! 3. slice the requested page.
//!
//! # Examples
//!
//! ```
//! use curio::document::{Artifact, CategoryCatalog};
//! use curio::search::{ArtifactSearch, SearchRequest};
//! use curio::config::SearchConfig;
//!
//! let artifacts = vec![
//!     Artifact::builder().id("1").name("Trống đồng Đông Sơn").category("cd").build(),
//!     Artifact::builder().id("2").name("Áo dài truyền thống").category("nguyen").build(),
//!     Artifact::builder().id("3").name("Trống đồng cổ vật").category("cd").build(),
//! ];
//! let search = ArtifactSearch::new(artifacts, CategoryCatalog::builtin(), SearchConfig::default()).unwrap();
//!
//! let page = search.search(&SearchRequest::new("trống đồng"));
//! assert_eq!(page.total_items, 2);
//!
//! let related = search.similar_to("1").unwrap();
//! assert_eq!(related[0].artifact.id, "3");
//! ```

use serde::Serialize;

use crate::config::SearchConfig;
use crate::document::{Artifact, CategoryCatalog, CategoryFilter, Locale};
use crate::error::{CurioError, Result};
use crate::ranking::{Candidate, Page, Ranker, paginate};
use crate::scoring::ItemFields;

/// One catalog search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query; empty means no text filter.
    pub query: String,
    /// Selected category ids.
    pub categories: Vec<String>,
    /// 1-based page number.
    pub page: usize,
    /// Results per page, `None` for the configured size.
    pub page_size: Option<usize>,
    /// Locale of the category names matched by the query.
    pub locale: Locale,
}

impl SearchRequest {
    pub fn new<S: Into<String>>(query: S) -> Self {
        SearchRequest {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest {
            query: String::new(),
            categories: Vec::new(),
            page: 1,
            page_size: None,
            locale: Locale::default(),
        }
    }
}

/// An artifact with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArtifactHit<'a> {
    pub artifact: &'a Artifact,
    pub score: f64,
}

/// Search and related-item suggestions over one artifact collection.
#[derive(Debug, Clone)]
pub struct ArtifactSearch {
    artifacts: Vec<Artifact>,
    catalog: CategoryCatalog,
    config: SearchConfig,
    ranker: Ranker,
}

impl ArtifactSearch {
    pub fn new(
        artifacts: Vec<Artifact>,
        catalog: CategoryCatalog,
        config: SearchConfig,
    ) -> Result<Self> {
        let ranker = Ranker::new(&config)?;
        Ok(ArtifactSearch {
            artifacts,
            catalog,
            config,
            ranker,
        })
    }

    /// Search with the builtin catalog and default configuration.
    pub fn with_defaults(artifacts: Vec<Artifact>) -> Self {
        ArtifactSearch {
            artifacts,
            catalog: CategoryCatalog::builtin(),
            config: SearchConfig::default(),
            ranker: Ranker::default(),
        }
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Look up an artifact by id.
    pub fn get(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| artifact.id == id)
    }

    /// All artifacts passing the category filter, ranked against `query`.
    pub fn rank(&self, query: &str, categories: &[String], locale: Locale) -> Vec<ArtifactHit<'_>> {
        let filter = CategoryFilter::new(categories, &self.catalog);
        let selected: Vec<&Artifact> = self
            .artifacts
            .iter()
            .filter(|artifact| filter.matches(artifact))
            .collect();

        log::debug!(
            target: "curio::search",
            "{} of {} artifacts pass the category filter",
            selected.len(),
            self.artifacts.len()
        );

        let candidates: Vec<Candidate> = selected
            .iter()
            .map(|artifact| {
                Candidate::new(
                    artifact.id.as_str(),
                    artifact.search_text(&self.catalog, locale),
                )
            })
            .collect();

        self.ranker
            .rank_hits(query, &candidates)
            .into_iter()
            .map(|hit| ArtifactHit {
                artifact: selected[hit.position],
                score: hit.score,
            })
            .collect()
    }

    /// Run a catalog search and return the requested page.
    pub fn search(&self, request: &SearchRequest) -> Page<ArtifactHit<'_>> {
        let ranked = self.rank(&request.query, &request.categories, request.locale);
        let page_size = request.page_size.unwrap_or(self.config.page_size);
        paginate(&ranked, request.page, page_size)
    }

    /// Artifacts related to the artifact `id`, up to the configured top-K.
    pub fn similar_to(&self, id: &str) -> Result<Vec<ArtifactHit<'_>>> {
        self.similar_top_k(id, self.config.similar.top_k)
    }

    /// Artifacts related to the artifact `id`, up to `top_k`.
    pub fn similar_top_k(&self, id: &str, top_k: usize) -> Result<Vec<ArtifactHit<'_>>> {
        let target = self
            .get(id)
            .ok_or_else(|| CurioError::not_found(format!("artifact '{id}'")))?;

        let fields: Vec<ItemFields> = self
            .artifacts
            .iter()
            .map(Artifact::similarity_fields)
            .collect();

        Ok(self
            .ranker
            .similar_hits(&target.similarity_fields(), &fields, top_k)
            .into_iter()
            .map(|hit| ArtifactHit {
                artifact: &self.artifacts[hit.position],
                score: hit.score,
            })
            .collect())
    }
}
