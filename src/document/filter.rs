//! Hard category filtering.

use crate::document::artifact::Artifact;
use crate::document::category::CategoryCatalog;

/// Keeps artifacts carrying the selected categories.
///
/// Selections are grouped by catalog group. An artifact passes if, for every
/// group with a selection, it carries at least one of the selected ids: OR
/// within a group, AND across groups. Ids the catalog does not know are
/// ignored, and a filter without selections passes everything.
///
/// # Examples
///
/// ```
/// use curio::document::{Artifact, CategoryCatalog, CategoryFilter};
///
/// let catalog = CategoryCatalog::builtin();
/// // Era: Lý or Trần, and region: north.
/// let filter = CategoryFilter::new(["ly", "tran", "m_bac"], &catalog);
///
/// let bowl = Artifact::builder().category("tran").category("m_bac").build();
/// let statue = Artifact::builder().category("ly").category("m_nam").build();
/// assert!(filter.matches(&bowl));
/// assert!(!filter.matches(&statue));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Selected ids per group, groups in order of first selection.
    groups: Vec<(String, Vec<String>)>,
}

impl CategoryFilter {
    pub fn new<I, S>(selected: I, catalog: &CategoryCatalog) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();
        for id in selected {
            let id = id.as_ref().trim();
            let Some(group) = catalog.group_of(id) else {
                continue;
            };
            match groups.iter_mut().find(|(group_id, _)| *group_id == group.id) {
                Some((_, ids)) => {
                    if !ids.iter().any(|selected| selected == id) {
                        ids.push(id.to_string());
                    }
                }
                None => groups.push((group.id.clone(), vec![id.to_string()])),
            }
        }
        CategoryFilter { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Selected ids per group.
    pub fn groups(&self) -> &[(String, Vec<String>)] {
        &self.groups
    }

    pub fn matches(&self, artifact: &Artifact) -> bool {
        self.matches_categories(&artifact.categories)
    }

    /// Check a raw list of category ids against the selection.
    pub fn matches_categories<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        self.groups.iter().all(|(_, selected)| {
            selected
                .iter()
                .any(|id| categories.iter().any(|category| category.as_ref() == id))
        })
    }
}
