//! Category filtering over the project catalog
//!
//! The visible project list is always derived from the catalog and the
//! active selection. `FilteredProjects` keeps the derivation around so the
//! views can borrow it every frame without refiltering.

use std::fmt;

use super::data::{CategoryFilter, Project, ProjectCategory};
use crate::error::GalleryError;

/// The active value of the category navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategorySelection {
    /// Parse "all" or a category label
    pub fn parse(value: &str) -> Result<Self, GalleryError> {
        if value == "all" {
            return Ok(CategorySelection::All);
        }
        ProjectCategory::parse(value).map(CategorySelection::Only)
    }

    /// Whether a project passes this selection
    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(category) => project.category == category,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str("all"),
            CategorySelection::Only(category) => category.fmt(f),
        }
    }
}

/// Indices of the projects that pass `selection`, in catalog order
pub fn filter_projects(projects: &[Project], selection: CategorySelection) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, project)| selection.matches(project))
        .map(|(index, _)| index)
        .collect()
}

/// Navigation entries: "全部" followed by every category, with counts
pub fn category_filters(projects: &[Project]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter {
        label: "全部".to_string(),
        value: CategorySelection::All,
        count: Some(projects.len()),
    }];

    filters.extend(ProjectCategory::ALL.into_iter().map(|category| {
        let selection = CategorySelection::Only(category);
        CategoryFilter {
            label: category.label().to_string(),
            value: selection,
            count: Some(projects.iter().filter(|p| selection.matches(p)).count()),
        }
    }));

    filters
}

/// Memoized result of filtering the catalog by the active selection
#[derive(Debug, Clone)]
pub struct FilteredProjects {
    selection: CategorySelection,
    indices: Vec<usize>,
}

impl FilteredProjects {
    pub fn new(projects: &[Project], selection: CategorySelection) -> Self {
        Self {
            selection,
            indices: filter_projects(projects, selection),
        }
    }

    /// Switch to `selection`, recomputing only when it differs.
    /// Returns true when the visible list was recomputed.
    pub fn select(&mut self, projects: &[Project], selection: CategorySelection) -> bool {
        if selection == self.selection {
            return false;
        }
        self.selection = selection;
        self.indices = filter_projects(projects, selection);
        true
    }

    pub fn selection(&self) -> CategorySelection {
        self.selection
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
