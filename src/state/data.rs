//! Shared data structures for the gallery
//!
//! These structs represent the static display records that flow from the
//! catalog into the views. They are never mutated after loading.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GalleryError;

/// The fixed set of project categories
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    #[serde(rename = "UI")]
    Ui,
    #[serde(rename = "平面")]
    Graphic,
    #[serde(rename = "品牌")]
    Brand,
    #[serde(rename = "插画")]
    Illustration,
}

impl ProjectCategory {
    /// All categories in navigation order
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Ui,
        ProjectCategory::Graphic,
        ProjectCategory::Brand,
        ProjectCategory::Illustration,
    ];

    /// Display label, identical to the serialized value
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Ui => "UI",
            ProjectCategory::Graphic => "平面",
            ProjectCategory::Brand => "品牌",
            ProjectCategory::Illustration => "插画",
        }
    }

    /// Parse a category from its label (exact match)
    pub fn parse(value: &str) -> Result<Self, GalleryError> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == value)
            .ok_or_else(|| GalleryError::UnknownCategory(value.to_string()))
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A portfolio project shown in the gallery
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: ProjectCategory,
    /// Path to the cover image, relative to the assets directory
    pub thumbnail: String,
    /// Finished pieces shown in the detail sheet
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// A single artwork in the artwork collage
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub year: i32,
    /// Path to the image, relative to the assets directory
    pub image: String,
    /// Display width in logical pixels
    pub width: f32,
    /// Display height in logical pixels
    pub height: f32,
}

/// One entry of the category navigation
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFilter {
    pub label: String,
    pub value: super::filter::CategorySelection,
    /// Number of projects the entry would show, when known
    pub count: Option<usize>,
}
