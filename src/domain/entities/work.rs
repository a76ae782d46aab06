//! Work entity - a book in the catalog
//!
//! A work is identified by its title and catalog id. Narrative and reference
//! works carry extra descriptive fields in [`WorkKind`], but the kind never
//! takes part in equality: two works with the same title and catalog id are
//! interchangeable.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{mean, work_accepts, RatingInput};
use crate::error::{CatalogError, CatalogResult};

/// Identity of a work, usable as a map key independently of the work itself
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkKey {
    pub title: String,
    pub catalog_id: String,
}

impl fmt::Display for WorkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.catalog_id)
    }
}

/// Kind-specific descriptive data
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkKind {
    /// Plain work with no extra metadata
    #[default]
    General,
    /// Fiction
    Narrative { author: String },
    /// Non-fiction manual
    Reference { subject: String, level: String },
}

impl WorkKind {
    /// Short label for listings
    pub fn label(&self) -> &'static str {
        match self {
            WorkKind::General => "general",
            WorkKind::Narrative { .. } => "narrative",
            WorkKind::Reference { .. } => "reference",
        }
    }
}

/// Capability shared by everything a reader can rate.
pub trait Ratable {
    /// Offer a rating; see [`Work::add_rating`] for the acceptance rules.
    fn add_rating(&mut self, rating: RatingInput) -> CatalogResult<Option<f64>>;

    /// Mean of accepted ratings, 0 when there are none
    fn average_rating(&self) -> f64;

    /// Identity used for lookups and equality
    fn identity(&self) -> WorkKey;
}

/// A work in the catalog
#[derive(Debug, Clone)]
pub struct Work {
    title: String,
    catalog_id: String,
    kind: WorkKind,
    ratings: Vec<f64>,
}

impl Work {
    /// Create a general work
    pub fn new(title: impl Into<String>, catalog_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            catalog_id: catalog_id.into(),
            kind: WorkKind::General,
            ratings: Vec::new(),
        }
    }

    /// Create a narrative work
    pub fn narrative(
        title: impl Into<String>,
        author: impl Into<String>,
        catalog_id: impl Into<String>,
    ) -> Self {
        Self::new(title, catalog_id).with_kind(WorkKind::Narrative {
            author: author.into(),
        })
    }

    /// Create a reference work
    pub fn reference(
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        catalog_id: impl Into<String>,
    ) -> Self {
        Self::new(title, catalog_id).with_kind(WorkKind::Reference {
            subject: subject.into(),
            level: level.into(),
        })
    }

    /// Builder: set the kind
    pub fn with_kind(mut self, kind: WorkKind) -> Self {
        self.kind = kind;
        self
    }

    // --- Getters ---

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn catalog_id(&self) -> &str {
        &self.catalog_id
    }

    pub fn kind(&self) -> &WorkKind {
        &self.kind
    }

    /// Author, for narrative works
    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            WorkKind::Narrative { author } => Some(author),
            _ => None,
        }
    }

    /// Subject, for reference works
    pub fn subject(&self) -> Option<&str> {
        match &self.kind {
            WorkKind::Reference { subject, .. } => Some(subject),
            _ => None,
        }
    }

    /// Level, for reference works
    pub fn level(&self) -> Option<&str> {
        match &self.kind {
            WorkKind::Reference { level, .. } => Some(level),
            _ => None,
        }
    }

    /// Accepted ratings, in the order they were added
    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    /// Replace the catalog id.
    ///
    /// No uniqueness check happens here; the registry only enforces
    /// uniqueness when a work is created. Returns the previous id.
    pub fn set_catalog_id(&mut self, catalog_id: impl Into<String>) -> String {
        let previous = std::mem::replace(&mut self.catalog_id, catalog_id.into());
        tracing::info!(
            title = %self.title,
            previous = %previous,
            current = %self.catalog_id,
            "catalog id changed"
        );
        previous
    }

    /// Offer a rating to this work.
    ///
    /// - a number in `0..=4` is appended and returned as `Ok(Some(_))`
    /// - a number outside that range is dropped with `InvalidRating`
    /// - anything that does not coerce to a number is ignored: `Ok(None)`
    pub fn add_rating(&mut self, rating: impl Into<RatingInput>) -> CatalogResult<Option<f64>> {
        let Some(value) = rating.into().coerce() else {
            return Ok(None);
        };
        if !work_accepts(value) {
            tracing::warn!(title = %self.title, rating = value, "invalid rating dropped");
            return Err(CatalogError::InvalidRating { value });
        }
        self.ratings.push(value);
        Ok(Some(value))
    }

    /// Mean of all accepted ratings, 0 when there are none
    pub fn average_rating(&self) -> f64 {
        mean(self.ratings.iter().copied())
    }

    /// Identity key (title, catalog id)
    pub fn key(&self) -> WorkKey {
        WorkKey {
            title: self.title.clone(),
            catalog_id: self.catalog_id.clone(),
        }
    }
}

impl Ratable for Work {
    fn add_rating(&mut self, rating: RatingInput) -> CatalogResult<Option<f64>> {
        Work::add_rating(self, rating)
    }

    fn average_rating(&self) -> f64 {
        Work::average_rating(self)
    }

    fn identity(&self) -> WorkKey {
        self.key()
    }
}

impl PartialEq for Work {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.catalog_id == other.catalog_id
    }
}

impl Eq for Work {}

impl Hash for Work {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.catalog_id.hash(state);
    }
}

impl fmt::Display for Work {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WorkKind::General => write!(f, "{}", self.title),
            WorkKind::Narrative { author } => write!(f, "{}, by {}", self.title, author),
            WorkKind::Reference { subject, level } => {
                write!(f, "{}, {} manual on {}", self.title, level, subject)
            }
        }
    }
}
