//! Report Use Case
//!
//! Collects the catalog listing, the reader listing, and every ranking into
//! one serializable value. Rankings that cannot be answered (empty catalog)
//! are left empty rather than failing the report.

use serde::Serialize;

use crate::domain::entities::{Reader, Registry, Work};

/// A work as it appears in reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkSummary {
    pub catalog_id: String,
    pub title: String,
    /// Kind-aware display form, e.g. "Dune, by Frank Herbert"
    pub description: String,
    pub kind: &'static str,
    pub reads: u32,
    pub average_rating: f64,
}

/// A reader as it appears in reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReaderSummary {
    pub name: String,
    pub contact: String,
    pub works_read: usize,
    pub average_rating: f64,
}

impl ReaderSummary {
    fn of(reader: &Reader) -> Self {
        Self {
            name: reader.name().to_string(),
            contact: reader.contact().to_string(),
            works_read: reader.works_read(),
            average_rating: reader.average_rating(),
        }
    }
}

/// Everything the catalog can tell about itself
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    /// Length requested for the "n most" lists
    pub top: u32,
    pub works: Vec<WorkSummary>,
    pub readers: Vec<ReaderSummary>,
    pub most_read: Option<WorkSummary>,
    pub n_most_read: Vec<WorkSummary>,
    pub highest_rated: Option<WorkSummary>,
    pub most_positive_reader: Option<ReaderSummary>,
    pub n_most_prolific: Vec<ReaderSummary>,
}

impl CatalogReport {
    pub fn build(registry: &Registry, top: u32) -> Self {
        let n = i64::from(top);
        let summarize = |work: &Work| work_summary(registry, work);

        Self {
            top,
            works: registry
                .catalog()
                .map(|(_, work, reads)| describe(work, reads))
                .collect(),
            readers: registry.readers().map(ReaderSummary::of).collect(),
            most_read: registry.most_read().ok().map(summarize),
            n_most_read: registry
                .n_most_read(n)
                .map(|works| works.into_iter().map(summarize).collect())
                .unwrap_or_default(),
            highest_rated: registry.highest_rated().ok().map(summarize),
            most_positive_reader: registry.most_positive_reader().ok().map(ReaderSummary::of),
            n_most_prolific: registry
                .n_most_prolific(n)
                .map(|readers| readers.into_iter().map(ReaderSummary::of).collect())
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty() && self.readers.is_empty()
    }
}

fn work_summary(registry: &Registry, work: &Work) -> WorkSummary {
    let reads = registry
        .catalog()
        .find(|(_, w, _)| *w == work)
        .map(|(_, _, reads)| reads)
        .unwrap_or(0);
    describe(work, reads)
}

fn describe(work: &Work, reads: u32) -> WorkSummary {
    WorkSummary {
        catalog_id: work.catalog_id().to_string(),
        title: work.title().to_string(),
        description: work.to_string(),
        kind: work.kind().label(),
        reads,
        average_rating: work.average_rating(),
    }
}
