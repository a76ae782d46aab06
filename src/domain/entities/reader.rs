//! Reader entity - someone who reads and rates works

use std::fmt;

use indexmap::IndexMap;

use crate::domain::entities::{Ratable, WorkKey};
use crate::domain::value_objects::{mean, reader_accepts, ContactId, RatingInput};
use crate::error::CatalogResult;

/// A reader and the works they have recorded, in first-read order.
///
/// A missing rating (`None`) means the work was read but not rated, or the
/// offered rating was unusable.
#[derive(Debug, Clone)]
pub struct Reader {
    name: String,
    contact: ContactId,
    readings: IndexMap<WorkKey, Option<f64>>,
}

impl Reader {
    pub fn new(name: impl Into<String>, contact: ContactId) -> Self {
        Self {
            name: name.into(),
            contact,
            readings: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactId {
        &self.contact
    }

    /// Recorded works with their ratings
    pub fn readings(&self) -> &IndexMap<WorkKey, Option<f64>> {
        &self.readings
    }

    /// Rating recorded for a work, `None` if unread or unrated
    pub fn rating_for(&self, key: &WorkKey) -> Option<f64> {
        self.readings.get(key).copied().flatten()
    }

    /// Number of distinct works recorded, rated or not
    pub fn works_read(&self) -> usize {
        self.readings.len()
    }

    /// Record that this reader read `work`.
    ///
    /// Ratings in `0..5` are kept; anything else, including no rating, is
    /// stored as absent. Reading the same work again overwrites its rating.
    pub fn record_reading<W: Ratable + ?Sized>(
        &mut self,
        work: &W,
        rating: impl Into<RatingInput>,
    ) -> Option<f64> {
        let rating = rating.into().coerce().filter(|value| reader_accepts(*value));
        self.readings.insert(work.identity(), rating);
        rating
    }

    /// Mean over present ratings only, 0 when none are present
    pub fn average_rating(&self) -> f64 {
        mean(self.readings.values().flatten().copied())
    }

    /// Replace the contact if the new value is well-formed.
    ///
    /// A registry keys readers by contact; change it through
    /// `Registry::change_contact` to keep that key in step.
    pub fn change_contact(&mut self, contact: impl Into<String>) -> CatalogResult<ContactId> {
        let contact = ContactId::parse(contact)?;
        let previous = std::mem::replace(&mut self.contact, contact);
        tracing::info!(
            reader = %self.name,
            previous = %previous,
            current = %self.contact,
            "reader contact changed"
        );
        Ok(previous)
    }
}

impl PartialEq for Reader {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.contact == other.contact
    }
}

impl Eq for Reader {}

impl fmt::Display for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reader: {} | Contact: {} | Works read: {}",
            self.name,
            self.contact,
            self.readings.len()
        )
    }
}
