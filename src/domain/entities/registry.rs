//! Registry entity
//!
//! Owns every reader and every work created through it, links readers to
//! works, and answers ranking queries over the result.
//!
//! Works live in an arena addressed by [`WorkId`]. Creating a work does not
//! count it as part of the catalog: a work enters the read-count map only
//! when it is first linked to a reader.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::entities::{Reader, Work};
use crate::domain::ports::{ContactPrompt, NoCorrection};
use crate::domain::services::ranking::{top_n, top_one};
use crate::domain::value_objects::{ContactId, DuplicateCheck, RatingInput};
use crate::error::{CatalogError, CatalogResult};

/// Handle to a work created by a [`Registry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WorkId(usize);

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a single `link_reading` call did
#[derive(Debug, Clone, PartialEq)]
pub struct Linked {
    /// Read count of the work after this reading
    pub reads: u32,
    /// Rating stored on the reader
    pub reader_rating: Option<f64>,
    /// Rating appended to the work
    pub work_rating: Option<f64>,
    /// Numeric rating the work refused as out of range
    pub rejected_rating: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    works: Vec<Work>,
    reads: IndexMap<WorkId, u32>,
    readers: IndexMap<ContactId, Reader>,
    duplicate_check: DuplicateCheck,
}

impl Registry {
    pub fn new() -> Self {
        tracing::debug!("registry created");
        Self::default()
    }

    /// Builder: choose which works new catalog ids are checked against
    pub fn with_duplicate_check(mut self, check: DuplicateCheck) -> Self {
        self.duplicate_check = check;
        self
    }

    pub fn duplicate_check(&self) -> DuplicateCheck {
        self.duplicate_check
    }

    // --- Creation ---

    pub fn create_work(
        &mut self,
        title: impl Into<String>,
        catalog_id: impl Into<String>,
    ) -> CatalogResult<WorkId> {
        self.admit(Work::new(title, catalog_id))
    }

    pub fn create_narrative_work(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        catalog_id: impl Into<String>,
    ) -> CatalogResult<WorkId> {
        self.admit(Work::narrative(title, author, catalog_id))
    }

    pub fn create_reference_work(
        &mut self,
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        catalog_id: impl Into<String>,
    ) -> CatalogResult<WorkId> {
        self.admit(Work::reference(title, subject, level, catalog_id))
    }

    fn admit(&mut self, work: Work) -> CatalogResult<WorkId> {
        if let Some(existing) = self.conflicting_work(work.catalog_id()) {
            tracing::warn!(
                catalog_id = %work.catalog_id(),
                existing = %existing,
                "duplicate catalog id, work not created"
            );
            return Err(CatalogError::DuplicateCatalogId {
                catalog_id: work.catalog_id().to_string(),
                existing: existing.to_string(),
            });
        }

        let id = WorkId(self.works.len());
        tracing::debug!(work = %work, id = %id, "work created");
        self.works.push(work);
        Ok(id)
    }

    fn conflicting_work(&self, catalog_id: &str) -> Option<&Work> {
        match self.duplicate_check {
            DuplicateCheck::AllCreated => self.works.iter().find(|w| w.catalog_id() == catalog_id),
            DuplicateCheck::LinkedOnly => self
                .reads
                .keys()
                .map(|id| &self.works[id.0])
                .find(|w| w.catalog_id() == catalog_id),
        }
    }

    // --- Linking ---

    /// Record that the reader at `contact` read `work`.
    ///
    /// The reader keeps ratings in `0..5`, the work keeps ratings in `0..=4`;
    /// a rating the work refuses still counts as a reading. This is the only
    /// way a work enters the read-count map.
    pub fn link_reading(
        &mut self,
        work: WorkId,
        contact: &str,
        rating: impl Into<RatingInput>,
    ) -> CatalogResult<Linked> {
        let rating = rating.into();
        let target = self.works.get_mut(work.0).ok_or_else(|| {
            tracing::warn!(id = %work, "unknown work, no action taken");
            CatalogError::UnknownWork { id: work.0 }
        })?;
        let Some(reader) = self.readers.get_mut(contact) else {
            tracing::warn!(contact, "no such reader");
            return Err(CatalogError::UnknownReader {
                contact: contact.to_string(),
            });
        };

        let reader_rating = reader.record_reading(&*target, rating.clone());
        let (work_rating, rejected_rating) = match target.add_rating(rating) {
            Ok(accepted) => (accepted, None),
            Err(CatalogError::InvalidRating { value }) => (None, Some(value)),
            Err(other) => return Err(other),
        };

        let entry = self.read_entry_for(work);
        let reads = self.reads.entry(entry).or_insert(0);
        *reads += 1;
        let reads = *reads;
        tracing::debug!(work = %self.works[work.0], contact, reads, "reading linked");

        Ok(Linked {
            reads,
            reader_rating,
            work_rating,
            rejected_rating,
        })
    }

    /// Read-count entry shared by every work equal to `work`.
    ///
    /// Works compare by title and catalog id, so an earlier linked work with
    /// the same identity (another kind, a changed id, or a duplicate admitted
    /// under the linked-only check) keeps the count.
    fn read_entry_for(&self, work: WorkId) -> WorkId {
        let target = &self.works[work.0];
        self.reads
            .keys()
            .copied()
            .find(|id| self.works[id.0] == *target)
            .unwrap_or(work)
    }

    // --- Readers ---

    /// Register a reader and link any initial works without a rating.
    ///
    /// A malformed or taken contact is an error; use
    /// [`Registry::register_reader_with`] to supply corrections.
    pub fn register_reader(
        &mut self,
        name: impl Into<String>,
        contact: impl Into<String>,
        initial_works: &[WorkId],
    ) -> CatalogResult<&Reader> {
        self.register_reader_with(name, contact, initial_works, &mut NoCorrection)
    }

    /// Register a reader, asking `prompt` for a new contact each time the
    /// current one is rejected.
    pub fn register_reader_with(
        &mut self,
        name: impl Into<String>,
        contact: impl Into<String>,
        initial_works: &[WorkId],
        prompt: &mut dyn ContactPrompt,
    ) -> CatalogResult<&Reader> {
        let name = name.into();
        if let Some(unknown) = initial_works.iter().find(|id| id.0 >= self.works.len()) {
            return Err(CatalogError::UnknownWork { id: unknown.0 });
        }

        prompt.begin(&name);
        let mut candidate = contact.into();
        let contact = loop {
            match self.available_contact(&candidate) {
                Ok(contact) => break contact,
                Err(reason) => match prompt.correct(&name, &candidate, &reason) {
                    Some(next) => candidate = next,
                    None => return Err(reason),
                },
            }
        };

        tracing::debug!(reader = %name, contact = %contact, "reader registered");
        self.readers
            .insert(contact.clone(), Reader::new(name, contact.clone()));
        for work in initial_works {
            self.link_reading(*work, contact.as_str(), RatingInput::Absent)?;
        }

        self.readers
            .get(contact.as_str())
            .ok_or_else(|| CatalogError::UnknownReader {
                contact: contact.to_string(),
            })
    }

    fn available_contact(&self, candidate: &str) -> CatalogResult<ContactId> {
        if self.readers.contains_key(candidate) {
            tracing::warn!(contact = candidate, "reader with this contact already exists");
            return Err(CatalogError::DuplicateContact {
                value: candidate.to_string(),
            });
        }
        ContactId::parse(candidate)
    }

    /// Change a registered reader's contact, keeping the registry key and the
    /// reader's position in step.
    pub fn change_contact(&mut self, current: &str, new: &str) -> CatalogResult<&Reader> {
        let index = self
            .readers
            .get_index_of(current)
            .ok_or_else(|| CatalogError::UnknownReader {
                contact: current.to_string(),
            })?;
        if current != new && self.readers.contains_key(new) {
            return Err(CatalogError::DuplicateContact {
                value: new.to_string(),
            });
        }

        let (_, mut reader) = self
            .readers
            .shift_remove_index(index)
            .ok_or_else(|| CatalogError::UnknownReader {
                contact: current.to_string(),
            })?;
        if let Err(err) = reader.change_contact(new) {
            self.readers
                .shift_insert(index, reader.contact().clone(), reader);
            return Err(err);
        }
        let key = reader.contact().clone();
        self.readers.shift_insert(index, key, reader);

        self.readers
            .get_index(index)
            .map(|(_, reader)| reader)
            .ok_or_else(|| CatalogError::UnknownReader {
                contact: new.to_string(),
            })
    }

    // --- Lookups ---

    pub fn work(&self, id: WorkId) -> Option<&Work> {
        self.works.get(id.0)
    }

    /// Mutable access to a work, e.g. to change its catalog id
    pub fn work_mut(&mut self, id: WorkId) -> Option<&mut Work> {
        self.works.get_mut(id.0)
    }

    /// Find a created work by catalog id
    pub fn find_work(&self, catalog_id: &str) -> Option<WorkId> {
        self.works
            .iter()
            .position(|w| w.catalog_id() == catalog_id)
            .map(WorkId)
    }

    pub fn reader(&self, contact: &str) -> Option<&Reader> {
        self.readers.get(contact)
    }

    /// Registered readers in registration order
    pub fn readers(&self) -> impl Iterator<Item = &Reader> {
        self.readers.values()
    }

    /// Every work created here, linked or not
    pub fn created_works(&self) -> impl Iterator<Item = (WorkId, &Work)> {
        self.works.iter().enumerate().map(|(i, w)| (WorkId(i), w))
    }

    /// Linked works with their read counts, in first-link order
    pub fn catalog(&self) -> impl Iterator<Item = (WorkId, &Work, u32)> {
        self.reads
            .iter()
            .map(|(id, reads)| (*id, &self.works[id.0], *reads))
    }

    /// Times a work has been linked, 0 if never
    pub fn read_count(&self, id: WorkId) -> u32 {
        if id.0 >= self.works.len() {
            return 0;
        }
        self.reads.get(&self.read_entry_for(id)).copied().unwrap_or(0)
    }

    pub fn is_registered(&self, id: WorkId) -> bool {
        id.0 < self.works.len() && self.reads.contains_key(&self.read_entry_for(id))
    }

    // --- Rankings ---

    /// The work linked most often
    pub fn most_read(&self) -> CatalogResult<&Work> {
        first(self.n_most_read(1)?, "works")
    }

    /// The `n` works linked most often, best first
    pub fn n_most_read(&self, n: i64) -> CatalogResult<Vec<&Work>> {
        self.ensure_any_works()?;
        let ids = top_n(self.reads.iter().map(|(id, reads)| (*id, *reads)), n)?;
        Ok(ids.into_iter().map(|id| &self.works[id.0]).collect())
    }

    /// The linked work with the best average rating
    pub fn highest_rated(&self) -> CatalogResult<&Work> {
        self.ensure_any_works()?;
        top_one(
            self.reads
                .keys()
                .map(|id| (*id, self.works[id.0].average_rating())),
        )
        .map(|id| &self.works[id.0])
        .ok_or(CatalogError::NothingToRank { what: "works" })
    }

    /// The reader with the best average rating
    pub fn most_positive_reader(&self) -> CatalogResult<&Reader> {
        self.ensure_any_readers()?;
        top_one(self.readers.values().map(|r| (r, r.average_rating())))
            .ok_or(CatalogError::NothingToRank { what: "readers" })
    }

    /// The `n` readers with the most recorded works, best first
    pub fn n_most_prolific(&self, n: i64) -> CatalogResult<Vec<&Reader>> {
        self.ensure_any_readers()?;
        top_n(self.readers.values().map(|r| (r, r.works_read())), n)
    }

    fn ensure_any_works(&self) -> CatalogResult<()> {
        if self.reads.is_empty() {
            tracing::warn!("no works in catalog");
            return Err(CatalogError::NothingToRank { what: "works" });
        }
        Ok(())
    }

    fn ensure_any_readers(&self) -> CatalogResult<()> {
        if self.readers.is_empty() {
            tracing::warn!("no readers in catalog");
            return Err(CatalogError::NothingToRank { what: "readers" });
        }
        Ok(())
    }
}

fn first<T>(ranked: Vec<T>, what: &'static str) -> CatalogResult<T> {
    ranked
        .into_iter()
        .next()
        .ok_or(CatalogError::NothingToRank { what })
}
