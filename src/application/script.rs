//! Script Use Case
//!
//! A catalog script declares works, readers, and readings. Applying it runs
//! the matching registry operations in that order. Entries the registry
//! refuses become warnings; the rest of the script still applies.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Registry, WorkId};
use crate::domain::ports::ContactPrompt;
use crate::domain::value_objects::RatingInput;
use crate::error::CatalogResult;

/// Catalog id as written in a script: text or a bare number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogRef {
    Text(String),
    Number(i64),
}

impl fmt::Display for CatalogRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogRef::Text(text) => f.write_str(text),
            CatalogRef::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CatalogRef {
    fn from(value: &str) -> Self {
        CatalogRef::Text(value.to_string())
    }
}

/// A work to create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub title: String,
    pub catalog_id: CatalogRef,
    /// Makes the work narrative
    #[serde(default)]
    pub author: Option<String>,
    /// With `level`, makes the work a reference work
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

/// A reader to register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderEntry {
    pub name: String,
    pub contact: String,
    /// Catalog ids linked on registration, unrated
    #[serde(default)]
    pub works: Vec<CatalogRef>,
}

/// A reading to link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingEntry {
    pub catalog_id: CatalogRef,
    pub contact: String,
    #[serde(default)]
    pub rating: RatingInput,
}

/// Declarative input for a registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogScript {
    #[serde(default)]
    pub works: Vec<WorkEntry>,
    #[serde(default)]
    pub readers: Vec<ReaderEntry>,
    #[serde(default)]
    pub readings: Vec<ReadingEntry>,
}

/// Script section a warning came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Works,
    Readers,
    Readings,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Works => write!(f, "works"),
            Section::Readers => write!(f, "readers"),
            Section::Readings => write!(f, "readings"),
        }
    }
}

/// An entry that could not be applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptWarning {
    pub section: Section,
    /// Zero-based position within the section
    pub index: usize,
    pub message: String,
}

impl fmt::Display for ScriptWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.section, self.index, self.message)
    }
}

/// Result of applying a script
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScriptSummary {
    pub works_created: usize,
    pub readers_registered: usize,
    pub readings_linked: usize,
    /// Ratings a work refused as out of range (the reading still counted)
    pub ratings_rejected: usize,
    pub warnings: Vec<ScriptWarning>,
}

impl ScriptSummary {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    fn warn(&mut self, section: Section, index: usize, message: impl Into<String>) {
        let warning = ScriptWarning {
            section,
            index,
            message: message.into(),
        };
        tracing::warn!(%warning, "script entry skipped");
        self.warnings.push(warning);
    }
}

/// Applies catalog scripts to a registry
pub struct ScriptUseCase<'a> {
    registry: &'a mut Registry,
    prompt: &'a mut dyn ContactPrompt,
    /// Contacts as written in the script -> contacts actually registered
    aliases: HashMap<String, String>,
}

impl<'a> ScriptUseCase<'a> {
    pub fn new(registry: &'a mut Registry, prompt: &'a mut dyn ContactPrompt) -> Self {
        Self {
            registry,
            prompt,
            aliases: HashMap::new(),
        }
    }

    pub fn apply(&mut self, script: &CatalogScript) -> ScriptSummary {
        let mut summary = ScriptSummary::default();

        for (index, entry) in script.works.iter().enumerate() {
            match self.create_work(entry) {
                Ok(_) => summary.works_created += 1,
                Err(message) => summary.warn(Section::Works, index, message),
            }
        }

        for (index, entry) in script.readers.iter().enumerate() {
            let mut initial = Vec::with_capacity(entry.works.len());
            for catalog_id in &entry.works {
                match self.registry.find_work(&catalog_id.to_string()) {
                    Some(id) => initial.push(id),
                    None => summary.warn(
                        Section::Readers,
                        index,
                        format!("unknown catalog id '{}' not linked", catalog_id),
                    ),
                }
            }

            match self.registry.register_reader_with(
                entry.name.as_str(),
                entry.contact.as_str(),
                &initial,
                &mut *self.prompt,
            ) {
                Ok(reader) => {
                    let accepted = reader.contact().to_string();
                    summary.readers_registered += 1;
                    summary.readings_linked += initial.len();
                    if accepted != entry.contact {
                        self.aliases.insert(entry.contact.clone(), accepted);
                    }
                }
                Err(err) => summary.warn(Section::Readers, index, err.to_string()),
            }
        }

        for (index, entry) in script.readings.iter().enumerate() {
            let Some(work) = self.registry.find_work(&entry.catalog_id.to_string()) else {
                summary.warn(
                    Section::Readings,
                    index,
                    format!("unknown catalog id '{}'", entry.catalog_id),
                );
                continue;
            };
            let contact = self
                .aliases
                .get(&entry.contact)
                .unwrap_or(&entry.contact)
                .clone();

            match self
                .registry
                .link_reading(work, &contact, entry.rating.clone())
            {
                Ok(linked) => {
                    summary.readings_linked += 1;
                    if let Some(value) = linked.rejected_rating {
                        summary.ratings_rejected += 1;
                        tracing::debug!(rating = value, contact = %contact, "rating refused by work");
                    }
                }
                Err(err) => summary.warn(Section::Readings, index, err.to_string()),
            }
        }

        summary
    }

    fn create_work(&mut self, entry: &WorkEntry) -> Result<WorkId, String> {
        let catalog_id = entry.catalog_id.to_string();
        let created: CatalogResult<WorkId> = match (&entry.author, &entry.subject, &entry.level) {
            (None, None, None) => self.registry.create_work(entry.title.as_str(), catalog_id),
            (Some(author), None, None) => {
                self.registry
                    .create_narrative_work(entry.title.as_str(), author.as_str(), catalog_id)
            }
            (None, Some(subject), Some(level)) => self.registry.create_reference_work(
                entry.title.as_str(),
                subject.as_str(),
                level.as_str(),
                catalog_id,
            ),
            _ => {
                return Err(format!(
                    "'{}' needs either an author, or both a subject and a level",
                    entry.title
                ))
            }
        };
        created.map_err(|err| err.to_string())
    }
}
