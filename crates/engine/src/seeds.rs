//! Statically registered seed records.
//!
//! Seeds are authored JSON files compiled into the binary. The catalog is
//! built once on first use and never mutated. Records stay raw until a
//! repository asks for them, so a malformed seed surfaces as a validation
//! error at the point of use.

use std::sync::Arc;

use once_cell::sync::Lazy;
use yonokomae_domain::{parse_battle, Battle, DomainError};

use crate::infrastructure::ports::RandomPort;

const HISTORICAL_SEEDS: &[(&str, &str)] = &[
    (
        "city-merger",
        include_str!("../seeds/historical/city-merger.json"),
    ),
    (
        "railway-stations",
        include_str!("../seeds/historical/railway-stations.json"),
    ),
    (
        "ancient-burial-mounds",
        include_str!("../seeds/historical/ancient-burial-mounds.json"),
    ),
];

const JOKE_SEEDS: &[(&str, &str)] = &[
    (
        "mascot-dance-off",
        include_str!("../seeds/jokes/mascot-dance-off.json"),
    ),
    (
        "smallest-city-contest",
        include_str!("../seeds/jokes/smallest-city-contest.json"),
    ),
    (
        "festival-food",
        include_str!("../seeds/jokes/festival-food.json"),
    ),
];

static BUILTIN: Lazy<Arc<SeedCatalog>> = Lazy::new(|| {
    let mut catalog = SeedCatalog::empty();
    for (name, source) in HISTORICAL_SEEDS {
        catalog = catalog.with_record(SeedCollection::Historical, *name, *source);
    }
    for (name, source) in JOKE_SEEDS {
        catalog = catalog.with_record(SeedCollection::Jokes, *name, *source);
    }
    tracing::debug!(
        historical = catalog.len(SeedCollection::Historical),
        jokes = catalog.len(SeedCollection::Jokes),
        "Seed catalog loaded"
    );
    Arc::new(catalog)
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedCollection {
    Historical,
    Jokes,
}

/// One authored record, kept as raw JSON text.
#[derive(Debug, Clone)]
pub struct SeedRecord {
    name: String,
    source: String,
}

impl SeedRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse and validate the record.
    pub fn load(&self) -> Result<Battle, DomainError> {
        let value: serde_json::Value = serde_json::from_str(&self.source)
            .map_err(|e| DomainError::parse(format!("seed '{}': {}", self.name, e)))?;
        parse_battle(&value).map_err(|e| match e {
            DomainError::Validation(msg) => {
                DomainError::validation(format!("seed '{}': {}", self.name, msg))
            }
            DomainError::Parse(msg) => DomainError::parse(format!("seed '{}': {}", self.name, msg)),
            other => other,
        })
    }
}

/// Read-only collections of seed records.
#[derive(Debug, Default)]
pub struct SeedCatalog {
    historical: Vec<SeedRecord>,
    jokes: Vec<SeedRecord>,
}

impl SeedCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Arc<SeedCatalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a record. Used while building a catalog, never afterwards.
    pub fn with_record(
        mut self,
        collection: SeedCollection,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.collection_mut(collection).push(SeedRecord {
            name: name.into(),
            source: source.into(),
        });
        self
    }

    fn collection_mut(&mut self, collection: SeedCollection) -> &mut Vec<SeedRecord> {
        match collection {
            SeedCollection::Historical => &mut self.historical,
            SeedCollection::Jokes => &mut self.jokes,
        }
    }

    pub fn records(&self, collection: SeedCollection) -> &[SeedRecord] {
        match collection {
            SeedCollection::Historical => &self.historical,
            SeedCollection::Jokes => &self.jokes,
        }
    }

    pub fn len(&self, collection: SeedCollection) -> usize {
        self.records(collection).len()
    }

    pub fn is_empty(&self, collection: SeedCollection) -> bool {
        self.records(collection).is_empty()
    }

    pub fn names(&self, collection: SeedCollection) -> Vec<&str> {
        self.records(collection).iter().map(SeedRecord::name).collect()
    }

    pub fn find(&self, collection: SeedCollection, name: &str) -> Option<&SeedRecord> {
        self.records(collection).iter().find(|r| r.name == name)
    }

    /// Uniformly pick one record, or `None` if the collection is empty.
    pub fn pick(&self, collection: SeedCollection, random: &dyn RandomPort) -> Option<&SeedRecord> {
        let records = self.records(collection);
        if records.is_empty() {
            return None;
        }
        let last = records.len() as i64 - 1;
        let index = random.gen_range(0, last).clamp(0, last) as usize;
        records.get(index)
    }
}
