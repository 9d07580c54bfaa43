//! An indexed collection of trails with filter and summary queries.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::{TerrainType, TrailRecord};

/// Errors raised while assembling a [`TrailCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two trails shared an identifier.
    #[error("duplicate trail id '{id}'")]
    DuplicateId {
        /// Repeated identifier.
        id: String,
    },
}

/// Trails keyed by identifier, preserving input order.
///
/// # Examples
///
/// ```
/// use trailwise_core::{TrailCatalog, TrailFilter};
///
/// let catalog = TrailCatalog::new(Vec::new()).expect("empty catalog");
/// assert!(catalog.filtered(&TrailFilter::default()).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrailCatalog {
    trails: Vec<TrailRecord>,
    index: HashMap<String, usize>,
}

impl TrailCatalog {
    /// Build a catalog, rejecting repeated identifiers.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] for the first repeated id.
    pub fn new(trails: Vec<TrailRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(trails.len());
        for (position, trail) in trails.iter().enumerate() {
            if index.insert(trail.id().to_owned(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: trail.id().to_owned(),
                });
            }
        }
        Ok(Self { trails, index })
    }

    /// All trails in input order.
    #[must_use]
    pub fn trails(&self) -> &[TrailRecord] {
        &self.trails
    }

    /// Look up a trail by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TrailRecord> {
        self.index.get(id).and_then(|&i| self.trails.get(i))
    }

    /// Number of trails.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Distinct regions, sorted.
    #[must_use]
    pub fn regions(&self) -> BTreeSet<&str> {
        self.trails.iter().map(TrailRecord::region).collect()
    }

    /// Distinct difficulty grades, sorted.
    #[must_use]
    pub fn difficulty_levels(&self) -> BTreeSet<u8> {
        self.trails.iter().map(TrailRecord::difficulty).collect()
    }

    /// Distinct terrain types, sorted.
    #[must_use]
    pub fn terrain_types(&self) -> BTreeSet<TerrainType> {
        self.trails.iter().map(TrailRecord::terrain).collect()
    }

    /// Shortest and longest trail lengths in kilometres.
    #[must_use]
    pub fn length_range(&self) -> Option<(f64, f64)> {
        let mut lengths = self.trails.iter().map(TrailRecord::length_km);
        let first = lengths.next()?;
        Some(lengths.fold((first, first), |(lo, hi), len| (lo.min(len), hi.max(len))))
    }

    /// Trails accepted by `filter`, in catalog order.
    #[must_use]
    pub fn filtered(&self, filter: &TrailFilter) -> Vec<TrailRecord> {
        self.trails
            .iter()
            .filter(|trail| filter.matches(trail))
            .cloned()
            .collect()
    }
}

impl IntoIterator for TrailCatalog {
    type Item = TrailRecord;
    type IntoIter = std::vec::IntoIter<TrailRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.trails.into_iter()
    }
}

/// Attribute filter over trails. Unset fields accept every trail.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TrailFilter {
    /// Inclusive lower length bound in kilometres.
    pub min_length_km: Option<f64>,
    /// Inclusive upper length bound in kilometres.
    pub max_length_km: Option<f64>,
    /// Exact difficulty grade.
    pub difficulty: Option<u8>,
    /// Exact region key.
    pub region: Option<String>,
    /// Exact terrain.
    pub terrain: Option<TerrainType>,
}

impl TrailFilter {
    /// Report whether `trail` passes every set bound.
    #[must_use]
    pub fn matches(&self, trail: &TrailRecord) -> bool {
        self.min_length_km.is_none_or(|min| trail.length_km() >= min)
            && self.max_length_km.is_none_or(|max| trail.length_km() <= max)
            && self.difficulty.is_none_or(|d| trail.difficulty() == d)
            && self.region.as_deref().is_none_or(|r| trail.region() == r)
            && self.terrain.is_none_or(|t| trail.terrain() == t)
    }
}
