//! Trail records: the static attributes of a hiking route.

use std::collections::BTreeSet;

use geo::Coord;

use crate::{InvalidRecord, TerrainType};

/// Lowest difficulty grade.
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest difficulty grade.
pub const MAX_DIFFICULTY: u8 = 5;

/// Unvalidated trail attributes, as produced by a loader.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailDraft {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Region key shared with weather records.
    pub region: String,
    /// Trailhead position.
    pub start: Coord<f64>,
    /// Trail end position.
    pub end: Coord<f64>,
    /// Length in kilometres.
    pub length_km: f64,
    /// Total ascent in metres.
    pub elevation_gain_m: f64,
    /// Difficulty grade in `1..=5`.
    pub difficulty: u8,
    /// Dominant terrain.
    pub terrain: TerrainType,
    /// Free-form tags such as `"lake"` or `"viewpoint"`.
    pub tags: BTreeSet<String>,
}

/// A validated, immutable trail.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use geo::Coord;
/// use trailwise_core::{TerrainType, TrailDraft, TrailRecord};
///
/// # fn main() -> Result<(), trailwise_core::InvalidRecord> {
/// let trail = TrailRecord::new(TrailDraft {
///     id: "T1".into(),
///     name: "Morskie Oko".into(),
///     region: "TATRY".into(),
///     start: Coord { x: 20.07, y: 49.20 },
///     end: Coord { x: 20.08, y: 49.19 },
///     length_km: 7.8,
///     elevation_gain_m: 400.0,
///     difficulty: 2,
///     terrain: TerrainType::Mountain,
///     tags: BTreeSet::from(["lake".to_owned()]),
/// })?;
/// assert_eq!(trail.id(), "T1");
/// assert!(trail.has_tag("Lake"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrailRecord {
    id: String,
    name: String,
    region: String,
    start: Coord<f64>,
    end: Coord<f64>,
    length_km: f64,
    elevation_gain_m: f64,
    difficulty: u8,
    terrain: TerrainType,
    tags: BTreeSet<String>,
}

impl TrailRecord {
    /// Validate a draft and construct a [`TrailRecord`].
    ///
    /// # Errors
    /// Returns [`InvalidRecord`] when the identifier or region is blank, the
    /// length is not positive, the elevation gain is negative, the difficulty
    /// falls outside `1..=5` or a coordinate is outside WGS84 bounds.
    pub fn new(draft: TrailDraft) -> Result<Self, InvalidRecord> {
        let TrailDraft {
            id,
            name,
            region,
            start,
            end,
            length_km,
            elevation_gain_m,
            difficulty,
            terrain,
            tags,
        } = draft;

        if id.trim().is_empty() {
            return Err(InvalidRecord::EmptyIdentifier);
        }
        if region.trim().is_empty() {
            return Err(InvalidRecord::EmptyRegion { id });
        }
        if !length_km.is_finite() || length_km <= 0.0 {
            return Err(InvalidRecord::NonPositiveLength { id, length_km });
        }
        if !elevation_gain_m.is_finite() || elevation_gain_m < 0.0 {
            return Err(InvalidRecord::InvalidElevationGain {
                id,
                elevation_gain_m,
            });
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(InvalidRecord::DifficultyOutOfRange { id, difficulty });
        }
        for coord in [start, end] {
            if !is_wgs84(coord) {
                return Err(InvalidRecord::CoordinateOutOfRange {
                    id,
                    lat: coord.y,
                    lon: coord.x,
                });
            }
        }

        Ok(Self {
            id,
            name,
            region,
            start,
            end,
            length_km,
            elevation_gain_m,
            difficulty,
            terrain,
            tags,
        })
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region key used to look up weather history.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Trailhead position.
    #[must_use]
    pub const fn start(&self) -> Coord<f64> {
        self.start
    }

    /// Trail end position.
    #[must_use]
    pub const fn end(&self) -> Coord<f64> {
        self.end
    }

    /// Length in kilometres; always positive.
    #[must_use]
    pub const fn length_km(&self) -> f64 {
        self.length_km
    }

    /// Total ascent in metres; never negative.
    #[must_use]
    pub const fn elevation_gain_m(&self) -> f64 {
        self.elevation_gain_m
    }

    /// Difficulty grade in `1..=5`.
    #[must_use]
    pub const fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Dominant terrain.
    #[must_use]
    pub const fn terrain(&self) -> TerrainType {
        self.terrain
    }

    /// Tags attached to the trail.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Report whether the trail carries `tag`, ignoring ASCII case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl TryFrom<TrailDraft> for TrailRecord {
    type Error = InvalidRecord;

    fn try_from(draft: TrailDraft) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}

fn is_wgs84(coord: Coord<f64>) -> bool {
    (-90.0..=90.0).contains(&coord.y) && (-180.0..=180.0).contains(&coord.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn draft() -> TrailDraft {
        TrailDraft {
            id: "T1".into(),
            name: "Dolina".into(),
            region: "TATRY".into(),
            start: Coord { x: 19.9, y: 49.2 },
            end: Coord { x: 19.95, y: 49.25 },
            length_km: 7.8,
            elevation_gain_m: 350.0,
            difficulty: 2,
            terrain: TerrainType::Mountain,
            tags: BTreeSet::from(["Waterfalls".to_owned()]),
        }
    }

    #[rstest]
    fn accepts_valid_draft(draft: TrailDraft) {
        let trail = TrailRecord::new(draft).expect("valid trail");
        assert_eq!(trail.region(), "TATRY");
        assert_eq!(trail.difficulty(), 2);
        assert!(trail.has_tag("waterfalls"));
        assert!(!trail.has_tag("lake"));
    }

    #[rstest]
    fn rejects_blank_identifier(mut draft: TrailDraft) {
        draft.id = "  ".into();
        assert_eq!(TrailRecord::new(draft), Err(InvalidRecord::EmptyIdentifier));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.5)]
    #[case(f64::NAN)]
    fn rejects_non_positive_length(mut draft: TrailDraft, #[case] length_km: f64) {
        draft.length_km = length_km;
        let err = TrailRecord::new(draft).expect_err("length must be positive");
        assert!(matches!(err, InvalidRecord::NonPositiveLength { .. }));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn rejects_difficulty_outside_scale(mut draft: TrailDraft, #[case] difficulty: u8) {
        draft.difficulty = difficulty;
        let err = TrailRecord::new(draft).expect_err("difficulty must be 1..=5");
        assert!(matches!(err, InvalidRecord::DifficultyOutOfRange { .. }));
    }

    #[rstest]
    fn rejects_negative_elevation(mut draft: TrailDraft) {
        draft.elevation_gain_m = -10.0;
        let err = TrailRecord::new(draft).expect_err("gain must be non-negative");
        assert!(matches!(err, InvalidRecord::InvalidElevationGain { .. }));
    }

    #[rstest]
    fn rejects_coordinates_outside_wgs84(mut draft: TrailDraft) {
        draft.end = Coord { x: 200.0, y: 49.0 };
        let err = TrailRecord::new(draft).expect_err("longitude out of range");
        assert!(matches!(err, InvalidRecord::CoordinateOutOfRange { .. }));
    }

    #[rstest]
    fn accepts_zero_elevation(mut draft: TrailDraft) {
        draft.elevation_gain_m = 0.0;
        assert!(TrailRecord::try_from(draft).is_ok());
    }
}
