//! Terrain types describing the dominant surface of a trail.
//!
//! The enum keeps terrain lookups exhaustive, so pace tables and filters can
//! match on every variant.
//!
//! # Examples
//! ```
//! use trailwise_core::TerrainType;
//!
//! assert_eq!(TerrainType::Mountain.as_str(), "mountain");
//! assert_eq!(TerrainType::Lakeside.to_string(), "lakeside");
//! ```

/// Dominant terrain of a trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TerrainType {
    /// High ground with sustained climbs.
    Mountain,
    /// Shorelines and lake circuits.
    Lakeside,
    /// Woodland paths.
    Forest,
    /// Paved city and town walks.
    Urban,
    /// Trails that cross several terrain types.
    Mixed,
}

impl TerrainType {
    /// Every terrain type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Mountain,
        Self::Lakeside,
        Self::Forest,
        Self::Urban,
        Self::Mixed,
    ];

    /// Return the terrain as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use trailwise_core::TerrainType;
    ///
    /// assert_eq!(TerrainType::Forest.as_str(), "forest");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mountain => "mountain",
            Self::Lakeside => "lakeside",
            Self::Forest => "forest",
            Self::Urban => "urban",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for TerrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TerrainType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mountain" => Ok(Self::Mountain),
            "lakeside" => Ok(Self::Lakeside),
            "forest" => Ok(Self::Forest),
            "urban" => Ok(Self::Urban),
            "mixed" => Ok(Self::Mixed),
            _ => Err(format!("unknown terrain type '{s}'")),
        }
    }
}
