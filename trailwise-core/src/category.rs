//! Trail categories assigned by the categorizer.
//!
//! Variants are declared in ascending priority, so `Ord` reflects the
//! tie-breaking order `Extreme > Sporty > Scenic > Family`.
//!
//! # Examples
//! ```
//! use trailwise_core::TrailCategory;
//!
//! assert!(TrailCategory::Extreme > TrailCategory::Sporty);
//! assert_eq!(TrailCategory::Family.to_string(), "family");
//! ```

/// Broad classification of a trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TrailCategory {
    /// Short or easy trails suitable for everyone.
    Family,
    /// Trails passing notable views or landmarks.
    Scenic,
    /// Demanding or long trails.
    Sporty,
    /// Hard trails with large elevation gain.
    Extreme,
}

impl TrailCategory {
    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Scenic => "scenic",
            Self::Sporty => "sporty",
            Self::Extreme => "extreme",
        }
    }
}

impl std::fmt::Display for TrailCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TrailCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "family" => Ok(Self::Family),
            "scenic" => Ok(Self::Scenic),
            "sporty" => Ok(Self::Sporty),
            "extreme" => Ok(Self::Extreme),
            _ => Err(format!("unknown trail category '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn priority_order_matches_declaration() {
        let mut categories = vec![
            TrailCategory::Sporty,
            TrailCategory::Family,
            TrailCategory::Extreme,
            TrailCategory::Scenic,
        ];
        categories.sort();
        assert_eq!(
            categories,
            vec![
                TrailCategory::Family,
                TrailCategory::Scenic,
                TrailCategory::Sporty,
                TrailCategory::Extreme,
            ]
        );
    }

    #[test]
    fn parsing_round_trips_display() {
        let parsed = TrailCategory::from_str(&TrailCategory::Scenic.to_string());
        assert_eq!(parsed, Ok(TrailCategory::Scenic));
    }
}
