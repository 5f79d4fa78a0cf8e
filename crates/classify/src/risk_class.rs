//! The ordinal risk class.

use serde::{Serialize, Serializer};

/// Outcome of classifying one hazard value.
///
/// `Missing` sits outside the ordinal range: it is the designated "no data"
/// outcome and must never be conflated with the lowest risk level. Levels
/// are 1-based within their scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskClass {
    /// No data: the value was missing, or thresholds were unavailable.
    Missing,
    /// Ordinal class, 1-based (1 = lowest risk of the scheme).
    Level(u8),
}

impl RiskClass {
    /// Numeric rank: 0 for `Missing`, the 1-based level otherwise.
    ///
    /// Rank 0 mirrors the catalog's missing entry; consumers aggregating
    /// ranks must exclude it rather than treat it as "below Low".
    pub fn rank(&self) -> u8 {
        match self {
            RiskClass::Missing => 0,
            RiskClass::Level(level) => *level,
        }
    }

    /// Returns true for the missing sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, RiskClass::Missing)
    }
}

impl Serialize for RiskClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks() {
        assert_eq!(RiskClass::Missing.rank(), 0);
        assert_eq!(RiskClass::Level(1).rank(), 1);
        assert_eq!(RiskClass::Level(5).rank(), 5);
    }

    #[test]
    fn missing_detection() {
        assert!(RiskClass::Missing.is_missing());
        assert!(!RiskClass::Level(1).is_missing());
    }

    #[test]
    fn serializes_as_rank() {
        let json = serde_json::to_string(&RiskClass::Level(3)).expect("serialize");
        assert_eq!(json, "3");
        let json = serde_json::to_string(&RiskClass::Missing).expect("serialize");
        assert_eq!(json, "0");
    }
}
