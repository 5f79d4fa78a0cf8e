//! Static risk-class catalog.
//!
//! One process-wide table mapping (scheme, class) to label, numeric rank,
//! and severity color. Consumers look classes up here instead of scattering
//! string comparisons through call sites.

use crate::risk_class::RiskClass;
use crate::scheme::Scheme;

/// Catalog row for one ordinal class (or the missing sentinel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassEntry {
    /// Numeric rank; 0 is reserved for the missing sentinel.
    pub rank: u8,
    /// Human-readable label.
    pub label: &'static str,
    /// Severity color as a CSS hex string.
    pub color: &'static str,
}

/// Catalog row for the missing sentinel, shared by both schemes.
pub const MISSING_ENTRY: ClassEntry = ClassEntry {
    rank: 0,
    label: "Missing Data",
    color: "#808080",
};

const THREE_LEVEL: [ClassEntry; 3] = [
    ClassEntry {
        rank: 1,
        label: "Low",
        color: "#28a745",
    },
    ClassEntry {
        rank: 2,
        label: "Medium",
        color: "#ffc107",
    },
    ClassEntry {
        rank: 3,
        label: "High",
        color: "#dc3545",
    },
];

const FIVE_LEVEL: [ClassEntry; 5] = [
    ClassEntry {
        rank: 1,
        label: "Very Low",
        color: "#00FF00",
    },
    ClassEntry {
        rank: 2,
        label: "Low",
        color: "#90EE90",
    },
    ClassEntry {
        rank: 3,
        label: "Moderate",
        color: "#FFD700",
    },
    ClassEntry {
        rank: 4,
        label: "High",
        color: "#FFA500",
    },
    ClassEntry {
        rank: 5,
        label: "Very High",
        color: "#FF0000",
    },
];

/// The ordinal entries of a scheme, ascending by rank (missing excluded).
pub fn catalog_entries(scheme: Scheme) -> &'static [ClassEntry] {
    match scheme {
        Scheme::ThreeLevel => &THREE_LEVEL,
        Scheme::FiveLevel => &FIVE_LEVEL,
    }
}

/// Looks up the catalog row for a class under a scheme.
///
/// # Panics
///
/// Panics if `class` is an ordinal level outside the scheme's range; such a
/// class cannot come out of [`classify`](crate::classify) and indicates a
/// caller bug.
pub fn catalog_entry(scheme: Scheme, class: RiskClass) -> &'static ClassEntry {
    match class {
        RiskClass::Missing => &MISSING_ENTRY,
        RiskClass::Level(level) => {
            let entries = catalog_entries(scheme);
            assert!(
                level >= 1 && level as usize <= entries.len(),
                "level {level} out of range for {scheme:?}"
            );
            &entries[level as usize - 1]
        }
    }
}
