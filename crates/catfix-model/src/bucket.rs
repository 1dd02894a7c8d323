//! Package-size buckets used to select shipping-size identifiers.

use std::fmt;

/// Label of the universal fallback bucket; every configuration must map it.
pub const ALL_SHIPPABLE: &str = "All shippable";

/// Package-size classification of a category.
///
/// Four fixed buckets plus a pass-through variant for free-text bucket names
/// the export may carry; unmapped names fall back to [`ALL_SHIPPABLE`] when
/// shipping identifiers are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PackageSizeBucket {
    #[default]
    AllShippable,
    Heavy,
    LightBulky,
    HeavyBulky,
    /// Unrecognized bucket name, kept verbatim.
    Other(String),
}

impl PackageSizeBucket {
    /// Returns the bucket name used as the mapping-table key.
    pub fn label(&self) -> &str {
        match self {
            PackageSizeBucket::AllShippable => ALL_SHIPPABLE,
            PackageSizeBucket::Heavy => "Heavy",
            PackageSizeBucket::LightBulky => "Light bulky",
            PackageSizeBucket::HeavyBulky => "Heavy bulky",
            PackageSizeBucket::Other(name) => name,
        }
    }

    /// Maps a free-text bucket name to a fixed bucket, passing unrecognized
    /// names through verbatim.
    pub fn from_label(label: &str) -> PackageSizeBucket {
        match label {
            ALL_SHIPPABLE => PackageSizeBucket::AllShippable,
            "Heavy" => PackageSizeBucket::Heavy,
            "Light bulky" => PackageSizeBucket::LightBulky,
            "Heavy bulky" => PackageSizeBucket::HeavyBulky,
            other => PackageSizeBucket::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PackageSizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_labels_round_trip() {
        for bucket in [
            PackageSizeBucket::AllShippable,
            PackageSizeBucket::Heavy,
            PackageSizeBucket::LightBulky,
            PackageSizeBucket::HeavyBulky,
        ] {
            assert_eq!(PackageSizeBucket::from_label(bucket.label()), bucket);
        }
    }

    #[test]
    fn unknown_label_passes_through() {
        let bucket = PackageSizeBucket::from_label("Oversize");
        assert_eq!(bucket, PackageSizeBucket::Other("Oversize".to_string()));
        assert_eq!(bucket.label(), "Oversize");
    }
}
