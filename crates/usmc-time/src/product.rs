//! `ProductCategory` — which market's closure rules apply.

use usmc_core::errors::Error;

/// Product category whose trading calendar is being queried.
///
/// The two categories differ only on Sundays: equities are closed every
/// Sunday, futures only on Sundays that are themselves holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProductCategory {
    /// Cash equities.
    #[default]
    Equities,
    /// Exchange-traded futures.
    Futures,
}

impl ProductCategory {
    /// Return `true` if every Sunday is closed for this category.
    pub fn closed_on_sundays(&self) -> bool {
        matches!(self, ProductCategory::Equities)
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProductCategory::Equities => "Equities",
            ProductCategory::Futures => "Futures",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equities" => Ok(ProductCategory::Equities),
            "futures" => Ok(ProductCategory::Futures),
            _ => Err(Error::InvalidArgument(format!(
                "unknown product category '{s}'"
            ))),
        }
    }
}
