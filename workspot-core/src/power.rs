//! Power outlet availability tokens.
//!
//! The places API reports outlets either as a `rangeN` token or as free text
//! mentioning `good`/`little`. [`PowerTier::classify`] keeps those two
//! families apart so scoring can credit free text while area metrics only
//! credit the `rangeN` tokens.

/// Power outlet availability reported for a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PowerTier {
    /// Absent, empty, or the literal `none`.
    #[default]
    NoOutlets,
    /// `range1`: a few outlets.
    Range1,
    /// `range2`: a good number of outlets.
    Range2,
    /// `range3`: outlets nearly everywhere.
    Range3,
    /// Free text mentioning `good`.
    Plentiful,
    /// Free text mentioning `little`.
    Sparse,
    /// Any other non-empty value.
    Unknown,
}

impl PowerTier {
    /// Classify an optional raw power token.
    ///
    /// # Examples
    /// ```
    /// use workspot_core::PowerTier;
    ///
    /// assert_eq!(PowerTier::classify(None), PowerTier::NoOutlets);
    /// assert_eq!(PowerTier::classify(Some("none")), PowerTier::NoOutlets);
    /// assert_eq!(PowerTier::classify(Some("range3")), PowerTier::Range3);
    /// assert_eq!(PowerTier::classify(Some("good coverage")), PowerTier::Plentiful);
    /// assert_eq!(PowerTier::classify(Some("sockets?")), PowerTier::Unknown);
    /// ```
    #[must_use]
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(token) = raw else {
            return Self::NoOutlets;
        };
        if token.is_empty() || token == "none" {
            Self::NoOutlets
        } else if token.contains("range3") {
            Self::Range3
        } else if token.contains("good") {
            Self::Plentiful
        } else if token.contains("range2") {
            Self::Range2
        } else if token.contains("range1") {
            Self::Range1
        } else if token.contains("little") {
            Self::Sparse
        } else {
            Self::Unknown
        }
    }

    /// Return the canonical token for the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoOutlets => "none",
            Self::Range1 => "range1",
            Self::Range2 => "range2",
            Self::Range3 => "range3",
            Self::Plentiful => "good",
            Self::Sparse => "little",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PowerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
