//! Background noise buckets inferred from free-text venue descriptions.
//!
//! Upstream records describe noise with arbitrary prose such as
//! `"Lower than average"` or `"Pretty noisy at lunch"`. [`NoiseBucket::classify`]
//! reduces that text to one of four buckets using ordered substring checks on
//! the lower-cased input. Every consumer (scorer, rankers, filters, metrics)
//! goes through this one classifier.
//!
//! # Examples
//! ```
//! use workspot_core::NoiseBucket;
//!
//! assert_eq!(NoiseBucket::classify("Lower than average"), NoiseBucket::Quiet);
//! assert_eq!(NoiseBucket::Moderate.to_string(), "moderate");
//! ```

/// Coarse noise level of a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NoiseBucket {
    /// Quieter than average.
    Quiet,
    /// Around the average level.
    Moderate,
    /// Louder than average.
    Noisy,
    /// No usable noise information.
    #[default]
    Unknown,
}

impl NoiseBucket {
    /// Classify free-text noise descriptions.
    ///
    /// Checks run in order against the lower-cased text: `quiet`/`low`,
    /// then `moderate`/`average`, then `noisy`/`high`. Anything else is
    /// [`NoiseBucket::Unknown`].
    ///
    /// # Examples
    /// ```
    /// use workspot_core::NoiseBucket;
    ///
    /// assert_eq!(NoiseBucket::classify("QUIET"), NoiseBucket::Quiet);
    /// assert_eq!(NoiseBucket::classify("average level"), NoiseBucket::Moderate);
    /// assert_eq!(NoiseBucket::classify("High"), NoiseBucket::Noisy);
    /// assert_eq!(NoiseBucket::classify("library-like"), NoiseBucket::Unknown);
    /// ```
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let has = |needle: &str| lowered.contains(needle);
        if has("quiet") || has("low") {
            Self::Quiet
        } else if has("moderate") || has("average") {
            Self::Moderate
        } else if has("noisy") || has("high") {
            Self::Noisy
        } else {
            Self::Unknown
        }
    }

    /// Ranking weight used when ordering focus-friendly places.
    ///
    /// Quiet scores 3, moderate 2, noisy 1 and unknown 0.
    #[must_use]
    pub const fn quality(self) -> u8 {
        match self {
            Self::Quiet => 3,
            Self::Moderate => 2,
            Self::Noisy => 1,
            Self::Unknown => 0,
        }
    }

    /// Report whether the bucket carries a reading.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Return the bucket as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Moderate => "moderate",
            Self::Noisy => "noisy",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NoiseBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NoiseBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "moderate" => Ok(Self::Moderate),
            "noisy" => Ok(Self::Noisy),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("unknown noise bucket '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("quiet", NoiseBucket::Quiet)]
    #[case("Low", NoiseBucket::Quiet)]
    #[case("Lower than average", NoiseBucket::Quiet)]
    #[case("moderate", NoiseBucket::Moderate)]
    #[case("Average level", NoiseBucket::Moderate)]
    #[case("noisy", NoiseBucket::Noisy)]
    #[case("Higher than average", NoiseBucket::Moderate)]
    #[case("HIGH", NoiseBucket::Noisy)]
    #[case("", NoiseBucket::Unknown)]
    #[case("buzzing", NoiseBucket::Unknown)]
    fn classify_uses_ordered_substrings(#[case] text: &str, #[case] expected: NoiseBucket) {
        assert_eq!(NoiseBucket::classify(text), expected);
    }

    #[rstest]
    fn quality_orders_quietest_first() {
        let qualities: Vec<u8> = [NoiseBucket::Quiet, NoiseBucket::Moderate, NoiseBucket::Noisy]
            .iter()
            .map(|b| b.quality())
            .collect();
        assert_eq!(qualities, vec![3, 2, 1]);
        assert_eq!(NoiseBucket::Unknown.quality(), 0);
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(NoiseBucket::Noisy.to_string(), NoiseBucket::Noisy.as_str());
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = NoiseBucket::from_str("deafening").unwrap_err();
        assert!(err.contains("unknown noise bucket"));
    }
}
