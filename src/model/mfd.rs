use serde::{Deserialize, Serialize};
use std::fmt;

/// `mfd_type` value that selects the truncated Gutenberg-Richter variant.
pub const TRUNC_GR_MFD: &str = "truncGutenbergRichterMFD";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruncatedGutenbergRichter {
    pub a_value: f64,
    pub b_value: f64,
    pub min_mag: f64,
    pub max_mag: f64,
}

impl TruncatedGutenbergRichter {
    pub fn new(a_value: f64, b_value: f64, min_mag: f64, max_mag: f64) -> Self {
        Self {
            a_value,
            b_value,
            min_mag,
            max_mag,
        }
    }
}

/// Magnitude-frequency distribution of a source.
///
/// Attribute tables may name an MFD type this crate does not model. Such
/// sources keep the raw type name in [`Mfd::Unspecified`] instead of dropping
/// the field, so callers can decide whether to skip or reject them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mfd {
    TruncatedGutenbergRichter(TruncatedGutenbergRichter),
    Unspecified { mfd_type: String },
}

impl Mfd {
    /// Name of the distribution as it appears in the `mfd_type` column.
    pub fn type_name(&self) -> &str {
        match self {
            Mfd::TruncatedGutenbergRichter(_) => TRUNC_GR_MFD,
            Mfd::Unspecified { mfd_type } => mfd_type,
        }
    }

    pub fn as_truncated_gr(&self) -> Option<&TruncatedGutenbergRichter> {
        match self {
            Mfd::TruncatedGutenbergRichter(mfd) => Some(mfd),
            Mfd::Unspecified { .. } => None,
        }
    }

    #[inline]
    pub fn is_specified(&self) -> bool {
        !matches!(self, Mfd::Unspecified { .. })
    }
}

impl From<TruncatedGutenbergRichter> for Mfd {
    fn from(mfd: TruncatedGutenbergRichter) -> Self {
        Mfd::TruncatedGutenbergRichter(mfd)
    }
}

impl fmt::Display for Mfd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mfd::TruncatedGutenbergRichter(m) => write!(
                f,
                "truncated GR (a={}, b={}, M{}-{})",
                m.a_value, m.b_value, m.min_mag, m.max_mag
            ),
            Mfd::Unspecified { mfd_type } if mfd_type.is_empty() => write!(f, "unspecified"),
            Mfd::Unspecified { mfd_type } => write!(f, "unspecified ('{}')", mfd_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_gr_type_name_matches_column_value() {
        let mfd = Mfd::from(TruncatedGutenbergRichter::new(3.001, 1.001, 5.0, 7.0));
        assert_eq!(mfd.type_name(), "truncGutenbergRichterMFD");
        assert!(mfd.is_specified());
        assert_eq!(mfd.as_truncated_gr().unwrap().a_value, 3.001);
    }

    #[test]
    fn unspecified_keeps_raw_type() {
        let mfd = Mfd::Unspecified {
            mfd_type: "incrementalMFD".into(),
        };
        assert_eq!(mfd.type_name(), "incrementalMFD");
        assert!(!mfd.is_specified());
        assert!(mfd.as_truncated_gr().is_none());
        assert_eq!(mfd.to_string(), "unspecified ('incrementalMFD')");
    }

    #[test]
    fn display_truncated_gr() {
        let mfd = Mfd::from(TruncatedGutenbergRichter::new(3.5, 1.0, 5.0, 7.5));
        assert_eq!(mfd.to_string(), "truncated GR (a=3.5, b=1, M5-7.5)");
    }

    #[test]
    fn serde_uses_type_tag() {
        let mfd = Mfd::from(TruncatedGutenbergRichter::new(3.0, 1.0, 5.0, 7.0));
        let json = serde_json::to_value(&mfd).unwrap();
        assert_eq!(json["type"], "truncated_gutenberg_richter");
        assert_eq!(json["b_value"], 1.0);

        let back: Mfd = serde_json::from_value(json).unwrap();
        assert_eq!(back, mfd);
    }
}
