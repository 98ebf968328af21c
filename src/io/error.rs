use super::Format;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("could not open dataset '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: shapefile::Error,
    },

    #[error("failed to read shapefile feature: {source}")]
    Read {
        #[from]
        source: shapefile::Error,
    },

    #[error("feature #{feature}: attribute table has no '{field}' column")]
    MissingField { feature: usize, field: String },

    #[error("feature #{feature}: column '{field}' is null")]
    MissingValue { feature: usize, field: String },

    #[error("feature #{feature}: column '{field}' should hold {expected}, found {found}")]
    FieldType {
        feature: usize,
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("feature #{feature}: unrecognized magnitude-frequency distribution type '{mfd_type}'")]
    UnrecognizedMfd { feature: usize, mfd_type: String },

    #[error("feature #{feature}: invalid area geometry: {details}")]
    Geometry { feature: usize, details: String },

    #[error("feature #{feature}: invalid distribution: {details}")]
    Distribution { feature: usize, details: String },

    #[error("source '{source_id}' has magnitude-frequency distribution '{mfd_type}' which cannot be written")]
    UnsupportedMfd { source_id: String, mfd_type: String },

    #[error("the '{0}' format is not supported for this write operation")]
    UnsupportedWriteFormat(Format),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn geometry(feature: usize, details: impl Into<String>) -> Self {
        Self::Geometry {
            feature,
            details: details.into(),
        }
    }

    pub fn distribution(feature: usize, details: impl Into<String>) -> Self {
        Self::Distribution {
            feature,
            details: details.into(),
        }
    }

    /// Index of the offending feature for errors raised while mapping one.
    pub fn feature(&self) -> Option<usize> {
        match self {
            Self::MissingField { feature, .. }
            | Self::MissingValue { feature, .. }
            | Self::FieldType { feature, .. }
            | Self::UnrecognizedMfd { feature, .. }
            | Self::Geometry { feature, .. }
            | Self::Distribution { feature, .. } => Some(*feature),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_column_and_feature() {
        let err = Error::MissingField {
            feature: 3,
            field: "hdd_w_2".into(),
        };
        assert_eq!(
            err.to_string(),
            "feature #3: attribute table has no 'hdd_w_2' column"
        );
        assert_eq!(err.feature(), Some(3));
    }

    #[test]
    fn open_error_mentions_path() {
        let err = Error::Open {
            path: PathBuf::from("/nowhere/sources.shp"),
            source: shapefile::Error::IoError(std::io::Error::from(
                std::io::ErrorKind::NotFound,
            )),
        };
        assert!(err.to_string().contains("/nowhere/sources.shp"));
        assert_eq!(err.feature(), None);
    }

    #[test]
    fn write_format_error_displays_format() {
        let err = Error::UnsupportedWriteFormat(Format::Shapefile);
        assert_eq!(
            err.to_string(),
            "the 'Shapefile' format is not supported for this write operation"
        );
    }
}
