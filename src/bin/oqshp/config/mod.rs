use std::path::Path;

use oq_shp::ReadConfig;
use oq_shp::io::Format;

use crate::cli::{OutputFormat, ReadOptions};

pub fn build_read_config(opts: &ReadOptions) -> ReadConfig {
    ReadConfig {
        weight_tolerance: opts.weight_tolerance,
        strict_weights: opts.strict_weights,
        reject_unknown_mfd: opts.reject_unknown_mfd,
    }
}

/// Explicit `--name`, else the input file stem.
pub fn model_name(explicit: Option<&str>, input: &Path) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Area sources".to_string()),
    }
}

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Nrml => Format::Nrml,
            OutputFormat::Json => Format::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_options_map_onto_config() {
        let opts = ReadOptions {
            strict_weights: true,
            weight_tolerance: 0.01,
            reject_unknown_mfd: true,
        };
        let config = build_read_config(&opts);
        assert!(config.strict_weights);
        assert!(config.reject_unknown_mfd);
        assert_eq!(config.weight_tolerance, 0.01);
    }

    #[test]
    fn model_name_prefers_explicit_value() {
        let input = Path::new("/data/zones/alps_area.shp");
        assert_eq!(model_name(Some("Alps"), input), "Alps");
        assert_eq!(model_name(None, input), "alps_area");
    }
}
