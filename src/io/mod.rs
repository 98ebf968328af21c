//! Reading area sources from shapefiles and writing source models.
//!
//! The input side is a single format: an ESRI shapefile whose attribute table
//! uses the fixed OpenQuake column layout (`src_id`, `mfd_type`, `strike_1`,
//! ...). Parsed sources can be written as NRML 0.4 XML or JSON.
//!
//! ```no_run
//! use oq_shp::io::{AreaSourceReader, Format, ReadConfig, SourceWriter};
//!
//! let model = AreaSourceReader::new("sources.shp")
//!     .config(ReadConfig {
//!         strict_weights: true,
//!         ..Default::default()
//!     })
//!     .read_model("Area sources")?;
//!
//! let out = std::fs::File::create("sources.xml")?;
//! SourceWriter::new(out, Format::Nrml).write(&model)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::model::source::{AreaSource, SourceModel};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod error;
pub mod util;

mod shp {
    pub mod fields;
    pub mod reader;
}

mod nrml {
    pub mod writer;
}

mod json {
    pub mod writer;
}

pub use error::Error;
pub use json::writer::write as write_json;
pub use nrml::writer::write as write_nrml;

/// Options controlling how strictly attribute rows are validated.
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Allowed deviation of a distribution's weight sum from 1.0.
    pub weight_tolerance: f64,
    /// Fail instead of warning when a distribution is not normalized.
    pub strict_weights: bool,
    /// Fail instead of warning on an `mfd_type` other than
    /// `truncGutenbergRichterMFD`.
    pub reject_unknown_mfd: bool,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            weight_tolerance: 1e-6,
            strict_weights: false,
            reject_unknown_mfd: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Shapefile,
    Nrml,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Shapefile => write!(f, "Shapefile"),
            Format::Nrml => write!(f, "NRML"),
            Format::Json => write!(f, "JSON"),
        }
    }
}

/// Parses every feature of the shapefile at `path` into an [`AreaSource`],
/// in dataset order, using the default [`ReadConfig`].
pub fn read_area_sources(path: impl AsRef<Path>) -> Result<Vec<AreaSource>, Error> {
    AreaSourceReader::new(path).read()
}

pub struct AreaSourceReader {
    path: PathBuf,
    config: ReadConfig,
}

impl AreaSourceReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config: ReadConfig::default(),
        }
    }

    pub fn config(mut self, config: ReadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn read(self) -> Result<Vec<AreaSource>, Error> {
        shp::reader::read(&self.path, &self.config)
    }

    pub fn read_model(self, name: impl Into<String>) -> Result<SourceModel, Error> {
        let name = name.into();
        Ok(SourceModel::new(name, self.read()?))
    }
}

pub struct SourceWriter<W: Write> {
    writer: W,
    format: Format,
}

impl<W: Write> SourceWriter<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self { writer, format }
    }

    pub fn write(self, model: &SourceModel) -> Result<(), Error> {
        match self.format {
            Format::Nrml => nrml::writer::write(self.writer, model),
            Format::Json => json::writer::write(self.writer, model),
            Format::Shapefile => Err(Error::UnsupportedWriteFormat(self.format)),
        }
    }
}
