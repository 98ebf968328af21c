//! Read OpenQuake area sources from preformatted ESRI shapefiles.
//!
//! Each feature of the shapefile is one area source: its polygon is the source
//! boundary and its attribute row carries the identifiers, the magnitude-
//! frequency distribution, the nodal-plane and hypocentral-depth distributions,
//! and the seismogenic depth bounds under a fixed set of column names.
//!
//! # Quick Start
//!
//! ```no_run
//! use oq_shp::{Mfd, read_area_sources};
//!
//! let sources = read_area_sources("area_sources.shp")?;
//! for src in &sources {
//!     if let Mfd::TruncatedGutenbergRichter(gr) = src.mfd() {
//!         println!("{} a={} b={}", src.id(), gr.a_value, gr.b_value);
//!     }
//!     println!("{}", src.geometry().wkt());
//! }
//! # Ok::<(), oq_shp::IoError>(())
//! ```
//!
//! # Attribute Layout
//!
//! | Column                                  | Meaning                                   |
//! |-----------------------------------------|-------------------------------------------|
//! | `src_id`, `src_name`                    | Source identifier and name                |
//! | `tect_reg`                              | Tectonic region type                      |
//! | `mag_scal_r`, `rup_asp_ra`              | Magnitude scaling relation, aspect ratio  |
//! | `mfd_type`                              | `truncGutenbergRichterMFD`                |
//! | `a_value`, `b_value`, `min_mag`, `max_mag` | Truncated Gutenberg-Richter parameters |
//! | `num_npd`                               | Entries in both depth and plane lists     |
//! | `strike_i`, `dip_i`, `rake_i`, `weight_i` | Nodal plane `i` (1-based)               |
//! | `hdd_d_i`, `hdd_w_i`                    | Hypocentral depth `i` and its weight      |
//! | `upp_seismo`, `low_seismo`              | Seismogenic depth bounds (km)             |
//!
//! # Module Organization
//!
//! - [`io`]: Shapefile reader, NRML and JSON writers, read configuration
//!
//! # Data Types
//!
//! - [`AreaSource`]: One source, immutable once built
//! - [`AreaGeometry`]: Closed polygon ring plus seismogenic depths, with WKT output
//! - [`Mfd`]: Truncated Gutenberg-Richter or an unspecified type kept by name
//! - [`NodalPlane`], [`HypocentralDepth`]: Weighted distribution entries
//! - [`SourceModel`]: Named collection of sources for export

mod model;

pub mod io;

pub use model::distribution::{HypocentralDepth, NodalPlane, Weighted};
pub use model::geometry::AreaGeometry;
pub use model::mfd::{Mfd, TRUNC_GR_MFD, TruncatedGutenbergRichter};
pub use model::source::{AreaSource, AreaSourceBuilder, SourceModel};

pub use io::Error as IoError;
pub use io::{ReadConfig, read_area_sources};
