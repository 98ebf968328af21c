//! Value objects describing OpenQuake area sources.
//!
//! - [`source`] – The [`AreaSource`] aggregate and the [`SourceModel`] collection.
//! - [`geometry`] – Polygon boundary and seismogenic depth bounds.
//! - [`mfd`] – Magnitude-frequency distributions.
//! - [`distribution`] – Nodal-plane and hypocentral-depth distribution entries.
//!
//! Everything here is plain data: the shapefile reader in [`crate::io`]
//! builds these objects and the writers serialize them.
//!
//! [`AreaSource`]: source::AreaSource
//! [`SourceModel`]: source::SourceModel

pub mod distribution;
pub mod geometry;
pub mod mfd;
pub mod source;
