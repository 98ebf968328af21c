use super::distribution::{HypocentralDepth, NodalPlane};
use super::geometry::AreaGeometry;
use super::mfd::Mfd;
use serde::{Deserialize, Serialize};

/// A seismic source distributing earthquake occurrence over a polygon.
///
/// Instances are immutable once built; use [`AreaSource::builder`] to assemble
/// one. Sources read from a shapefile always carry nodal-plane and
/// hypocentral-depth distributions of equal length, since both are driven by
/// the single `num_npd` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSource {
    id: String,
    name: String,
    tectonic_region: String,
    mag_scale_rel: String,
    rupt_aspect_ratio: f64,
    geometry: AreaGeometry,
    mfd: Mfd,
    nodal_plane_dist: Vec<NodalPlane>,
    hypo_depth_dist: Vec<HypocentralDepth>,
}

impl AreaSource {
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        geometry: AreaGeometry,
        mfd: Mfd,
    ) -> AreaSourceBuilder {
        AreaSourceBuilder {
            id: id.into(),
            name: name.into(),
            tectonic_region: String::new(),
            mag_scale_rel: String::new(),
            rupt_aspect_ratio: 1.0,
            geometry,
            mfd,
            nodal_plane_dist: Vec::new(),
            hypo_depth_dist: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tectonic_region(&self) -> &str {
        &self.tectonic_region
    }

    pub fn mag_scale_rel(&self) -> &str {
        &self.mag_scale_rel
    }

    pub fn rupt_aspect_ratio(&self) -> f64 {
        self.rupt_aspect_ratio
    }

    pub fn geometry(&self) -> &AreaGeometry {
        &self.geometry
    }

    pub fn mfd(&self) -> &Mfd {
        &self.mfd
    }

    pub fn nodal_plane_dist(&self) -> &[NodalPlane] {
        &self.nodal_plane_dist
    }

    pub fn hypo_depth_dist(&self) -> &[HypocentralDepth] {
        &self.hypo_depth_dist
    }
}

#[derive(Debug, Clone)]
pub struct AreaSourceBuilder {
    id: String,
    name: String,
    tectonic_region: String,
    mag_scale_rel: String,
    rupt_aspect_ratio: f64,
    geometry: AreaGeometry,
    mfd: Mfd,
    nodal_plane_dist: Vec<NodalPlane>,
    hypo_depth_dist: Vec<HypocentralDepth>,
}

impl AreaSourceBuilder {
    pub fn tectonic_region(mut self, trt: impl Into<String>) -> Self {
        self.tectonic_region = trt.into();
        self
    }

    pub fn mag_scale_rel(mut self, msr: impl Into<String>) -> Self {
        self.mag_scale_rel = msr.into();
        self
    }

    pub fn rupt_aspect_ratio(mut self, ratio: f64) -> Self {
        self.rupt_aspect_ratio = ratio;
        self
    }

    pub fn nodal_plane_dist(mut self, planes: Vec<NodalPlane>) -> Self {
        self.nodal_plane_dist = planes;
        self
    }

    pub fn hypo_depth_dist(mut self, depths: Vec<HypocentralDepth>) -> Self {
        self.hypo_depth_dist = depths;
        self
    }

    pub fn build(self) -> AreaSource {
        AreaSource {
            id: self.id,
            name: self.name,
            tectonic_region: self.tectonic_region,
            mag_scale_rel: self.mag_scale_rel,
            rupt_aspect_ratio: self.rupt_aspect_ratio,
            geometry: self.geometry,
            mfd: self.mfd,
            nodal_plane_dist: self.nodal_plane_dist,
            hypo_depth_dist: self.hypo_depth_dist,
        }
    }
}

/// Named collection of sources, the unit written to NRML and JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceModel {
    pub name: String,
    pub sources: Vec<AreaSource>,
}

impl SourceModel {
    pub fn new(name: impl Into<String>, sources: Vec<AreaSource>) -> Self {
        Self {
            name: name.into(),
            sources,
        }
    }

    #[inline]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
