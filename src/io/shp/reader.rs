use super::fields::Attributes;
use crate::io::{ReadConfig, error::Error};
use crate::model::{
    distribution::{self, HypocentralDepth, NodalPlane},
    geometry::AreaGeometry,
    mfd::{Mfd, TRUNC_GR_MFD, TruncatedGutenbergRichter},
    source::AreaSource,
};
use shapefile::{PolygonRing, Shape};
use shapefile::dbase::Record;
use std::path::Path;
use tracing::{debug, info, warn};

pub fn read(path: &Path, config: &ReadConfig) -> Result<Vec<AreaSource>, Error> {
    let mut reader = shapefile::Reader::from_path(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let features = reader
        .iter_shapes_and_records()
        .collect::<Result<Vec<(Shape, Record)>, _>>()?;
    drop(reader);

    info!(path = %path.display(), count = features.len(), "number of features");

    features
        .iter()
        .enumerate()
        .map(|(idx, (shape, record))| read_feature(idx, shape, record, config))
        .collect()
}

/// Maps one feature (geometry plus attribute row) to an [`AreaSource`].
pub fn read_feature(
    feature: usize,
    shape: &Shape,
    record: &Record,
    config: &ReadConfig,
) -> Result<AreaSource, Error> {
    let attrs = Attributes::new(feature, record);

    let id = attrs.string("src_id")?;
    let name = attrs.string("src_name")?;
    let trt = attrs.string("tect_reg")?;
    let mag_scale_rel = attrs.string("mag_scal_r")?;
    let aspect_ratio = attrs.float("rup_asp_ra")?;

    let mfd = read_mfd(&attrs, config)?;

    let num_npd = attrs.count("num_npd")?;
    let nodal_planes = read_nodal_planes(&attrs, num_npd)?;
    let hypo_depths = read_hypo_depths(&attrs, num_npd)?;
    check_weights(feature, "nodal plane", &nodal_planes, config)?;
    check_weights(feature, "hypocentral depth", &hypo_depths, config)?;

    let geometry = read_geometry(&attrs, shape)?;

    debug!(
        feature,
        id = %id,
        vertices = geometry.vertices().len(),
        num_npd,
        "mapped area source"
    );

    Ok(AreaSource::builder(id, name, geometry, mfd)
        .tectonic_region(trt)
        .mag_scale_rel(mag_scale_rel)
        .rupt_aspect_ratio(aspect_ratio)
        .nodal_plane_dist(nodal_planes)
        .hypo_depth_dist(hypo_depths)
        .build())
}

fn read_mfd(attrs: &Attributes<'_>, config: &ReadConfig) -> Result<Mfd, Error> {
    let mfd_type = attrs.string("mfd_type")?;
    if mfd_type == TRUNC_GR_MFD {
        return Ok(Mfd::TruncatedGutenbergRichter(TruncatedGutenbergRichter {
            a_value: attrs.float("a_value")?,
            b_value: attrs.float("b_value")?,
            min_mag: attrs.float("min_mag")?,
            max_mag: attrs.float("max_mag")?,
        }));
    }

    if config.reject_unknown_mfd {
        return Err(Error::UnrecognizedMfd {
            feature: attrs.feature(),
            mfd_type,
        });
    }

    warn!(
        feature = attrs.feature(),
        mfd_type = %mfd_type,
        "unrecognized magnitude-frequency distribution type, leaving it unspecified"
    );
    Ok(Mfd::Unspecified { mfd_type })
}

fn read_nodal_planes(attrs: &Attributes<'_>, count: usize) -> Result<Vec<NodalPlane>, Error> {
    (1..=count)
        .map(|idx| {
            Ok(NodalPlane {
                probability: attrs.float(&Attributes::indexed("weight", idx))?,
                strike: attrs.float(&Attributes::indexed("strike", idx))?,
                dip: attrs.float(&Attributes::indexed("dip", idx))?,
                rake: attrs.float(&Attributes::indexed("rake", idx))?,
            })
        })
        .collect()
}

fn read_hypo_depths(attrs: &Attributes<'_>, count: usize) -> Result<Vec<HypocentralDepth>, Error> {
    (1..=count)
        .map(|idx| {
            Ok(HypocentralDepth {
                probability: attrs.float(&Attributes::indexed("hdd_w", idx))?,
                depth: attrs.float(&Attributes::indexed("hdd_d", idx))?,
            })
        })
        .collect()
}

fn check_weights<T: distribution::Weighted>(
    feature: usize,
    what: &str,
    entries: &[T],
    config: &ReadConfig,
) -> Result<(), Error> {
    if distribution::is_normalized(entries, config.weight_tolerance) {
        return Ok(());
    }

    let total = distribution::total_weight(entries);
    if config.strict_weights {
        return Err(Error::distribution(
            feature,
            format!("{} weights sum to {} instead of 1.0", what, total),
        ));
    }

    warn!(feature, total, "{} weights do not sum to 1.0", what);
    Ok(())
}

fn read_geometry(attrs: &Attributes<'_>, shape: &Shape) -> Result<AreaGeometry, Error> {
    let feature = attrs.feature();
    let vertices = exterior_ring(feature, shape)?;

    let distinct = {
        let mut seen: Vec<[f64; 2]> = Vec::with_capacity(vertices.len());
        for v in &vertices {
            if !seen.contains(v) {
                seen.push(*v);
            }
        }
        seen.len()
    };
    if distinct < 3 {
        return Err(Error::geometry(
            feature,
            format!("polygon ring has {} distinct vertices, at least 3 required", distinct),
        ));
    }

    let upper = attrs.float("upp_seismo")?;
    let lower = attrs.float("low_seismo")?;

    Ok(AreaGeometry::new(vertices, upper, lower))
}

/// Vertices of the first ring, Z and M dropped.
fn exterior_ring(feature: usize, shape: &Shape) -> Result<Vec<[f64; 2]>, Error> {
    match shape {
        Shape::Polygon(polygon) => first_ring(feature, polygon.rings(), |p| [p.x, p.y]),
        Shape::PolygonZ(polygon) => first_ring(feature, polygon.rings(), |p| [p.x, p.y]),
        Shape::PolygonM(polygon) => first_ring(feature, polygon.rings(), |p| [p.x, p.y]),
        Shape::NullShape => Err(Error::geometry(feature, "feature has no geometry")),
        other => Err(Error::geometry(
            feature,
            format!("expected a polygon, found {}", shape_kind(other)),
        )),
    }
}

fn first_ring<P>(
    feature: usize,
    rings: &[PolygonRing<P>],
    xy: impl Fn(&P) -> [f64; 2],
) -> Result<Vec<[f64; 2]>, Error> {
    rings
        .first()
        .map(|ring| ring.points().iter().map(&xy).collect())
        .ok_or_else(|| Error::geometry(feature, "polygon has no rings"))
}

fn shape_kind(shape: &Shape) -> &'static str {
    match shape {
        Shape::Point(_) | Shape::PointM(_) | Shape::PointZ(_) => "a point",
        Shape::Multipoint(_) | Shape::MultipointM(_) | Shape::MultipointZ(_) => "a multipoint",
        Shape::Polyline(_) | Shape::PolylineM(_) | Shape::PolylineZ(_) => "a polyline",
        _ => "an unsupported shape",
    }
}
