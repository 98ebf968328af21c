use crate::io::{error::Error, util::fmt_float, util::xml_escape};
use crate::model::{
    mfd::Mfd,
    source::{AreaSource, SourceModel},
};
use std::io::Write;

const NRML_NS: &str = "http://openquake.org/xmlns/nrml/0.4";
const GML_NS: &str = "http://www.opengis.net/gml";

/// Writes `model` as an NRML 0.4 source model.
///
/// Fails with [`Error::UnsupportedMfd`] before writing anything when a
/// source's distribution is [`Mfd::Unspecified`].
pub fn write<W: Write>(mut writer: W, model: &SourceModel) -> Result<(), Error> {
    if let Some(src) = model.sources.iter().find(|s| !s.mfd().is_specified()) {
        return Err(Error::UnsupportedMfd {
            source_id: src.id().to_string(),
            mfd_type: src.mfd().type_name().to_string(),
        });
    }

    writeln!(writer, "<?xml version='1.0' encoding='utf-8'?>")?;
    writeln!(writer, "<nrml xmlns:gml=\"{}\" xmlns=\"{}\">", GML_NS, NRML_NS)?;
    writeln!(
        writer,
        "    <sourceModel name=\"{}\">",
        xml_escape(&model.name)
    )?;

    for src in &model.sources {
        write_area_source(&mut writer, src)?;
    }

    writeln!(writer, "    </sourceModel>")?;
    writeln!(writer, "</nrml>")?;
    writer.flush()?;
    Ok(())
}

fn write_area_source<W: Write>(writer: &mut W, src: &AreaSource) -> Result<(), Error> {
    writeln!(
        writer,
        "        <areaSource id=\"{}\" name=\"{}\" tectonicRegion=\"{}\">",
        xml_escape(src.id()),
        xml_escape(src.name()),
        xml_escape(src.tectonic_region())
    )?;

    let geom = src.geometry();
    let pos_list = geom
        .open_ring()
        .iter()
        .map(|[x, y]| format!("{} {}", fmt_float(*x), fmt_float(*y)))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(writer, "            <areaGeometry>")?;
    writeln!(writer, "                <gml:Polygon>")?;
    writeln!(writer, "                    <gml:exterior>")?;
    writeln!(writer, "                        <gml:LinearRing>")?;
    writeln!(
        writer,
        "                            <gml:posList>{}</gml:posList>",
        pos_list
    )?;
    writeln!(writer, "                        </gml:LinearRing>")?;
    writeln!(writer, "                    </gml:exterior>")?;
    writeln!(writer, "                </gml:Polygon>")?;
    writeln!(
        writer,
        "                <upperSeismoDepth>{}</upperSeismoDepth>",
        fmt_float(geom.upper_seismo_depth())
    )?;
    writeln!(
        writer,
        "                <lowerSeismoDepth>{}</lowerSeismoDepth>",
        fmt_float(geom.lower_seismo_depth())
    )?;
    writeln!(writer, "            </areaGeometry>")?;

    writeln!(
        writer,
        "            <magScaleRel>{}</magScaleRel>",
        xml_escape(src.mag_scale_rel())
    )?;
    writeln!(
        writer,
        "            <ruptAspectRatio>{}</ruptAspectRatio>",
        fmt_float(src.rupt_aspect_ratio())
    )?;

    match src.mfd() {
        Mfd::TruncatedGutenbergRichter(mfd) => writeln!(
            writer,
            "            <truncGutenbergRichterMFD aValue=\"{}\" bValue=\"{}\" minMag=\"{}\" maxMag=\"{}\"/>",
            fmt_float(mfd.a_value),
            fmt_float(mfd.b_value),
            fmt_float(mfd.min_mag),
            fmt_float(mfd.max_mag)
        )?,
        Mfd::Unspecified { mfd_type } => {
            return Err(Error::UnsupportedMfd {
                source_id: src.id().to_string(),
                mfd_type: mfd_type.clone(),
            });
        }
    }

    writeln!(writer, "            <nodalPlaneDist>")?;
    for np in src.nodal_plane_dist() {
        writeln!(
            writer,
            "                <nodalPlane probability=\"{}\" strike=\"{}\" dip=\"{}\" rake=\"{}\"/>",
            fmt_float(np.probability),
            fmt_float(np.strike),
            fmt_float(np.dip),
            fmt_float(np.rake)
        )?;
    }
    writeln!(writer, "            </nodalPlaneDist>")?;

    writeln!(writer, "            <hypoDepthDist>")?;
    for hd in src.hypo_depth_dist() {
        writeln!(
            writer,
            "                <hypoDepth probability=\"{}\" depth=\"{}\"/>",
            fmt_float(hd.probability),
            fmt_float(hd.depth)
        )?;
    }
    writeln!(writer, "            </hypoDepthDist>")?;

    writeln!(writer, "        </areaSource>")?;
    Ok(())
}
