#![allow(dead_code)]

use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use shapefile::{Point, Polygon, PolygonRing};
use std::path::{Path, PathBuf};

pub const MAX_NPD: usize = 2;

pub struct SampleFeature {
    pub id: &'static str,
    pub mfd_type: &'static str,
    pub num_npd: usize,
    pub ring: Vec<(f64, f64)>,
}

impl SampleFeature {
    pub fn template(id: &'static str) -> Self {
        Self {
            id,
            mfd_type: "truncGutenbergRichterMFD",
            num_npd: 1,
            // clockwise, as shapefile outer rings are stored
            ring: vec![
                (10.0, 45.0),
                (10.0, 46.0),
                (11.0, 46.0),
                (11.0, 45.0),
                (10.0, 45.0),
            ],
        }
    }
}

pub fn field(name: &str) -> FieldName {
    FieldName::try_from(name).expect("valid dbase field name")
}

pub fn table(skip: &[&str]) -> TableWriterBuilder {
    let mut builder = TableWriterBuilder::new();
    for name in ["src_id", "src_name", "tect_reg", "mag_scal_r", "mfd_type"] {
        if !skip.contains(&name) {
            builder = builder.add_character_field(field(name), 40);
        }
    }

    let mut numeric = vec![
        "rup_asp_ra".to_string(),
        "a_value".into(),
        "b_value".into(),
        "min_mag".into(),
        "max_mag".into(),
        "num_npd".into(),
        "upp_seismo".into(),
        "low_seismo".into(),
    ];
    for i in 1..=MAX_NPD {
        for prefix in ["strike", "dip", "rake", "weight", "hdd_d", "hdd_w"] {
            numeric.push(format!("{prefix}_{i}"));
        }
    }
    for name in numeric {
        if !skip.contains(&name.as_str()) {
            builder = builder.add_numeric_field(field(&name), 18, 6);
        }
    }
    builder
}

pub fn record(feature: &SampleFeature, skip: &[&str]) -> Record {
    let mut values: Vec<(String, FieldValue)> = vec![
        ("src_id".into(), FieldValue::Character(Some(feature.id.into()))),
        (
            "src_name".into(),
            FieldValue::Character(Some("Sample OQ area source".into())),
        ),
        (
            "tect_reg".into(),
            FieldValue::Character(Some("Active Shallow Crust".into())),
        ),
        ("mag_scal_r".into(), FieldValue::Character(Some("WC1994".into()))),
        (
            "mfd_type".into(),
            FieldValue::Character(Some(feature.mfd_type.into())),
        ),
        ("rup_asp_ra".into(), FieldValue::Numeric(Some(2.0))),
        ("a_value".into(), FieldValue::Numeric(Some(3.001))),
        ("b_value".into(), FieldValue::Numeric(Some(1.001))),
        ("min_mag".into(), FieldValue::Numeric(Some(5.0))),
        ("max_mag".into(), FieldValue::Numeric(Some(7.0))),
        (
            "num_npd".into(),
            FieldValue::Numeric(Some(feature.num_npd as f64)),
        ),
        ("upp_seismo".into(), FieldValue::Numeric(Some(0.0))),
        ("low_seismo".into(), FieldValue::Numeric(Some(20.0))),
    ];

    for i in 1..=MAX_NPD {
        let (strike, dip, rake, weight, depth) = if i == 1 {
            (359.9, 89.99, 179.9, 1.0, 10.0)
        } else {
            (0.0, 0.0, 0.0, 0.0, 0.0)
        };
        values.push((format!("strike_{i}"), FieldValue::Numeric(Some(strike))));
        values.push((format!("dip_{i}"), FieldValue::Numeric(Some(dip))));
        values.push((format!("rake_{i}"), FieldValue::Numeric(Some(rake))));
        values.push((format!("weight_{i}"), FieldValue::Numeric(Some(weight))));
        values.push((format!("hdd_d_{i}"), FieldValue::Numeric(Some(depth))));
        values.push((format!("hdd_w_{i}"), FieldValue::Numeric(Some(weight))));
    }

    let mut rec = Record::default();
    for (name, value) in values {
        if !skip.contains(&name.as_str()) {
            rec.insert(name, value);
        }
    }
    rec
}

pub fn write_shapefile(dir: &Path, features: &[SampleFeature], skip: &[&str]) -> PathBuf {
    let path = dir.join("area_sources.shp");
    let mut writer =
        shapefile::Writer::from_path(&path, table(skip)).expect("create shapefile writer");

    for feature in features {
        let points = feature
            .ring
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        let polygon = Polygon::new(PolygonRing::Outer(points));
        writer
            .write_shape_and_record(&polygon, &record(feature, skip))
            .expect("write feature");
    }
    drop(writer);

    path
}
