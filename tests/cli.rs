mod common;

use common::{SampleFeature, write_shapefile};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};

fn oqshp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oqshp"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run oqshp")
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn convert_writes_every_requested_format() {
    let dir = tempfile::tempdir().unwrap();
    let shp = write_shapefile(dir.path(), &[SampleFeature::template("1")], &[]);
    let xml = dir.path().join("out.xml");
    let json = dir.path().join("out.json");

    let out = oqshp(&["convert", "-q", "-i", arg(&shp), "-o", arg(&xml), "-o", arg(&json)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let nrml = std::fs::read_to_string(&xml).unwrap();
    assert!(nrml.contains("<sourceModel name=\"area_sources\">"));
    assert!(nrml.contains("<areaSource "));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["sources"].as_array().map(Vec::len), Some(1));
}

#[test]
fn convert_to_piped_stdout_uses_outfmt() {
    let dir = tempfile::tempdir().unwrap();
    let shp = write_shapefile(dir.path(), &[SampleFeature::template("1")], &[]);

    let out = oqshp(&["convert", "-q", "-i", arg(&shp), "--outfmt", "json", "--name", "Alps"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["name"], "Alps");
}

#[test]
fn failed_conversion_leaves_no_output_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut feature = SampleFeature::template("1");
    feature.mfd_type = "incrementalMFD";
    let shp = write_shapefile(dir.path(), &[feature], &[]);
    let json = dir.path().join("out.json");
    let xml = dir.path().join("out.xml");

    let out = oqshp(&["convert", "-q", "-i", arg(&shp), "-o", arg(&json), "-o", arg(&xml)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!json.exists());
    assert!(!xml.exists());
}

#[test]
fn unknown_output_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let shp = write_shapefile(dir.path(), &[SampleFeature::template("1")], &[]);
    let txt = dir.path().join("out.txt");

    let out = oqshp(&["convert", "-q", "-i", arg(&shp), "-o", arg(&txt)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Cannot infer format"));
    assert!(!txt.exists());
}

#[test]
fn missing_column_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let shp = write_shapefile(dir.path(), &[SampleFeature::template("1")], &["src_name"]);
    let xml = dir.path().join("out.xml");

    let out = oqshp(&["convert", "-q", "-i", arg(&shp), "-o", arg(&xml)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("src_name"));
}

#[test]
fn non_shapefile_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sources.csv");
    std::fs::write(&input, "src_id\n1\n").unwrap();

    let out = oqshp(&["inspect", "-q", "-i", arg(&input)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("shapefile"));
}

#[test]
fn inspect_prints_summary_and_wkt() {
    let dir = tempfile::tempdir().unwrap();
    let shp = write_shapefile(
        dir.path(),
        &[SampleFeature::template("a1"), SampleFeature::template("b2")],
        &[],
    );

    let out = oqshp(&["inspect", "-q", "-i", arg(&shp), "--wkt"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Source Model Summary"));
    assert!(stdout.contains("truncGutenbergRichterMFD"));
    let wkt: Vec<&str> = stdout
        .lines()
        .filter(|l| l.contains("\tPOLYGON(("))
        .collect();
    assert_eq!(wkt.len(), 2);
    assert!(wkt[0].starts_with("a1\t"));
    assert!(wkt[1].starts_with("b2\t"));
}
