use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use oq_shp::SourceModel;
use oq_shp::io::{AreaSourceReader, Format, SourceWriter};

use crate::cli::ConvertArgs;
use crate::config::{build_read_config, model_name};
use crate::display::{
    Context as DisplayContext, Progress, print_model_summary, print_source_table,
};
use crate::io::{OutputSpec, create_output, infer_output_format, is_shapefile, stdout_is_tty};

const TOTAL_STEPS: u8 = 2;

pub fn run_convert(args: ConvertArgs, ctx: DisplayContext) -> Result<()> {
    if !is_shapefile(&args.input) {
        bail!(
            "'{}' is not a shapefile.\n\nUsage: oqshp convert -i <FILE.shp> -o <OUTPUT>",
            args.input.display()
        );
    }

    let output_specs = resolve_outputs(&args)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading shapefile");
    let model = read_model(&args)?;

    let read_substeps = build_read_substeps(&model);
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading shapefile", &read_substeps_ref);

    if ctx.interactive {
        let mut stderr = io::stderr().lock();
        print_model_summary(&mut stderr, &model);
        print_source_table(&mut stderr, &model.sources);
    }

    progress.step("Writing source model");
    write_outputs(&model, &output_specs)?;

    let write_substeps = build_write_substeps(&output_specs);
    let write_substeps_ref: Vec<&str> = write_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Writing source model", &write_substeps_ref);

    progress.finish(&format!(
        "Converted {} area source(s)",
        model.source_count()
    ));

    Ok(())
}

fn read_model(args: &ConvertArgs) -> Result<SourceModel> {
    let name = model_name(args.name.as_deref(), &args.input);
    AreaSourceReader::new(&args.input)
        .config(build_read_config(&args.read))
        .read_model(name)
        .with_context(|| format!("Failed to read area sources from '{}'", args.input.display()))
}

fn build_read_substeps(model: &SourceModel) -> Vec<String> {
    let unspecified = model
        .sources
        .iter()
        .filter(|s| !s.mfd().is_specified())
        .count();

    let mut steps = vec![
        format!("Map {} feature(s) to area sources", model.source_count()),
        "Close polygon rings".to_string(),
    ];
    if unspecified > 0 {
        steps.push(format!("{unspecified} source(s) with unrecognized MFD type"));
    }
    steps
}

fn build_write_substeps(specs: &[OutputSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|spec| {
            let path_str = spec
                .path
                .as_ref()
                .map(|p| {
                    p.file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into_owned()
                })
                .unwrap_or_else(|| "stdout".to_string());

            format!("Write {} → {}", spec.format, path_str)
        })
        .collect()
}

fn resolve_outputs(args: &ConvertArgs) -> Result<Vec<OutputSpec>> {
    if args.output.is_empty() {
        if stdout_is_tty() {
            bail!(
                "No output file specified and stdout is a terminal.\n\nUsage: oqshp convert -i <FILE.shp> -o <OUTPUT> or pipe output."
            );
        }
        let format = args
            .output_format
            .map(|f| f.into())
            .unwrap_or(Format::Nrml);
        return Ok(vec![OutputSpec { path: None, format }]);
    }

    let mut specs = Vec::with_capacity(args.output.len());

    let first = &args.output[0];
    let first_format = if let Some(fmt) = args.output_format {
        fmt.into()
    } else if let Some(fmt) = infer_output_format(first) {
        fmt
    } else {
        bail!(
            "Cannot infer format from '{}'. Use --outfmt to specify.",
            first.display()
        );
    };
    specs.push(OutputSpec {
        path: Some(first.clone()),
        format: first_format,
    });

    for path in &args.output[1..] {
        let format = infer_output_format(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot infer format from '{}'. Use an .xml or .json extension.",
                path.display()
            )
        })?;
        specs.push(OutputSpec {
            path: Some(path.clone()),
            format,
        });
    }

    Ok(specs)
}

/// Renders every output before creating any file, so a failing format
/// leaves nothing behind.
fn write_outputs(model: &SourceModel, specs: &[OutputSpec]) -> Result<()> {
    let rendered = specs
        .iter()
        .map(|spec| render(model, spec.format).map(|bytes| (spec, bytes)))
        .collect::<Result<Vec<_>>>()?;

    for (spec, bytes) in rendered {
        let mut writer = create_output(spec.path.as_deref())?;
        writer
            .write_all(&bytes)
            .with_context(|| format!("Failed to write {} source model", spec.format))?;
        writer.flush().context("Failed to flush output")?;
    }

    Ok(())
}

fn render(model: &SourceModel, format: Format) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    SourceWriter::new(&mut buf, format)
        .write(model)
        .with_context(|| format!("Failed to write {} source model", format))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oq_shp::{AreaGeometry, AreaSource, Mfd, TruncatedGutenbergRichter};

    fn model(mfd: Mfd) -> SourceModel {
        let ring = vec![[10.0, 45.0], [10.0, 46.0], [11.0, 46.0]];
        let src = AreaSource::builder("1", "zone", AreaGeometry::new(ring, 0.0, 20.0), mfd).build();
        SourceModel::new("test", vec![src])
    }

    fn specs(dir: &std::path::Path) -> Vec<OutputSpec> {
        vec![
            OutputSpec {
                path: Some(dir.join("out.json")),
                format: Format::Json,
            },
            OutputSpec {
                path: Some(dir.join("out.xml")),
                format: Format::Nrml,
            },
        ]
    }

    #[test]
    fn failed_render_creates_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let unspecified = model(Mfd::Unspecified {
            mfd_type: "incrementalMFD".into(),
        });

        let err = write_outputs(&unspecified, &specs(dir.path())).unwrap_err();
        assert!(format!("{err:#}").contains("incrementalMFD"));
        assert!(!dir.path().join("out.json").exists());
        assert!(!dir.path().join("out.xml").exists());
    }

    #[test]
    fn every_output_is_written_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let gr = model(TruncatedGutenbergRichter::new(3.0, 1.0, 5.0, 7.0).into());

        write_outputs(&gr, &specs(dir.path())).unwrap();
        let xml = std::fs::read_to_string(dir.path().join("out.xml")).unwrap();
        let json = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
        assert!(xml.contains("<areaSource "));
        assert!(json.contains("\"sources\""));
    }
}
