use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use oq_shp::io::AreaSourceReader;

use crate::cli::InspectArgs;
use crate::config::{build_read_config, model_name};
use crate::display::{
    Context as DisplayContext, Progress, print_model_summary, print_source_table, print_wkt,
};
use crate::io::is_shapefile;

pub fn run_inspect(args: InspectArgs, ctx: DisplayContext) -> Result<()> {
    if !is_shapefile(&args.input) {
        bail!(
            "'{}' is not a shapefile.\n\nUsage: oqshp inspect -i <FILE.shp>",
            args.input.display()
        );
    }

    let mut progress = Progress::new(ctx.interactive, 1);

    progress.step("Reading shapefile");
    let model = AreaSourceReader::new(&args.input)
        .config(build_read_config(&args.read))
        .read_model(model_name(None, &args.input))
        .with_context(|| format!("Failed to read area sources from '{}'", args.input.display()))?;
    progress.complete_step("Reading shapefile", &[]);

    let mut stdout = io::stdout().lock();
    print_model_summary(&mut stdout, &model);
    print_source_table(&mut stdout, &model.sources);

    if args.wkt {
        writeln!(stdout)
            .and_then(|()| print_wkt(&mut stdout, &model.sources))
            .context("Failed to write WKT")?;
    }
    stdout.flush().context("Failed to flush output")?;

    progress.finish(&format!("Inspected {} area source(s)", model.source_count()));

    Ok(())
}
