use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_io_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use oq_shp::IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();

        if let Some(feature) = io_err.feature() {
            self.add(format!(
                "Offending feature: row {} of the attribute table (0-based)",
                feature
            ));
        }

        match io_err {
            IoError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            IoError::Open { source, .. } => {
                self.add("The shapefile could not be opened");
                self.add("A .shp file needs its .shx and .dbf companions alongside");
                self.collect_shapefile_hints(source);
            }

            IoError::Read { source } => {
                self.add("A feature could not be decoded from the dataset");
                self.collect_shapefile_hints(source);
            }

            IoError::MissingField { field, .. } => {
                self.add(format!("The attribute table has no '{}' column", field));
                self.add("Column names are matched exactly and are case-sensitive");
                if let Some(prefix) = indexed_prefix(field) {
                    self.add(format!(
                        "'{}_i' columns must exist for every i up to num_npd",
                        prefix
                    ));
                }
            }

            IoError::MissingValue { field, .. } => {
                self.add(format!("Column '{}' is null for this feature", field));
                self.add("Fill in the attribute value in your GIS tool");
            }

            IoError::FieldType { field, expected, .. } => {
                self.add(format!("Column '{}' must hold {}", field, expected));
                self.add("Check the column type in the .dbf schema");
            }

            IoError::UnrecognizedMfd { mfd_type, .. } => {
                self.add(format!("'{}' is not a supported MFD type", mfd_type));
                self.add("Supported: truncGutenbergRichterMFD");
                self.add("Drop --reject-unknown-mfd to keep such sources as unspecified");
            }

            IoError::Geometry { .. } => {
                self.add("Each feature must be a polygon with at least 3 distinct vertices");
                self.add("Repair or remove null and degenerate shapes");
            }

            IoError::Distribution { .. } => {
                self.add("Nodal-plane and hypocentral-depth weights must each sum to 1");
                self.add("Loosen --weight-tolerance or drop --strict-weights");
            }

            IoError::UnsupportedMfd { source_id, .. } => {
                self.add(format!(
                    "Source '{}' has no truncated Gutenberg-Richter parameters",
                    source_id
                ));
                self.add("NRML output needs a known MFD for every source");
                self.add("Write JSON instead, or fix the mfd_type column");
            }

            IoError::UnsupportedWriteFormat(fmt) => {
                self.add(format!("The '{}' format cannot be used for output", fmt));
                self.add("Supported output formats: nrml (xml), json");
            }

            IoError::Json(_) => {
                self.add("JSON serialization failed");
                self.add("Non-finite numbers cannot be represented in JSON");
            }
        }
    }

    fn collect_shapefile_hints(&mut self, source: &shapefile::Error) {
        match source {
            shapefile::Error::IoError(io) => self.collect_std_io_hints(io),
            shapefile::Error::DbaseError(_) => {
                self.add("The .dbf attribute table is unreadable or corrupt");
            }
            _ => {
                self.add("Verify the file is a valid ESRI shapefile");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid or corrupt data");
                self.add("Verify the file is not truncated or corrupted");
            }

            ErrorKind::UnexpectedEof => {
                self.add("Unexpected end of file encountered");
                self.add("The file may be truncated or incomplete");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: output consumer terminated");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") {
            self.add("Output would go to a terminal");
            self.add("Provide -o/--output or pipe stdout to a file");
            return;
        }

        if msg.contains("not a shapefile") {
            self.add("Input must be the .shp member of a shapefile");
            return;
        }

        if msg.contains("cannot infer format") {
            self.add("Use an .xml, .nrml or .json extension, or pass --outfmt");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
        }
    }
}

/// `strike_3` -> `strike`, for the indexed distribution columns.
fn indexed_prefix(field: &str) -> Option<&str> {
    let (prefix, idx) = field.rsplit_once('_')?;
    idx.parse::<usize>().ok().map(|_| prefix)
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
