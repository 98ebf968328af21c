use crate::io::error::Error;
use crate::model::source::SourceModel;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, model: &SourceModel) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, model)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
