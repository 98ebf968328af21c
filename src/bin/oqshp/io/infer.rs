use std::path::Path;

use oq_shp::io::Format;

pub fn is_shapefile(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("shp"))
}

pub fn output(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "xml" | "nrml" => Some(Format::Nrml),
        "json" => Some(Format::Json),
        _ => None,
    }
}
