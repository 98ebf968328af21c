use std::collections::BTreeMap;
use std::io::{self, Write};

use oq_shp::{AreaSource, SourceModel};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_ROWS: usize = 15;

pub fn print_model_summary(out: &mut impl Write, model: &SourceModel) {
    let sources = &model.sources;

    let mut rows = vec![
        ("Model", model.name.clone()),
        ("Area Sources", format!("{}", model.source_count())),
        (
            "Vertices",
            format!(
                "{}",
                sources
                    .iter()
                    .map(|s| s.geometry().open_ring().len())
                    .sum::<usize>()
            ),
        ),
        (
            "Nodal Planes",
            format!(
                "{}",
                sources
                    .iter()
                    .map(|s| s.nodal_plane_dist().len())
                    .sum::<usize>()
            ),
        ),
        (
            "Hypo Depths",
            format!(
                "{}",
                sources
                    .iter()
                    .map(|s| s.hypo_depth_dist().len())
                    .sum::<usize>()
            ),
        ),
    ];

    let upper = span(sources.iter().map(|s| s.geometry().upper_seismo_depth()));
    let lower = span(sources.iter().map(|s| s.geometry().lower_seismo_depth()));
    if let (Some((top, _)), Some((_, bottom))) = (upper, lower) {
        rows.push(("Seismogenic (km)", format!("{top:.1} – {bottom:.1}")));
    }

    let gr = sources.iter().filter_map(|s| s.mfd().as_truncated_gr());
    let min_mag = span(gr.clone().map(|g| g.min_mag));
    let max_mag = span(gr.map(|g| g.max_mag));
    if let (Some((lo, _)), Some((_, hi))) = (min_mag, max_mag) {
        rows.push(("Magnitudes", format!("{lo:.2} – {hi:.2}")));
    }

    print_kv_table(out, "Source Model Summary", &rows);

    if sources.is_empty() {
        return;
    }

    let mfd_types = count_by(sources, |s| s.mfd().type_name().to_string());
    print_distribution_table(out, "MFD Types", &mfd_types, sources.len());

    let regions = count_by(sources, |s| s.tectonic_region().to_string());
    print_distribution_table(out, "Tectonic Regions", &regions, sources.len());
}

pub fn print_source_table(out: &mut impl Write, sources: &[AreaSource]) {
    if sources.is_empty() {
        return;
    }

    let id_w = 10usize;
    let mag_w = 11usize;
    let npd_w = 5usize;
    let sep_overhead = 9;
    let depth_w = SAFE_TABLE_WIDTH.saturating_sub(id_w + mag_w + npd_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ Area Sources ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{i_line}┬{m_line}┬{n_line}┬{d_line}┐",
        INDENT,
        i_line = "─".repeat(id_w + 2),
        m_line = "─".repeat(mag_w + 2),
        n_line = "─".repeat(npd_w + 2),
        d_line = "─".repeat(depth_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<id_w$} │ {:>mag_w$} │ {:>npd_w$} │ {:>depth_w$} │",
        INDENT,
        "ID",
        "Mmin-Mmax",
        "NPD",
        "Depth (km)",
    );
    let _ = writeln!(
        out,
        "{}├{i_line}┼{m_line}┼{n_line}┼{d_line}┤",
        INDENT,
        i_line = "─".repeat(id_w + 2),
        m_line = "─".repeat(mag_w + 2),
        n_line = "─".repeat(npd_w + 2),
        d_line = "─".repeat(depth_w + 2)
    );

    for src in sources.iter().take(MAX_ROWS) {
        let mags = match src.mfd().as_truncated_gr() {
            Some(gr) => format!("{:.2}-{:.2}", gr.min_mag, gr.max_mag),
            None => "n/a".to_string(),
        };
        let depths = format!(
            "{:.1} – {:.1}",
            src.geometry().upper_seismo_depth(),
            src.geometry().lower_seismo_depth()
        );
        let _ = writeln!(
            out,
            "{}│ {:<id_w$} │ {:>mag_w$} │ {:>npd_w$} │ {:>depth_w$} │",
            INDENT,
            truncate(src.id(), id_w),
            truncate(&mags, mag_w),
            src.nodal_plane_dist().len(),
            truncate(&depths, depth_w),
        );
    }

    if sources.len() > MAX_ROWS {
        let _ = writeln!(
            out,
            "{}│ {:<id_w$} │ {:>mag_w$} │ {:>npd_w$} │ {:>depth_w$} │",
            INDENT,
            "...",
            "...",
            "...",
            format!("({} more sources)", sources.len() - MAX_ROWS),
        );
    }

    let _ = writeln!(
        out,
        "{}└{i_line}┴{m_line}┴{n_line}┴{d_line}┘",
        INDENT,
        i_line = "─".repeat(id_w + 2),
        m_line = "─".repeat(mag_w + 2),
        n_line = "─".repeat(npd_w + 2),
        d_line = "─".repeat(depth_w + 2)
    );
}

/// One `id<TAB>WKT` line per source.
pub fn print_wkt(out: &mut impl Write, sources: &[AreaSource]) -> io::Result<()> {
    for src in sources {
        writeln!(out, "{}\t{}", src.id(), src.geometry().wkt())?;
    }
    Ok(())
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 24usize;
    let count_w = 6usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{name_line}┬{count_line}┬{dist_line}┐",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Value", "Count", "Share",
    );
    let _ = writeln!(
        out,
        "{}├{name_line}┼{count_line}┼{dist_line}┤",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );

    for (name, count) in data.iter().take(MAX_ROWS) {
        let pct = (*count as f64 / total as f64) * 100.0;
        let bar = make_bar(pct, max_bar_width);
        let name_s = if name.is_empty() { "(empty)" } else { name.as_str() };
        let dist_cell = format!("{}  {:>5.1}%", bar, pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name_s, name_w),
            count,
            dist_cell,
        );
    }

    if data.len() > MAX_ROWS {
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            "...",
            "...",
            format!("({} more)", data.len() - MAX_ROWS),
        );
    }

    let _ = writeln!(
        out,
        "{}└{name_line}┴{count_line}┴{dist_line}┘",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Metric", "Value",
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

/// Counts sources per key, most frequent first, ties by key.
fn count_by(sources: &[AreaSource], key: impl Fn(&AreaSource) -> String) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for src in sources {
        *counts.entry(key(src)).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
