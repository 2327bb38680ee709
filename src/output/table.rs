use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS,
    presets::UTF8_FULL,
};

use crate::consts::DATE_FORMAT;
use crate::cookie::{ScanReport, TargetDay};

/// Most active cookies with their count for the day
pub(crate) fn render_table(target: &TargetDay, report: &ScanReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(format!(
                "Cookie ({} {})",
                target.date().format(DATE_FORMAT),
                target.timezone()
            )),
            Cell::new("Count").set_alignment(CellAlignment::Right),
        ]);

    for cookie in &report.cookies {
        table.add_row(vec![
            Cell::new(cookie),
            Cell::new(report.max_count).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{table}\n")
}
