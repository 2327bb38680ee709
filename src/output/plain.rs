use crate::cookie::ScanReport;

/// One cookie per line, newline terminated
pub(crate) fn render_plain(report: &ScanReport) -> String {
    report
        .cookies
        .iter()
        .map(|cookie| format!("{cookie}\n"))
        .collect()
}
