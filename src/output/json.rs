use crate::consts::DATE_FORMAT;
use crate::cookie::{ScanReport, SkippedLine, TargetDay};

pub(crate) fn render_json(
    target: &TargetDay,
    report: &ScanReport,
) -> Result<String, serde_json::Error> {
    let skipped: Vec<serde_json::Value> = report.skipped.iter().map(skipped_entry).collect();

    let output = serde_json::json!({
        "date": target.date().format(DATE_FORMAT).to_string(),
        "timezone": target.timezone().to_string(),
        "cookies": report.cookies,
        "count": report.max_count,
        "matched_records": report.matched(),
        "distinct_cookies": report.counts.len(),
        "lines_read": report.lines_read,
        "stopped_early": report.stopped_early,
        "skipped": skipped,
    });
    serde_json::to_string_pretty(&output)
}

fn skipped_entry(skipped: &SkippedLine) -> serde_json::Value {
    serde_json::json!({
        "line": skipped.line_no,
        "reason": skipped.reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::utils::Timezone;
    use chrono::NaiveDate;
    use serde_json::Value;

    #[test]
    fn renders_report_fields() {
        let target = TargetDay::new(
            NaiveDate::from_ymd_opt(2018, 12, 9).unwrap(),
            Timezone::default(),
        );
        let mut report = ScanReport {
            cookies: vec!["cookie1".to_string()],
            max_count: 2,
            lines_read: 5,
            stopped_early: true,
            ..Default::default()
        };
        report.counts.insert("cookie1".to_string(), 2);
        report.counts.insert("cookie2".to_string(), 1);
        report.skipped.push(SkippedLine {
            line_no: 3,
            reason: RecordError::MalformedRecord {
                line: "oops".to_string(),
            },
        });

        let rendered = render_json(&target, &report).unwrap();
        let json: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["date"], "2018-12-09");
        assert_eq!(json["timezone"], "UTC");
        assert_eq!(json["cookies"], serde_json::json!(["cookie1"]));
        assert_eq!(json["count"], 2);
        assert_eq!(json["matched_records"], 3);
        assert_eq!(json["distinct_cookies"], 2);
        assert_eq!(json["stopped_early"], true);
        assert_eq!(json["skipped"][0]["line"], 3);
    }

    #[test]
    fn empty_report_has_empty_cookie_list() {
        let target = TargetDay::new(
            NaiveDate::from_ymd_opt(2018, 12, 9).unwrap(),
            Timezone::default(),
        );
        let rendered = render_json(&target, &ScanReport::default()).unwrap();
        let json: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["cookies"], serde_json::json!([]));
        assert_eq!(json["count"], 0);
    }
}
