//! Assignment records: row splitting, date parsing, and batch building.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::error;

use crate::error::ScanError;

/// Sentinel token meaning "still active"; resolves to the processing instant.
const ONGOING: &str = "NULL";

/// One employee's recorded time interval working on one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub employee_id: String,
    pub project_id: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
}

/// Split one raw line into its four trimmed fields, in fixed order
/// `employeeId, projectId, dateFrom, dateTo`. Extra fields are ignored;
/// fewer than 4 is fatal for the whole call. `line` is 1-based.
fn split_row(raw: &str, line: usize) -> Result<[&str; 4], ScanError> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    if fields.len() < 4 {
        return Err(ScanError::MalformedRow { line });
    }
    Ok([fields[0], fields[1], fields[2], fields[3]])
}

/// Parse a raw date field into a UTC instant.
///
/// `NULL` resolves to `now` before validation, so the sentinel is always
/// valid. Date-only forms are taken at midnight UTC. Returns `None` for
/// anything that is not a well-formed calendar value.
fn parse_date(raw: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if raw == ONGOING {
        return Some(now);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc());
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}

/// Build the full batch of assignments from non-empty lines, in input order.
///
/// Validity is all-or-nothing: any row with an invalid date rejects the
/// whole batch (`Ok(None)`), as does an empty batch. Every invalid row is
/// still reported with its 1-based line number before the batch fails.
/// `now` is the instant `NULL` date fields resolve to.
pub fn build_assignments(
    lines: &[&str],
    now: DateTime<Utc>,
) -> Result<Option<Vec<Assignment>>, ScanError> {
    let mut records = Vec::with_capacity(lines.len());
    let mut all_valid = true;

    for (idx, raw) in lines.iter().enumerate() {
        let line = idx + 1;
        let [employee_id, project_id, from, to] = split_row(raw, line)?;

        match (parse_date(from, now), parse_date(to, now)) {
            (Some(date_from), Some(date_to)) => records.push(Assignment {
                employee_id: employee_id.to_string(),
                project_id: project_id.to_string(),
                date_from,
                date_to,
            }),
            _ => {
                all_valid = false;
                error!(line, "row contains an invalid date");
            }
        }
    }

    if all_valid && !records.is_empty() {
        Ok(Some(records))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    const NOW: &str = "2021-06-15T12:00:00Z";

    #[test]
    fn builds_records_in_input_order() {
        let lines = [
            "E1,P1,2021-01-01,2021-01-10",
            "E2,P2,2021-02-01,2021-02-10",
        ];
        let records = build_assignments(&lines, instant(NOW)).unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_id, "E1");
        assert_eq!(records[0].project_id, "P1");
        assert_eq!(records[0].date_from, instant("2021-01-01T00:00:00Z"));
        assert_eq!(records[0].date_to, instant("2021-01-10T00:00:00Z"));
        assert_eq!(records[1].employee_id, "E2");
    }

    #[test]
    fn fields_are_trimmed() {
        let lines = [" E1 , P1 , 2021-01-01 , 2021-01-10 "];
        let records = build_assignments(&lines, instant(NOW)).unwrap().unwrap();
        assert_eq!(records[0].employee_id, "E1");
        assert_eq!(records[0].project_id, "P1");
    }

    #[test]
    fn one_invalid_date_rejects_whole_batch() {
        let lines = [
            "E1,P1,2021-01-01,2021-01-10",
            "E2,P1,not-a-date,2021-01-10",
            "E3,P1,2021-01-01,2021-01-10",
        ];
        assert_eq!(build_assignments(&lines, instant(NOW)).unwrap(), None);
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert_eq!(build_assignments(&[], instant(NOW)).unwrap(), None);
    }

    #[test]
    fn missing_field_is_fatal_with_line_number() {
        let lines = ["E1,P1,2021-01-01,2021-01-10", "E2,P1,2021-01-01"];
        let err = build_assignments(&lines, instant(NOW)).unwrap_err();
        assert!(matches!(err, ScanError::MalformedRow { line: 2 }));
    }

    #[test]
    fn null_sentinel_resolves_to_injected_now() {
        let lines = ["E1,P1,2021-01-01,NULL"];
        let records = build_assignments(&lines, instant(NOW)).unwrap().unwrap();
        assert_eq!(records[0].date_to, instant(NOW));
    }

    #[test]
    fn accepted_date_formats() {
        let now = instant(NOW);
        assert_eq!(
            parse_date("2021-03-04", now),
            Some(instant("2021-03-04T00:00:00Z"))
        );
        assert_eq!(
            parse_date("2021/03/04", now),
            Some(instant("2021-03-04T00:00:00Z"))
        );
        assert_eq!(
            parse_date("2021-03-04T05:06:07", now),
            Some(instant("2021-03-04T05:06:07Z"))
        );
        assert_eq!(
            parse_date("2021-03-04 05:06:07", now),
            Some(instant("2021-03-04T05:06:07Z"))
        );
        assert_eq!(
            parse_date("2021-03-04T05:06:07+02:00", now),
            Some(instant("2021-03-04T03:06:07Z"))
        );
        assert_eq!(parse_date("NULL", now), Some(now));
    }

    #[test]
    fn rejected_date_values() {
        let now = instant(NOW);
        assert_eq!(parse_date("", now), None);
        assert_eq!(parse_date("tomorrow", now), None);
        assert_eq!(parse_date("2021-13-40", now), None);
        // Sentinel match is exact case.
        assert_eq!(parse_date("null", now), None);
    }
}
