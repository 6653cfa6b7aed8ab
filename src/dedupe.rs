use std::collections::HashSet;

use crate::model::JobRecord;

/// Collapses records sharing an identity key, keeping the first seen.
/// Records without a key are excluded upstream; any that slip through
/// are dropped here.
pub fn dedupe(records: Vec<JobRecord>) -> Vec<JobRecord> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        let key = match record.identity_key() {
            Some(key) => key.to_string(),
            None => continue,
        };
        if seen.insert(key) {
            unique.push(record);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: Option<&str>, title: Option<&str>) -> JobRecord {
        JobRecord {
            job_title: title.map(str::to_string),
            job_url: url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn first_record_wins_for_repeated_url() {
        let records = vec![
            record(Some("https://x/job/1"), Some("Data Scientist")),
            record(Some("https://x/job/1"), Some("Senior Data Scientist")),
            record(Some("https://x/job/2"), Some("Analyst")),
        ];
        let unique = dedupe(records);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].job_title.as_deref(), Some("Data Scientist"));
        assert_eq!(unique[1].job_url.as_deref(), Some("https://x/job/2"));
    }

    #[test]
    fn title_keys_records_without_url() {
        let records = vec![
            record(None, Some("Analyst")),
            record(None, Some("Analyst")),
        ];
        assert_eq!(dedupe(records).len(), 1);
    }

    #[test]
    fn keyless_records_are_dropped() {
        let records = vec![record(None, None), record(Some("https://x/job/1"), None)];
        assert_eq!(dedupe(records).len(), 1);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let records = vec![
            record(Some("https://x/job/1"), None),
            record(Some("https://x/job/1"), None),
            record(None, Some("Analyst")),
        ];
        let once = dedupe(records);
        let keys: Vec<_> = once.iter().filter_map(JobRecord::identity_key).map(str::to_string).collect();
        let twice = dedupe(once);
        assert_eq!(
            keys,
            twice.iter().filter_map(JobRecord::identity_key).collect::<Vec<_>>()
        );
    }
}
