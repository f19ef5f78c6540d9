use super::taxonomy::Taxonomy;
use crate::domain::common::{CatalogRecord, Categorized};
use std::collections::{BTreeMap, HashMap};

/// Count of records per status, zero-filled for every status in the taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts<S: Taxonomy> {
    counts: HashMap<S, usize>,
    unclassified: usize,
}

impl<S: Taxonomy> StatusCounts<S> {
    /// Count for `status`; 0 for statuses outside the taxonomy
    pub fn get(&self, status: &S) -> usize {
        self.counts.get(status).copied().unwrap_or(0)
    }

    /// Records whose status is not part of the taxonomy
    pub fn unclassified(&self) -> usize {
        self.unclassified
    }

    /// Sum over taxonomy statuses only
    pub fn classified_total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Every record counted, recognized or not
    pub fn total(&self) -> usize {
        self.classified_total() + self.unclassified
    }

    /// `(status, count)` pairs in taxonomy display order
    pub fn iter(&self) -> Vec<(S, usize)> {
        S::all()
            .into_iter()
            .map(|status| {
                let count = self.get(&status);
                (status, count)
            })
            .collect()
    }
}

/// Count records per status over the record type's status taxonomy
pub fn aggregate<R: CatalogRecord>(records: &[R]) -> StatusCounts<R::Status> {
    let mut counts: HashMap<R::Status, usize> =
        R::Status::all().into_iter().map(|status| (status, 0)).collect();
    let mut unclassified = 0;

    for record in records {
        match counts.get_mut(record.status()) {
            Some(count) => *count += 1,
            None => unclassified += 1,
        }
    }

    StatusCounts {
        counts,
        unclassified,
    }
}

/// Number of records per category label
pub fn count_by_category<R: Categorized>(records: &[R]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.category().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Group records by category, sections ordered by first appearance
pub fn group_by_category<R: Categorized + Clone>(records: &[R]) -> Vec<(String, Vec<R>)> {
    let mut groups: Vec<(String, Vec<R>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(name, _)| name.as_str() == record.category()) {
            Some((_, items)) => items.push(record.clone()),
            None => groups.push((record.category().to_string(), vec![record.clone()])),
        }
    }
    groups
}

/// Whole percent of `part` in `whole`, rounded; 0 when `whole` is 0
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_incident_report::IncidentReport;
    use crate::enums::report_status::ReportStatus;
    use crate::shared::repository::{FixtureRepository, RecordRepository};

    fn reports() -> Vec<IncidentReport> {
        FixtureRepository.list_records().unwrap()
    }

    #[test]
    fn test_counts_cover_whole_taxonomy() {
        let counts = aggregate(&reports());
        let statuses: Vec<ReportStatus> = counts.iter().into_iter().map(|(s, _)| s).collect();
        assert_eq!(statuses, ReportStatus::all());
        assert_eq!(counts.get(&ReportStatus::Pending), 0);
    }

    #[test]
    fn test_counts_sum_to_len_when_all_recognized() {
        let records = reports();
        assert!(records.iter().all(|r| r.status.is_recognized()));
        let counts = aggregate(&records);
        assert_eq!(counts.classified_total(), records.len());
        assert_eq!(counts.unclassified(), 0);
    }

    #[test]
    fn test_unrecognized_status_is_counted_apart() {
        let mut records = reports();
        records[0].status = ReportStatus::from_label("Escalated");
        let counts = aggregate(&records);
        assert_eq!(counts.unclassified(), 1);
        assert_eq!(counts.total(), records.len());
        assert_eq!(counts.classified_total(), records.len() - 1);
    }

    #[test]
    fn test_order_does_not_matter() {
        let records = reports();
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(aggregate(&records), aggregate(&reversed));
    }

    #[test]
    fn test_empty_collection() {
        let counts = aggregate::<IncidentReport>(&[]);
        assert_eq!(counts.total(), 0);
        assert!(counts.iter().iter().all(|(_, c)| *c == 0));
    }

    #[test]
    fn test_group_by_category_keeps_first_appearance_order() {
        let records = reports();
        let groups = group_by_category(&records);
        let names: Vec<&str> = groups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Street Light", "Incident", "Accident"]);
        let total: usize = groups.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_count_by_category() {
        let counts = count_by_category(&reports());
        assert_eq!(counts.get("Accident"), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(3, 3), 100);
    }
}
