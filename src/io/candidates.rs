// src/io/candidates.rs

use crate::error::Result;
use crate::strategy::reorder::ReorderPolicy;
use std::io;
use std::path::Path;

/// The candidate list used when none is supplied.
pub fn demonstration_candidates() -> Vec<ReorderPolicy> {
    [
        (10, 60),
        (30, 60),
        (50, 60),
        (30, 60),
        (40, 60),
        (60, 90),
        (80, 100),
        (80, 130),
        (90, 120),
    ]
    .into_iter()
    .map(|(s, big_s)| ReorderPolicy::new(s, big_s))
    .collect()
}

/// Reads candidates from CSV with an `s,S` header row.
///
/// Candidates are not validated here; the comparator skips invalid ones.
pub fn read_candidates<R: io::Read>(reader: R) -> Result<Vec<ReorderPolicy>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut candidates: Vec<ReorderPolicy> = Vec::new();
    for record in rdr.deserialize() {
        candidates.push(record?);
    }
    Ok(candidates)
}

pub fn read_candidates_file(file_path: &Path) -> Result<Vec<ReorderPolicy>> {
    let file = std::fs::File::open(file_path)?;
    read_candidates(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;

    #[test]
    fn test_reads_pairs_in_file_order() {
        let data = "s,S\n20,60\n 40 , 100\n70,50\n";
        let candidates = read_candidates(data.as_bytes()).unwrap();
        assert_eq!(
            candidates,
            vec![
                ReorderPolicy::new(20, 60),
                ReorderPolicy::new(40, 100),
                ReorderPolicy::new(70, 50),
            ]
        );
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let data = "s,S\n20,sixty\n";
        let err = read_candidates(data.as_bytes()).unwrap_err();
        assert!(matches!(err, InventoryError::Csv(_)));
    }

    #[test]
    fn test_demonstration_list() {
        let candidates = demonstration_candidates();
        assert_eq!(candidates.len(), 9);
        assert!(candidates.iter().all(|c| c.validate().is_ok()));
    }
}
