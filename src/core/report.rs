use crate::domain::model::Entry;
use serde::Serialize;
use std::fmt;

const MARKER: &str = "=====";

/// An incoming entry that redefines entries already merged from earlier files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub file: String,
    pub entry: String,
    pub existing: Vec<String>,
}

impl Conflict {
    pub fn key(&self) -> String {
        format!("{}:{}", self.file, self.entry)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    conflicts: Vec<Conflict>,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `entry` from `file` as redefining `existing`. Nothing is
    /// recorded for an empty `existing`, or for a key already reported.
    pub fn record(&mut self, file: &str, entry: &Entry, existing: &[&Entry]) {
        if existing.is_empty() {
            return;
        }

        let conflict = Conflict {
            file: file.to_string(),
            entry: entry.to_string(),
            existing: existing.iter().map(|e| e.to_string()).collect(),
        };
        if self.conflicts.iter().any(|c| c.key() == conflict.key()) {
            return;
        }
        self.conflicts.push(conflict);
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Redefinitions found {}", MARKER, MARKER)?;
        for conflict in &self.conflicts {
            writeln!(f, "[{}]", conflict.key())?;
            for existing in &conflict.existing {
                writeln!(f, "    {}", existing)?;
            }
        }
        write!(
            f,
            "{} {} redefinition(s), nothing merged {}",
            MARKER,
            self.conflicts.len(),
            MARKER
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matches_are_not_recorded() {
        let mut report = ConflictReport::new();
        report.record("a.csv", &Entry::new("まち", "town", ""), &[]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_repeated_key_is_recorded_once() {
        let city = Entry::new("まち", "city", "1");
        let town = Entry::new("まち", "town", "");

        let mut report = ConflictReport::new();
        report.record("b.csv", &town, &[&city]);
        report.record("b.csv", &town, &[&city]);
        report.record("c.csv", &town, &[&city]);

        let keys: Vec<String> = report.conflicts().iter().map(Conflict::key).collect();
        assert_eq!(keys, vec!["b.csv:まち,town,", "c.csv:まち,town,"]);
    }

    #[test]
    fn test_report_layout() {
        let mut report = ConflictReport::new();
        report.record(
            "b.csv",
            &Entry::new("まち", "town", "2"),
            &[&Entry::new("まち", "city", "1"), &Entry::new("とし", "town", "")],
        );

        assert_eq!(
            report.to_string(),
            "===== Redefinitions found =====\n\
             [b.csv:まち,town,2]\n\
             \x20   まち,city,1\n\
             \x20   とし,town,\n\
             ===== 1 redefinition(s), nothing merged ====="
        );
    }
}
