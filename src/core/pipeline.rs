use crate::core::merge::Corpus;
use crate::core::parser;
use crate::core::report::ConflictReport;
use crate::core::{ConfigProvider, Entry, Storage};
use crate::utils::error::{MergeError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Every input folded into one list, in first-seen order.
    Merged(Vec<Entry>),
    /// Redefinitions were found; nothing is merged.
    Conflicts(ConflictReport),
}

pub struct MergePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MergePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Reads and parses one input file.
    pub fn extract(&self, path: &str) -> Result<Vec<Entry>> {
        let data = self.storage.read_file(path)?;
        let entries = parser::read_entries(&data).map_err(|e| e.in_file(path))?;
        tracing::debug!("Parsed {} entries from {}", entries.len(), path);
        Ok(entries)
    }

    /// Processes the configured files in order. The first read or parse
    /// failure aborts the run.
    pub fn run(&self) -> Result<MergeOutcome> {
        let files = self.config.input_files();
        let check = self.config.check_redefinitions();
        tracing::info!(
            "Merging {} files{}",
            files.len(),
            if check { " with redefinition checks" } else { "" }
        );

        let mut corpus = Corpus::new();
        let mut report = ConflictReport::new();

        for path in files {
            let entries = self.extract(path)?;

            // All of a file's entries are checked against the corpus as it
            // stood before the file, so they never see each other.
            if check {
                for entry in &entries {
                    report.record(path, entry, &corpus.redefinitions_of(entry));
                }
            }

            let before = corpus.len();
            corpus
                .merge(entries)
                .map_err(|e: MergeError| e.in_file(path))?;
            tracing::debug!(
                "Folded {}: {} new entries, corpus size {}",
                path,
                corpus.len() - before,
                corpus.len()
            );
        }

        if !report.is_empty() {
            tracing::warn!("⚠️ Found {} redefinitions", report.len());
            return Ok(MergeOutcome::Conflicts(report));
        }

        tracing::info!("✅ Merged into {} entries", corpus.len());
        Ok(MergeOutcome::Merged(corpus.into_entries()))
    }
}
