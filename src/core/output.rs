use crate::core::pipeline::MergeOutcome;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// `source,target,tags` lines
    #[default]
    Text,
    Json,
}

/// Renders an outcome for stdout. Text output has no trailing newline.
pub fn render(outcome: &MergeOutcome, format: OutputFormat) -> Result<String> {
    let rendered = match (format, outcome) {
        (OutputFormat::Text, MergeOutcome::Merged(entries)) => entries
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        (OutputFormat::Text, MergeOutcome::Conflicts(report)) => report.to_string(),
        (OutputFormat::Json, MergeOutcome::Merged(entries)) => {
            serde_json::to_string_pretty(entries)?
        }
        (OutputFormat::Json, MergeOutcome::Conflicts(report)) => {
            serde_json::to_string_pretty(report)?
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::ConflictReport;
    use crate::core::Entry;

    #[test]
    fn test_render_text() {
        let outcome = MergeOutcome::Merged(vec![
            Entry::new("まち", "city / town", ""),
            Entry::new("うち", "house", "2 10"),
        ]);
        assert_eq!(
            render(&outcome, OutputFormat::Text).unwrap(),
            "まち,city / town,\nうち,house,10 2"
        );
    }

    #[test]
    fn test_render_empty_merge() {
        let outcome = MergeOutcome::Merged(Vec::new());
        assert_eq!(render(&outcome, OutputFormat::Text).unwrap(), "");
        assert_eq!(render(&outcome, OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_render_json_entries() {
        let outcome = MergeOutcome::Merged(vec![Entry::new("まち", "city", "2 1")]);
        let json: serde_json::Value =
            serde_json::from_str(&render(&outcome, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{ "source": "まち", "target": "city", "tags": ["1", "2"] }])
        );
    }

    #[test]
    fn test_render_json_conflicts() {
        let mut report = ConflictReport::new();
        report.record(
            "b.csv",
            &Entry::new("まち", "town", ""),
            &[&Entry::new("まち", "city", "1")],
        );
        let json: serde_json::Value = serde_json::from_str(
            &render(&MergeOutcome::Conflicts(report), OutputFormat::Json).unwrap(),
        )
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "conflicts": [
                    { "file": "b.csv", "entry": "まち,town,", "existing": ["まち,city,1"] }
                ]
            })
        );
    }
}
