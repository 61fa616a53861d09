//! Risk/noise report for the scored hypotheses.
//!
//! `Report` renders as an aligned console table through `Display` and
//! serializes to JSON for downstream tooling.
use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::stats::Assessment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub name: String,
    pub risk: f64,
    pub noise: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, assessment: Assessment) {
        self.entries.push(ReportEntry {
            name: name.into(),
            risk: assessment.risk,
            noise: assessment.noise,
        });
    }

    pub fn get(&self, name: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .entries
            .iter()
            .map(|entry| entry.name.len())
            .chain(std::iter::once("Hypothesis".len()))
            .max()
            .unwrap_or(0);
        writeln!(f, "{:<width$}  {:>8}  {:>8}", "Hypothesis", "Risk", "Noise", width = width)?;
        for entry in &self.entries {
            writeln!(
                f,
                "{:<width$}  {:>8.4}  {:>8.4}",
                entry.name,
                entry.risk,
                entry.noise,
                width = width
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_table_and_json() {
        let mut report = Report::new();
        report.push("Everyone dies", Assessment { risk: 0.375, noise: 0.5 });
        report.push("Pruned tree", Assessment { risk: 0.2, noise: 0.1 });

        let table = report.to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Hypothesis"));
        assert!(lines[1].contains("0.3750"));
        assert_eq!(report.get("Pruned tree").map(|e| e.risk), Some(0.2));

        let parsed: Report = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(parsed, report);
    }
}
