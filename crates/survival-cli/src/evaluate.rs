//! CLI helpers for training, pruning and evaluating the survival models.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use survival_classifiers::config::PipelineConfig;
use survival_classifiers::data_handling::PassengerRow;
use survival_classifiers::io::read_passengers_csv;
use survival_classifiers::pipeline::{Evaluation, FittedModels, SurvivalLearner};
use survival_classifiers::report::Report;

use crate::util::validate_csv_file;

/// Load a pipeline configuration from a JSON file.
pub fn load_evaluate_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: PipelineConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    Ok(config)
}

fn learner_for<P: AsRef<Path>>(
    data_path: P,
    config: &PipelineConfig,
) -> Result<(SurvivalLearner, Vec<PassengerRow>)> {
    validate_csv_file(&data_path)?;
    let rows = read_passengers_csv(&data_path)?;
    let learner = SurvivalLearner::new(config.clone())?;
    Ok((learner, rows))
}

/// Split, fit and score every configured hypothesis on a passenger CSV.
pub fn run_evaluation<P: AsRef<Path>>(data_path: P, config: &PipelineConfig) -> Result<Evaluation> {
    let (learner, rows) = learner_for(data_path, config)?;
    learner.evaluate(rows)
}

/// Fit the trees on the training part of a passenger CSV without scoring.
pub fn run_fit<P: AsRef<Path>>(data_path: P, config: &PipelineConfig) -> Result<FittedModels> {
    let (learner, rows) = learner_for(data_path, config)?;
    let (train, _test) = learner.split(rows)?;
    learner.fit(&train)
}

/// Write the report as pretty JSON to `output_path`, or to stdout.
pub fn write_report(report: &Report, output_path: Option<&Path>) -> Result<()> {
    let json = report.to_json()?;
    match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create report file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{}", json)?;
            writer.flush()?;
            log::info!("Wrote report to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Render a fitted tree together with the pruning record.
pub fn render_models(models: &FittedModels, unpruned: bool) -> String {
    let mut out = String::new();
    if unpruned {
        out.push_str(&format!(
            "Unpruned tree ({} leaves, depth {}):\n",
            models.unpruned.leaf_count(),
            models.unpruned.depth()
        ));
        out.push_str(&models.unpruned.to_string());
    } else {
        out.push_str(&format!(
            "Pruned tree ({} leaves, depth {}):\n",
            models.pruned.leaf_count(),
            models.pruned.depth()
        ));
        out.push_str(&models.pruned.to_string());
    }
    let counts: Vec<String> = models
        .sequence_leaf_counts
        .iter()
        .map(|c| c.to_string())
        .collect();
    out.push_str(&format!("\nPruning sequence leaf counts: {}\n", counts.join(" -> ")));
    let risks: Vec<String> = models
        .validation_risks
        .iter()
        .map(|r| format!("{:.4}", r))
        .collect();
    out.push_str(&format!(
        "Validation risks: {} (selected candidate {})\n",
        risks.join(", "),
        models.selected_index
    ));
    out
}
