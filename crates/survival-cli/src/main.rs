use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use survival_classifiers::config::PipelineConfig;
use survival_cli::evaluate::{
    load_evaluate_config, render_models, run_evaluation, run_fit, write_report,
};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SURVIVAL_LOG", "error,survival=info"))
        .init();

    let data_arg = || {
        Arg::new("data")
            .help("Path to the passenger CSV file (Kaggle Titanic columns)")
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    };
    let config_arg = || {
        Arg::new("config")
            .help("Path to the pipeline JSON configuration file")
            .required(false)
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    };
    let seed_arg = || {
        Arg::new("seed")
            .long("seed")
            .help("Seed for the row shuffle. Overrides the seed in the configuration file.")
            .value_parser(clap::value_parser!(u64))
            .value_hint(ValueHint::Other)
    };

    let matches = Command::new("survival")
        .version(clap::crate_version!())
        .about("Decision-tree survival classifiers for the Titanic passenger list")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("evaluate")
                .about("Train, prune and score every configured hypothesis on held-out rows")
                .arg(data_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Path to write the JSON report. Defaults to stdout.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(seed_arg()),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the selected tree and its pruning record")
                .arg(data_arg())
                .arg(config_arg())
                .arg(seed_arg())
                .arg(
                    Arg::new("unpruned")
                        .long("unpruned")
                        .help("Print the unpruned tree instead of the selected one.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("evaluate", sub_m)) => handle_evaluate(sub_m),
        Some(("tree", sub_m)) => handle_tree(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn pipeline_config(matches: &ArgMatches) -> Result<PipelineConfig> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[Survival] Using config: {:?}", config_path);
        load_evaluate_config(config_path)?
    } else {
        log::info!("[Survival] No config provided; using defaults.");
        PipelineConfig::default()
    };

    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn handle_evaluate(matches: &ArgMatches) -> Result<()> {
    let data_path: &PathBuf = matches.get_one("data").unwrap();
    let output_path: Option<&PathBuf> = matches.get_one("output_file");
    log::info!("[Survival] Evaluating passengers from {:?}", data_path);

    let config = pipeline_config(matches)?;
    match run_evaluation(data_path, &config) {
        Ok(evaluation) => {
            println!(
                "Trained on {} passengers, tested on {}\n",
                evaluation.n_train, evaluation.n_test
            );
            print!("{}", evaluation.report);
            if let Some(path) = output_path {
                write_report(&evaluation.report, Some(path.as_path()))?;
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Evaluation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_tree(matches: &ArgMatches) -> Result<()> {
    let data_path: &PathBuf = matches.get_one("data").unwrap();
    log::info!("[Survival] Fitting tree on passengers from {:?}", data_path);

    let config = pipeline_config(matches)?;
    match run_fit(data_path, &config) {
        Ok(models) => {
            print!("{}", render_models(&models, matches.get_flag("unpruned")));
            Ok(())
        }
        Err(e) => {
            log::error!("Tree fitting failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
