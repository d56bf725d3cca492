use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;

use sport_recommender_cli::build_cli;
use sport_recommender_cli::recommend::input::RecommendConfig;
use sport_recommender_cli::recommend::runner;
use sport_recommender_cli::train::input::TrainConfig;
use sport_recommender_cli::train::trainer;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default()
                .filter_or("SPORTREC_LOG", "error,sport_recommender=info,sportrec=info"),
        )
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("train", sub_m)) => handle_train(sub_m),
        Some(("recommend", sub_m)) => handle_recommend(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_train(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    if config_path.is_none() && matches.get_one::<String>("catalog").is_none() {
        eprintln!("[sportrec::train] No config file provided; default training config:");
        println!("{}", serde_json::to_string_pretty(&TrainConfig::default())?);
        return Ok(());
    }
    let params = TrainConfig::from_arguments(config_path, matches)?;
    log::info!("[sportrec::train] Training on catalog: {}", params.catalog);

    match trainer::run_training(&params) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Training failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_recommend(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    if let Some(path) = config_path {
        log::info!("[sportrec::recommend] Using config: {:?}", path);
    }
    let params = RecommendConfig::from_arguments(config_path, matches)?;

    match runner::run_recommend(&params) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Recommendation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
