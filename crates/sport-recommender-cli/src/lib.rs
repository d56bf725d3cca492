pub mod recommend;
pub mod train;
pub mod util;

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, ValueHint};

/// Command line definition shared by the binary and its tests.
pub fn build_cli() -> Command {
    Command::new("sportrec")
        .version(clap::crate_version!())
        .about("\u{1F3C3} sportrec - KNN recommendations for university sports")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("train")
                .about("Fit the scaler and nearest-neighbour index on a sport catalog")
                .arg(
                    Arg::new("catalog")
                        .help("Path to the sport catalog (*.tsv, *.csv or *.json)")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a training configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help(
                            "File path the trained model will be written to. \
                             Defaults to knn_recommender.json.",
                        )
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("name_column")
                        .long("name-column")
                        .help("Catalog column holding the sport name. Defaults to name, sport or Angebot.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("recommend")
                .about("Rank sports against a set of preference tags")
                .arg(
                    Arg::new("config")
                        .help("Path to a recommendation configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("model_path")
                        .short('m')
                        .long("model")
                        .help("Path to the trained model file (*.json)")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .help(
                            "Train an in-memory model from this catalog instead of loading --model. \
                             Unlike a missing --model file, an unreadable or invalid catalog is an error.",
                        )
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("focus")
                        .long("focus")
                        .help("Focus tags, e.g. strength,relaxation")
                        .value_delimiter(',')
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("intensity")
                        .long("intensity")
                        .help("Intensity levels: low, moderate, high")
                        .value_delimiter(',')
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("setting")
                        .long("setting")
                        .help("Setting tags: team, fun, duo, solo, competitive")
                        .value_delimiter(',')
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("min_score")
                        .long("min-score")
                        .help("Minimum match score (0-100). Defaults to 50.")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("max_results")
                        .long("max-results")
                        .help("Maximum number of recommendations. Defaults to 10.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("exclude")
                        .long("exclude")
                        .help("Sport names never to recommend")
                        .value_delimiter(',')
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("explain")
                        .long("explain")
                        .help("Add the features each sport shares with the query")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Write recommendations to *.tsv, *.csv or *.json instead of stdout")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
