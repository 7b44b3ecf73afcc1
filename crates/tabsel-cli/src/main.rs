use anyhow::Result;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use tabsel_cli::commands::scale::{run_scale_column, run_scale_values};
use tabsel_cli::commands::subset::{run_subset, write_output, SubsetArgs};
use tabsel_cli::config::{default_template, load_or_default, TabselConfig};
use tabsel_cli::util::validate_tsv_or_csv_file;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("TABSEL_LOG", "error,tabsel=info"))
        .init();

    let config_arg = || {
        Arg::new("config")
            .long("config")
            .help("Path to a JSON configuration file")
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    };
    let one_based_arg = || {
        Arg::new("one_based")
            .long("one-based")
            .help("Treat row and column indices as 1-based")
            .action(ArgAction::SetTrue)
    };
    let output_arg = || {
        Arg::new("output_file")
            .short('o')
            .long("output")
            .help("Path to write the result. Defaults to stdout.")
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    };

    let matches = Command::new("tabsel")
        .version(clap::crate_version!())
        .about("Subset and rescale delimited measurement tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("subset")
                .about("Select rows and columns of a table by index or name")
                .arg(
                    Arg::new("input")
                        .help("Path to the delimited input table")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .help("Row indices, e.g. '0,2,4' or '1..3'. Order and repeats are kept.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("cols")
                        .short('c')
                        .long("cols")
                        .help("Column indices or names, e.g. '0,2' or 'measure,timeDiagnosis'.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(output_arg())
                .arg(config_arg())
                .arg(one_based_arg()),
        )
        .subcommand(
            Command::new("scale")
                .about("Multiply a list of values, or one table column, by a factor")
                .arg(
                    Arg::new("values")
                        .long("values")
                        .help("Comma-separated values to scale")
                        .allow_negative_numbers(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Path to the delimited input table")
                        .requires("column")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("column")
                        .long("column")
                        .help("Name of the column to scale when --input is given")
                        .requires("input")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .group(
                    ArgGroup::new("source")
                        .args(["values", "input"])
                        .required(true),
                )
                .arg(
                    Arg::new("factor")
                        .short('f')
                        .long("factor")
                        .help("Multiplier applied to every value")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(output_arg())
                .arg(config_arg()),
        )
        .subcommand(Command::new("config").about("Print the default JSON configuration"))
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("subset", sub_m)) => handle_subset(sub_m),
        Some(("scale", sub_m)) => handle_scale(sub_m),
        Some(("config", _)) => {
            println!("{}", default_template());
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    if let Err(e) = outcome {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<TabselConfig> {
    load_or_default(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
}

fn handle_subset(matches: &ArgMatches) -> Result<()> {
    let input: &String = matches.get_one("input").unwrap();
    validate_tsv_or_csv_file(input)?;

    let mut config = load_config(matches)?;
    if matches.get_flag("one_based") {
        config.one_based = true;
    }

    let args = SubsetArgs {
        input: PathBuf::from(input),
        rows: matches.get_one::<String>("rows").cloned(),
        cols: matches.get_one::<String>("cols").cloned(),
        output: matches.get_one::<PathBuf>("output_file").cloned(),
    };

    let table = run_subset(&config, &args)?;
    write_output(&config, &table, args.output.as_deref())
}

fn handle_scale(matches: &ArgMatches) -> Result<()> {
    let factor: f64 = *matches.get_one("factor").unwrap();
    let output: Option<&PathBuf> = matches.get_one("output_file");
    let config = load_config(matches)?;

    if let Some(values) = matches.get_one::<String>("values") {
        let scaled = run_scale_values(values, factor)?;
        match output {
            Some(path) => {
                std::fs::write(path, format!("{}\n", scaled))?;
                log::info!("[tabsel::scale] Wrote {} values to {:?}", scaled.len(), path);
            }
            None => println!("{}", scaled),
        }
        return Ok(());
    }

    let input: &String = matches.get_one("input").unwrap();
    let column: &String = matches.get_one("column").unwrap();
    validate_tsv_or_csv_file(input)?;
    let table = run_scale_column(&config, &PathBuf::from(input), column, factor)?;
    write_output(&config, &table, output.map(PathBuf::as_path))
}
