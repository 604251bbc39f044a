use std::io::{self, Write};
use std::path::Path;

use clap::{Parser, error::ErrorKind};
use tracing::info;

use crate::assigner::{Assignment, assign_next};
use crate::config::{AssignConfig, OrderingMode};
use crate::constants::apps::{BIN_NAME, LOG_PREFIX};
use crate::errors::AssignError;
use crate::report::render_report;
use crate::transport::DatasetFile;

#[derive(Debug, Parser)]
#[command(
    name = "assign_change_password",
    version,
    disable_help_subcommand = true,
    about = "Assign the next unassigned domains for change-password forms",
    long_about = "Assigns the desired number of domains to the given person and prints the assignments. You can switch between the Trexa ordering and the shuffled ordering with the --shuffled flag.",
    after_help = "The dataset is read from and written back to tranco_100k_alexa_100k_union_shuffled_2019-12-14.csv in the current directory."
)]
/// CLI for `assign_change_password`.
///
/// Common usage:
/// - Next 10 Trexa-ranked domains: `assign_change_password 10 erik`
/// - Next 10 shuffled domains: `assign_change_password 10 erik --shuffled`
struct AssignChangePasswordCli {
    #[arg(
        value_parser = parse_positive_usize,
        help = "The number of domains you want"
    )]
    num_domains: usize,
    #[arg(
        value_parser = parse_assignee,
        help = "The name to assign to (\"DANIEL\", \"ERIK\", or \"VLAD\")"
    )]
    assignee: String,
    #[arg(long, help = "Switches from top domains to shuffled domains")]
    shuffled: bool,
}

/// Process entry point: installs logging and runs against the fixed dataset
/// path, printing the report to stdout.
pub fn run_assign_change_password<I>(args_iter: I) -> Result<(), AssignError>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_assign_with_dataset(args_iter, &AssignConfig::default_dataset_path(), &mut out)
}

/// Parse `args_iter` (without the program name) and run against `dataset_path`.
///
/// `--help` and `--version` print and return `Ok` without touching the dataset.
pub fn run_assign_with_dataset<I, W>(
    args_iter: I,
    dataset_path: &Path,
    out: &mut W,
) -> Result<(), AssignError>
where
    I: Iterator<Item = String>,
    W: Write,
{
    let Some(cli) = parse_cli::<AssignChangePasswordCli, _>(
        std::iter::once(BIN_NAME.to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let config = AssignConfig::new(
        dataset_path,
        cli.num_domains,
        &cli.assignee,
        OrderingMode::from_shuffled_flag(cli.shuffled),
    )?;
    run_assignment(&config, out)?;
    Ok(())
}

/// Load, assign, report, save.
pub fn run_assignment<W: Write>(
    config: &AssignConfig,
    out: &mut W,
) -> Result<Assignment, AssignError> {
    let file = DatasetFile::new(&config.dataset_path);
    let mut dataset = file.load()?;
    info!(
        "{LOG_PREFIX} {} of {} domains unassigned in {}",
        dataset.unassigned_count(),
        dataset.len(),
        file.path().display()
    );

    let assignment = assign_next(&mut dataset, config);
    out.write_all(render_report(&assignment).as_bytes())?;
    out.flush()?;

    file.save(&dataset)?;
    Ok(assignment)
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw.parse::<usize>().map_err(|_| {
        format!(
            "Could not parse num_domains value '{}' as a positive integer",
            raw
        )
    })?;
    if parsed == 0 {
        return Err("num_domains must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_assignee(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("assignee must not be empty".to_string());
    }
    Ok(raw.to_string())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, AssignError>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
