use std::ffi::OsString;
use std::process::ExitCode;

use clap::error::ErrorKind as ClapErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{HeyArgs, PositiveUsize, default_cpus, validate};
use crate::config::{apply_config, load_config};
use crate::engine::{HttpEngine, Work};
use crate::error::{AppError, AppResult};
use crate::lifecycle::{RunMode, dispatch};
use crate::request::build_request;

/// Runs the CLI with the process arguments and maps the outcome to an exit
/// code: 0 on success, 1 on any validation, usage or I/O error.
#[must_use]
pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

#[must_use]
pub fn run_from<I, T>(raw_args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match execute(raw_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn execute<I, T>(raw_args: I) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Some((mut args, matches)) = parse_args(raw_args)? else {
        return Ok(());
    };

    crate::logger::init_logging(args.verbose);

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    let params = validate(&args)?;
    let request = build_request(&params)?;
    let mode = RunMode::from_params(&params);
    let duration = params.duration();
    let work = Work::new(request, &params);

    let worker_threads = args.cpus.map_or_else(default_cpus, PositiveUsize::get);
    tracing::debug!(worker_threads, ?mode, "Starting runtime");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let engine = HttpEngine::new(work)?;
        let mut stdout = std::io::stdout();
        dispatch(&engine, mode, duration, &mut stdout).await
    })
}

/// Returns `None` when clap already handled `--help` or `--version`.
fn parse_args<I, T>(raw_args: I) -> AppResult<Option<(HeyArgs, ArgMatches)>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match HeyArgs::command().try_get_matches_from(raw_args) {
        Ok(matches) => matches,
        Err(err)
            if matches!(
                err.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            err.print()?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let args = HeyArgs::from_arg_matches(&matches)?;
    Ok(Some((args, matches)))
}

fn report_failure(err: &AppError) {
    if let AppError::Clap { source } = err {
        drop(source.print());
    } else if err.shows_usage() {
        eprintln!("{}\n", err);
        eprintln!("{}", HeyArgs::command().render_help());
    } else {
        eprintln!("{}", err);
    }
}
