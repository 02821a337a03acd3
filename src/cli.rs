// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::consts::MAX_TIMEOUT_SECS;
use crate::config::options::AppOptions;
use crate::data::ReportRow;
use crate::error::Error;
use crate::progress::Progress;

pub const HELP: &str = include_str!("cli_help.txt");

/// Parse the process arguments and run. `-h` prints help and returns.
pub fn run() -> Result<(), Error> {
    let Some(opts) = parse_args(env::args().skip(1))? else {
        eprintln!("{HELP}");
        return Ok(());
    };

    if let Err(e) = crate::logging::init(&opts.log.file, opts.log.level) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let summary = if opts.quiet {
        crate::runner::run(&opts, None)?
    } else {
        let mut console = ConsoleProgress::default();
        crate::runner::run(&opts, Some(&mut console))?
    };

    if !opts.quiet {
        println!(
            "Wrote {} ({} stores, {} with email, {} with products)",
            summary.output.display(),
            summary.stores,
            summary.with_email,
            summary.with_products,
        );
    }
    Ok(())
}

/// `Ok(None)` when help was requested.
pub fn parse_args<I>(args: I) -> Result<Option<AppOptions>, Error>
where
    I: IntoIterator<Item = String>,
{
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut opts = AppOptions::new("", "");

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => input = Some(PathBuf::from(value(&mut args, &a)?)),
            "-o" | "--output" => output = Some(PathBuf::from(value(&mut args, &a)?)),
            "-w" | "--workers" => {
                opts.scrape.workers = number(&value(&mut args, &a)?, &a)?;
                if opts.scrape.workers == 0 {
                    return Err(usage("--workers must be at least 1"));
                }
            }
            "--timeout" => {
                opts.scrape.timeout_secs = number(&value(&mut args, &a)?, &a)?;
                if !(1..=MAX_TIMEOUT_SECS).contains(&opts.scrape.timeout_secs) {
                    return Err(usage(&format!("--timeout must be 1..={MAX_TIMEOUT_SECS}")));
                }
            }
            "--pause-ms" => opts.scrape.pause_ms = number(&value(&mut args, &a)?, &a)?,
            "--log" => opts.log.file = PathBuf::from(value(&mut args, &a)?),
            "-q" | "--quiet" => opts.quiet = true,
            "-h" | "--help" => return Ok(None),
            v if v.len() > 1 && v.starts_with('-') && v[1..].chars().all(|c| c == 'v') => {
                for _ in 1..v.len() {
                    opts.log.raise();
                }
            }
            _ => return Err(usage(&format!("Unknown arg: {a}"))),
        }
    }

    opts.input = input.ok_or_else(|| usage("Missing -i <input.csv>"))?;
    opts.output = output.ok_or_else(|| usage("Missing -o <output.csv>"))?;
    Ok(Some(opts))
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, Error> {
    args.next().ok_or_else(|| usage(&format!("Missing value for {flag}")))
}

fn number<T: std::str::FromStr>(v: &str, flag: &str) -> Result<T, Error> {
    v.parse().map_err(|_| usage(&format!("Invalid number for {flag}: {v}")))
}

fn usage(msg: &str) -> Error {
    Error::Usage(format!("{msg} (see --help)"))
}

/// Prints one line per finished store.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, row: &ReportRow) {
        self.done += 1;
        println!("[{}/{}] {}", self.done, self.total, status_line(row));
    }
}

/// `domain ... OK (email, 2 products)`, or `domain ... KO` when nothing was found.
fn status_line(row: &ReportRow) -> String {
    if row.is_empty() {
        return format!("{} ... KO", row.domain);
    }
    let email = if row.contact.email.is_some() { "email" } else { "no email" };
    format!("{} ... OK ({email}, {} products)", row.domain, row.products_found())
}
