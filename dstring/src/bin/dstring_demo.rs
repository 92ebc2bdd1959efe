// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Walks a [`DString`] through its lifecycle (init, append, resize, clear, release) and
//! then through a path round trip, printing the content after each step.
//!
//! ```text
//! cargo run --bin dstring_demo -- --log-stderr --log-level trace
//! cargo run --bin dstring_demo -- --separator backslash --log-file /tmp/dstring.log
//! ```

use clap::{Parser, ValueEnum};
use miette::IntoDiagnostic;
use r3bl_dstring::{DString, DisplayPreference, PathSeparator, TracingConfig,
                   WriterConfig, ok, setup_default_miette_global_report_handler,
                   try_initialize_logging_global};
use tracing_core::LevelFilter;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

#[derive(Debug, Parser)]
#[command(
    name = "dstring_demo",
    about = "Exercise the DString buffer engine and path editor",
    version
)]
struct CliArg {
    /// Log level. Defaults to `debug` if a log writer is given, otherwise logging is off.
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Write log output to this file.
    #[arg(long)]
    log_file: Option<String>,

    /// Write log output to stderr (stdout is reserved for the demo output).
    #[arg(long)]
    log_stderr: bool,

    /// Separator used for the path round trip.
    #[arg(long, value_enum, default_value_t = PathSeparator::NATIVE)]
    separator: PathSeparator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Off => LevelFilter::OFF,
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<&CliArg> for TracingConfig {
    fn from(cli_arg: &CliArg) -> Self {
        let display = cli_arg
            .log_stderr
            .then(|| TracingConfig::from(DisplayPreference::Stderr));
        let file = cli_arg
            .log_file
            .clone()
            .map(|file| TracingConfig::from(WriterConfig::File(file)));

        // Each writer brings in `debug`, so no writer means `off`.
        let mut it = [display, file]
            .into_iter()
            .flatten()
            .fold(TracingConfig::default(), |acc, it| acc + it);

        if let Some(level) = cli_arg.log_level {
            it.level_filter = level.into();
        }

        // A level w/out a writer goes to stderr.
        if it.writer_config == WriterConfig::None && it.level_filter != LevelFilter::OFF {
            it.writer_config = WriterConfig::Display(DisplayPreference::Stderr);
        }

        it
    }
}

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CliArg::parse();
    try_initialize_logging_global(&cli_arg)?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Start dstring_demo", cli_arg = ?cli_arg);

    run_lifecycle()?;
    run_path_round_trip(cli_arg.separator)?;

    tracing::debug!(message = "Stop dstring_demo");
    ok!()
}

fn print_content(label: &str, dstr: &DString) {
    println!("{label} = |{}|", dstr.as_c_str().to_string_lossy());
}

fn run_lifecycle() -> miette::Result<()> {
    let mut dstr = DString::initialize(10).into_diagnostic()?;
    trace_step("initialize", &dstr);

    for _ in 0..2 {
        for word in ["foo", "bar", "baz"] {
            dstr.append(word).into_diagnostic()?;
            trace_step("append", &dstr);
        }
        print_content("s", &dstr);
    }

    for capacity in [12, 24] {
        dstr.resize(capacity).into_diagnostic()?;
        trace_step("resize", &dstr);
        print_content("s", &dstr);
    }

    dstr.clear();
    trace_step("clear", &dstr);
    print_content("s", &dstr);

    dstr.release();
    trace_step("release", &dstr);
    dstr.release();
    trace_step("release", &dstr);

    ok!()
}

fn run_path_round_trip(separator: PathSeparator) -> miette::Result<()> {
    let mut dstr = DString::initialize(0).into_diagnostic()?;
    let mut path = dstr.path(separator);

    for segment in ["foo", "bar", "baz"] {
        path.path_append(segment).into_diagnostic()?;
    }
    print_path(&path.view());

    for ext in [".c", ".jpeg"] {
        path.ext_set(ext).into_diagnostic()?;
        print_path(&path.view());
    }

    path.filename_set("a.out").into_diagnostic()?;
    print_path(&path.view());

    let view = path.view();
    tracing::debug!(
        message = "path parts",
        dirname = ?view.dirname_get().map(String::from_utf8_lossy),
        filename = ?view.filename_get().map(String::from_utf8_lossy),
        ext = ?view.ext_get().map(String::from_utf8_lossy),
    );

    ok!()
}

fn print_path(view: &r3bl_dstring::PathView<'_>) {
    println!("path = |{}|", String::from_utf8_lossy(view.bytes));
}

fn trace_step(step: &str, dstr: &DString) {
    tracing::debug!(
        message = "step",
        step,
        content = %dstr,
        length = dstr.len(),
        capacity = dstr.capacity(),
        initialized = dstr.is_initialized(),
    );
}
