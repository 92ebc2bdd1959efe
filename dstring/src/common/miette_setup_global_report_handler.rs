// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Global [miette](https://docs.rs/miette/latest/miette/index.html) report handler used
//! by binaries in this crate, so that a [`crate::DStringError`] which bubbles up to
//! `main() -> miette::Result<_>` is rendered with its diagnostic code and help text.

use miette::MietteHandlerOpts;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width is calculated only when the handler is actually used, so if an
/// error never occurs the terminal is never queried.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = crossterm::terminal::size()
            .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| usize::from(columns));
        tracing::debug!(message = "miette::set_hook", terminal_width);
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
