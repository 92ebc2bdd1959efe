// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use tracing_appender::rolling::{self, RollingFileAppender};

/// File writer for the tracing file layer. It never rotates, so the whole run ends up in
/// `path_str`.
///
/// # Errors
///
/// If `path_str` has no file name (eg: it is empty or ends in `..`).
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't use {} as a log file, it has no file name.", path.display())
    })?;

    // `Path::parent` is `Some("")` for a bare file name.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok(rolling::never(parent, file_name))
}
