// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::{dispatcher, subscriber};
use tracing_core::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;

use super::try_create_layers;

/// Configure tracing for the binaries in this crate. Logs can go to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Anything that implements [`Into<TracingConfig>`] can be passed to
/// [`super::try_initialize_logging_global()`], and configs compose w/ `+`:
///
/// ```
/// use r3bl_dstring::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// let file: TracingConfig = WriterConfig::File("demo.log".to_string()).into();
/// let config = TracingConfig::default() + display + file;
///
/// assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
/// assert_eq!(
///     config.get_writer_config(),
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "demo.log".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

/// `String` is the log file path, eg: `/tmp/dstring_demo.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// If the layers can't be created (eg: the log file can't be opened), or a global
    /// subscriber is already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?.unwrap_or_default();
        let subscriber = tracing_subscriber::registry().with(layers);
        subscriber::set_global_default(subscriber)
            .map_err(|err| miette::miette!("Can't install global subscriber: {err}"))
    }

    /// Thread local subscriber, active until the returned guard is dropped. This is what
    /// tests use.
    ///
    /// # Errors
    ///
    /// If the layers can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?.unwrap_or_default();
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(subscriber::set_default(subscriber))
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::None,
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level wins. Writer configs merge per [`WriterConfig`]'s `Add`.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two writer configs. When both sides set the same thing, `rhs` wins.
/// - `Display(a) + File(f) = DisplayAndFile(a, f)`.
/// - `Display(a) + Display(b) = Display(b)`.
/// - `DisplayAndFile(a, f) + File(g) = DisplayAndFile(a, g)`.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, rhs) => rhs,
            (lhs, None) => lhs,
            (Display(dp), File(f)) | (File(f), Display(dp)) => DisplayAndFile(dp, f),
            (Display(_), Display(dp)) => Display(dp),
            (File(_), File(f)) => File(f),
            (DisplayAndFile(_, f), Display(dp)) | (DisplayAndFile(dp, _), File(f)) => {
                DisplayAndFile(dp, f)
            }
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp, f)) => {
                DisplayAndFile(dp, f)
            }
        }
    }
}
