//! CLI argument parsing for the `monkey` REPL binary.

use clap::{Parser as ClapParser, ValueEnum};

#[derive(ClapParser, Debug)]
#[command(author, version, about = "A read-eval-print loop for the Monkey language")]
pub struct Cli {
    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    #[default]
    #[value(alias("0"))]
    Error,

    #[value(alias("1"))]
    Warn,

    #[value(alias("2"))]
    Info,

    #[value(alias("3"))]
    Debug,

    #[value(alias("4"))]
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
