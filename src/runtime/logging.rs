use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Installs the stderr subscriber used by the binary. Stdout carries the tree.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn log_event(level: LogLevel, message: &str, context: Option<Value>) {
    let context = context.map(|value| value.to_string()).unwrap_or_default();
    match level {
        LogLevel::Debug => tracing::debug!(context = %context, "[Bookmarks] {}", message),
        LogLevel::Info => tracing::info!(context = %context, "[Bookmarks] {}", message),
        LogLevel::Warn => tracing::warn!(context = %context, "[Bookmarks] {}", message),
        LogLevel::Error => tracing::error!(context = %context, "[Bookmarks] {}", message),
    }
}
