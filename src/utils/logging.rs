use crate::models::error::AssemblyError;
use camino::Utf8Path;
use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
///
/// With a `log_file`, output is mirrored there as well; keep the returned
/// guard alive until exit so buffered lines get flushed.
pub fn init(log_file: Option<&Utf8Path>) -> Result<Option<WorkerGuard>, AssemblyError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let Some(log_file) = log_file else {
        builder.with_writer(std::io::stderr).init();
        return Ok(None);
    };

    let (dir, name) = prepare_log_file(log_file)?;
    let (file, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    builder.with_writer(std::io::stderr.and(file)).with_ansi(false).init();
    Ok(Some(guard))
}

/// Creates the log directory and checks the file can be opened for append,
/// since the appender panics on either failure.
fn prepare_log_file(log_file: &Utf8Path) -> Result<(&Utf8Path, &str), AssemblyError> {
    let name = log_file.file_name().ok_or_else(|| AssemblyError::InvalidPath {
        path: log_file.to_string(),
    })?;
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    std::fs::create_dir_all(dir).map_err(|e| AssemblyError::unwritable(dir, e))?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| AssemblyError::unwritable(log_file, e))?;

    Ok((dir, name))
}
