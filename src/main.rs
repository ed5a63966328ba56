use camino::Utf8PathBuf;
use clap::Parser;
use mod_assembler_lib::config::AppSettings;
use mod_assembler_lib::core::install_root::{
    remember_install_root, CachedInstallRoot, FixedInstallRoot, InstallRootResolver,
};
use mod_assembler_lib::utils::logging;
use mod_assembler_lib::{Assembly, AssemblyError, AssemblyReport, TargetVariant};
use std::process::ExitCode;
use tracing::error;

/// Assemble a client instance or server directory from a mod project.
#[derive(Parser, Debug)]
#[command(name = "mod-assembler", version, about)]
struct Cli {
    /// Which variant to assemble.
    #[arg(value_enum)]
    variant: TargetVariant,

    /// Project directory holding the core, mod and pack folders.
    #[arg(long, default_value = ".")]
    project: Utf8PathBuf,

    /// Launcher install directory. Falls back to the one stored in settings.
    #[arg(long)]
    launcher_dir: Option<Utf8PathBuf>,

    /// Store --launcher-dir in settings for later runs.
    #[arg(long, requires = "launcher_dir")]
    remember: bool,

    /// Assemble into this directory instead of the launcher's.
    #[arg(long, conflicts_with = "launcher_dir")]
    target: Option<Utf8PathBuf>,

    /// Read settings from this file instead of the default location.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Mirror log output to this file.
    #[arg(long)]
    log_file: Option<Utf8PathBuf>,

    /// Mirror log output to the log directory from settings.
    #[arg(long, conflicts_with = "log_file")]
    save_log: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = match logging::init(log_path(&cli).as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Unable to set up logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Unable to serialize report: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<AssemblyReport, AssemblyError> {
    let assembly = match &cli.target {
        Some(target) => Assembly::with_target(&cli.project, cli.variant, target.clone()),
        None => Assembly::new(&cli.project, cli.variant, resolver(cli)?.as_ref())?,
    };
    assembly.run()
}

fn log_path(cli: &Cli) -> Option<Utf8PathBuf> {
    if let Some(path) = &cli.log_file {
        return Some(path.clone());
    }
    // Logging is not up yet, so an unreadable settings file falls back to defaults.
    cli.save_log
        .then(|| load_settings(cli).unwrap_or_default().log_file())
}

fn load_settings(cli: &Cli) -> Result<AppSettings, AssemblyError> {
    Ok(match &cli.config {
        Some(path) => AppSettings::load_path(path)?,
        None => AppSettings::load()?,
    })
}

fn resolver(cli: &Cli) -> Result<Box<dyn InstallRootResolver>, AssemblyError> {
    let Some(dir) = &cli.launcher_dir else {
        let settings = load_settings(cli)?;
        return Ok(Box::new(CachedInstallRoot { settings }));
    };

    let fixed = FixedInstallRoot(dir.clone());
    if cli.remember {
        let root = fixed.resolve_install_root()?;
        let mut settings = load_settings(cli)?;
        match &cli.config {
            Some(path) => {
                settings.launcher_dir = Some(root);
                settings.save_path(path)?;
            }
            None => remember_install_root(&mut settings, &root)?,
        }
    }
    Ok(Box::new(fixed))
}
