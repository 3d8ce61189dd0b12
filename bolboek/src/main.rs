use bolboeklib::{batch, config::Config, error::Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bolboek",
    version,
    about = "Выгрузки bol.com (.xlsx) в импорт проводок e-Boekhouden (.csv)"
)]
struct Cli {
    /// Каталог с выгрузками (по умолчанию текущий)
    #[arg(short = 'd', long = "dir")]
    dir: Option<PathBuf>,

    /// Каталог для результата (по умолчанию ./export)
    #[arg(short = 'o', long = "export-dir")]
    export_dir: Option<PathBuf>,

    /// TOML-файл со счетами и прочими настройками
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // --dir меняет только значение по умолчанию: export из файла или окружения важнее
    let mut base = Config::default();
    if let Some(dir) = &cli.dir {
        base.export_dir = dir.join("export");
    }
    let mut cfg = Config::load_over(base, cli.config.as_deref())?;
    if let Some(dir) = cli.dir {
        cfg.input_dir = dir;
    }
    if let Some(export_dir) = cli.export_dir {
        cfg.export_dir = export_dir;
    }

    let report = batch::run(&cfg)?;
    for f in &report.files {
        println!(
            "{} -> {} ({} lines)",
            f.input.display(),
            f.output.display(),
            f.lines_written
        );
    }
    Ok(())
}
