use clap::Parser;
use fraccart::config::Config;
use fraccart::io;
use fraccart::utils::{logger, report};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Converts a .cart file to .frac or a .frac file to .cart
#[derive(Parser, Debug)]
#[command(name = "fraccart")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input structure (.cart or .frac)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (default: input with swapped extension)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Also write an extended XYZ file
    #[arg(long, value_name = "PATH")]
    xyz: Option<PathBuf>,

    /// Print a summary of the input structure
    #[arg(long)]
    report: bool,

    /// Overwrite existing output even if disabled in config
    #[arg(short, long)]
    force: bool,

    /// Save the effective settings to the config file
    #[arg(long)]
    write_config: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Errors only
    #[arg(short, long)]
    quiet: bool,
}

fn level_for(cli: &Cli, config: &Config) -> LevelFilter {
    if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        logger::parse_level(&config.log_level)
    }
}

fn run(cli: &Cli, mut config: Config) -> fraccart::Result<()> {
    if cli.write_config {
        log::info!("{}", config.save());
    }
    if cli.force {
        config.overwrite = true;
    }

    let file = io::load_structure(&cli.input)?;
    if cli.report {
        print!(
            "{}",
            report::structure_summary(&file.structure, &cli.input.display().to_string())
        );
    }

    let (_, converted) =
        fraccart::convert_loaded(&cli.input, &file, cli.output.as_deref(), &config)?;

    if let Some(xyz_path) = &cli.xyz {
        io::xyz::write(xyz_path, &converted.structure)?;
        log::info!("Wrote {}", xyz_path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_msg) = Config::load();
    if logger::init(level_for(&cli, &config)).is_err() {
        eprintln!("warning: logger already initialised");
    }
    log::debug!("{}", config_msg);

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
