use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use folio_cli::{CliError, Format};

#[derive(Parser)]
#[command(name = "folio-cli", version, about = "Portfolio data and markup tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert description markup to HTML
    Render {
        /// Markup file, or `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
    /// Lint a projects data file
    Check {
        /// projects-data.js or JSON file
        data: PathBuf,
        /// Directory local media paths are resolved against
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Re-serialize a data file as JSON or as a script assignment
    Export {
        data: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Append a new project with placeholder media
    Add {
        data: PathBuf,
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "autre")]
        category: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Js,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Format::Json,
            OutputFormat::Js => Format::Js,
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Command::Render { file } => {
            println!("{}", folio_cli::render(&file)?);
        }
        Command::Check { data, root } => {
            let issues = folio_cli::check(&data, &root)?;
            for issue in &issues {
                eprintln!("{}", issue);
            }
            if !issues.is_empty() {
                eprintln!("{} issue(s) found", issues.len());
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Export { data, format } => {
            print!("{}", folio_cli::export(&data, format.into())?);
        }
        Command::Add {
            data,
            id,
            title,
            category,
        } => {
            folio_cli::add(&data, &id, &title, &category)?;
            eprintln!("added '{}' to {}", id, data.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
