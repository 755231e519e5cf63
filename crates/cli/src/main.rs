// cfopsum CLI - headless CFOP entry/exit summing

mod exit_codes;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cfopsum_engine::model::SourceFile;
use cfopsum_engine::{export, pipeline, Diagnostic};
use cfopsum_io::FileReader;

use exit_codes::{EXIT_ALL_SKIPPED, EXIT_ERROR, EXIT_SUCCESS};

struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

fn cli_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError {
        code,
        message: msg.into(),
        hint: None,
    }
}

#[derive(Parser)]
#[command(name = "cfop")]
#[command(about = "Sum entry/exit invoice values per CFOP across ledger files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum entrada/saída totals for one or more ledger files
    #[command(after_help = "\
Files are processed in the order given; spreadsheets contribute one record
per sheet, CSV files one record total. Data is read from row 18 on (rows
1-17 are report preamble).

Examples:
  cfop sum notas_jan.xlsx
  cfop sum jan.xlsx fev.xlsx --output resumo.csv
  cfop sum extrato.csv --json")]
    Sum {
        /// Input files (.xlsx, .xls or .csv), processed in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write the consolidated sheet-level CSV here
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Output the full result as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Suppress the report and diagnostics on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sum {
            files,
            output,
            json,
            quiet,
        } => cmd_sum(&files, output.as_deref(), json, quiet),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(err.code)
        }
    }
}

fn cmd_sum(
    files: &[PathBuf],
    output: Option<&std::path::Path>,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    // Buffer every file fully before parsing; workbook readers seek.
    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        let bytes = std::fs::read(path)
            .map_err(|e| cli_err(EXIT_ERROR, format!("cannot read {}: {e}", path.display())))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        sources.push(SourceFile { name, bytes });
    }

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let result = pipeline::run(&sources, &FileReader, &mut diagnostics);

    if !quiet {
        for diag in &diagnostics {
            render::print_diagnostic(diag);
        }
    }

    if let Some(path) = output {
        let csv_text = export::to_csv(&result.records)
            .map_err(|e| cli_err(EXIT_ERROR, e.to_string()))?;
        std::fs::write(path, csv_text)
            .map_err(|e| cli_err(EXIT_ERROR, format!("cannot write {}: {e}", path.display())))?;
        eprintln!("wrote {}", path.display());
    }

    if json {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| cli_err(EXIT_ERROR, format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    } else if !quiet {
        render::print_report(&result);
    }

    if result.summary.files_processed == 0 {
        return Err(cli_err(EXIT_ALL_SKIPPED, "no file could be processed"));
    }

    Ok(())
}
