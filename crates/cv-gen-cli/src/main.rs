use std::path::PathBuf;

use clap::Parser;
use cv_gen_core::{generate, ExitCode, GenerateRequest};
use cv_html::Language;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a styled HTML CV from markdown", long_about = None)]
struct Cli {
    /// Path to the markdown CV
    #[arg(value_name = "MARKDOWN")]
    markdown: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,

    /// Photo file referenced from the header
    #[arg(short, long, default_value = "photo.jpeg")]
    photo: String,

    /// Output language (de or en); unrecognized values fall back to de
    #[arg(short, long, default_value = "de")]
    lang: String,

    /// Print the parsed document as JSON instead of writing HTML
    #[arg(long)]
    dump_model: bool,

    /// Suppress the success summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(exit) | Err(exit) => std::process::ExitCode::from(exit as u8),
    }
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    if cli.dump_model {
        return dump_model(&cli);
    }

    let lang = Language::from_tag(&cli.lang);
    let request = GenerateRequest {
        source: cli.markdown.clone(),
        output: cli.output.clone(),
        photo: cli.photo.clone(),
        lang,
    };

    match generate(&request) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                eprintln!("warning: {warning}");
            }
            if !cli.quiet {
                println!("Generated {}", outcome.output.display());
                println!("  Language: {}", lang.tag());
                println!("  Photo: {}", cli.photo);
            }
            Ok(ExitCode::Success)
        }
        Err(err) => {
            eprintln!("{err}");
            Err(err.exit_code())
        }
    }
}

fn dump_model(cli: &Cli) -> Result<ExitCode, ExitCode> {
    let text = std::fs::read_to_string(&cli.markdown).map_err(|err| {
        eprintln!("failed to read {}: {err}", cli.markdown.display());
        ExitCode::Io
    })?;

    let document = cv_parser::parse(&text);
    let json = serde_json::to_string_pretty(&document).map_err(|err| {
        eprintln!("failed to serialize document: {err}");
        ExitCode::Io
    })?;

    println!("{json}");
    Ok(ExitCode::Success)
}
