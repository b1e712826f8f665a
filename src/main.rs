//! grist - markdown renderer with frontmatter extraction

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use grist::{Document, FrontmatterValue, parse_document};

#[derive(Parser)]
#[command(name = "grist")]
#[command(version, about = "Render markdown to HTML with frontmatter extraction", long_about = None)]
#[command(after_help = "EXAMPLES:
    grist post.md post.html     Render markdown to HTML
    grist post.md --json        Print the parsed document as JSON
    grist -m post.md            Show frontmatter metadata")]
struct Cli {
    /// Input markdown file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output HTML file
    #[arg(value_name = "OUTPUT", required_unless_present_any = ["meta", "json"])]
    output: Option<String>,

    /// Show frontmatter metadata without rendering
    #[arg(short, long)]
    meta: bool,

    /// Print the parsed document (frontmatter, content, rawContent) as JSON
    #[arg(long)]
    json: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if cli.meta {
        show_meta(&cli.input)
    } else if cli.json {
        show_json(&cli.input)
    } else {
        let output = cli.output.expect("output required");
        convert(&cli.input, &output, cli.quiet)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show_meta(path: &str) -> Result<(), String> {
    let doc = load(path)?;
    for (key, value) in &doc.frontmatter {
        println!("{key}: {}", format_value(value));
    }
    Ok(())
}

fn show_json(path: &str) -> Result<(), String> {
    let doc = load(path)?;
    let json = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn convert(input: &str, output: &str, quiet: bool) -> Result<(), String> {
    let doc = load(input)?;
    fs::write(output, &doc.content).map_err(|e| e.to_string())?;
    if !quiet {
        println!("{input} -> {output}");
    }
    Ok(())
}

fn load(path: &str) -> Result<Document, String> {
    let source = fs::read_to_string(path).map_err(|e| e.to_string())?;
    Ok(parse_document(&source))
}

fn format_value(value: &FrontmatterValue) -> String {
    match value {
        FrontmatterValue::String(s) => s.clone(),
        FrontmatterValue::Number(n) => n.to_string(),
        FrontmatterValue::Boolean(b) => b.to_string(),
        FrontmatterValue::List(items) => items.join(", "),
    }
}
