//! CLI entry point for repo2md

use std::fs;
use std::process;

use clap::Parser;
use repo2md::{
    IgnoreRules, OUTPUT_FILE, Source, TreeWalker, render_contents, render_document,
    render_structure,
};

#[derive(Parser, Debug)]
#[command(name = "repo2md")]
#[command(about = "Flatten a repository into a single Markdown document")]
#[command(version)]
struct Args {
    /// Local directory path or remote repository URL
    input: String,
}

fn main() {
    let args = Args::parse();

    // Errors propagate out of run() so the temporary clone, if any, is
    // removed before the process exits
    if let Err(message) = run(&args.input) {
        eprintln!("repo2md: {}", message);
        process::exit(1);
    }
}

fn run(input: &str) -> Result<(), String> {
    let source = Source::resolve(input)
        .map_err(|e| format!("error cloning repository: {}", e))?;

    let rules = IgnoreRules::load(source.root());
    let map = TreeWalker::new(rules)
        .walk(source.root())
        .map_err(|e| format!("cannot walk '{}': {}", source.root().display(), e))?;

    let structure = render_structure(&map);
    let content = render_contents(source.root(), &map)
        .map_err(|e| format!("error reading file contents: {}", e))?;

    fs::write(OUTPUT_FILE, render_document(&structure, &content))
        .map_err(|e| format!("error writing {}: {}", OUTPUT_FILE, e))?;

    println!("Markdown file generated: {}", OUTPUT_FILE);
    Ok(())
}
