use arbaudit::defaults::SCAN_FILE;
use arbaudit_cli::{LineScanOptions, init_tracing, run_line_scan_command};
use clap::Parser;

/// Print the number and trimmed content of every line containing a text-widget literal.
#[derive(Parser, Debug)]
#[command(name = "source-line-scan", author, version, about, long_about = None)]
struct Args {
    /// Source file to scan
    #[arg(short, long, default_value = SCAN_FILE)]
    file: String,

    /// Literal pattern, repeatable (defaults to "Text('" and "const Text(")
    #[arg(short, long = "pattern", value_name = "TEXT")]
    patterns: Vec<String>,

    /// Print the matches as JSON
    #[arg(long)]
    json: bool,

    /// Write the matches to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let opts = LineScanOptions {
        file: args.file,
        patterns: args.patterns,
        json: args.json,
        output: args.output,
    };

    if let Err(e) = run_line_scan_command(opts) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
