use arbaudit::defaults::{L10N_DIR, REFERENCE_FILE};
use arbaudit_cli::{KeyDiffCommandOptions, init_tracing, run_key_diff_command};
use clap::Parser;

/// Report keys missing from or extra in each locale file compared to the reference.
#[derive(Parser, Debug)]
#[command(name = "locale-key-diff", author, version, about, long_about = None)]
struct Args {
    /// Directory holding the locale files
    #[arg(short, long, default_value = L10N_DIR)]
    dir: String,

    /// Reference locale file name inside the directory
    #[arg(short, long, default_value = REFERENCE_FILE)]
    reference: String,

    /// Locale file to compare, repeatable (defaults to app_de.arb, app_fr.arb, app_it.arb)
    #[arg(short, long = "compare", value_name = "FILE")]
    compare: Vec<String>,

    /// Compare every .arb file in the directory except the reference
    #[arg(long, conflicts_with = "compare")]
    all: bool,

    /// Ignore ARB metadata keys (those starting with '@')
    #[arg(long)]
    ignore_metadata: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Exit with status 2 when any file differs from the reference
    #[arg(long)]
    fail_on_diff: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let opts = KeyDiffCommandOptions {
        dir: args.dir,
        reference: args.reference,
        compare: args.compare,
        all: args.all,
        ignore_metadata: args.ignore_metadata,
        json: args.json,
        output: args.output,
    };

    match run_key_diff_command(opts) {
        Ok(clean) => {
            if args.fail_on_diff && !clean {
                std::process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
