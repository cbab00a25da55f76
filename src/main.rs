use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use luna::{
    get_result,
    settings::{DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_NESTING_DEPTH, DEFAULT_MODULES_ROOT, Settings},
};
use tracing_subscriber::EnvFilter;

/// luna runs programs written in the Luna scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells luna to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Directory that `import` looks for module folders in.
    #[arg(short, long, default_value = DEFAULT_MODULES_ROOT)]
    modules: PathBuf,

    /// How many function calls may be nested before the run fails.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// How deeply statements may be nested before parsing fails.
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_nesting_depth: usize,

    /// Logs interpreter events to stderr; repeat for more detail. Ignored
    /// when `RUST_LOG` is set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(true)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Error: failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let settings = Settings { modules_root:      args.modules,
                              max_call_depth:    args.max_call_depth,
                              max_nesting_depth: args.max_nesting_depth, };

    if let Err(e) = get_result(&script, &settings) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
