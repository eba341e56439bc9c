//! KPL scanner CLI

use kplc::commands::{parse_probe_args, probe_file, CliError};

fn main() {
    kplc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "probe" => parse_probe_args(&args[2..]).and_then(|probe| probe_file(&probe)),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("kpl {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!("Usage: kpl probe <file.kpl> [--token=<kind>]");
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("KPL disambiguation scanner");
    println!();
    println!("Usage: kpl <command> [options]");
    println!();
    println!("Commands:");
    println!("  probe <file.kpl>     Report every contextual-token decision in a file");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Probe options:");
    println!("  --token=<kind>      Candidate set: var-declarator-start, same-line-star,");
    println!("                      same-line-lparen, all (default)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Tracing filter, e.g. kpl_scanner=trace");
    println!("  KPL_LOG_TREE        Indent tracing output by span");
    println!();
    println!("Examples:");
    println!("  kpl probe main.kpl");
    println!("  kpl probe main.kpl --token=same-line-star");
}
