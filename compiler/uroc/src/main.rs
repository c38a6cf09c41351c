//! Uroboros CLI
//!
//! Generates a quine relay and checks it against real toolchains.

use std::path::PathBuf;

use uroc::commands::{
    generate_relay, list_languages, verify_relay, write_readme, GenerateOptions, ReadmeOptions,
};
use uroc::verify::VerifyConfig;

fn main() {
    uroc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "generate" => {
            let mut options = GenerateOptions::default();
            let mut i = 2;
            while i < args.len() {
                let arg = &args[i];
                if arg == "-o" && i + 1 < args.len() {
                    options.output = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                }
                if arg == "--all" {
                    options.all_dir = Some(PathBuf::from("."));
                } else if let Some(dir) = arg.strip_prefix("--dir=") {
                    options.all_dir = Some(PathBuf::from(dir));
                } else if let Some(langs) = arg.strip_prefix("--langs=") {
                    options.langs = Some(langs.to_string());
                } else if let Some(width) = arg.strip_prefix("--width=") {
                    options.config.line_width = parse_number("--width", width);
                } else if let Some(limit) = arg.strip_prefix("--max-size=") {
                    options.config.max_source_len = parse_number("--max-size", limit);
                } else {
                    unknown_option("generate", arg);
                }
                i += 1;
            }
            generate_relay(&options);
        }
        "verify" => {
            let mut config = VerifyConfig::default();
            let mut langs = None;
            let mut verbose = false;

            for arg in args.iter().skip(2) {
                if let Some(filter) = arg.strip_prefix("--filter=") {
                    config.filter = Some(filter.to_string());
                } else if let Some(dir) = arg.strip_prefix("--keep=") {
                    config.keep = Some(PathBuf::from(dir));
                } else if let Some(list) = arg.strip_prefix("--langs=") {
                    langs = Some(list.to_string());
                } else if arg == "--no-parallel" {
                    config.parallel = false;
                } else if arg == "--verbose" || arg == "-v" {
                    verbose = true;
                } else {
                    unknown_option("verify", arg);
                }
            }

            verify_relay(langs.as_deref(), &config, verbose);
        }
        "readme" => {
            let mut options = ReadmeOptions::default();
            let mut i = 2;
            while i < args.len() {
                let arg = &args[i];
                if arg == "-o" && i + 1 < args.len() {
                    options.output = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                }
                if let Some(langs) = arg.strip_prefix("--langs=") {
                    options.langs = Some(langs.to_string());
                } else if arg == "--no-probe" {
                    options.no_probe = true;
                } else {
                    unknown_option("readme", arg);
                }
                i += 1;
            }
            write_readme(&options);
        }
        "langs" => list_languages(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("uroc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_number(option: &str, value: &str) -> usize {
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("error: {option} expects a number, got '{value}'");
            std::process::exit(1);
        }
    }
}

fn unknown_option(command: &str, arg: &str) -> ! {
    eprintln!("error: unknown option '{arg}' for `uroc {command}`");
    eprintln!("Run `uroc help` for usage.");
    std::process::exit(1);
}

fn print_usage() {
    println!("Uroboros quine relay generator");
    println!();
    println!("Usage: uroc <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate             Write the origin program (stdout by default)");
    println!("  verify               Run every stage and compare it with the next");
    println!("  readme               Render the README for the relay");
    println!("  langs                List the built-in languages");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Common options:");
    println!("  --langs=<a,b,..>     Relay through these languages instead of the");
    println!("                       standard ring (names or file extensions)");
    println!();
    println!("Generate options:");
    println!("  -o <path>            Write the origin program to <path>");
    println!("  --all                Write every stage into the current directory");
    println!("  --dir=<dir>          Write every stage into <dir>");
    println!("  --width=<n>          Line width of the embedded kernel (default: 80)");
    println!("  --max-size=<bytes>   Largest stage source allowed");
    println!();
    println!("Verify options:");
    println!("  --filter=<name>      Only run stages whose language matches");
    println!("  --keep=<dir>         Keep stage directories under <dir>");
    println!("  --no-parallel        Run stages sequentially");
    println!("  --verbose, -v        Show passing stages");
    println!();
    println!("Readme options:");
    println!("  -o <path>            Write to <path> instead of stdout");
    println!("  --no-probe           Do not query dpkg for package versions");
    println!();
    println!("Examples:");
    println!("  uroc generate -o QR.rb");
    println!("  uroc generate --dir=out --langs=python,c,bf");
    println!("  uroc verify --filter=haskell -v");
    println!("  uroc readme -o README.md");
}
