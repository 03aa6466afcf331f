//! Command-line interface for brandscan
//!
//! Reads an extracted page-signal JSON file and prints the classified brand
//! profile.

use brandscan::{classify_branding, BrandProfile, PageSignals};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut pretty = false;
    let mut signals_path_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pretty" => {
                pretty = true;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if signals_path_arg.is_none() {
                    signals_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple signal files provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let signals_path_str = match signals_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let signals_path = Path::new(&signals_path_str);

    let signals = match PageSignals::from_json_file(signals_path) {
        Ok(signals) => signals,
        Err(error) => {
            eprintln!("Classification failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    let profile = classify_branding(&signals.color_palette, &signals.typography);
    print_profile(&profile, pretty);
}

fn print_profile(profile: &BrandProfile, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(profile)
    } else {
        serde_json::to_string(profile)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("Error serializing profile: {}", error);
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {} [options] <signals.json>", program);
    println!();
    println!("Classify extracted page design signals into a brand profile.");
    println!();
    println!("Options:");
    println!("  --pretty     Pretty-print the output JSON");
    println!("  -h, --help   Show this help message");
    println!();
    println!("The input file is the JSON payload written by the page");
    println!("extraction layer: {{\"color_palette\": ..., \"typography\": ...}}");
}
