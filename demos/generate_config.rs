//! Generate the default classification policy as a JSON config file
//!
//! Useful as a starting point for tuning bucket caps or frequency
//! thresholds.

use brandscan::ClassifierConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();
    let output = args.get(1).map(String::as_str).unwrap_or("config.json");

    let config = ClassifierConfig::default_policy();
    if let Err(error) = config.to_json_file(Path::new(output)) {
        eprintln!("Error writing {}: {}", output, error);
        process::exit(1);
    }
    println!("Wrote default classification policy to {}", output);
}
