//! Command-line interface for contrast_colors
//!
//! Basic CLI tool for checking color pairs and palettes against WCAG.

use contrast_colors::{evaluate_pair, CombinerConfig, ComplianceResult, PaletteCombiner};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut min_ratio = None;
    let mut colors = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--min-ratio" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --min-ratio requires a value");
                    process::exit(1);
                }
                match args[i + 1].parse::<f64>() {
                    Ok(value) => min_ratio = Some(value),
                    Err(_) => {
                        eprintln!("Error: invalid --min-ratio value '{}'", args[i + 1]);
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                colors.push(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    match colors.len() {
        0 | 1 => {
            print_help(&args[0]);
            process::exit(1);
        }
        2 => match evaluate_pair(&colors[0], &colors[1]) {
            Ok(result) => print_results(&[result]),
            Err(error) => {
                eprintln!("Evaluation failed: {}", error);
                eprintln!("Suggestion: {}", error.user_message());
                process::exit(1);
            }
        },
        _ => {
            let combiner = PaletteCombiner::with_config(CombinerConfig {
                min_ratio,
                warn_on_dropped: true,
            });
            let results = combiner.combine(&colors);
            if results.is_empty() {
                eprintln!("No valid #RRGGBB pairs found in the palette.");
                process::exit(1);
            }
            print_results(&results);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <color> <color> [color...]", program_name);
    eprintln!();
    eprintln!("Check WCAG contrast compliance for hex colors.");
    eprintln!();
    eprintln!("With exactly two colors, evaluates the pair (shorthand and");
    eprintln!("missing '#' are accepted). With three or more, evaluates every");
    eprintln!("foreground/background combination of the palette, ranked by");
    eprintln!("contrast; palette entries must be full #RRGGBB form.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --min-ratio N    Drop palette pairs with ratio below N");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#FFFFFF' '#000000'", program_name);
    eprintln!("  {} --min-ratio 4.5 '#FFFFFF' '#1E293B' '#767676'", program_name);
}

fn print_results(results: &[ComplianceResult]) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(results) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing results: {}", e);
            process::exit(1);
        }
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Contrast Summary:");
    for result in results {
        eprintln!(
            "  {} on {}  ratio {:>5.2}  AA {}  AAA {}  AA-large {}  AAA-large {}",
            result.foreground,
            result.background,
            result.ratio,
            pass_mark(result.aa_normal),
            pass_mark(result.aaa_normal),
            pass_mark(result.aa_large),
            pass_mark(result.aaa_large),
        );
    }
}

fn pass_mark(passed: bool) -> &'static str {
    if passed {
        "pass"
    } else {
        "fail"
    }
}
