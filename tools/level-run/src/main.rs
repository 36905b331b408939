//! level-run: run a lander level headless and print snapshots as JSON lines.
//!
//! Usage:
//!   level-run run levels/canyon.json --ticks 600 --seed 7
//!   level-run validate levels/canyon.json

use std::io::{self, BufWriter, Write};
use std::process;

use log::error;

use lander_core::constants::TICK_RATE;
use lander_sim::{load_level, Encounter, EncounterConfig};

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|a| is_help(a)) {
        print_usage();
        return;
    }

    if args.len() < 3 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2], &args[3..]),
        "validate" => cmd_validate(&args[2]),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "level-run: headless lander encounter runner\n\
         \n\
         Commands:\n\
         \n\
         run <level.json>       Run the level and print one JSON snapshot per line\n\
         \n\
           --ticks <N>          Ticks to run (default: 10 seconds of ticks)\n\
           --seed <S>           RNG seed (default: 42)\n\
           --events-only        Only print snapshots that carry events\n\
         \n\
         validate <level.json>  Load the level and report what it contains\n\
         \n\
         Set RUST_LOG=debug to log enemy state transitions.\n"
    );
}

fn is_help(arg: &str) -> bool {
    matches!(arg, "help" | "--help" | "-h")
}

/// Value following `flag`, if present. A missing or unparsable value is an error.
fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    let Some(i) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let value = args
        .get(i + 1)
        .ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

/// Flag value or `default`. Exits on a bad value.
fn flag_or_exit<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_flag(args, flag) {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(1);
        }
    }
}

fn cmd_run(path: &str, args: &[String]) {
    let ticks: u64 = flag_or_exit(args, "--ticks", TICK_RATE as u64 * 10);
    let seed: u64 = flag_or_exit(args, "--seed", 42);
    let events_only = args.iter().any(|a| a == "--events-only");

    let level = match load_level(path) {
        Ok(level) => level,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut encounter = Encounter::from_level(
        EncounterConfig {
            seed,
            ..Default::default()
        },
        &level,
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..ticks {
        let snapshot = encounter.tick();
        if events_only && snapshot.enemy_events.is_empty() && snapshot.audio_events.is_empty() {
            continue;
        }
        let line = match serde_json::to_string(&snapshot) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: failed to encode snapshot: {e}");
                process::exit(1);
            }
        };
        if writeln!(out, "{line}").is_err() {
            // Downstream closed the pipe
            return;
        }
    }
    let _ = out.flush();
}

fn cmd_validate(path: &str) {
    match load_level(path) {
        Ok(level) => {
            println!(
                "{}: '{}' with {} enemies, {} laser fields, {} surface points, {} blocks",
                path,
                level.name,
                level.enemies.len(),
                level.lasers.len(),
                level.terrain.surface.len(),
                level.terrain.blocks.len()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_words() {
        assert!(is_help("help"));
        assert!(is_help("--help"));
        assert!(is_help("-h"));
        assert!(!is_help("run"));
    }

    #[test]
    fn test_parse_flag_values() {
        let a = args(&["--ticks", "120", "--seed", "7"]);
        assert_eq!(parse_flag::<u64>(&a, "--ticks"), Ok(Some(120)));
        assert_eq!(parse_flag::<u64>(&a, "--seed"), Ok(Some(7)));
        assert_eq!(parse_flag::<u64>(&a, "--other"), Ok(None));
    }

    #[test]
    fn test_parse_flag_rejects_bad_values() {
        assert!(parse_flag::<u64>(&args(&["--ticks", "abc"]), "--ticks").is_err());
        assert!(parse_flag::<u64>(&args(&["--seed"]), "--seed").is_err());
    }
}
