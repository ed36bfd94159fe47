//! League tracker CLI
//!
//! Register participants, record round-robin results and print standings.

use std::env;
use std::path::PathBuf;

use league_core::{layout_for, title_for, valid_iso_code, MAX_ENTRY_LIMIT, MAX_NAME_LENGTH};
use tracker::{load_registry, load_store, matches_report, save_store, standings_report};

const DEFAULT_STORE_FILE: &str = "league_store.json";

fn print_usage() {
    println!("League Tracker");
    println!();
    println!("Usage:");
    println!("  tracker add <tournament> <name> [--code CC]");
    println!("  tracker result <tournament> <home> <away> <home-score> <away-score>");
    println!("  tracker result <tournament> <home> <away> --winner <name>");
    println!("  tracker standings <tournament>");
    println!("  tracker matches <tournament>");
    println!("  tracker opponents <tournament> <name>");
    println!("  tracker tournaments");
    println!();
    println!("Options:");
    println!("  --file PATH      store snapshot file (default: {})", DEFAULT_STORE_FILE);
    println!("  --registry PATH  tournament registry TOML (default: built-in)");
    println!();
    println!("Player-mode tournaments take --winner instead of a scoreline.");
}

struct CliOptions {
    store_file: PathBuf,
    registry_file: Option<PathBuf>,
}

/// Split known global flags from the remaining (command-specific) arguments.
fn parse_options(args: &[String]) -> (Vec<String>, CliOptions) {
    let mut rest = Vec::new();
    let mut options = CliOptions {
        store_file: PathBuf::from(DEFAULT_STORE_FILE),
        registry_file: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    options.store_file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--registry" => {
                if i + 1 < args.len() {
                    options.registry_file = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            other => rest.push(other.to_string()),
        }
        i += 1;
    }

    (rest, options)
}

/// Value of a `--flag value` pair inside command arguments, if present.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let mut i = 0;
    while i < args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
        i += 1;
    }
    None
}

fn run_add(args: &[String], options: &CliOptions) {
    if args.len() < 2 {
        eprintln!("Error: add requires a tournament and a name");
        print_usage();
        return;
    }
    let tournament_id = &args[0];
    let name = &args[1];
    let iso_code = flag_value(args, "--code");

    let registry = match load_registry(options.registry_file.as_deref()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let settings = layout_for(&registry, tournament_id);

    let mut store = load_store(&options.store_file).unwrap_or_default();

    // Form-level checks; the ledger itself only no-ops.
    if name.trim().is_empty() {
        eprintln!("Error: name must not be empty");
        return;
    }
    if name.trim().len() > MAX_NAME_LENGTH {
        eprintln!("Error: name is longer than {} characters", MAX_NAME_LENGTH);
        return;
    }
    if store.participants.count(tournament_id) >= MAX_ENTRY_LIMIT {
        eprintln!("Error: entry limit reached - {}", MAX_ENTRY_LIMIT);
        return;
    }
    if store.participants.id_by_name(tournament_id, name).is_some() {
        eprintln!("Error: a participant with this name already exists");
        return;
    }
    let iso_code = match iso_code {
        Some(code) => {
            if !valid_iso_code(&code) {
                eprintln!("Error: enter a valid 2-letter ISO 3166-1 code (e.g. US, GB, LT)");
                return;
            }
            // Flags are only part of layouts that display them.
            if settings.show_flags {
                Some(code)
            } else {
                None
            }
        }
        None => None,
    };

    match store
        .participants
        .add_participant(tournament_id, name, iso_code.as_deref())
    {
        Some(id) => println!("Added {} to {} ({})", name.trim(), tournament_id, id),
        None => {
            eprintln!("Error: participant was not added");
            return;
        }
    }

    if let Err(e) = save_store(&store, &options.store_file) {
        eprintln!("Warning: failed to save store: {}", e);
    }
}

fn run_result(args: &[String], options: &CliOptions) {
    if args.len() < 3 {
        eprintln!("Error: result requires a tournament and two participants");
        print_usage();
        return;
    }
    let tournament_id = &args[0];
    let home_name = &args[1];
    let away_name = &args[2];

    let registry = match load_registry(options.registry_file.as_deref()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let settings = layout_for(&registry, tournament_id);

    let mut store = load_store(&options.store_file).unwrap_or_default();

    let home_id = match store.participants.id_by_name(tournament_id, home_name) {
        Some(id) => id.to_string(),
        None => {
            eprintln!("Error: unknown participant: {}", home_name);
            return;
        }
    };
    let away_id = match store.participants.id_by_name(tournament_id, away_name) {
        Some(id) => id.to_string(),
        None => {
            eprintln!("Error: unknown participant: {}", away_name);
            return;
        }
    };

    if let Err(e) = store.check_submission(tournament_id, &home_id, &away_id) {
        eprintln!("Error: {}", e);
        return;
    }

    // Player-mode tournaments record a binary winner; the ledger contract
    // is unchanged, the winner is just encoded as a 1-0 scoreline.
    let (home_score, away_score) = if settings.player_mode() {
        let winner = match flag_value(args, "--winner") {
            Some(winner) => winner,
            None => {
                eprintln!("Error: this tournament takes --winner <name>");
                return;
            }
        };
        let winner_id = store.participants.id_by_name(tournament_id, &winner);
        if winner_id == Some(home_id.as_str()) {
            (1.0, 0.0)
        } else if winner_id == Some(away_id.as_str()) {
            (0.0, 1.0)
        } else {
            eprintln!("Error: winner must be one of the two participants");
            return;
        }
    } else {
        if args.len() < 5 {
            eprintln!("Error: result requires a home and an away score");
            return;
        }
        let home: f64 = args[3].parse().unwrap_or(0.0);
        let away: f64 = args[4].parse().unwrap_or(0.0);
        (home, away)
    };

    match store.submit_result(tournament_id, &home_id, &away_id, home_score, away_score) {
        Some(match_id) => {
            println!("Recorded {} vs {} ({})", home_name, away_name, match_id);
            println!();
            let title = title_for(&registry, tournament_id);
            print!("{}", standings_report(&store, tournament_id, &title, &settings));
        }
        None => {
            eprintln!("Error: match was not created");
            return;
        }
    }

    if let Err(e) = save_store(&store, &options.store_file) {
        eprintln!("Warning: failed to save store: {}", e);
    }
}

fn run_standings(args: &[String], options: &CliOptions) {
    if args.is_empty() {
        eprintln!("Error: standings requires a tournament");
        print_usage();
        return;
    }
    let tournament_id = &args[0];

    let registry = load_registry(options.registry_file.as_deref()).unwrap_or_default();
    let store = load_store(&options.store_file).unwrap_or_default();

    let title = title_for(&registry, tournament_id);
    let settings = layout_for(&registry, tournament_id);
    print!("{}", standings_report(&store, tournament_id, &title, &settings));
}

fn run_matches(args: &[String], options: &CliOptions) {
    if args.is_empty() {
        eprintln!("Error: matches requires a tournament");
        print_usage();
        return;
    }
    let tournament_id = &args[0];

    let registry = load_registry(options.registry_file.as_deref()).unwrap_or_default();
    let store = load_store(&options.store_file).unwrap_or_default();

    let title = title_for(&registry, tournament_id);
    print!("{}", matches_report(&store, tournament_id, &title));
}

fn run_opponents(args: &[String], options: &CliOptions) {
    if args.len() < 2 {
        eprintln!("Error: opponents requires a tournament and a name");
        print_usage();
        return;
    }
    let tournament_id = &args[0];
    let name = &args[1];

    let store = load_store(&options.store_file).unwrap_or_default();

    let id = match store.participants.id_by_name(tournament_id, name) {
        Some(id) => id.to_string(),
        None => {
            eprintln!("Error: unknown participant: {}", name);
            return;
        }
    };

    let remaining = store.eligible_opponents(tournament_id, &id);
    if remaining.is_empty() {
        println!("{} has played every other participant", name);
        return;
    }

    println!("Remaining opponents for {}:", name);
    for opponent in remaining {
        println!("  {}", opponent.name);
    }
}

fn run_tournaments(options: &CliOptions) {
    let registry = match load_registry(options.registry_file.as_deref()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("{:<24} {:<20} {:<12} {}", "Title", "Key", "Layout", "Results");
    println!("{}", "-".repeat(66));
    for entry in &registry {
        let settings = layout_for(&registry, &entry.tournament);
        let mode = if settings.player_mode() {
            "winner"
        } else {
            "scoreline"
        };
        println!(
            "{:<24} {:<20} {:<12} {}",
            entry.title, entry.tournament, entry.layout, mode
        );
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (rest, options) = parse_options(&args);

    if rest.is_empty() {
        print_usage();
        return;
    }

    match rest[0].as_str() {
        "add" => run_add(&rest[1..], &options),
        "result" => run_result(&rest[1..], &options),
        "standings" => run_standings(&rest[1..], &options),
        "matches" => run_matches(&rest[1..], &options),
        "opponents" => run_opponents(&rest[1..], &options),
        "tournaments" => run_tournaments(&options),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", rest[0]);
            print_usage();
        }
    }
}
