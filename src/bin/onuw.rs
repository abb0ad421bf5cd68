use chrono::{SecondsFormat, Utc};
use clap::Parser;
use onuw_night::delivery::{deliver_night, reveal, Countdown, Delivery, DeliveryError, PassAndPlay};
use onuw_night::engine::{parse_roster, Night};
use onuw_night::rng::Rng;
use onuw_night::types::NightConfig;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve one night of One Night Ultimate Werewolf")]
struct Cli {
    /// Comma-separated player names in seating order.
    players: String,
    /// Comma-separated role names, three more than there are players.
    roles: String,
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the lone wolf's peek at the center.
    #[arg(long)]
    no_lonewolf: bool,
    /// Print the outcome as JSON instead of passing the computer around.
    #[arg(long)]
    json: bool,
    /// Run the discussion countdown before revealing.
    #[arg(long)]
    timer: bool,
    /// `name=handle`; the player's private log goes to the outbox instead.
    #[arg(long = "remote")]
    remote: Vec<String>,
    /// Directory that receives `<handle>.txt` for remote players.
    #[arg(long)]
    outbox: Option<PathBuf>,
}

#[derive(Clone, Debug, Serialize)]
struct StructuredLogLine {
    timestamp: String,
    level: String,
    event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u32>,
    details: Value,
}

/// Shared text goes to stdout and to every remote player's outbox file.
struct Console {
    seed: u32,
    outbox: Option<PathBuf>,
    handles: Vec<String>,
}

impl Delivery for Console {
    fn display(&mut self, text: &str) {
        println!("{text}\n");
        let Some(dir) = &self.outbox else {
            return;
        };
        for handle in &self.handles {
            if let Err(err) = append_outbox(dir, handle, text) {
                emit_log(
                    "warn",
                    "delivery_failed",
                    Some(self.seed),
                    json!({ "handle": handle, "reason": err.to_string() }),
                );
            }
        }
    }

    fn direct_message(&mut self, handle: &str, text: &str) -> Result<(), DeliveryError> {
        let Some(dir) = &self.outbox else {
            return Err(DeliveryError::Unreachable {
                handle: handle.to_string(),
                reason: "no outbox directory configured".to_string(),
            });
        };
        append_outbox(dir, handle, text)?;
        Ok(())
    }
}

impl PassAndPlay for Console {
    fn hand_to(&mut self, name: &str) -> Result<(), DeliveryError> {
        clear_screen();
        println!("Pass the computer to {name}, then press enter");
        wait_for_enter()?;
        Ok(())
    }

    fn show_private(&mut self, lines: &[String]) -> Result<(), DeliveryError> {
        clear_screen();
        for line in lines {
            println!("{line}");
        }
        println!("\nPress enter to hide your night");
        wait_for_enter()?;
        clear_screen();
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let rng = cli
        .seed
        .map(|seed| Rng::new(normalize_seed(seed)))
        .unwrap_or_else(Rng::from_entropy);
    let seed = rng.initial_seed();

    let remote = match parse_remotes(&cli.remote) {
        Ok(remote) => remote,
        Err(reason) => return reject(seed, &reason),
    };
    let players = split_list(&cli.players);
    let roles = match parse_roster(&split_list(&cli.roles)) {
        Ok(roles) => roles,
        Err(err) => return reject(seed, &err.to_string()),
    };
    let config = NightConfig {
        lonewolf: !cli.no_lonewolf,
    };
    let night = match Night::deal(players, roles, config, rng) {
        Ok(night) => night,
        Err(err) => return reject(seed, &err.to_string()),
    };

    emit_log(
        "info",
        "night_started",
        Some(seed),
        json!({
            "players": night.player_count(),
            "lonewolf": config.lonewolf,
            "remotePlayers": remote.len(),
        }),
    );
    let outcome = night.run();
    emit_log(
        "info",
        "night_finished",
        Some(seed),
        json!({
            "wakeOrder": outcome.wake_order.len(),
            "sharedLog": outcome.shared_log.len(),
        }),
    );

    if cli.json {
        return match serde_json::to_string_pretty(&outcome) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                emit_log(
                    "error",
                    "night_rejected",
                    Some(seed),
                    json!({ "reason": err.to_string() }),
                );
                ExitCode::FAILURE
            }
        };
    }

    let mut console = Console {
        seed,
        outbox: cli.outbox,
        handles: remote.values().cloned().collect(),
    };
    let mut device = Console {
        seed,
        outbox: None,
        handles: Vec::new(),
    };
    match deliver_night(&outcome, &mut console, &remote, &mut device) {
        Ok(report) => {
            for player in &report.failed {
                emit_log(
                    "warn",
                    "delivery_failed",
                    Some(seed),
                    json!({ "player": player, "fallback": "pass_and_play" }),
                );
            }
        }
        Err(err) => {
            emit_log("error", "delivery_failed", Some(seed), json!({ "reason": err.to_string() }));
            return ExitCode::FAILURE;
        }
    }

    if cli.timer {
        Countdown::standard().run(&mut console, thread::sleep);
    } else {
        println!("Press enter to reveal the night");
        if let Err(err) = wait_for_enter() {
            emit_log("error", "delivery_failed", Some(seed), json!({ "reason": err.to_string() }));
            return ExitCode::FAILURE;
        }
    }
    reveal(&outcome, &mut console);
    ExitCode::SUCCESS
}

fn reject(seed: u32, reason: &str) -> ExitCode {
    emit_log("error", "night_rejected", Some(seed), json!({ "reason": reason }));
    eprintln!("{reason}");
    ExitCode::from(2)
}

fn normalize_seed(seed: u64) -> u32 {
    seed as u32
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_remotes(entries: &[String]) -> Result<BTreeMap<String, String>, String> {
    let mut remote = BTreeMap::new();
    for entry in entries {
        let Some((name, handle)) = entry.split_once('=') else {
            return Err(format!("expected name=handle, got {entry}"));
        };
        let (name, handle) = (name.trim(), handle.trim());
        if name.is_empty() || handle.is_empty() {
            return Err(format!("expected name=handle, got {entry}"));
        }
        if handle.contains(['/', '\\']) || handle == "." || handle == ".." {
            return Err(format!("invalid handle for {name}: {handle}"));
        }
        remote.insert(name.to_string(), handle.to_string());
    }
    Ok(remote)
}

fn append_outbox(dir: &Path, handle: &str, text: &str) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{handle}.txt")))?;
    writeln!(file, "{text}\n")
}

fn emit_log(level: &str, event: &str, seed: Option<u32>, details: Value) {
    let log_line = StructuredLogLine {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        level: level.to_string(),
        event: event.to_string(),
        seed,
        details,
    };
    if let Ok(text) = serde_json::to_string(&log_line) {
        eprintln!("{text}");
    }
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}

fn wait_for_enter() -> io::Result<()> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
