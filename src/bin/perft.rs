//! Perft runner: per-root-move node counts for a position.
//!
//! Usage:
//! `cargo run --release --bin perft`
//! `cargo run --release --bin perft -- --depth 4 --fen "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"`
//!
//! Counts use standard attack geometry unless `--move-sets` is given.

use std::time::Instant;

use tracing::info;

use plum_rules::game_state::chess_rules::{Rules, STARTING_POSITION_FEN};
use plum_rules::game_state::chess_types::GameState;
use plum_rules::move_generation::perft::{perft_divide, PerftCounts};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn parse_arg_string(flag: &str, default: &str) -> String {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
        .unwrap_or_else(|| default.to_owned())
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let depth = parse_arg_u8("--depth", 3);
    let fen = parse_arg_string("--fen", STARTING_POSITION_FEN);
    let rules = if has_flag("--move-sets") {
        Rules::default()
    } else {
        Rules::standard()
    };
    let game = GameState::from_fen_with_rules(&fen, rules).map_err(|e| e.to_string())?;
    info!(%fen, depth, attacks = ?rules.attacks, "running perft");

    let started = Instant::now();
    let divided = perft_divide(&game, depth).map_err(|e| e.to_string())?;

    let mut total = PerftCounts::default();
    for (mv, counts) in &divided {
        let promotion = mv.promotion.map(|kind| kind.letter().to_string()).unwrap_or_default();
        println!("{}{}{}: {}", mv.from, mv.to, promotion, counts.nodes);
        total.nodes += counts.nodes;
        total.captures += counts.captures;
        total.en_passant += counts.en_passant;
        total.castles += counts.castles;
        total.promotions += counts.promotions;
        total.checks += counts.checks;
        total.checkmates += counts.checkmates;
    }

    let elapsed_ms = started.elapsed().as_millis();
    println!(
        "depth={depth} nodes={} captures={} ep={} castles={} promotions={} checks={} mates={} elapsed_ms={elapsed_ms}",
        total.nodes,
        total.captures,
        total.en_passant,
        total.castles,
        total.promotions,
        total.checks,
        total.checkmates
    );
    Ok(())
}
