use anyhow::Context;
use clock_core::{
    resolve_tick, total_gear, ClockPosition, Event, EventBus, GameState, MinuteCard, Role,
};
use clock_data::load_game;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED: u64 = 0xC10C;
const DEFAULT_TICKS: u32 = 24;

#[derive(Debug, Clone)]
struct CliOptions {
    seed: u64,
    ticks: u32,
    assets: PathBuf,
    abilities: bool,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        seed: DEFAULT_SEED,
        ticks: DEFAULT_TICKS,
        assets: std::env::var("CLOCK_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets")),
        abilities: true,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                if let Some(value) = args.get(idx + 1).and_then(|v| v.parse().ok()) {
                    options.seed = value;
                }
                idx += 1;
            }
            "--ticks" => {
                if let Some(value) = args.get(idx + 1).and_then(|v| v.parse().ok()) {
                    options.ticks = value;
                }
                idx += 1;
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    options.assets = PathBuf::from(value);
                }
                idx += 1;
            }
            "--no-abilities" => options.abilities = false,
            other => warn!(arg = other, "ignoring unknown argument"),
        }
        idx += 1;
    }
    options
}

fn describe(event: &Event, state: &GameState) -> String {
    let name = |id: &str| {
        state
            .player(id)
            .map(|player| player.name.clone())
            .unwrap_or_else(|| id.to_string())
    };
    match event {
        Event::ManaSpent {
            unit,
            amount,
            remaining,
        } => format!("{} spends {} mana ({} left)", name(unit), amount, remaining),
        Event::DeckPeeked { unit, inner, outer } => format!(
            "{} peeks at the deck tail: {} / {}",
            name(unit),
            inner.number,
            outer.number
        ),
        Event::DeckReordered { unit, card, from } => format!(
            "{} moves hour {} from deck position {} to the top",
            name(unit),
            card.number,
            from
        ),
        Event::UnitMoved {
            actor,
            unit,
            from,
            to,
        } => {
            if actor == unit {
                format!("{} steps back {} -> {}", name(unit), from, to)
            } else {
                format!("{} pushes {} {} -> {}", name(actor), name(unit), from, to)
            }
        }
        Event::RoleEvolved {
            unit,
            role,
            name: evolved,
        } => format!("{} evolves into {} as {}", unit, role, evolved),
        Event::CardReturned { card, slot, on_top } => format!(
            "hour {}{} returns to slot {} ({})",
            card.number,
            if card.precious { "*" } else { "" },
            slot,
            if *on_top { "top" } else { "bottom" }
        ),
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let (mut rules, mut state, mut rng) = load_game(&options.assets, options.seed)
        .with_context(|| format!("load game from {}", options.assets.display()))?;
    if !options.abilities {
        rules.abilities_enabled = false;
    }
    println!("seed: {}", rng.seed());
    println!("players: {}", state.players.len());

    let mut events = EventBus::default();
    let mut minutes: Vec<MinuteCard> = Vec::new();
    for tick in 1..=options.ticks {
        for id in state.juvenile_ids() {
            state.deal_hour_card(&id)?;
        }
        minutes.extend(state.minute_deck.draw_cards(1));
        let report = resolve_tick(&mut state, &rules, &mut rng, &mut events);
        println!(
            "tick {}: hour hand {:?}, minute hand {:?}",
            tick, report.hour_hand, report.minute_hand
        );
        if !events.is_empty() {
            println!("  {} events", events.len());
        }
        for event in events.drain() {
            println!("  {}", describe(&event, &state));
        }
    }

    println!("gear: {:.1}", total_gear(&minutes));
    let tops: Vec<String> = ClockPosition::all()
        .map(|slot| match state.clock_face.top(slot) {
            Some(card) if card.precious => format!("{}:{}*", slot, card.number),
            Some(card) => format!("{}:{}", slot, card.number),
            None => format!("{}:-", slot),
        })
        .collect();
    println!("clock face: {}", tops.join(" "));
    for player in &state.players {
        let position = player
            .position
            .map(|position| position.to_string())
            .unwrap_or_else(|| "-".to_string());
        let holding = if player.role == Role::Juvenile {
            format!(", holding {}", player.hour_cards.len())
        } else {
            String::new()
        };
        println!(
            "{} [{}] mana {} at {}{}",
            player.name,
            player.role.label(),
            player.mana,
            position,
            holding
        );
    }
    info!(
        deck = state.hour_deck.len(),
        on_face = state.clock_face.total_cards(),
        "simulation finished"
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if let Err(err) = run(&options) {
        eprintln!("clock error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_flags() {
        let options = parse_cli_options(&args(&[
            "--seed",
            "5",
            "--ticks",
            "3",
            "--assets",
            "fixtures",
            "--no-abilities",
        ]));
        assert_eq!(options.seed, 5);
        assert_eq!(options.ticks, 3);
        assert_eq!(options.assets, PathBuf::from("fixtures"));
        assert!(!options.abilities);
    }

    #[test]
    fn bad_numbers_keep_defaults() {
        let options = parse_cli_options(&args(&["--seed", "x", "--ticks"]));
        assert_eq!(options.seed, DEFAULT_SEED);
        assert_eq!(options.ticks, DEFAULT_TICKS);
        assert!(options.abilities);
    }
}
