use scoundrel_autoplay::{run_batch, write_report, AutoplayConfig, Policy};
use scoundrel_core::{
    describe, Action, Attack, Card, CardKind, Event, EventBus, GameState, Phase, RngState, Suit,
};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match args.first().map(String::as_str) {
        None | Some("play") => cmd_play(args.get(1..).unwrap_or_default()),
        Some("sim") => cmd_sim(&args[1..]),
        Some("cui") => cmd_cui(&args[1..]),
        Some("help") | Some("-h") | Some("--help") => {
            print_usage();
            0
        }
        Some("version") | Some("--version") => {
            println!("scoundrel {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Some(other) => {
            eprintln!("unknown command: {other}");
            print_usage();
            2
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("usage: scoundrel [command]");
    println!();
    println!("commands:");
    println!("  play [--seed N]        interactive text game (default)");
    println!("  cui  [--seed N]        full-screen terminal game");
    println!("  sim  [options]         policy-driven batch simulation");
    println!("  help | version");
    println!();
    println!("sim options:");
    println!("  --games N     games per batch (default 100)");
    println!("  --seed N      seed of the first game");
    println!("  --policy P    random | greedy (default greedy)");
    println!("  --max-steps N per-game step cap (default 500)");
    println!("  --out PATH    write the full JSON report (with traces)");
}

fn cmd_cui(args: &[String]) -> i32 {
    match scoundrel_cui::run_with_args(args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    }
}

// ---------------------------------------------------------------------------
// play: line-oriented REPL over the core reducer
// ---------------------------------------------------------------------------

struct Session {
    seed: u64,
    state: GameState,
    rng: RngState,
    events: EventBus,
}

#[derive(Serialize)]
struct StateDump<'a> {
    seed: u64,
    state: &'a GameState,
}

impl Session {
    fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(RngState::from_entropy, RngState::from_seed);
        Self {
            seed: rng.seed(),
            state: GameState::new(),
            rng,
            events: EventBus::default(),
        }
    }

    fn apply(&mut self, action: Action) {
        self.state = self.state.apply(action, &mut self.rng, &mut self.events);
        let lines: Vec<String> = self.events.drain().map(event_line).collect();
        if lines.is_empty() {
            println!("  nothing happens");
        }
        for line in lines {
            println!("  {line}");
        }
    }

    fn print_board(&self) {
        let state = &self.state;
        match state.phase {
            Phase::NotStarted => {
                println!("no game yet; 'draw' deals the first room");
                return;
            }
            Phase::Won => println!("== dungeon cleared! =="),
            Phase::Lost => println!("== slain; better luck next time =="),
            Phase::InProgress => {}
        }
        println!(
            "health {}/20 | deck {} | room {} | cleared {} | best {}",
            state.health,
            state.deck.len(),
            state.room_count,
            state.cards_cleared(),
            state.best
        );
        for (index, slot) in state.room.slots().iter().enumerate() {
            match slot.card() {
                Some(card) => println!("[{}] {}", index + 1, card_line(card, state)),
                None => println!("[{}] --", index + 1),
            }
        }
        match state.current_weapon {
            Some(weapon) => {
                let wield = if state.weapon_equipped { "equipped" } else { "stowed" };
                let chain = match state.last_defeated {
                    Some(card) => format!(", last defeated {}", card_text(card)),
                    None => String::new(),
                };
                println!("weapon {} ({wield}{chain})", card_text(weapon));
            }
            None => println!("weapon none"),
        }
        if state.phase == Phase::InProgress && state.room.is_full() {
            if state.ran_last_room {
                println!("ran last room! play a card first");
            } else {
                println!("run available ('run')");
            }
        }
    }
}

fn cmd_play(args: &[String]) -> i32 {
    let seed = flag_u64(args, "--seed");
    let mut session = Session::new(seed);
    println!("scoundrel (seed {}) -- 'help' lists commands", session.seed);
    session.apply(Action::StartOrDraw);
    session.print_board();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return 0,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: {err}");
                return 1;
            }
        }
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        match command {
            "q" | "quit" | "exit" => return 0,
            "help" | "?" => print_repl_help(),
            "b" | "board" => session.print_board(),
            "p" | "play" => {
                match words.next().and_then(|word| word.parse::<usize>().ok() ) {
                    Some(slot @ 1..=4) => {
                        session.apply(Action::PlaySlot { index: slot - 1 });
                        session.print_board();
                    }
                    _ => println!("  play needs a slot number 1..4"),
                }
            }
            "d" | "draw" | "r" | "run" => {
                session.apply(Action::StartOrDraw);
                session.print_board();
            }
            "e" | "equip" => {
                session.apply(Action::ToggleWeaponEquip);
            }
            "n" | "new" => {
                if session.state.phase == Phase::InProgress {
                    println!("  a game is already running; finish it or quit");
                } else {
                    session.apply(Action::StartOrDraw);
                    session.print_board();
                }
            }
            "state" => {
                let dump = StateDump {
                    seed: session.seed,
                    state: &session.state,
                };
                match serde_json::to_string_pretty(&dump) {
                    Ok(json) => println!("{json}"),
                    Err(err) => eprintln!("error: {err}"),
                }
            }
            other => println!("  unknown command: {other} ('help' lists commands)"),
        }
    }
}

fn print_repl_help() {
    println!("  play N   play room slot N (1..4)");
    println!("  draw     deal the first room / run from a full one");
    println!("  equip    equip or stow the carried weapon");
    println!("  new      start over after a win or loss");
    println!("  board    reprint the board");
    println!("  state    dump the snapshot as JSON");
    println!("  quit");
}

fn card_text(card: Card) -> String {
    let suit = match card.suit {
        Suit::Spades => '♠',
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
    };
    format!("{suit}{}", card.rank_label())
}

fn card_line(card: Card, state: &GameState) -> String {
    let info = describe(card, state);
    match info.kind {
        CardKind::Monster => {
            let attack = info.preview.unwrap_or(Attack {
                damage: i32::from(card.rank),
                blocked: false,
            });
            let shield = if attack.blocked { " blocked" } else { "" };
            format!("monster {} ({}{shield})", card_text(card), -attack.damage)
        }
        CardKind::Potion if info.potion_spent => {
            format!("potion {} (already drank this room)", card_text(card))
        }
        CardKind::Potion => format!("potion {} (+{})", card_text(card), card.rank),
        CardKind::Weapon => format!("weapon {}", card_text(card)),
    }
}

fn event_line(event: Event) -> String {
    match event {
        Event::GameStarted { seed } => format!("the dungeon shuffles (seed {seed})"),
        Event::RoomEntered { room } => format!("entered room {room}"),
        Event::RoomFled { room } => format!("fled! the room resurfaces as room {room}"),
        Event::PotionQuaffed { card, healed } => {
            format!("quaffed {}: +{healed} health", card_text(card))
        }
        Event::PotionWasted { card } => {
            format!("{} goes down the drain (already drank)", card_text(card))
        }
        Event::MonsterFought { card, damage, blocked } => {
            if blocked {
                format!("blocked {}: took {damage}", card_text(card))
            } else {
                format!("fought {} bare: took {damage}", card_text(card))
            }
        }
        Event::WeaponTaken { card } => format!("picked up {}", card_text(card)),
        Event::WeaponToggled { equipped } => {
            if equipped {
                "weapon equipped".to_string()
            } else {
                "weapon stowed".to_string()
            }
        }
        Event::GameWon { best } => format!("dungeon cleared! best: {best}"),
        Event::GameLost { room } => format!("slain in room {room}"),
    }
}

// ---------------------------------------------------------------------------
// sim: batch autoplay
// ---------------------------------------------------------------------------

fn cmd_sim(args: &[String]) -> i32 {
    let mut config = AutoplayConfig::default();
    let mut out: Option<PathBuf> = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--games" => match next_u64(args, &mut idx) {
                Some(value) => config.games = value as u32,
                None => return usage_error("--games needs a number"),
            },
            "--seed" => match next_u64(args, &mut idx) {
                Some(value) => config.seed = value,
                None => return usage_error("--seed needs a number"),
            },
            "--max-steps" => match next_u64(args, &mut idx) {
                Some(value) => config.max_steps = value as u32,
                None => return usage_error("--max-steps needs a number"),
            },
            "--policy" => {
                let Some(name) = args.get(idx + 1) else {
                    return usage_error("--policy needs random|greedy");
                };
                match Policy::from_name(name) {
                    Some(policy) => config.policy = policy,
                    None => return usage_error("--policy needs random|greedy"),
                }
                idx += 1;
            }
            "--out" => {
                let Some(path) = args.get(idx + 1) else {
                    return usage_error("--out needs a path");
                };
                out = Some(PathBuf::from(path));
                idx += 1;
            }
            other => return usage_error(&format!("unknown sim option: {other}")),
        }
        idx += 1;
    }

    let report = run_batch(&config, out.is_some());
    let summary = &report.summary;
    println!(
        "policy {} | games {} | seed {}",
        config.policy.name(),
        summary.games,
        config.seed
    );
    println!(
        "wins {} | losses {} | step-capped {} | win rate {:.1}%",
        summary.wins,
        summary.losses,
        summary.step_capped,
        summary.win_rate * 100.0
    );
    println!(
        "best overall {} | avg best {:.1} | avg rooms {:.1}",
        summary.best_overall, summary.average_best, summary.average_rooms
    );
    if let Some(path) = out {
        if let Err(err) = write_report(&path, &report) {
            eprintln!("error: write report to {}: {err}", path.display());
            return 1;
        }
        println!("report written to {}", path.display());
    }
    0
}

fn usage_error(message: &str) -> i32 {
    eprintln!("error: {message}");
    print_usage();
    2
}

fn next_u64(args: &[String], idx: &mut usize) -> Option<u64> {
    let value = args.get(*idx + 1)?.parse::<u64>().ok()?;
    *idx += 1;
    Some(value)
}

fn flag_u64(args: &[String], flag: &str) -> Option<u64> {
    let mut idx = 0usize;
    while idx < args.len() {
        if args[idx] == flag {
            return args.get(idx + 1)?.parse::<u64>().ok();
        }
        idx += 1;
    }
    None
}
