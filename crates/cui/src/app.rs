use scoundrel_core::{Action, Card, Event, EventBus, GameState, Phase, RngState, Suit};
use std::collections::VecDeque;

const MAX_EVENT_LOG: usize = 100;

pub struct App {
    pub seed: u64,
    pub state: GameState,
    pub rng: RngState,
    pub events: EventBus,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(RngState::from_entropy, RngState::from_seed);
        let mut app = Self {
            seed: rng.seed(),
            state: GameState::new(),
            rng,
            events: EventBus::default(),
            event_log: VecDeque::new(),
            status_line: String::new(),
            show_help: false,
            should_quit: false,
        };
        app.dispatch_core(Action::StartOrDraw);
        app
    }

    pub fn on_tick(&mut self) {}

    pub fn play_slot(&mut self, index: usize) {
        if self.state.phase != Phase::InProgress {
            self.status_line = "no game in progress (n for a new one)".to_string();
            return;
        }
        if self.state.room.card(index).is_none() {
            self.status_line = format!("slot {} is empty", index + 1);
            return;
        }
        self.dispatch_core(Action::PlaySlot { index });
    }

    pub fn draw_or_run(&mut self) {
        if self.state.phase == Phase::InProgress {
            if !self.state.room.is_full() {
                self.status_line = "finish this room first".to_string();
                return;
            }
            if self.state.ran_last_room {
                self.status_line = "ran last room! play a card first".to_string();
                return;
            }
        }
        self.dispatch_core(Action::StartOrDraw);
    }

    pub fn toggle_equip(&mut self) {
        if self.state.current_weapon.is_none() {
            self.status_line = "no weapon to equip".to_string();
            return;
        }
        self.dispatch_core(Action::ToggleWeaponEquip);
    }

    pub fn new_game(&mut self) {
        if self.state.phase == Phase::InProgress {
            self.status_line = "a game is already running (q quits)".to_string();
            return;
        }
        self.dispatch_core(Action::StartOrDraw);
    }

    /// Replays a scripted action list before the first frame.
    pub fn auto_perform(&mut self, actions: &[Action]) {
        for &action in actions {
            self.dispatch_core(action);
        }
    }

    fn dispatch_core(&mut self, action: Action) {
        self.state = self.state.apply(action, &mut self.rng, &mut self.events);
        self.flush_events();
    }

    fn flush_events(&mut self) {
        let lines: Vec<String> = self.events.drain().map(format_event).collect();
        for line in lines {
            self.status_line = line.clone();
            self.push_event_line(line);
        }
    }

    fn push_event_line(&mut self, line: String) {
        self.event_log.push_back(line);
        while self.event_log.len() > MAX_EVENT_LOG {
            self.event_log.pop_front();
        }
    }
}

pub fn suit_symbol(suit: Suit) -> char {
    match suit {
        Suit::Spades => '♠',
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
    }
}

pub fn card_label(card: Card) -> String {
    format!("{}{}", suit_symbol(card.suit), card.rank_label())
}

fn format_event(event: Event) -> String {
    match event {
        Event::GameStarted { seed } => format!("the dungeon shuffles (seed {seed})"),
        Event::RoomEntered { room } => format!("entered room {room}"),
        Event::RoomFled { room } => format!("fled! the room resurfaces as room {room}"),
        Event::PotionQuaffed { card, healed } => {
            format!("quaffed {}: +{healed} health", card_label(card))
        }
        Event::PotionWasted { card } => {
            format!("{} goes down the drain (already drank)", card_label(card))
        }
        Event::MonsterFought { card, damage, blocked } => {
            if blocked {
                format!("blocked {}: took {damage}", card_label(card))
            } else {
                format!("fought {} bare: took {damage}", card_label(card))
            }
        }
        Event::WeaponTaken { card } => format!("picked up {}", card_label(card)),
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
