use crate::app::{card_label, App};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Line, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use scoundrel_core::{describe, Card, CardKind, GameState, Phase, Suit};

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(root[1]);

    draw_room(frame, middle[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(5)])
        .split(middle[1]);

    draw_status(frame, right[0], app);
    draw_gear(frame, right[1], app);
    draw_events(frame, root[2], app);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let banner = match app.state.phase {
        Phase::Won => Line::from("You Win!".bold().fg(Color::Green)),
        Phase::Lost => Line::from("Better luck next time!".bold().fg(Color::Red)),
        Phase::InProgress => Line::from("1-4 play a slot | d draw/run | e equip | ? help"),
        Phase::NotStarted => Line::from("d deals the first room"),
    };
    let lines = vec![
        Line::from(format!("Scoundrel | seed {}", app.seed).bold()),
        banner,
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_room(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for (index, slot) in app.state.room.slots().iter().enumerate() {
        lines.push(match slot.card() {
            Some(card) => room_line(index, card, &app.state),
            None => Line::from(format!("[{}]  --", index + 1))
                .style(Style::default().fg(Color::DarkGray)),
        });
    }
    let title = if app.state.phase == Phase::InProgress {
        format!("Room {}", app.state.room_count)
    } else {
        "Room".to_string()
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn room_line(index: usize, card: Card, state: &GameState) -> Line<'static> {
    let info = describe(card, state);
    let kind = match info.kind {
        CardKind::Monster => "Monster",
        CardKind::Potion => "Potion",
        CardKind::Weapon => "Weapon",
    };
    let mut text = format!(
        "[{}] {}  {} {}",
        index + 1,
        card_glyph(card),
        kind,
        card.rank_label()
    );
    match info.kind {
        CardKind::Monster => {
            if let Some(attack) = info.preview {
                let shield = if attack.blocked { " 🛡" } else { "" };
                text.push_str(&format!("  ({}{})", -attack.damage, shield));
            }
        }
        CardKind::Potion if info.potion_spent => text.push_str("  (X)"),
        _ => {}
    }
    Line::from(text).style(Style::default().fg(suit_color(card.suit)))
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let started = state.phase != Phase::NotStarted;
    let count_or_dash = |value: usize| {
        if started {
            value.to_string()
        } else {
            "-".to_string()
        }
    };
    let lines = vec![
        Line::from(format!("Health: {}/20", state.health)),
        Line::from(format!("Deck: {} remaining", count_or_dash(state.deck.len()))),
        Line::from(format!("Cleared: {}", count_or_dash(state.cards_cleared()))),
        Line::from(format!("Best: {} remaining", state.best)),
        Line::from(if state.ran_last_room && state.room.is_full() {
            "Ran last room!".to_string()
        } else if state.phase == Phase::InProgress && state.room.is_full() {
            "Run? (d)".to_string()
        } else {
            String::new()
        }),
    ];
    let block = Block::default().borders(Borders::ALL).title("Dungeon");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_gear(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let weapon_line = match state.current_weapon {
        Some(weapon) => {
            let status = if state.weapon_equipped {
                "Equipped!"
            } else {
                "e to equip"
            };
            Line::from(format!(
                "Weapon: {} {}  ({status})",
                card_glyph(weapon),
                card_label(weapon)
            ))
        }
        None => Line::from("Weapon: none".to_string()),
    };
    let defeated_line = match state.last_defeated {
        Some(card) => Line::from(format!("Last defeated: {}", card_label(card))),
        None => Line::from("Last defeated: -".to_string()),
    };
    let block = Block::default().borders(Borders::ALL).title("Gear");
    frame.render_widget(Paragraph::new(vec![weapon_line, defeated_line]).block(block), area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .event_log
        .iter()
        .rev()
        .map(|line| ListItem::new(line.clone()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 40, frame.area());
    let lines = vec![
        Line::from("1..4  play that room slot"),
        Line::from("d / space  deal the first room, or run from a full one"),
        Line::from("e  equip / stow the carried weapon"),
        Line::from("n  new game (after a win or loss)"),
        Line::from("?  toggle this help, Esc closes it"),
        Line::from("q  quit"),
    ];
    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn suit_color(suit: Suit) -> Color {
    if suit.is_monster() {
        Color::White
    } else {
        Color::Red
    }
}

/// Maps a card onto the U+1F0A0 playing-card block. The block keeps a
/// Knight between Jack and Queen, and files the Ace first.
fn card_glyph(card: Card) -> char {
    const CARD_BASE: u32 = 0x1F0A0;
    let face = u32::from(match card.rank {
        14 => 1,
        rank if rank > 11 => rank + 1,
        rank => rank,
    });
    let row = match card.suit {
        Suit::Spades => 0,
        Suit::Hearts => 1,
        Suit::Diamonds => 2,
        Suit::Clubs => 3,
    };
    char::from_u32(CARD_BASE + row * 16 + face).unwrap_or('\u{1F0A0}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_land_in_the_playing_card_block() {
        assert_eq!(card_glyph(Card::new(Suit::Spades, 14)), '\u{1F0A1}');
        assert_eq!(card_glyph(Card::new(Suit::Spades, 2)), '\u{1F0A2}');
        assert_eq!(card_glyph(Card::new(Suit::Hearts, 10)), '\u{1F0BA}');
        assert_eq!(card_glyph(Card::new(Suit::Diamonds, 7)), '\u{1F0C7}');
        // Queen and King skip the Knight at offset 12.
        assert_eq!(card_glyph(Card::new(Suit::Clubs, 12)), '\u{1F0DD}');
        assert_eq!(card_glyph(Card::new(Suit::Clubs, 13)), '\u{1F0DE}');
    }
}
