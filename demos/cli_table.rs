//! Terminal blackjack table.
//!
//! Reads snapshots, sends commands, and prints the dealer's turn as the
//! table publishes it. Set `RUST_LOG=bjtable=debug` to see engine logs.

use std::io::{self, Write};
use std::sync::mpsc::Receiver;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    CHIP_VALUES, Card, DealerHand, GameState, Hand, Snapshot, Suit, Table, TableEvent,
    TableOptions,
};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).without_time().init();

    println!("Blackjack table (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(TableOptions::default(), seed);
    let events = table.subscribe();

    loop {
        let snapshot = table.snapshot();
        if snapshot.balance == 0 && snapshot.pending_bet == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        let chips = CHIP_VALUES
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");
        println!(
            "\nBalance: {} | Current bet: {}",
            snapshot.balance, snapshot.pending_bet
        );
        let input = prompt_line(&format!("Add chips ({chips}), [c]lear, [d]eal: "));
        match input.as_str() {
            "q" | "quit" => break,
            "c" | "clear" => {
                let _ = table.clear_bet();
            }
            "d" | "deal" => {
                if table.deal().is_ok() {
                    play_round(&table, &events);
                }
            }
            amount => match amount.parse::<usize>() {
                Ok(amount) => {
                    let _ = table.place_bet(amount);
                }
                Err(_) => println!("Unknown input."),
            },
        }

        let message = table.snapshot().status_message;
        if !message.is_empty() {
            println!("{message}");
        }
        drain(&events);
    }
}

fn play_round(table: &Table, events: &Receiver<TableEvent>) {
    drain(events);

    while table.snapshot().state == GameState::PlayerTurn {
        let snapshot = table.snapshot();
        print_table(&snapshot);
        println!("{}", snapshot.status_message);
        println!("{}", format_actions(table));

        let _ = match prompt_line("Action: ").as_str() {
            "h" | "hit" => table.hit().map(|_| ()),
            "s" | "stand" => table.stand(),
            "d" | "double" => table.double_down().map(|_| ()),
            "p" | "split" => table.split(),
            _ => {
                println!("Unknown action.");
                continue;
            }
        };
        drain(events);
    }

    if table.snapshot().state == GameState::DealerTurn {
        // Events arrive at the table's pace until the round settles.
        for event in events {
            match event {
                TableEvent::HoleRevealed(snapshot) => {
                    println!("{}", snapshot.status_message);
                    print_dealer(&snapshot.dealer_hand);
                }
                TableEvent::DealerDrew { snapshot, .. } => {
                    println!("{}", snapshot.status_message);
                }
                TableEvent::RoundOver { result, .. } => {
                    println!("Round complete. Net {}", result.net());
                    break;
                }
                TableEvent::Changed(_) => {}
            }
        }
        table.wait_for_dealer();
    }

    print_table(&table.snapshot());
}

fn drain(events: &Receiver<TableEvent>) {
    for _ in events.try_iter() {}
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &Snapshot) {
    print_dealer(&snapshot.dealer_hand);

    for (index, hand) in snapshot.player_hands.iter().enumerate() {
        let marker = if snapshot.state == GameState::PlayerTurn
            && index == snapshot.current_hand_index
        {
            "*"
        } else {
            " "
        };
        println!(
            "{} Hand {}: {} | value {} | bet {} | {:?}",
            marker,
            index + 1,
            format_hand(hand),
            hand.value(),
            hand.bet(),
            hand.status()
        );
    }
    println!();
}

fn print_dealer(dealer: &DealerHand) {
    println!(
        "\nDealer: {} (value {})",
        format_dealer(dealer),
        dealer.visible_value()
    );
}

fn format_actions(table: &Table) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", table.can_double()),
        format_action("split", "p", table.can_split()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }
    dealer
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if dealer.is_hidden(index) {
                "??".to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}
