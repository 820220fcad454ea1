// src/bin/deal_hands.rs

use std::process::ExitCode;

use clap::Parser;

use poker_hands::api::{render_hand_text, reports_to_json};
use poker_hands::domain::{parse_cards, CardPile};
use poker_hands::engine::deal;
use poker_hands::eval::PokerHand;
use poker_hands::infra::DealConfig;

/// Перемешать колоду, раздать руки и показать их категории.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Сколько рук раздать.
    #[arg(long, default_value_t = 5)]
    hands: usize,

    /// Карт в каждой руке.
    #[arg(long = "cards", default_value_t = 7)]
    cards_per_hand: usize,

    /// Seed для воспроизводимой раздачи.
    #[arg(long)]
    seed: Option<u64>,

    /// Разобрать заданную руку вместо раздачи, например "Ad 2c 3h 4s 5d".
    #[arg(long)]
    hand: Option<String>,

    /// Вывод в JSON.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn deal_config(&self) -> DealConfig {
        DealConfig {
            hands: self.hands,
            cards_per_hand: self.cards_per_hand,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let hands = match &args.hand {
        Some(list) => match parse_cards(list) {
            Ok(cards) => {
                let mut hand = PokerHand::from_cards("Hand", cards);
                hand.sort();
                vec![hand]
            }
            Err(err) => {
                eprintln!("[CLI] {err}");
                return ExitCode::FAILURE;
            }
        },
        None => match deal(&args.deal_config()) {
            Ok(hands) => hands,
            Err(err) => {
                eprintln!("[CLI] {err}");
                return ExitCode::FAILURE;
            }
        },
    };
    log::info!("{} hands ready", hands.len());

    if args.json {
        match reports_to_json(&hands) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("[CLI] JSON: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for hand in &hands {
            println!("{}", render_hand_text(hand));
            println!();
        }
    }

    ExitCode::SUCCESS
}
