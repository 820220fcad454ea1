use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ParseCardError;

/// Масть карты. Порядок объявления = порядок сортировки колоды.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Diamonds = 0, // ♦
    Clubs = 1,    // ♣
    Hearts = 2,   // ♥
    Spades = 3,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Индекс 0..=3 (для гистограмм).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    fn short(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// Ранг карты: туз = 1, король = 13.
///
/// Туз сортируется как младшая карта. Для стритов он дополнительно
/// считается за 14, это делает `eval::straight`, сам ранг не меняется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Все ранги по возрастанию (A, 2, ..., K).
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Числовое значение 1..=13.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Полное имя для `"<Rank> of <Suit>"`.
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    fn short(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            r => char::from(b'0' + r.value()),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseCardError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1..=13 => Ok(Rank::ALL[(v - 1) as usize]),
            _ => Err(ParseCardError::RankOutOfRange(v)),
        }
    }
}

/// Игральная карта стандартной 52-карточной колоды.
///
/// Порядок полей важен: derive(Ord) сравнивает сначала масть, потом ранг.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Короткая запись вида `Ad`, `Tc`, `7h`.
    pub fn short(&self) -> String {
        format!("{}{}", self.rank.short(), self.suit.short())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ace of Diamonds`, `10 of Spades`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ad", "Tc", "7h" (регистр не важен).
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (r_ch, s_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err(ParseCardError::BadLength(s.to_string())),
        };

        let rank = match r_ch.to_ascii_uppercase() {
            'A' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            _ => return Err(ParseCardError::BadRank(r_ch)),
        };

        let suit = match s_ch.to_ascii_lowercase() {
            'd' => Suit::Diamonds,
            'c' => Suit::Clubs,
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            _ => return Err(ParseCardError::BadSuit(s_ch)),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Разобрать список карт через пробел: `"Ad 2c 3h"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}
