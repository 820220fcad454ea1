use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::CardPile;
use crate::domain::hand::Hand;

use super::hand_category::{self, HandCategory};
use super::histogram::{RankHistogram, SuitHistogram};
use super::straight;

/// Минимум карт одной масти для флеша.
pub const FLUSH_SIZE: usize = 5;

//
// ---- Чистые предикаты над набором карт ----
//
// Каждый строит свою гистограмму сам, порядок вызовов не важен.
// Категории не взаимоисключающие: флеш может одновременно быть и парой.
//

/// Ранг ровно с двумя картами. Сет парой не считается.
pub fn has_pair(cards: &[Card]) -> bool {
    RankHistogram::from_cards(cards).has_exactly(2)
}

/// Два разных ранга, в каждом хотя бы по две карты.
pub fn has_two_pair(cards: &[Card]) -> bool {
    RankHistogram::from_cards(cards).ranks_with_at_least(2) >= 2
}

pub fn has_three_of_a_kind(cards: &[Card]) -> bool {
    RankHistogram::from_cards(cards).ranks_with_at_least(3) >= 1
}

pub fn has_four_of_a_kind(cards: &[Card]) -> bool {
    RankHistogram::from_cards(cards).has_exactly(4)
}

/// Ранг ровно с тремя картами плюс ДРУГОЙ ранг с двумя и более.
pub fn has_full_house(cards: &[Card]) -> bool {
    let hist = RankHistogram::from_cards(cards);
    for (trips, count) in hist.iter() {
        if count == 3 && hist.iter().any(|(rank, c)| rank != trips && c >= 2) {
            return true;
        }
    }
    false
}

pub fn has_flush(cards: &[Card]) -> bool {
    SuitHistogram::from_cards(cards)
        .suits_with_at_least(FLUSH_SIZE)
        .next()
        .is_some()
}

pub fn has_straight(cards: &[Card]) -> bool {
    straight::has_straight(cards)
}

/// Стрит только среди карт флеш-масти.
pub fn has_straight_flush(cards: &[Card]) -> bool {
    SuitHistogram::from_cards(cards)
        .suits_with_at_least(FLUSH_SIZE)
        .any(|suit| {
            let mask = straight::mask_from_cards(cards.iter().filter(|c| c.suit == suit));
            straight::detect_straight(mask).is_some()
        })
}

/// Покерная рука: обычная `Hand` плюс классификация.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokerHand {
    hand: Hand,
}

impl PokerHand {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            hand: Hand::new(label),
        }
    }

    pub fn from_cards(label: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            hand: Hand::from_cards(label, cards),
        }
    }

    pub fn label(&self) -> &str {
        self.hand.label()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn into_hand(self) -> Hand {
        self.hand
    }

    /// Свежая гистограмма рангов по текущим картам.
    pub fn ranks_hist(&self) -> RankHistogram {
        RankHistogram::from_cards(self.cards())
    }

    /// Свежая гистограмма мастей по текущим картам.
    pub fn suit_hist(&self) -> SuitHistogram {
        SuitHistogram::from_cards(self.cards())
    }

    pub fn has_pair(&self) -> bool {
        has_pair(self.cards())
    }

    pub fn has_two_pair(&self) -> bool {
        has_two_pair(self.cards())
    }

    pub fn has_three_of_a_kind(&self) -> bool {
        has_three_of_a_kind(self.cards())
    }

    pub fn has_four_of_a_kind(&self) -> bool {
        has_four_of_a_kind(self.cards())
    }

    pub fn has_full_house(&self) -> bool {
        has_full_house(self.cards())
    }

    pub fn has_flush(&self) -> bool {
        has_flush(self.cards())
    }

    pub fn has_straight(&self) -> bool {
        has_straight(self.cards())
    }

    pub fn has_straight_flush(&self) -> bool {
        has_straight_flush(self.cards())
    }

    /// Все выполненные категории, от слабой к сильной.
    pub fn categories(&self) -> Vec<HandCategory> {
        hand_category::categories(self.cards())
    }

    pub fn best_category(&self) -> HandCategory {
        hand_category::best_category(self.cards())
    }
}

impl From<Hand> for PokerHand {
    fn from(hand: Hand) -> Self {
        Self { hand }
    }
}

impl CardPile for PokerHand {
    fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        self.hand.cards_mut()
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
