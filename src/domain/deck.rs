use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::errors::DeckError;
use crate::infra::rng::RandomSource;

/// Упорядоченная стопка карт: колода, рука, покерная рука.
///
/// Реализации дают только доступ к `Vec<Card>`, все операции описаны здесь.
/// "Верх" стопки: конец вектора.
pub trait CardPile {
    fn cards(&self) -> &[Card];
    fn cards_mut(&mut self) -> &mut Vec<Card>;

    fn len(&self) -> usize {
        self.cards().len()
    }

    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    fn contains(&self, card: &Card) -> bool {
        self.cards().contains(card)
    }

    /// Положить карту наверх.
    fn add_card(&mut self, card: Card) {
        self.cards_mut().push(card);
    }

    /// Убрать первое вхождение карты.
    fn remove_card(&mut self, card: &Card) -> Result<(), DeckError> {
        let cards = self.cards_mut();
        let pos = cards
            .iter()
            .position(|c| c == card)
            .ok_or(DeckError::CardNotFound(*card))?;
        cards.remove(pos);
        Ok(())
    }

    /// Снять верхнюю карту.
    fn pop_card(&mut self) -> Result<Card, DeckError> {
        self.cards_mut().pop().ok_or(DeckError::Empty)
    }

    /// Вынуть карту по индексу (0 = низ стопки).
    fn pop_card_at(&mut self, index: usize) -> Result<Card, DeckError> {
        let cards = self.cards_mut();
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        if index >= cards.len() {
            return Err(DeckError::IndexOutOfBounds {
                index,
                len: cards.len(),
            });
        }
        Ok(cards.remove(index))
    }

    fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(self.cards_mut().as_mut_slice());
        log::debug!("shuffled {} cards", self.len());
    }

    /// Сортировка по (масть, ранг).
    fn sort(&mut self) {
        self.cards_mut().sort();
    }

    /// Переложить `count` верхних карт в `dest` по одной.
    ///
    /// Если карт не хватает, ничего не перекладывается.
    fn move_cards<P: CardPile>(&mut self, dest: &mut P, count: usize) -> Result<(), DeckError> {
        let available = self.len();
        if count > available {
            return Err(DeckError::InsufficientCards {
                requested: count,
                available,
            });
        }
        for _ in 0..count {
            let card = self.pop_card()?;
            log::trace!("move {card}");
            dest.add_card(card);
        }
        Ok(())
    }

    /// Карты построчно: `"<Rank> of <Suit>"`.
    fn render(&self) -> String {
        self.cards()
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Колода карт. Изначально все 52 карты по одной.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Стандартная колода в каноническом порядке:
    /// Diamonds A..K, Clubs A..K, Hearts A..K, Spades A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}

impl CardPile for Deck {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
