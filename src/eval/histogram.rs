use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Гистограмма рангов: сколько карт каждого ранга в руке.
///
/// Индекс = значение ранга (1..=13), нулевой не используется.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankHistogram {
    counts: [usize; 14],
}

impl RankHistogram {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0usize; 14];
        for card in cards {
            counts[card.rank.value() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> usize {
        self.counts[rank.value() as usize]
    }

    /// Только встречающиеся ранги, по возрастанию.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, usize)> + '_ {
        Rank::ALL
            .into_iter()
            .map(|r| (r, self.count(r)))
            .filter(|&(_, c)| c > 0)
    }

    /// Есть ли ранг с ровно `n` картами.
    pub fn has_exactly(&self, n: usize) -> bool {
        self.iter().any(|(_, c)| c == n)
    }

    /// Сколько разных рангов имеют хотя бы `n` карт.
    pub fn ranks_with_at_least(&self, n: usize) -> usize {
        self.iter().filter(|&(_, c)| c >= n).count()
    }
}

/// Гистограмма мастей.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuitHistogram {
    counts: [usize; 4],
}

impl SuitHistogram {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0usize; 4];
        for card in cards {
            counts[card.suit.index()] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, suit: Suit) -> usize {
        self.counts[suit.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suit, usize)> + '_ {
        Suit::ALL
            .into_iter()
            .map(|s| (s, self.count(s)))
            .filter(|&(_, c)| c > 0)
    }

    /// Масти, в которых не меньше `n` карт.
    pub fn suits_with_at_least(&self, n: usize) -> impl Iterator<Item = Suit> + '_ {
        self.iter().filter(move |&(_, c)| c >= n).map(|(s, _)| s)
    }
}
