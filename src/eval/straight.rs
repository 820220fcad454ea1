use crate::domain::card::{Card, Rank};

/// Битовая маска эффективных значений рангов.
///
/// Бит `v` = значение `v` (1..=14). Туз ставит сразу два бита: 1 и 14.
pub type RankMask = u16;

/// Маски всех возможных стритов (5 значений подряд), от младшего к старшему.
///
/// Индексы:
///   0: A2345 (wheel)
///   1: 23456
///   ...
///   9: TJQKA (broadway)
pub const STRAIGHT_MASKS: [RankMask; 10] = build_straight_masks();

const fn build_straight_masks() -> [RankMask; 10] {
    let mut masks = [0; 10];
    let mut i = 0;
    while i < 10 {
        // пять бит начиная со значения i + 1
        masks[i] = 0b1_1111 << (i + 1);
        i += 1;
    }
    masks
}

/// Биты, которые даёт один ранг.
pub fn rank_to_bits(rank: Rank) -> RankMask {
    match rank {
        Rank::Ace => (1 << 1) | (1 << 14),
        r => 1 << r.value(),
    }
}

/// Маска по набору карт. Дубликаты рангов схлопываются сами.
pub fn mask_from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> RankMask {
    cards
        .into_iter()
        .fold(0, |mask, card| mask | rank_to_bits(card.rank))
}

/// Старшее значение (5..=14) лучшего стрита в маске, если он есть.
///
/// wheel (A2345) → 5, broadway (TJQKA) → 14.
pub fn detect_straight(mask: RankMask) -> Option<u8> {
    STRAIGHT_MASKS
        .iter()
        .enumerate()
        .rev()
        .find(|(_, sm)| mask & **sm == **sm)
        .map(|(i, _)| i as u8 + 5)
}

/// Есть ли среди карт пять значений подряд (туз = 1 и 14).
pub fn has_straight(cards: &[Card]) -> bool {
    detect_straight(mask_from_cards(cards)).is_some()
}
