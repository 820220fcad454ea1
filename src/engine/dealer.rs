use crate::domain::{CardPile, Deck};
use crate::engine::errors::DealError;
use crate::eval::PokerHand;
use crate::infra::{DealConfig, DeterministicRng, RandomSource, SystemRng};

/// Перемешать свежую колоду и раздать руки согласно конфигу.
///
/// RNG выбирается по `config.seed`.
pub fn deal(config: &DealConfig) -> Result<Vec<PokerHand>, DealError> {
    match config.seed {
        Some(seed) => deal_with_rng(config, &mut DeterministicRng::from_seed(seed)),
        None => deal_with_rng(config, &mut SystemRng),
    }
}

/// То же, что `deal`, но с явно переданным RNG.
///
/// Руки называются "Hand 1", "Hand 2", ... и отсортированы.
pub fn deal_with_rng<R: RandomSource>(
    config: &DealConfig,
    rng: &mut R,
) -> Result<Vec<PokerHand>, DealError> {
    config.validate()?;

    let mut deck = Deck::standard_52();
    deck.shuffle(rng);

    let mut hands = Vec::with_capacity(config.hands);
    for i in 0..config.hands {
        let mut hand = PokerHand::new(format!("Hand {}", i + 1));
        deck.move_cards(&mut hand, config.cards_per_hand)?;
        hand.sort();
        hands.push(hand);
    }

    log::debug!(
        "dealt {} hands x {} cards, {} left in deck",
        config.hands,
        config.cards_per_hand,
        deck.len()
    );
    Ok(hands)
}
