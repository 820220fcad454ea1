//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use poker_hands::domain::*;
use poker_hands::infra::DeterministicRng;

/// Утилита: удобный конструктор карты.
fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Card: Display в виде "<Rank> of <Suit>".
#[test]
fn card_display_long_names() {
    assert_eq!(c(Rank::Ace, Suit::Diamonds).to_string(), "Ace of Diamonds");
    assert_eq!(c(Rank::Ten, Suit::Spades).to_string(), "10 of Spades");
    assert_eq!(c(Rank::Two, Suit::Clubs).to_string(), "2 of Clubs");
    assert_eq!(c(Rank::Jack, Suit::Hearts).to_string(), "Jack of Hearts");
    assert_eq!(c(Rank::Queen, Suit::Hearts).to_string(), "Queen of Hearts");
    assert_eq!(c(Rank::King, Suit::Clubs).to_string(), "King of Clubs");
}

/// Card: короткая запись и FromStr.
#[test]
fn card_short_notation_parse() {
    let cards = [
        c(Rank::Ace, Suit::Hearts),
        c(Rank::Ten, Suit::Spades),
        c(Rank::Two, Suit::Clubs),
        c(Rank::Nine, Suit::Diamonds),
        c(Rank::King, Suit::Diamonds),
    ];

    for card in cards {
        let parsed: Card = card.short().parse().expect("parse Card from short string");
        assert_eq!(parsed, card);
    }

    assert_eq!("aD".parse::<Card>(), Ok(c(Rank::Ace, Suit::Diamonds)));

    // Неверные строки
    assert!(matches!(
        "".parse::<Card>(),
        Err(ParseCardError::BadLength(_))
    ));
    assert!(matches!(
        "10h".parse::<Card>(),
        Err(ParseCardError::BadLength(_))
    ));
    assert_eq!("Xh".parse::<Card>(), Err(ParseCardError::BadRank('X')));
    assert_eq!("Ax".parse::<Card>(), Err(ParseCardError::BadSuit('x')));
}

#[test]
fn parse_cards_list() {
    let cards = parse_cards("Ad 2c  3h\t4s 5d").unwrap();
    assert_eq!(cards.len(), 5);
    assert_eq!(cards[0], c(Rank::Ace, Suit::Diamonds));
    assert_eq!(cards[4], c(Rank::Five, Suit::Diamonds));

    assert!(parse_cards("Ad 2z").is_err());
    assert!(parse_cards("").unwrap().is_empty());
}

#[test]
fn rank_values_and_try_from() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::King.value(), 13);
    assert_eq!(Rank::try_from(11), Ok(Rank::Jack));
    assert_eq!(Rank::try_from(0), Err(ParseCardError::RankOutOfRange(0)));
    assert_eq!(Rank::try_from(14), Err(ParseCardError::RankOutOfRange(14)));

    for (i, r) in Rank::ALL.iter().enumerate() {
        assert_eq!(r.value() as usize, i + 1);
    }
}

/// Порядок карт: сначала масть (D < C < H < S), потом ранг (туз младший).
#[test]
fn card_ordering_suit_then_rank() {
    assert!(c(Rank::King, Suit::Diamonds) < c(Rank::Ace, Suit::Clubs));
    assert!(c(Rank::Ace, Suit::Hearts) < c(Rank::Two, Suit::Hearts));
    assert!(c(Rank::Queen, Suit::Hearts) < c(Rank::Ace, Suit::Spades));
    assert_eq!(c(Rank::Five, Suit::Clubs), c(Rank::Five, Suit::Clubs));
    assert_ne!(c(Rank::Five, Suit::Clubs), c(Rank::Five, Suit::Hearts));
}

/// Свежая колода: 52 разные карты в каноническом порядке.
#[test]
fn standard_deck_is_52_unique_in_canonical_order() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), 52);

    assert_eq!(deck.cards()[0], c(Rank::Ace, Suit::Diamonds));
    assert_eq!(deck.cards()[12], c(Rank::King, Suit::Diamonds));
    assert_eq!(deck.cards()[13], c(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.cards()[51], c(Rank::King, Suit::Spades));

    // канонический порядок = отсортированный
    let mut sorted = deck.cards().to_vec();
    sorted.sort();
    assert_eq!(sorted, deck.cards());

    assert_eq!(Deck::default(), deck);
}

/// shuffle + sort возвращает канонический порядок при любом seed.
#[test]
fn shuffle_then_sort_restores_canonical_order() {
    let canonical = Deck::standard_52();

    for seed in [0u64, 1, 42, 12345, u64::MAX] {
        let mut deck = Deck::standard_52();
        deck.shuffle(&mut DeterministicRng::from_seed(seed));
        assert_eq!(deck.len(), 52);
        deck.sort();
        assert_eq!(deck, canonical, "seed {seed}");
    }
}

#[test]
fn add_remove_pop() {
    let mut deck = Deck::standard_52();
    let ks = c(Rank::King, Suit::Spades);

    assert_eq!(deck.pop_card(), Ok(ks));
    assert_eq!(deck.len(), 51);
    assert!(!deck.contains(&ks));

    deck.add_card(ks);
    assert_eq!(deck.cards().last(), Some(&ks));

    let five_h = c(Rank::Five, Suit::Hearts);
    assert_eq!(deck.remove_card(&five_h), Ok(()));
    assert!(!deck.contains(&five_h));
    assert_eq!(
        deck.remove_card(&five_h),
        Err(DeckError::CardNotFound(five_h))
    );

    // pop по индексу: 0 = низ колоды
    assert_eq!(deck.pop_card_at(0), Ok(c(Rank::Ace, Suit::Diamonds)));
    assert_eq!(
        deck.pop_card_at(100),
        Err(DeckError::IndexOutOfBounds { index: 100, len: 50 })
    );
}

#[test]
fn pop_from_empty_hand_fails() {
    let mut hand = Hand::new("empty");
    assert_eq!(hand.pop_card(), Err(DeckError::Empty));
    assert_eq!(hand.pop_card_at(0), Err(DeckError::Empty));
}

/// move_cards: перенос мультимножества, по одной карте сверху.
#[test]
fn move_cards_transfers_from_top() {
    let mut deck = Deck::standard_52();
    let top_three: Vec<Card> = deck.cards()[49..].to_vec();

    let mut hand = Hand::new("north");
    deck.move_cards(&mut hand, 3).unwrap();

    assert_eq!(deck.len(), 49);
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.label(), "north");

    // первая переложенная: верхняя карта колоды
    let expected: Vec<Card> = top_three.into_iter().rev().collect();
    assert_eq!(hand.cards(), expected.as_slice());
    for card in hand.cards() {
        assert!(!deck.contains(card));
    }
}

#[test]
fn move_cards_insufficient_leaves_both_untouched() {
    let mut deck = Deck::standard_52();
    let mut hand = Hand::new("a");
    deck.move_cards(&mut hand, 50).unwrap();

    let mut other = Hand::new("b");
    let err = deck.move_cards(&mut other, 3).unwrap_err();
    assert_eq!(
        err,
        DeckError::InsufficientCards {
            requested: 3,
            available: 2
        }
    );
    assert_eq!(deck.len(), 2);
    assert!(other.is_empty());

    // ровно столько, сколько есть: ок
    deck.move_cards(&mut other, 2).unwrap();
    assert!(deck.is_empty());
    assert_eq!(other.len(), 2);

    // ноль карт из пустой колоды: тоже ок
    deck.move_cards(&mut other, 0).unwrap();
}

#[test]
fn move_more_than_whole_deck_fails() {
    let mut deck = Deck::standard_52();
    let mut hand = Hand::new("greedy");

    assert_eq!(
        deck.move_cards(&mut hand, 53),
        Err(DeckError::InsufficientCards {
            requested: 53,
            available: 52
        })
    );
    assert_eq!(deck, Deck::standard_52());
    assert!(hand.is_empty());
}

/// Рука в руку: тоже CardPile.
#[test]
fn hand_to_hand_move() {
    let mut a = Hand::from_cards("a", parse_cards("Ad 2c 3h").unwrap());
    let mut b = Hand::new("b");
    a.move_cards(&mut b, 2).unwrap();
    assert_eq!(a.cards(), parse_cards("Ad").unwrap().as_slice());
    assert_eq!(b.cards(), parse_cards("3h 2c").unwrap().as_slice());
}

#[test]
fn render_newline_joined() {
    let hand = Hand::from_cards("h", parse_cards("Ad Tc Ks").unwrap());
    assert_eq!(
        hand.to_string(),
        "Ace of Diamonds\n10 of Clubs\nKing of Spades"
    );
    assert_eq!(Hand::new("empty").to_string(), "");

    let deck = Deck::standard_52();
    let text = deck.to_string();
    assert_eq!(text.lines().count(), 52);
    assert_eq!(text.lines().next(), Some("Ace of Diamonds"));
}
