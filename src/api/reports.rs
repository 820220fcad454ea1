use crate::api::dto::{CardDto, HandReportDto};
use crate::domain::CardPile;
use crate::eval::PokerHand;

/// Собрать отчёт по одной руке.
pub fn build_hand_report(hand: &PokerHand) -> HandReportDto {
    HandReportDto {
        label: hand.label().to_string(),
        cards: hand.cards().iter().map(CardDto::from).collect(),
        categories: hand.categories(),
        best: hand.best_category(),
    }
}

pub fn build_hand_reports(hands: &[PokerHand]) -> Vec<HandReportDto> {
    hands.iter().map(build_hand_report).collect()
}

/// JSON-массив отчётов (pretty).
pub fn reports_to_json(hands: &[PokerHand]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_hand_reports(hands))
}

/// Текстовый вид: метка, карты построчно, категории.
pub fn render_hand_text(hand: &PokerHand) -> String {
    let categories = hand.categories();
    let summary = if categories.is_empty() {
        hand.best_category().to_string()
    } else {
        categories
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{}\n{}\n[{}]", hand.label(), hand.render(), summary)
}
