use super::card::{Card, Column};

pub fn can_place_on_column(card: Card, column: &Column) -> bool {
    match column.top() {
        None => card.is_king(),
        Some(top) => card.color() != top.color() && card.rank() + 1 == top.rank(),
    }
}

pub fn can_place_on_foundation(card: Card, foundation: &[Card]) -> bool {
    match foundation.last() {
        None => card.is_ace(),
        Some(&top) => card.suit() == top.suit() && card.rank() == top.rank() + 1,
    }
}

/// The longest face-up suffix of the column that alternates colour and
/// descends by one rank at every step.
pub fn column_run(column: &Column) -> &[Card] {
    let cards = column.cards();
    let hidden = column.hidden();
    if hidden >= cards.len() {
        return &[];
    }

    let mut start = cards.len() - 1;
    while start > hidden {
        let below = cards[start - 1];
        let above = cards[start];
        if below.color() == above.color() || below.rank() != above.rank() + 1 {
            break;
        }
        start -= 1;
    }

    &cards[start..]
}
