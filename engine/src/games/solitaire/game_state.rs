use serde::{Deserialize, Serialize};

use super::card::{Card, Column, DECK_SIZE, RANKS};
use super::rules::{can_place_on_column, can_place_on_foundation, column_run};
use crate::games::SessionRng;

pub const TABLEAU_COLUMNS: usize = 7;
pub const FOUNDATIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Waste,
    /// Cards from `start` to the top of `column`.
    Column { column: usize, start: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolitaireGameState {
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; FOUNDATIONS],
    columns: [Column; TABLEAU_COLUMNS],
    selection: Option<Selection>,
    moves_made: u32,
}

impl SolitaireGameState {
    /// Shuffles a full deck and deals columns of 1 to 7 cards with only the
    /// top card of each face up. The rest forms the stock.
    pub fn deal(rng: &mut SessionRng) -> Self {
        let mut deck: Vec<Card> = (0..DECK_SIZE).filter_map(Card::new).collect();
        rng.shuffle(&mut deck);

        let mut cards = deck.into_iter();
        let columns = std::array::from_fn(|i| {
            let dealt: Vec<Card> = cards.by_ref().take(i + 1).collect();
            Column::new(dealt, i)
        });

        Self {
            stock: cards.collect(),
            waste: Vec::new(),
            foundations: Default::default(),
            columns,
            selection: None,
            moves_made: 0,
        }
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn foundations(&self) -> &[Vec<Card>; FOUNDATIONS] {
        &self.foundations
    }

    pub fn columns(&self) -> &[Column; TABLEAU_COLUMNS] {
        &self.columns
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.len() == RANKS as usize)
    }

    pub fn selected_cards(&self) -> Option<&[Card]> {
        match self.selection? {
            Selection::Waste => {
                let len = self.waste.len();
                (len > 0).then(|| &self.waste[len - 1..])
            }
            Selection::Column { column, start } => self.columns.get(column)?.cards().get(start..),
        }
    }

    /// Turns the top stock card onto the waste, or recycles the waste once
    /// the stock runs out.
    #[must_use]
    pub fn draw_card(&self) -> Option<Self> {
        if self.stock.is_empty() && self.waste.is_empty() {
            return None;
        }

        let mut next = self.clone();
        match next.stock.pop() {
            Some(card) => next.waste.push(card),
            None => {
                next.stock = next.waste.drain(..).rev().collect();
            }
        }
        next.selection = None;
        next.moves_made += 1;
        Some(next)
    }

    #[must_use]
    pub fn select_waste(&self) -> Option<Self> {
        if self.waste.is_empty() {
            return None;
        }
        Some(self.with_selection(Some(Selection::Waste)))
    }

    /// Selects the whole movable run of a column.
    #[must_use]
    pub fn select_column(&self, column: usize) -> Option<Self> {
        let target = self.columns.get(column)?;
        let run = column_run(target);
        if run.is_empty() {
            return None;
        }
        let start = target.len() - run.len();
        Some(self.with_selection(Some(Selection::Column { column, start })))
    }

    /// Selects the part of a column's run that starts at `index`.
    #[must_use]
    pub fn select_card(&self, column: usize, index: usize) -> Option<Self> {
        let target = self.columns.get(column)?;
        let run_start = target.len() - column_run(target).len();
        if index < run_start || index >= target.len() {
            return None;
        }
        Some(self.with_selection(Some(Selection::Column { column, start: index })))
    }

    #[must_use]
    pub fn clear_selection(&self) -> Self {
        self.with_selection(None)
    }

    fn with_selection(&self, selection: Option<Selection>) -> Self {
        let mut next = self.clone();
        next.selection = selection;
        next
    }

    /// Moves the top card of the selected source onto a foundation pile.
    #[must_use]
    pub fn move_to_foundation(&self, foundation: usize) -> Option<Self> {
        let selection = self.selection?;
        let pile = self.foundations.get(foundation)?;

        let card = match selection {
            Selection::Waste => self.waste.last().copied()?,
            Selection::Column { column, .. } => self.columns.get(column)?.top()?,
        };
        if !can_place_on_foundation(card, pile) {
            return None;
        }

        let mut next = self.clone();
        match selection {
            Selection::Waste => {
                next.waste.pop();
            }
            Selection::Column { column, .. } => {
                let source = &mut next.columns[column];
                let top = source.len() - 1;
                source.take_from(top);
            }
        }
        next.foundations[foundation].push(card);
        next.selection = None;
        next.moves_made += 1;
        Some(next)
    }

    /// Moves the selected card or run onto another tableau column.
    #[must_use]
    pub fn move_to_column(&self, target: usize) -> Option<Self> {
        let selection = self.selection?;
        let destination = self.columns.get(target)?;
        if matches!(selection, Selection::Column { column, .. } if column == target) {
            return None;
        }

        let moving = self.selected_cards()?;
        let first = *moving.first()?;
        if !can_place_on_column(first, destination) {
            return None;
        }

        let mut next = self.clone();
        let cards = match selection {
            Selection::Waste => next.waste.pop().into_iter().collect(),
            Selection::Column { column, start } => next.columns[column].take_from(start),
        };
        next.columns[target].push_cards(cards);
        next.selection = None;
        next.moves_made += 1;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::solitaire::Suit;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::from_parts(rank, suit)
    }

    fn empty_table() -> SolitaireGameState {
        SolitaireGameState {
            stock: Vec::new(),
            waste: Vec::new(),
            foundations: Default::default(),
            columns: Default::default(),
            selection: None,
            moves_made: 0,
        }
    }

    #[test]
    fn test_deal_layout() {
        let mut rng = SessionRng::new(42);
        let state = SolitaireGameState::deal(&mut rng);

        for (i, column) in state.columns().iter().enumerate() {
            assert_eq!(column.len(), i + 1);
            assert_eq!(column.hidden(), i);
            assert_eq!(column.face_up().len(), 1);
        }
        assert_eq!(state.stock().len(), 24);
        assert!(state.waste().is_empty());

        let mut all: Vec<u8> = state
            .columns()
            .iter()
            .flat_map(|c| c.cards().iter())
            .chain(state.stock().iter())
            .map(|c| c.value())
            .collect();
        all.sort();
        assert_eq!(all, (0..52).collect::<Vec<u8>>());
    }

    #[test]
    fn test_draw_moves_top_stock_card_to_waste() {
        let mut rng = SessionRng::new(1);
        let state = SolitaireGameState::deal(&mut rng);
        let top = *state.stock().last().unwrap();

        let next = state.draw_card().unwrap();
        assert_eq!(next.waste(), &[top]);
        assert_eq!(next.stock().len(), 23);
    }

    #[test]
    fn test_recycle_then_redraw_reproduces_waste_order() {
        let mut rng = SessionRng::new(9);
        let mut state = SolitaireGameState::deal(&mut rng);
        while !state.stock().is_empty() {
            state = state.draw_card().unwrap();
        }
        let waste_before = state.waste().to_vec();

        let recycled = state.draw_card().unwrap();
        assert!(recycled.waste().is_empty());
        assert_eq!(recycled.stock().len(), 24);

        let mut redrawn = recycled;
        while !redrawn.stock().is_empty() {
            redrawn = redrawn.draw_card().unwrap();
        }
        assert_eq!(redrawn.waste(), waste_before.as_slice());
    }

    #[test]
    fn test_draw_with_nothing_left_is_rejected() {
        assert!(empty_table().draw_card().is_none());
    }

    #[test]
    fn test_move_waste_ace_to_foundation() {
        let mut state = empty_table();
        state.waste = vec![card(4, Suit::Clubs), card(0, Suit::Hearts)];

        let state = state.select_waste().unwrap();
        assert_eq!(state.selected_cards(), Some(&[card(0, Suit::Hearts)][..]));

        let state = state.move_to_foundation(2).unwrap();
        assert_eq!(state.foundations()[2], vec![card(0, Suit::Hearts)]);
        assert_eq!(state.waste(), &[card(4, Suit::Clubs)]);
        assert_eq!(state.selection(), None);
        assert_eq!(state.moves_made(), 1);
    }

    #[test]
    fn test_illegal_foundation_move_keeps_state() {
        let mut state = empty_table();
        state.waste = vec![card(4, Suit::Clubs)];
        let state = state.select_waste().unwrap();

        assert!(state.move_to_foundation(0).is_none());
        assert!(state.move_to_foundation(0).is_none());
        assert!(state.move_to_foundation(FOUNDATIONS).is_none());
        assert_eq!(state.selection(), Some(Selection::Waste));
    }

    #[test]
    fn test_move_run_between_columns_flips_source() {
        let mut state = empty_table();
        state.columns[0] = Column::new(
            vec![card(2, Suit::Spades), card(7, Suit::Clubs), card(6, Suit::Hearts), card(5, Suit::Spades)],
            1,
        );
        state.columns[1] = Column::new(vec![card(8, Suit::Diamonds)], 0);

        let state = state.select_column(0).unwrap();
        assert_eq!(state.selection(), Some(Selection::Column { column: 0, start: 1 }));

        let state = state.move_to_column(1).unwrap();
        assert_eq!(state.columns()[1].len(), 4);
        assert_eq!(state.columns()[0].cards(), [card(2, Suit::Spades)]);
        assert_eq!(state.columns()[0].hidden(), 0);
    }

    #[test]
    fn test_partial_run_selection() {
        let mut state = empty_table();
        state.columns[0] = Column::new(
            vec![card(7, Suit::Clubs), card(6, Suit::Hearts), card(5, Suit::Spades)],
            0,
        );
        state.columns[1] = Column::new(vec![card(7, Suit::Spades)], 0);

        assert!(state.select_card(0, 3).is_none());
        let state = state.select_card(0, 1).unwrap();
        let state = state.move_to_column(1).unwrap();

        assert_eq!(state.columns()[0].cards(), [card(7, Suit::Clubs)]);
        assert_eq!(
            state.columns()[1].cards(),
            [card(7, Suit::Spades), card(6, Suit::Hearts), card(5, Suit::Spades)]
        );
    }

    #[test]
    fn test_only_king_moves_to_empty_column() {
        let mut state = empty_table();
        state.columns[0] = Column::new(vec![card(3, Suit::Hearts), card(11, Suit::Hearts)], 1);
        state.columns[2] = Column::new(vec![card(12, Suit::Clubs)], 0);

        let queen = state.select_column(0).unwrap();
        assert!(queen.move_to_column(1).is_none());

        let king = state.select_column(2).unwrap();
        let moved = king.move_to_column(1).unwrap();
        assert!(moved.columns()[2].is_empty());
        assert_eq!(moved.columns()[1].cards(), [card(12, Suit::Clubs)]);
    }

    #[test]
    fn test_move_onto_own_column_is_rejected() {
        let mut state = empty_table();
        state.columns[0] = Column::new(vec![card(12, Suit::Clubs)], 0);
        let state = state.select_column(0).unwrap();

        assert!(state.move_to_column(0).is_none());
    }

    #[test]
    fn test_column_top_goes_to_foundation_even_with_longer_run() {
        let mut state = empty_table();
        state.columns[3] = Column::new(vec![card(1, Suit::Spades), card(0, Suit::Hearts)], 0);

        let state = state.select_column(3).unwrap();
        let state = state.move_to_foundation(0).unwrap();

        assert_eq!(state.foundations()[0], vec![card(0, Suit::Hearts)]);
        assert_eq!(state.columns()[3].cards(), [card(1, Suit::Spades)]);
    }

    #[test]
    fn test_win_after_last_king() {
        let mut state = empty_table();
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            let top = if i == 3 { RANKS - 1 } else { RANKS };
            state.foundations[i] = (0..top).map(|rank| card(rank, suit)).collect();
        }
        state.waste = vec![card(12, Suit::Spades)];
        assert!(!state.is_won());

        let state = state.select_waste().unwrap().move_to_foundation(3).unwrap();
        assert!(state.is_won());
    }

    #[test]
    fn test_selection_requires_cards() {
        let state = empty_table();

        assert!(state.select_waste().is_none());
        assert!(state.select_column(0).is_none());
        assert!(state.select_column(TABLEAU_COLUMNS).is_none());
        assert!(state.move_to_column(1).is_none());
    }
}
