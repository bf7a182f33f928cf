use serde::{Deserialize, Serialize};

pub const RANKS: u8 = 13;
pub const DECK_SIZE: u8 = 52;

const RANK_LABELS: [&str; RANKS as usize] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A card encoded as `suit * 13 + rank`, rank 0 being the Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl TryFrom<u8> for Card {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Card::new(value).ok_or_else(|| format!("Card value {} is outside the deck", value))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl Card {
    pub fn new(value: u8) -> Option<Self> {
        (value < DECK_SIZE).then_some(Self(value))
    }

    pub fn from_parts(rank: u8, suit: Suit) -> Self {
        Self(suit as u8 * RANKS + rank % RANKS)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> u8 {
        self.0 % RANKS
    }

    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANKS) as usize]
    }

    pub fn color(self) -> Color {
        self.suit().color()
    }

    pub fn is_ace(self) -> bool {
        self.rank() == 0
    }

    pub fn is_king(self) -> bool {
        self.rank() == RANKS - 1
    }

    pub fn label(self) -> String {
        format!("{}{}", RANK_LABELS[self.rank() as usize], self.suit().short())
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct ColumnParts {
    cards: Vec<Card>,
    hidden: usize,
}

/// A tableau column. The first `hidden` cards are face down; `hidden` never
/// exceeds the number of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ColumnParts", into = "ColumnParts")]
pub struct Column {
    cards: Vec<Card>,
    hidden: usize,
}

impl TryFrom<ColumnParts> for Column {
    type Error = String;

    fn try_from(parts: ColumnParts) -> Result<Self, Self::Error> {
        if parts.hidden > parts.cards.len() {
            return Err(format!(
                "Column hides {} cards but only holds {}",
                parts.hidden,
                parts.cards.len()
            ));
        }
        Ok(Self {
            cards: parts.cards,
            hidden: parts.hidden,
        })
    }
}

impl From<Column> for ColumnParts {
    fn from(column: Column) -> Self {
        Self {
            cards: column.cards,
            hidden: column.hidden,
        }
    }
}

impl Column {
    pub fn new(cards: Vec<Card>, hidden: usize) -> Self {
        let hidden = hidden.min(cards.len());
        Self { cards, hidden }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn hidden(&self) -> usize {
        self.hidden
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn face_up(&self) -> &[Card] {
        &self.cards[self.hidden..]
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub(crate) fn push_cards(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// Splits off the cards from `start` and turns the new top card face up.
    pub(crate) fn take_from(&mut self, start: usize) -> Vec<Card> {
        let moved = self.cards.split_off(start);
        if self.cards.is_empty() {
            self.hidden = 0;
        } else if self.hidden >= self.cards.len() {
            self.hidden = self.cards.len() - 1;
        }
        moved
    }
}
