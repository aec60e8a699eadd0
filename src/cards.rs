// src/cards.rs
// Card primitives and normalization of the engine's two card encodings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn to_char(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from_digit(r as u32, 10).unwrap_or('?'),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Accepts both the single-char form and the engine's occasional "10".
    pub fn from_token(token: &str) -> Option<Self> {
        if token == "10" {
            return Some(Rank::Ten);
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Accepts the letter form ("h"), the word form ("hearts") and the
    /// symbol form ("♥"), since the engine has shipped all three.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "c" | "clubs" | "♣" => Some(Suit::Clubs),
            "d" | "diamonds" | "♦" => Some(Suit::Diamonds),
            "h" | "hearts" | "♥" => Some(Suit::Hearts),
            "s" | "spades" | "♠" => Some(Suit::Spades),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Rank plus suit symbol, e.g. "A♥", for table rendering.
    pub fn to_display(self) -> String {
        format!("{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    /// Compact code form: `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = String;

    /// Parses compact codes, including the "10s" spelling of tens and
    /// symbol suits ("A♥").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let (rank_token, suit_ch) = match chars.as_slice() {
            [r, s] => (r.to_string(), *s),
            ['1', '0', s] => ("10".to_string(), *s),
            _ => return Err(format!("not a card code: {s:?}")),
        };
        let rank = Rank::from_token(&rank_token).ok_or_else(|| format!("invalid rank in {s:?}"))?;
        let suit = Suit::from_token(&suit_ch.to_string()).ok_or_else(|| format!("invalid suit in {s:?}"))?;
        Ok(Card { rank, suit })
    }
}

/// A renderable card slot. The engine leaves undealt board cards out of
/// the sequence entirely; `Down` is the explicit face-down placeholder
/// (opponent hole cards before showdown, unreadable payloads).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardSlot {
    Up(Card),
    Down,
}

impl CardSlot {
    pub fn card(self) -> Option<Card> {
        match self {
            CardSlot::Up(card) => Some(card),
            CardSlot::Down => None,
        }
    }

    pub fn is_down(self) -> bool {
        matches!(self, CardSlot::Down)
    }
}

/// A card as it arrives off the wire. The engine has delivered two
/// encodings over its lifetime: a compact code string and a structured
/// record (whose rank key has been both `rank` and `value`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawCard {
    Code(String),
    Record {
        #[serde(alias = "value")]
        rank: String,
        suit: String,
        #[serde(default)]
        suit_symbol: Option<String>,
    },
}

/// Single normalization seam for both wire encodings. Anything
/// unrecognized degrades to a face-down placeholder so a card slot can
/// always be rendered.
pub fn normalize_card(raw: &RawCard) -> CardSlot {
    let parsed = match raw {
        RawCard::Code(code) => code.parse::<Card>().ok(),
        RawCard::Record { rank, suit, .. } => match (Rank::from_token(rank.trim()), Suit::from_token(suit.trim())) {
            (Some(rank), Some(suit)) => Some(Card { rank, suit }),
            _ => None,
        },
    };
    match parsed {
        Some(card) => CardSlot::Up(card),
        None => CardSlot::Down,
    }
}

pub fn normalize_cards(raw: &[RawCard]) -> Vec<CardSlot> {
    raw.iter().map(normalize_card).collect()
}
