//! Card parsing from the 3-character wire token (e.g. "TH0", "QC1")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, CopyIndex, Kind, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl TryFrom<char> for Kind {
    type Error = DomainError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'A' => Ok(Kind::Ace),
            'T' => Ok(Kind::Ten),
            'K' => Ok(Kind::King),
            'Q' => Ok(Kind::Queen),
            'J' => Ok(Kind::Jack),
            '9' => Ok(Kind::Nine),
            _ => Err(parse_error(&ch.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = DomainError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'C' => Ok(Suit::Clubs),
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            _ => Err(parse_error(&ch.to_string())),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let [kind_ch, suit_ch, copy_ch] = chars[..] else {
            return Err(parse_error(s));
        };
        let kind = Kind::try_from(kind_ch).map_err(|_| parse_error(s))?;
        let suit = Suit::try_from(suit_ch).map_err(|_| parse_error(s))?;
        let copy = match copy_ch {
            '0' => CopyIndex::First,
            '1' => CopyIndex::Second,
            _ => return Err(parse_error(s)),
        };
        Ok(Card { kind, suit, copy })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.kind.symbol(),
            self.suit.symbol(),
            self.copy.index()
        )
    }
}

/// Parse a list of tokens, failing on the first invalid one.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
