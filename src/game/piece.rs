use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PieceError;

/// A player's piece symbol. Pieces only compare for equality; the engine
/// attaches no meaning to the symbol itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Piece(char);

impl Piece {
    /// Create a piece from an uppercase ASCII letter.
    pub fn new(symbol: char) -> Result<Self, PieceError> {
        if symbol.is_ascii_uppercase() {
            Ok(Piece(symbol))
        } else {
            Err(PieceError::InvalidSymbol(symbol))
        }
    }

    /// The symbol used to draw this piece.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Piece {
    type Error = PieceError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Piece::new(symbol)
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> char {
        piece.0
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_uppercase_letters() {
        for symbol in 'A'..='Z' {
            assert_eq!(Piece::new(symbol).unwrap().symbol(), symbol);
        }
    }

    #[test]
    fn test_rejects_other_symbols() {
        for symbol in ['a', 'z', '1', ' ', '#', 'É'] {
            assert_eq!(Piece::new(symbol), Err(PieceError::InvalidSymbol(symbol)));
        }
    }

    #[test]
    fn test_display_is_symbol() {
        assert_eq!(Piece::new('Q').unwrap().to_string(), "Q");
    }
}
