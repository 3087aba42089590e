use serde::Deserialize;
use strum::{Display, EnumString};

use crate::VocabularyError;

/// A symbol that can appear in a normalized email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Deserialize)]
#[serde(try_from = "String")]
pub enum Symbol {
    #[strum(serialize = "@")]
    At,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = "-")]
    Hyphen,
    #[strum(serialize = "_")]
    Underscore,
    #[strum(serialize = "+")]
    Plus,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Self::At => '@',
            Self::Dot => '.',
            Self::Hyphen => '-',
            Self::Underscore => '_',
            Self::Plus => '+',
        }
    }

    /// Recognizes a token that already is a literal symbol.
    ///
    /// `@` is never a pass-through literal.
    pub fn from_literal(token: &str) -> Option<Self> {
        match token {
            "." => Some(Self::Dot),
            "_" => Some(Self::Underscore),
            "-" => Some(Self::Hyphen),
            "+" => Some(Self::Plus),
            _ => None,
        }
    }
}

impl TryFrom<String> for Symbol {
    type Error = VocabularyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse()
            .map_err(|_| VocabularyError::UnknownSymbol(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_characters() {
        assert_eq!("@".parse::<Symbol>().unwrap(), Symbol::At);
        assert_eq!("_".parse::<Symbol>().unwrap(), Symbol::Underscore);
        assert!("#".parse::<Symbol>().is_err());
    }

    #[test]
    fn display_matches_char() {
        for symbol in [
            Symbol::At,
            Symbol::Dot,
            Symbol::Hyphen,
            Symbol::Underscore,
            Symbol::Plus,
        ] {
            assert_eq!(symbol.to_string(), symbol.as_char().to_string());
        }
    }

    #[test]
    fn at_is_never_a_pass_through_literal() {
        assert_eq!(Symbol::from_literal("@"), None);
        assert_eq!(Symbol::from_literal("+"), Some(Symbol::Plus));
        assert_eq!(Symbol::from_literal("dot"), None);
    }

    #[test]
    fn unknown_symbol_is_rejected_on_deserialize() {
        let err = Symbol::try_from("#".to_string()).unwrap_err();
        assert_eq!(err, VocabularyError::UnknownSymbol("#".to_string()));
    }
}
