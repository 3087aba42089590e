use thiserror::Error;

/// Errors raised while building or extending a [`crate::Vocabulary`].
#[derive(Debug, Error, PartialEq)]
pub enum VocabularyError {
    #[error("unknown symbol '{0}': expected one of @ . - _ +")]
    UnknownSymbol(String),
    #[error("vocabulary word is empty")]
    EmptyWord,
    #[error("vocabulary word '{0}' spans more than one token")]
    MultiWord(String),
}
