//! Lookup tables mapping dictated words to email symbols.
//!
//! The built-in tables cover Spanish dictation plus the handful of English
//! words speech-to-text engines commonly produce for the same symbols.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::Deserialize;

use crate::text::{canonicalize, tokenize};
use crate::{Symbol, VocabularyError};

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::spanish);

const IGNORED: &[&str] = &[
    "mi",
    "correo",
    "electronico",
    "email",
    "e-mail",
    "direccion",
    "seria",
    "por",
    "favor",
    "porfa",
    "todo",
    "junto",
    "my",
    "is",
    "please",
];

const SYMBOLS: &[(&str, Symbol)] = &[
    ("arroba", Symbol::At),
    ("aroba", Symbol::At),
    ("arova", Symbol::At),
    ("arrova", Symbol::At),
    ("at", Symbol::At),
    ("punto", Symbol::Dot),
    ("dot", Symbol::Dot),
    ("guion", Symbol::Hyphen),
    ("menos", Symbol::Hyphen),
    ("dash", Symbol::Hyphen),
    ("hyphen", Symbol::Hyphen),
    ("subrayado", Symbol::Underscore),
    ("underscore", Symbol::Underscore),
    ("mas", Symbol::Plus),
    ("plus", Symbol::Plus),
];

const BIGRAMS: &[(&str, &str, Symbol)] = &[
    ("guion", "bajo", Symbol::Underscore),
    ("guion", "medio", Symbol::Hyphen),
    ("guion", "alto", Symbol::Hyphen),
];

/// Extra words merged into the built-in vocabulary, typically read from config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabularyExtension {
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub symbols: HashMap<String, Symbol>,
}

impl VocabularyExtension {
    pub fn is_empty(&self) -> bool {
        self.ignore.is_empty() && self.symbols.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    ignored: HashSet<String>,
    symbols: HashMap<String, Symbol>,
    /// head -> next token -> symbol
    bigrams: HashMap<String, HashMap<String, Symbol>>,
}

impl Vocabulary {
    /// The built-in tables, shared process-wide.
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN
    }

    pub fn spanish() -> Self {
        let ignored = IGNORED.iter().map(|word| word.to_string()).collect();
        let symbols = SYMBOLS
            .iter()
            .map(|(word, symbol)| (word.to_string(), *symbol))
            .collect();

        let mut bigrams: HashMap<String, HashMap<String, Symbol>> = HashMap::new();
        for (head, next, symbol) in BIGRAMS {
            bigrams
                .entry(head.to_string())
                .or_default()
                .insert(next.to_string(), *symbol);
        }

        Self {
            ignored,
            symbols,
            bigrams,
        }
    }

    /// Returns a copy of this vocabulary with `extension` merged in.
    ///
    /// Words are canonicalized first, so `"Guión"` is stored as `"guion"`.
    /// Ignore words are applied before symbol words; a word listed in both
    /// ends up as a symbol.
    pub fn extended(&self, extension: &VocabularyExtension) -> Result<Self, VocabularyError> {
        let mut vocabulary = self.clone();

        for word in &extension.ignore {
            let word = canonical_word(word)?;
            vocabulary.symbols.remove(&word);
            vocabulary.ignored.insert(word);
        }

        for (word, symbol) in &extension.symbols {
            let word = canonical_word(word)?;
            vocabulary.ignored.remove(&word);
            vocabulary.symbols.insert(word, *symbol);
        }

        Ok(vocabulary)
    }

    pub fn is_ignored(&self, token: &str) -> bool {
        self.ignored.contains(token)
    }

    pub fn symbol_for(&self, token: &str) -> Option<Symbol> {
        self.symbols.get(token).copied()
    }

    pub fn has_bigram_head(&self, token: &str) -> bool {
        self.bigrams.contains_key(token)
    }

    pub fn bigram(&self, head: &str, next: &str) -> Option<Symbol> {
        self.bigrams.get(head)?.get(next).copied()
    }
}

fn canonical_word(word: &str) -> Result<String, VocabularyError> {
    let canonical = canonicalize(word);
    let token_count = tokenize(&canonical).len();
    match token_count {
        0 => Err(VocabularyError::EmptyWord),
        1 => Ok(canonical),
        _ => Err(VocabularyError::MultiWord(word.to_string())),
    }
}
