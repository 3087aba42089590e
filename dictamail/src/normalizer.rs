use std::sync::{Arc, LazyLock};

use serde::Serialize;

use crate::cleanup::cleanup;
use crate::inference::infer_separator;
use crate::rewriter::rewrite;
use crate::text::{canonicalize, tokenize};
use crate::validator::{validate, Confidence};
use crate::Vocabulary;

pub const EMPTY_INPUT_REASON: &str = "Empty input";

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

/// Normalizes `text` with the built-in vocabulary and no domain inference.
pub fn normalize(text: &str) -> NormalizedResult {
    DEFAULT_NORMALIZER.normalize(text)
}

/// Outcome of a normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedResult {
    Normalized(NormalizedEmail),
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEmail {
    /// The input exactly as received.
    pub input: String,
    pub email: String,
    pub is_valid: bool,
    pub confidence: Confidence,
    pub local: String,
    pub domain: String,
}

/// Returned when there was nothing to normalize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub email: String,
    pub is_valid: bool,
    pub confidence: Confidence,
    pub reason: String,
}

impl Rejection {
    fn empty_input() -> Self {
        Self {
            email: String::new(),
            is_valid: false,
            confidence: Confidence::Empty,
            reason: EMPTY_INPUT_REASON.to_string(),
        }
    }
}

impl NormalizedResult {
    pub fn email(&self) -> &str {
        match self {
            Self::Normalized(normalized) => &normalized.email,
            Self::Rejected(rejection) => &rejection.email,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::Normalized(normalized) => normalized.is_valid,
            Self::Rejected(rejection) => rejection.is_valid,
        }
    }

    pub fn confidence(&self) -> Confidence {
        match self {
            Self::Normalized(normalized) => normalized.confidence,
            Self::Rejected(rejection) => rejection.confidence,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    vocabulary: Arc<Vocabulary>,
    infer_domain: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn infers_domain(&self) -> bool {
        self.infer_domain
    }

    /// Converts dictated text into an email candidate and scores it.
    ///
    /// Never fails: empty input yields a [`Rejection`], anything else a
    /// [`NormalizedEmail`], however implausible.
    pub fn normalize(&self, text: &str) -> NormalizedResult {
        if text.is_empty() {
            return NormalizedResult::Rejected(Rejection::empty_input());
        }

        let canonical = canonicalize(text);
        let tokens = tokenize(&canonical);
        let mut candidate = cleanup(&rewrite(&tokens, &self.vocabulary));

        if self.infer_domain {
            if let Some(inferred) = infer_separator(&candidate) {
                candidate = cleanup(&inferred);
            }
        }

        let validation = validate(&candidate);
        tracing::debug!(
            email = %candidate,
            confidence = %validation.confidence,
            "normalized dictated email"
        );

        NormalizedResult::Normalized(NormalizedEmail {
            input: text.to_string(),
            email: candidate,
            is_valid: validation.is_valid,
            confidence: validation.confidence,
            local: validation.local,
            domain: validation.domain,
        })
    }

    /// Like [`Normalizer::normalize`], treating absent input as empty.
    pub fn normalize_opt(&self, text: Option<&str>) -> NormalizedResult {
        self.normalize(text.unwrap_or_default())
    }
}

#[derive(Debug, Default)]
pub struct NormalizerBuilder {
    vocabulary: Option<Arc<Vocabulary>>,
    infer_domain: bool,
}

impl NormalizerBuilder {
    pub fn vocabulary(mut self, vocabulary: impl Into<Arc<Vocabulary>>) -> Self {
        self.vocabulary = Some(vocabulary.into());
        self
    }

    /// Enables the provider-suffix fallback for dictations without an `@` word.
    pub fn infer_domain(mut self, enabled: bool) -> Self {
        self.infer_domain = enabled;
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            vocabulary: self
                .vocabulary
                .unwrap_or_else(|| Arc::new(Vocabulary::builtin().clone())),
            infer_domain: self.infer_domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{Symbol, VocabularyExtension};

    fn normalized(text: &str) -> NormalizedEmail {
        match normalize(text) {
            NormalizedResult::Normalized(normalized) => normalized,
            NormalizedResult::Rejected(rejection) => panic!("unexpected rejection: {rejection:?}"),
        }
    }

    #[test]
    fn normalizes_english_dictation() {
        let result = normalized("raul dot smith at gmail dot com");
        assert_eq!(result.email, "raul.smith@gmail.com");
        assert!(result.is_valid);
        assert_eq!(result.confidence, Confidence::Valid);
        assert_eq!(result.local, "raul.smith");
        assert_eq!(result.domain, "gmail.com");
    }

    #[test]
    fn normalizes_spanish_dictation() {
        let result = normalized("manuel fernandez arroba gmail punto com");
        assert_eq!(result.email, "manuelfernandez@gmail.com");
        assert!(result.is_valid);
        assert_eq!(result.confidence, Confidence::Valid);
    }

    #[test]
    fn preserves_original_input() {
        let input = "  Raúl Punto Smith ARROBA Gmail punto com ";
        let result = normalized(input);
        assert_eq!(result.input, input);
        assert_eq!(result.email, "raul.smith@gmail.com");
    }

    #[test]
    fn repeated_separator_words_collapse() {
        let result = normalized("juan arroba arroba gmail punto com");
        assert_eq!(result.email, "juan@gmail.com");
        assert_eq!(result.email.matches('@').count(), 1);
        assert!(result.is_valid);
    }

    #[test]
    fn leading_bigram_becomes_underscore() {
        let result = normalized("guion bajo test arroba dominio punto com");
        assert_eq!(result.email, "_test@dominio.com");
        assert_eq!(result.confidence, Confidence::Valid);
    }

    #[test]
    fn text_without_separator_is_low_confidence() {
        let result = normalized("ventas empresa");
        assert_eq!(result.email, "ventasempresa");
        assert!(!result.is_valid);
        assert_eq!(result.confidence, Confidence::NoSeparator);
    }

    #[test]
    fn empty_input_is_rejected() {
        let expected = NormalizedResult::Rejected(Rejection {
            email: String::new(),
            is_valid: false,
            confidence: Confidence::Empty,
            reason: "Empty input".to_string(),
        });
        assert_eq!(normalize(""), expected);
        assert_eq!(Normalizer::default().normalize_opt(None), expected);
    }

    #[test]
    fn whitespace_only_input_runs_the_pipeline() {
        let result = normalized("   ");
        assert_eq!(result.email, "");
        assert_eq!(result.confidence, Confidence::NoSeparator);
    }

    #[test]
    fn domain_never_keeps_consecutive_dots() {
        let result = normalized("ana arroba punto punto gmail punto . punto com punto");
        assert_eq!(result.email, "ana@gmail.com");
        assert!(!result.domain.contains(".."));
        assert!(result.is_valid);
    }

    #[test]
    fn partial_and_malformed_scores() {
        assert_eq!(normalized("juan arroba gmail").confidence, Confidence::Partial);
        assert_eq!(normalized("arroba gmail punto com").confidence, Confidence::Malformed);
    }

    #[test]
    fn confidence_is_always_a_known_level() {
        let inputs = [
            "raul dot smith at gmail dot com",
            "ventas empresa",
            "juan arroba gmail",
            "arroba arroba",
            "¡¿?!",
            "guion",
            "punto punto punto",
            "a @ b . c",
        ];
        let levels = [0.0, 0.4, 0.6, 0.8, 0.99];
        for input in inputs {
            let result = normalize(input);
            assert!(levels.contains(&result.confidence().value()), "{input}");
            assert!(result.email().matches('@').count() <= 1, "{input}");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let input = "maria guion medio jose arroba correo punto es";
        assert_eq!(normalize(input), normalize(input));
    }

    #[test]
    fn serializes_to_camel_case_json() {
        let json = serde_json::to_value(normalize("ana arroba x punto es")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": "ana arroba x punto es",
                "email": "ana@x.es",
                "isValid": true,
                "confidence": 0.99,
                "local": "ana",
                "domain": "x.es",
            })
        );

        let json = serde_json::to_value(normalize("")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "",
                "isValid": false,
                "confidence": 0.0,
                "reason": "Empty input",
            })
        );
    }

    #[test]
    fn domain_inference_is_opt_in() {
        assert_eq!(normalize("juan perez gmail punto com").email(), "juanperezgmail.com");

        let normalizer = Normalizer::builder().infer_domain(true).build();
        let result = normalizer.normalize("juan perez gmail punto com");
        assert_eq!(result.email(), "juanperez@gmail.com");
        assert!(result.is_valid());
    }

    #[test]
    fn custom_vocabulary_is_used() {
        let extension = VocabularyExtension {
            ignore: vec!["oye".to_string()],
            symbols: HashMap::from([("arzroba".to_string(), Symbol::At)]),
        };
        let vocabulary = Vocabulary::builtin().extended(&extension).unwrap();
        let normalizer = Normalizer::builder().vocabulary(vocabulary).build();

        let result = normalizer.normalize("oye pepe arzroba gmail punto com");
        assert_eq!(result.email(), "pepe@gmail.com");
        assert!(result.is_valid());
    }
}
