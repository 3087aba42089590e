//! Fallback for dictations where the `@` word was never spoken.
//!
//! Looks for a well-known mail provider at the end of the candidate, e.g.
//! `juanperezgmail.com` becomes `juanperez@gmail.com`.

use regex::Regex;
use std::sync::LazyLock;

// `local` is greedy so the rightmost provider name wins.
static PROVIDER_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<local>[a-z0-9._+-]+)(?P<domain>(?:googlemail|gmail|hotmail|outlook|live|yahoo|ymail|icloud|me|protonmail|proton|gmx|aol|msn|telefonica)(?:\.[a-z0-9-]+)*\.[a-z]{2,})$",
    )
    .unwrap()
});

/// Inserts an `@` in front of a trailing provider domain.
///
/// Returns `None` when the candidate already has an `@`, has no recognizable
/// provider suffix, or would be left with an empty local part.
pub fn infer_separator(candidate: &str) -> Option<String> {
    if candidate.contains('@') {
        return None;
    }

    let captures = PROVIDER_SUFFIX.captures(candidate)?;
    let local = captures.name("local")?.as_str().trim_matches('.');
    let domain = captures.name("domain")?.as_str();

    if local.is_empty() {
        return None;
    }

    Some(format!("{local}@{domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_separator_before_provider() {
        assert_eq!(
            infer_separator("juanperezgmail.com").as_deref(),
            Some("juanperez@gmail.com")
        );
        assert_eq!(
            infer_separator("ana.lopez.hotmail.es").as_deref(),
            Some("ana.lopez@hotmail.es")
        );
    }

    #[test]
    fn handles_multi_label_tlds() {
        assert_eq!(
            infer_separator("pepeyahoo.com.mx").as_deref(),
            Some("pepe@yahoo.com.mx")
        );
    }

    #[test]
    fn prefers_longest_provider_name() {
        assert_eq!(
            infer_separator("xprotonmail.com").as_deref(),
            Some("x@protonmail.com")
        );
    }

    #[test]
    fn recognizes_short_provider_names() {
        assert_eq!(
            infer_separator("juanlive.com").as_deref(),
            Some("juan@live.com")
        );
        assert_eq!(
            infer_separator("anaicloudme.com").as_deref(),
            Some("anaicloud@me.com")
        );
    }

    #[test]
    fn rightmost_provider_becomes_the_domain() {
        assert_eq!(
            infer_separator("pepe.gmx.gmail.com").as_deref(),
            Some("pepe.gmx@gmail.com")
        );
        assert_eq!(
            infer_separator("hotmailfanoutlook.es").as_deref(),
            Some("hotmailfan@outlook.es")
        );
    }

    #[test]
    fn ignores_unknown_domains_and_bare_providers() {
        assert_eq!(infer_separator("ventasempresa"), None);
        assert_eq!(infer_separator("ventasempresa.com"), None);
        assert_eq!(infer_separator("gmail.com"), None);
        assert_eq!(infer_separator(".gmail.com"), None);
    }

    #[test]
    fn leaves_candidates_with_separator_alone() {
        assert_eq!(infer_separator("a@gmail.com"), None);
    }
}
