use regex::Regex;
use std::sync::LazyLock;

// Regex patterns compiled once
static DOT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.+").unwrap());
static DOT_BEFORE_AT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.@").unwrap());
static DOT_AFTER_AT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\.?").unwrap());

/// Tidies the rewriter output: collapses dot runs, removes dots hugging the
/// `@` and trims dots from both ends of the local part and the domain.
pub fn cleanup(candidate: &str) -> String {
    let collapsed = DOT_RUN.replace_all(candidate, ".");
    let collapsed = DOT_BEFORE_AT.replace_all(&collapsed, "@");
    let collapsed = DOT_AFTER_AT.replace_all(&collapsed, "@");

    match split_at_separator(&collapsed) {
        Some((local, domain)) => {
            let local = local.trim_matches('.');
            let domain = DOT_RUN.replace_all(domain.trim_matches('.'), ".");
            format!("{local}@{domain}")
        }
        None => collapsed.trim_matches('.').to_string(),
    }
}

/// Splits on the first `@`. Anything after a second `@` is dropped.
pub fn split_at_separator(candidate: &str) -> Option<(&str, &str)> {
    let mut parts = candidate.split('@');
    let local = parts.next()?;
    let domain = parts.next()?;
    Some((local, domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_dot_runs() {
        assert_eq!(cleanup("ana...lopez@gmail..com"), "ana.lopez@gmail.com");
    }

    #[test]
    fn removes_dots_around_separator() {
        assert_eq!(cleanup("ana.@.gmail.com"), "ana@gmail.com");
        assert_eq!(cleanup("ana..@..gmail.com"), "ana@gmail.com");
    }

    #[test]
    fn trims_dots_from_local_and_domain() {
        assert_eq!(cleanup(".ana@gmail.com."), "ana@gmail.com");
    }

    #[test]
    fn trims_dots_without_separator() {
        assert_eq!(cleanup("..ventas.empresa.."), "ventas.empresa");
        assert_eq!(cleanup(""), "");
    }

    #[test]
    fn keeps_only_first_separator_segment() {
        assert_eq!(cleanup("a@b.com@c.org"), "a@b.com");
    }

    #[test]
    fn split_honors_first_separator() {
        assert_eq!(split_at_separator("a@b@c"), Some(("a", "b")));
        assert_eq!(split_at_separator("@"), Some(("", "")));
        assert_eq!(split_at_separator("abc"), None);
    }
}
