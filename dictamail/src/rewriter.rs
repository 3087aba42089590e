use crate::{Symbol, Vocabulary};

/// Rewrites dictated tokens into a raw email candidate.
///
/// Tokens are consumed greedily from left to right, first matching rule wins:
///
/// 1. ignored filler words emit nothing;
/// 2. a bigram head followed by a known next token emits the bigram symbol
///    and consumes both tokens;
/// 3. a mapped word emits its symbol, with only the first `@` kept;
/// 4. literal `.`, `_`, `-` and `+` tokens pass through;
/// 5. anything else is emitted with every character outside `[a-z0-9._+-]`
///    removed.
pub fn rewrite(tokens: &[&str], vocabulary: &Vocabulary) -> String {
    let mut output = String::new();
    let mut at_emitted = false;
    let mut cursor = 0;

    while let Some(&token) = tokens.get(cursor) {
        if vocabulary.is_ignored(token) {
            cursor += 1;
            continue;
        }

        if vocabulary.has_bigram_head(token) {
            if let Some(symbol) = tokens
                .get(cursor + 1)
                .and_then(|next| vocabulary.bigram(token, next))
            {
                output.push(symbol.as_char());
                cursor += 2;
                continue;
            }
        }

        if let Some(symbol) = vocabulary.symbol_for(token) {
            if symbol != Symbol::At {
                output.push(symbol.as_char());
            } else if !at_emitted {
                output.push(symbol.as_char());
                at_emitted = true;
            }
            cursor += 1;
            continue;
        }

        if let Some(symbol) = Symbol::from_literal(token) {
            output.push(symbol.as_char());
            cursor += 1;
            continue;
        }

        output.extend(token.chars().filter(|c| is_email_char(*c)));
        cursor += 1;
    }

    output
}

pub(crate) fn is_email_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '+' | '-')
}
