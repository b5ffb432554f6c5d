//! Display-only token classification for code snippets.
//!
//! DESIGN
//! ======
//! A single combined pattern is scanned left to right. The earliest-starting
//! match wins, and alternatives that start at the same offset are tried in
//! [`TokenClass`] declaration order. Tokens therefore never overlap and no
//! text is wrapped twice: `"10"` is a string, `"http://x"` is not a comment.
//!
//! This is not a lexer. The keyword list is language-generic and the rules
//! are line-oriented, which is enough for hand-authored display snippets.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use std::sync::LazyLock;

use regex::{Captures, Match, Regex};

/// Keywords shared across the catalog's languages, matched as whole words.
pub const KEYWORDS: &[&str] = &[
    "function", "def", "fn", "func", "class", "if", "else", "while", "for", "return", "import", "from",
    "let", "const", "var", "pub", "fun", "async", "await",
];

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        concat!(
            r"(?P<comment>//.*|#.*)",
            r#"|(?P<string>"[^"\n]*?"|'[^'\n]*?'|`[^`\n]*?`)"#,
            r"|\b(?P<keyword>{keywords})\b",
            r"|\b(?P<function>[A-Za-z_][A-Za-z0-9_]*)\(",
            r"|\b(?P<number>\d+(?:\.\d+)?)\b",
        ),
        keywords = KEYWORDS.join("|"),
    );
    Regex::new(&pattern).expect("token pattern is a valid regex")
});

/// Display class of a highlighted token, in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `//` or `#` through end of line.
    Comment,
    /// Single-line `"…"`, `'…'` or `` `…` `` literal.
    String,
    Keyword,
    /// Identifier directly followed by `(`. The parenthesis is not part of the token.
    Function,
    /// Integer or decimal literal.
    Number,
}

impl TokenClass {
    const ALL: [Self; 5] = [Self::Comment, Self::String, Self::Keyword, Self::Function, Self::Number];

    fn group(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Keyword => "keyword",
            Self::Function => "function",
            Self::Number => "number",
        }
    }

    /// CSS class the stylesheet uses for this token class.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Comment => "code-comment",
            Self::String => "code-string",
            Self::Keyword => "code-keyword",
            Self::Function => "code-function",
            Self::Number => "code-number",
        }
    }
}

/// A slice of the source, either classified or plain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// `None` for plain text between classified tokens.
    pub class: Option<TokenClass>,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    fn plain(text: &'a str) -> Self {
        Self { class: None, text }
    }
}

/// Split `code` into classified and plain tokens.
///
/// Concatenating the `text` of every returned token reproduces `code`.
#[must_use]
pub fn highlight(code: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for caps in TOKEN_PATTERN.captures_iter(code) {
        let Some((class, m)) = classify(&caps) else {
            continue;
        };
        if m.start() > cursor {
            tokens.push(Token::plain(&code[cursor..m.start()]));
        }
        tokens.push(Token { class: Some(class), text: m.as_str() });
        // Function matches consume the `(`; leave it for the next plain run.
        cursor = m.end();
    }

    if cursor < code.len() {
        tokens.push(Token::plain(&code[cursor..]));
    }
    tokens
}

fn classify<'h>(caps: &Captures<'h>) -> Option<(TokenClass, Match<'h>)> {
    TokenClass::ALL
        .into_iter()
        .find_map(|class| caps.name(class.group()).map(|m| (class, m)))
}

/// Render `code` as HTML, wrapping each classified token in
/// `<span class="code-…">`.
///
/// `&`, `<` and `>` are escaped everywhere, so generic signatures such as
/// `Option<&T>` survive injection as inner HTML. Output equals input only for
/// text that has no tokens and none of those three characters.
#[must_use]
pub fn to_html(code: &str) -> String {
    let mut html = String::with_capacity(code.len() * 2);
    for token in highlight(code) {
        match token.class {
            Some(class) => {
                html.push_str("<span class=\"");
                html.push_str(class.css_class());
                html.push_str("\">");
                push_escaped(&mut html, token.text);
                html.push_str("</span>");
            }
            None => push_escaped(&mut html, token.text),
        }
    }
    html
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
