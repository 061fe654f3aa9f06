//! String syntax for document references.
//!
//! The canonical form is `wiki:space.page`. Inside a component, the
//! characters `\`, `.` and `:` are escaped with a backslash. When reading,
//! a backslash makes the following character literal whatever it is, and a
//! lone trailing backslash is kept as is.
//!
//! Splitting rules:
//! - the wiki is the text before the first unescaped `:`
//! - in the remainder, the page is the text after the last unescaped `.`
//!   and the space is the text before it
//! - any other unescaped separator is literal text of its component

/// Separates the wiki from the rest of the reference.
pub const WIKI_SEPARATOR: char = ':';

/// Separates the space from the page.
pub const SPACE_SEPARATOR: char = '.';

/// Escapes the character that follows it.
pub const ESCAPE: char = '\\';

/// Characters the serializer escapes inside a component.
const SPECIAL_CHARS: &[char] = &[ESCAPE, SPACE_SEPARATOR, WIKI_SEPARATOR];

/// Append `name` to `out`, escaping separator and escape characters.
pub fn escape_into(out: &mut String, name: &str) {
    for ch in name.chars() {
        if SPECIAL_CHARS.contains(&ch) {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
}

/// Escape a single reference component.
///
/// # Examples
///
/// ```
/// use wikiref_model::syntax::escape;
///
/// assert_eq!(escape("Main"), "Main");
/// assert_eq!(escape("a.b"), "a\\.b");
/// assert_eq!(escape("C:\\"), "C\\:\\\\");
/// ```
pub fn escape(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    escape_into(&mut out, name);
    out
}

/// Components of a document reference string, unescaped.
///
/// Empty components are reported as `None`; filling them in is up to the
/// resolver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedReference {
    pub wiki: Option<String>,
    pub space: Option<String>,
    pub page: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Literal(char),
    Separator(char),
}

impl Token {
    fn as_char(self) -> char {
        match self {
            Token::Literal(c) | Token::Separator(c) => c,
        }
    }
}

fn tokenize(representation: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(representation.len());
    let mut chars = representation.chars();
    while let Some(ch) = chars.next() {
        let token = match ch {
            ESCAPE => Token::Literal(chars.next().unwrap_or(ESCAPE)),
            WIKI_SEPARATOR | SPACE_SEPARATOR => Token::Separator(ch),
            other => Token::Literal(other),
        };
        tokens.push(token);
    }
    tokens
}

fn component(tokens: &[Token]) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    Some(tokens.iter().map(|t| t.as_char()).collect())
}

/// Split a document reference string into its unescaped components.
///
/// # Examples
///
/// ```
/// use wikiref_model::syntax::parse;
///
/// let parsed = parse("xwiki:XWiki.Mail");
/// assert_eq!(parsed.wiki.as_deref(), Some("xwiki"));
/// assert_eq!(parsed.space.as_deref(), Some("XWiki"));
/// assert_eq!(parsed.page.as_deref(), Some("Mail"));
///
/// let relative = parse("Mail");
/// assert_eq!(relative.wiki, None);
/// assert_eq!(relative.space, None);
/// assert_eq!(relative.page.as_deref(), Some("Mail"));
/// ```
pub fn parse(representation: &str) -> ParsedReference {
    let tokens = tokenize(representation);

    let (wiki, rest) = match tokens
        .iter()
        .position(|t| *t == Token::Separator(WIKI_SEPARATOR))
    {
        Some(idx) => (component(&tokens[..idx]), &tokens[idx + 1..]),
        None => (None, &tokens[..]),
    };

    let (space, page) = match rest
        .iter()
        .rposition(|t| *t == Token::Separator(SPACE_SEPARATOR))
    {
        Some(idx) => (component(&rest[..idx]), component(&rest[idx + 1..])),
        None => (None, component(rest)),
    };

    ParsedReference { wiki, space, page }
}
