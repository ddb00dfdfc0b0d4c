//! Lexer for template directive arguments using logos
//!
//! Only the bodies of `> offset` lines go through the lexer; token
//! definitions, layer rows and `> base` words are split by the line
//! classifier.

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    #[token(":")]
    Colon,

    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i32>().ok())]
    Number(i32),

    // Block ids and property names: letters first, so they never collide with numbers
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.\-]*", |lex| lex.slice().to_string())]
    Word(String),

    /// Text the lexer could not classify; kept so the grammar reports it
    Invalid(String),
}

/// Lex a directive body into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    let mut lexer = Token::lexer(input);
    std::iter::from_fn(move || {
        let tok = lexer.next()?;
        let span = lexer.span();
        Some(match tok {
            Ok(t) => (t, span),
            Err(()) => (Token::Invalid(lexer.slice().to_string()), span),
        })
    })
}
