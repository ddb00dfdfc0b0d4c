//! Line classifier and directive parsers
//!
//! `> offset` bodies go through the logos lexer and a chumsky parser;
//! `> base` bodies are a free-form word list.

use std::collections::HashMap;

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::ParseError;
use crate::parser::ast::*;
use crate::parser::lexer::{self, Token};

const OFFSET_DIRECTIVE: &str = "> offset ";
const BASE_DIRECTIVE: &str = "> base ";

/// Separator between the rows of one layer line
const ROW_SEPARATOR: &str = "   ";

/// What a single template line contributes
#[derive(Debug, PartialEq)]
enum Line<'s> {
    Comment,
    Token { key: &'s str, spec: &'s str },
    Layer(&'s str),
    Offset(&'s str),
    Base(&'s str),
    Unrecognized,
}

/// Classify a line; earlier rules win
fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        Line::Comment
    } else if let Some((key, spec)) = line.split_once('=') {
        Line::Token {
            key: key.trim(),
            spec: spec.trim(),
        }
    } else if line.starts_with(' ') {
        Line::Layer(trimmed)
    } else if let Some(body) = line.strip_prefix(OFFSET_DIRECTIVE) {
        Line::Offset(body)
    } else if let Some(body) = line.strip_prefix(BASE_DIRECTIVE) {
        Line::Base(body)
    } else {
        Line::Unrecognized
    }
}

/// Split a trimmed layer line into rows (bottom first) of token keys
fn split_layer(row: &str) -> Layer {
    row.split(ROW_SEPARATOR)
        .map(|cells| cells.split(' ').map(str::to_string).collect())
        .collect()
}

/// Parse template text into a [`Template`]
///
/// Directive errors are collected across the whole text. Shape errors
/// (no layers, ragged layers) are reported once the text is read.
pub fn parse(input: &str) -> Result<Template, Vec<ParseError>> {
    let mut tokens = HashMap::new();
    let mut layers: Vec<Spanned<Layer>> = Vec::new();
    let mut offset = Offset::default();
    let mut base = None;
    let mut errors = Vec::new();

    let mut line_start = 0;
    for raw_line in input.split('\n') {
        let start = line_start;
        line_start += raw_line.len() + 1;
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        match classify(line) {
            Line::Comment => {}
            Line::Token { key, spec } => {
                tokens.insert(key.to_string(), spec.to_string());
            }
            Line::Layer(row) => {
                layers.push(Spanned::new(split_layer(row), start..start + line.len()));
            }
            Line::Offset(body) => match parse_offset(body) {
                Ok(parsed) => offset = parsed,
                Err(errs) => errors.extend(
                    errs.into_iter()
                        .map(|e| e.shifted(start + OFFSET_DIRECTIVE.len())),
                ),
            },
            Line::Base(body) => match parse_base(body) {
                Ok(parsed) => base = Some(parsed),
                Err(errs) => errors.extend(
                    errs.into_iter()
                        .map(|e| e.shifted(start + BASE_DIRECTIVE.len())),
                ),
            },
            Line::Unrecognized => {
                log::trace!("ignoring template line at byte {}: {:?}", start, line);
            }
        }
    }

    let dimensions = match validate_shape(&layers, input.len()) {
        Ok(dims) => Some(dims),
        Err(errs) => {
            errors.extend(errs);
            None
        }
    };

    match dimensions {
        Some(dimensions) if errors.is_empty() => Ok(Template {
            tokens,
            layers: layers.into_iter().map(|l| l.node).collect(),
            dimensions,
            offset,
            base,
        }),
        _ => Err(errors),
    }
}

/// Derive dimensions from the first layer and check every layer against them
fn validate_shape(layers: &[Spanned<Layer>], len: usize) -> Result<Dimensions, Vec<ParseError>> {
    let Some(first) = layers.first() else {
        return Err(vec![ParseError::malformed(0..len, "template has no layers")]);
    };
    let height = first.node.len();
    let width = first.node.first().map_or(0, |row| row.len());

    let mut errors = Vec::new();
    for (i, layer) in layers.iter().enumerate() {
        if layer.node.len() != height {
            errors.push(ParseError::malformed(
                layer.span.clone(),
                format!(
                    "layer {} has {} rows, expected {}",
                    i + 1,
                    layer.node.len(),
                    height
                ),
            ));
            continue;
        }
        if let Some((j, row)) = layer
            .node
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            errors.push(ParseError::malformed(
                layer.span.clone(),
                format!(
                    "row {} of layer {} has {} cells, expected {}",
                    j + 1,
                    i + 1,
                    row.len(),
                    width
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(Dimensions {
            depth: layers.len(),
            height,
            width,
        })
    } else {
        Err(errors)
    }
}

fn parse_offset(body: &str) -> Result<Offset, Vec<ParseError>> {
    let len = body.len();
    let token_iter = lexer::lex(body).map(|(tok, span)| (tok, span.into()));
    let token_stream = Stream::from_iter(token_iter)
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    offset_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// `<block> [prop:value ...]`
///
/// Split on whitespace. The first word is the block id; every later word
/// splits on its first `:` and keeps the raw value text. Words without a
/// property name are skipped.
fn parse_base(body: &str) -> Result<Base, Vec<ParseError>> {
    let mut words = body.split_whitespace();
    let Some(block) = words.next() else {
        return Err(vec![ParseError::Syntax {
            span: 0..body.len(),
            message: "Expected a block id".to_string(),
            expected: vec!["block id".to_string()],
        }]);
    };

    let mut base = Base::new(block);
    for word in words {
        match word.split_once(':') {
            Some((key, value)) if !key.is_empty() => {
                base.properties.insert(key.to_string(), value.to_string());
            }
            _ => log::trace!("ignoring base word without a property name: {:?}", word),
        }
    }
    Ok(base)
}

/// `<dx> <dy> <dz>`
fn offset_parser<'a, I>() -> impl Parser<'a, I, Offset, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let number = select! {
        Token::Number(n) => n,
    };

    number
        .clone()
        .then(number.clone())
        .then(number)
        .then_ignore(end())
        .map(|((x, y), z)| Offset::new(x, y, z))
}
