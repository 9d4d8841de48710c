//! Unit expression parser using pest
//!
//! Turns `"[number] [unit expression]"` into resolved unit pieces. Names are
//! looked up in the registry while walking the parse tree, so an unknown
//! name fails with [`UnitError::UnknownUnit`] rather than a syntax error.

mod walk;

use pest::error::LineColLocation;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{Result, UnitError};
use crate::numeric::{Numeric, Strategy};
use crate::registry::Registry;
use crate::types::{piece, DimensionVector, UnitPiece};

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct UnitParser;

/// Parsed but not yet combined unit text
#[derive(Debug)]
pub struct ParsedUnit<N> {
    pub value: Option<N>,
    /// In source order, duplicates not merged
    pub pieces: Vec<UnitPiece<N>>,
    pub dimensions: DimensionVector<N>,
}

/// Parse unit text against `registry`. The empty string parses to no value
/// and no pieces.
pub fn parse<N: Numeric>(text: &str, registry: &Registry<N>, strategy: &Strategy<N>) -> Result<ParsedUnit<N>> {
    let mut pairs = UnitParser::parse(Rule::unit_text, text).map_err(|err| {
        let column = match err.line_col {
            LineColLocation::Pos((_, col)) | LineColLocation::Span((_, col), _) => col,
        };
        UnitError::Parse(format!("Unexpected input in \"{text}\" at column {column}"))
    })?;

    let mut value = None;
    let mut pieces = Vec::new();

    if let Some(root) = pairs.next() {
        for pair in root.into_inner() {
            match pair.as_rule() {
                Rule::number => value = Some(walk::literal(pair.as_str(), strategy)?),
                Rule::unit_expr => {
                    let one = strategy.one()?;
                    walk::unit_expr(pair, &one, registry, strategy, &mut pieces)?;
                }
                _ => {}
            }
        }
    }

    let dimensions = piece::dimensions_of(&pieces, strategy)?;
    tracing::trace!(text, pieces = pieces.len(), "parsed unit text");
    Ok(ParsedUnit {
        value,
        pieces,
        dimensions,
    })
}
