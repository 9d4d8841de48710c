//! Parse-tree walk producing resolved unit pieces

use pest::iterators::Pair;

use super::Rule;
use crate::error::{Result, UnitError};
use crate::numeric::{Numeric, Strategy};
use crate::registry::Registry;
use crate::types::UnitPiece;

/// Append the pieces of `pair` (a `unit_expr`), every power scaled by `outer`
pub(super) fn unit_expr<N: Numeric>(
    pair: Pair<'_, Rule>,
    outer: &N,
    registry: &Registry<N>,
    strategy: &Strategy<N>,
    out: &mut Vec<UnitPiece<N>>,
) -> Result<()> {
    let mut divide_next = false;
    for item in pair.into_inner() {
        match item.as_rule() {
            Rule::divide => divide_next = true,
            Rule::multiply => divide_next = false,
            Rule::factor => {
                let scale = if divide_next { outer.negated() } else { outer.clone() };
                factor(item, &scale, registry, strategy, out)?;
                divide_next = false;
            }
            _ => {}
        }
    }
    Ok(())
}

fn factor<N: Numeric>(
    pair: Pair<'_, Rule>,
    outer: &N,
    registry: &Registry<N>,
    strategy: &Strategy<N>,
    out: &mut Vec<UnitPiece<N>>,
) -> Result<()> {
    let mut inner = pair.into_inner();
    let Some(base) = inner.next() else {
        return Ok(());
    };
    let power = match inner.next() {
        Some(power) => {
            let exponent = power
                .into_inner()
                .next()
                .ok_or_else(|| UnitError::Parse("missing exponent".to_string()))?;
            strategy.mul(outer, &literal(exponent.as_str(), strategy)?)?
        }
        None => outer.clone(),
    };

    match base.as_rule() {
        Rule::unit_name => {
            let name = base.as_str();
            let (unit, prefix) = registry
                .resolve(name)
                .ok_or_else(|| UnitError::UnknownUnit(name.to_string()))?;
            out.push(UnitPiece { unit, prefix, power });
        }
        Rule::group => {
            for expr in base.into_inner() {
                unit_expr(expr, &power, registry, strategy, out)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Convert literal text, normalizing the forms the grammar allows but not
/// every representation parses (`+1`, `.5`, `5.`, `1e+3`).
///
/// A configured `from_literal` hook receives the literal as `f64`, the same
/// way table constants reach it. Otherwise the text is parsed natively.
pub(super) fn literal<N: Numeric>(text: &str, strategy: &Strategy<N>) -> Result<N> {
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let (sign, digits) = match unsigned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", unsigned),
    };
    let (mantissa, exponent) = match digits.find(['e', 'E']) {
        Some(i) => digits.split_at(i),
        None => (digits, ""),
    };

    let mut mantissa = mantissa.to_string();
    if mantissa.starts_with('.') {
        mantissa.insert(0, '0');
    }
    if mantissa.ends_with('.') {
        mantissa.push('0');
    }
    let exponent = exponent.replacen('+', "", 1);

    let cleaned = format!("{sign}{mantissa}{exponent}");
    let invalid = || UnitError::Parse(format!("Invalid number \"{text}\""));
    if strategy.options().from_literal.is_some() {
        let x: f64 = cleaned.parse().map_err(|_| invalid())?;
        return strategy.from_literal(x);
    }
    N::parse_literal(&cleaned).ok_or_else(invalid)
}
