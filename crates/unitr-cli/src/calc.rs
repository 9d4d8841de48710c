//! Line evaluation shared by every input mode
//!
//! A line is `<quantity> [+|- <quantity>]... [to <target>]`, where the target
//! is a unit expression, a unit system name (`si`, `cgs`, `us`) or a
//! comma-separated list of units to split across. Text after `#` is a
//! comment.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use unitr_core::{Numeric, Result, UnitError, UnitFactory, UnitValue};

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct LineParser;

/// What one input line evaluated to
pub enum Outcome<N: Numeric> {
    /// Blank line or comment
    Empty,
    Value(UnitValue<N>),
    Parts(Vec<UnitValue<N>>),
}

pub struct Calculator<N: Numeric> {
    units: UnitFactory<N>,
    precision: Option<usize>,
}

impl<N: Numeric> Calculator<N> {
    pub fn new(precision: Option<usize>) -> Self {
        Self {
            units: UnitFactory::new(),
            precision,
        }
    }

    pub fn units(&self) -> &UnitFactory<N> {
        &self.units
    }

    pub fn eval(&self, input: &str) -> Result<Outcome<N>> {
        let mut pairs = LineParser::parse(Rule::line, input)
            .map_err(|_| UnitError::Parse(format!("Could not understand \"{}\"", input.trim())))?;
        let Some(line) = pairs.next() else {
            return Ok(Outcome::Empty);
        };

        let mut value = None;
        let mut target = None;
        for pair in line.into_inner() {
            match pair.as_rule() {
                Rule::sum => value = Some(self.sum(pair)?),
                Rule::conversion => {
                    for p in pair.into_inner() {
                        if p.as_rule() == Rule::target {
                            target = Some(p.as_str().trim());
                        }
                    }
                }
                _ => {}
            }
        }

        match (value, target) {
            (None, _) => Ok(Outcome::Empty),
            (Some(value), Some(target)) => self.convert(&value, target),
            (Some(value), None) => Ok(Outcome::Value(value)),
        }
    }

    /// Unit system names take precedence over unit expressions, so `us` is
    /// the US customary system rather than microseconds.
    pub fn convert(&self, value: &UnitValue<N>, target: &str) -> Result<Outcome<N>> {
        if target.contains(',') {
            let parts = value.split(target.split(',').map(str::trim))?;
            return Ok(Outcome::Parts(parts));
        }
        if self.units.registry().system(target).is_some() {
            return Ok(Outcome::Value(value.to_system(target)?));
        }
        Ok(Outcome::Value(value.to(target)?))
    }

    pub fn render(&self, outcome: &Outcome<N>) -> String {
        match outcome {
            Outcome::Empty => String::new(),
            Outcome::Value(value) => self.display(value),
            Outcome::Parts(parts) => parts
                .iter()
                .map(|p| self.display(p))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub fn display(&self, value: &UnitValue<N>) -> String {
        value.format(self.precision)
    }

    /// Terms of a `sum` pair, applied left to right
    fn sum(&self, pair: Pair<'_, Rule>) -> Result<UnitValue<N>> {
        let mut total: Option<UnitValue<N>> = None;
        let mut op = Rule::add;
        for item in pair.into_inner() {
            match item.as_rule() {
                Rule::add | Rule::sub => op = item.as_rule(),
                Rule::term => {
                    let term = item.as_str();
                    total = Some(match (total, op) {
                        (None, _) => self.units.unit(term)?,
                        (Some(total), Rule::sub) => total.sub(term)?,
                        (Some(total), _) => total.add(term)?,
                    });
                }
                _ => {}
            }
        }
        total.ok_or_else(|| UnitError::Parse("empty expression".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn eval(input: &str) -> String {
        let calc = Calculator::<f64>::new(Some(14));
        let outcome = calc.eval(input).unwrap();
        calc.render(&outcome)
    }

    fn terms(input: &str) -> Vec<(Rule, String)> {
        let line = LineParser::parse(Rule::line, input).unwrap().next().unwrap();
        line.into_inner()
            .filter(|p| p.as_rule() == Rule::sum)
            .flat_map(|sum| sum.into_inner())
            .map(|p| (p.as_rule(), p.as_str().to_string()))
            .collect()
    }

    fn item(rule: Rule, text: &str) -> (Rule, String) {
        (rule, text.to_string())
    }

    #[test]
    fn test_line_terms() {
        assert_eq!(
            terms("1 m + 2 cm - 3 mm"),
            vec![
                item(Rule::term, "1 m"),
                item(Rule::add, "+"),
                item(Rule::term, "2 cm"),
                item(Rule::sub, "-"),
                item(Rule::term, "3 mm"),
            ]
        );
        assert_eq!(terms("-4 kg m^-2"), vec![item(Rule::term, "-4 kg m^-2")]);
        assert_eq!(
            terms("5 m\t+\t3 m to cm"),
            vec![item(Rule::term, "5 m"), item(Rule::add, "+"), item(Rule::term, "3 m")]
        );
        assert_eq!(terms("2 tonne"), vec![item(Rule::term, "2 tonne")]);
    }

    #[test]
    fn test_eval_quantity_and_sums() {
        assert_eq!(eval("5 kg m / s^2"), "5 (kg m) / s^2");
        assert_eq!(eval("1 m + 100 cm"), "2 m");
        assert_eq!(eval("1 h - 30 min + 15 min"), "0.75 h");
    }

    #[test]
    fn test_eval_conversions() {
        assert_eq!(eval("36 km/h to m/s"), "10 m / s");
        assert_eq!(eval("1 N to si"), "1 (kg m) / s^2");
        assert_eq!(eval("1 m to us"), "3.2808398950131 ft");
        assert_eq!(eval("1.5 h to h, min"), "1 h, 30 min");
    }

    #[test]
    fn test_eval_tab_separated() {
        assert_eq!(eval("5 m\t+ 3 m"), "8 m");
        assert_eq!(eval("1 km\tto\tm"), "1000 m");
        assert_eq!(eval("  36 km/h  to  m/s  "), "10 m / s");
    }

    #[test]
    fn test_eval_skips_blank_and_comments() {
        let calc = Calculator::<f64>::new(None);
        assert!(matches!(calc.eval("   ").unwrap(), Outcome::Empty));
        assert!(matches!(calc.eval("# heading").unwrap(), Outcome::Empty));
        assert_eq!(eval("2 m # trailing note"), "2 m");
    }

    #[test]
    fn test_eval_errors() {
        let calc = Calculator::<f64>::new(None);
        assert!(matches!(calc.eval("3 furlongz"), Err(UnitError::UnknownUnit(_))));
        assert!(matches!(
            calc.eval("1 m + 1 s"),
            Err(UnitError::DimensionMismatch { .. })
        ));
        assert!(matches!(calc.eval("1 m to parsecs"), Err(UnitError::UnknownUnit(_))));
        assert!(matches!(calc.eval("1 m +"), Err(UnitError::Parse(_))));
        assert!(matches!(calc.eval("36 km/h to"), Err(_)));
    }

    #[test]
    fn test_decimal_backend() {
        let calc = Calculator::<Decimal>::new(None);
        let outcome = calc.eval("0.1 m + 0.2 m").unwrap();
        assert_eq!(calc.render(&outcome), "0.3 m");
    }
}
