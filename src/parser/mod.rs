//! Parser for problem files.
//!
//! The grammar lives in `grammar.pest`; this module walks the parse tree
//! into a [`Problem`] and converts every failure into a [`ParseError`] that
//! renders as `source:LINE:COL: error: MESSAGE`.

use crate::problem::{Demand, Problem, Recipe};
use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::{Parser, Span};
use std::collections::BTreeMap;
use std::fmt;

mod problem_parser {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "parser/grammar.pest"]
    pub struct ProblemParser;
}

use problem_parser::{ProblemParser, Rule};

/// A diagnostic for malformed input, positioned at a 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    line: usize,
    column: usize,
    message: String,
}

impl ParseError {
    fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        ParseError {
            line,
            column,
            message: message.into(),
        }
    }

    fn at_span(span: Span, message: impl Into<String>) -> Self {
        let (line, column) = span.start_pos().line_col();
        ParseError::new(line, column, message)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source:{}:{}: error: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

fn from_pest(error: pest::error::Error<Rule>) -> ParseError {
    let (line, column) = match error.line_col {
        LineColLocation::Pos((line, column)) => (line, column),
        LineColLocation::Span((line, column), _) => (line, column),
    };
    ParseError::new(line, column, error.variant.message())
}

/// Line and column just past the final character.
fn end_position(source: &str) -> (usize, usize) {
    let line = source.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = source.len() - source.rfind('\n').map_or(0, |i| i + 1) + 1;
    (line, column)
}

/// Parses a problem file into recipes and demands.
pub fn parse_problem(source: &str) -> Result<Problem, ParseError> {
    if !source.ends_with('\n') {
        let (line, column) = end_position(source);
        return Err(ParseError::new(
            line,
            column,
            "input must end with a newline",
        ));
    }
    let mut pairs = ProblemParser::parse(Rule::input, source).map_err(from_pest)?;
    let mut problem = Problem::default();
    for entry in pairs.next().unwrap().into_inner() {
        match entry.as_rule() {
            Rule::recipe => problem.recipes.push(parse_recipe(entry)?),
            Rule::demand => problem.demands.push(parse_demand(entry)?),
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(problem)
}

fn parse_number(pair: &Pair<Rule>) -> Result<u64, ParseError> {
    pair.as_str()
        .parse()
        .map_err(|_| ParseError::at_span(pair.as_span(), "integer literal out of range"))
}

fn parse_terms(pair: Pair<Rule>) -> Result<BTreeMap<String, u64>, ParseError> {
    let mut result = BTreeMap::new();
    for term in pair.into_inner() {
        let (name, quantity) = match term.as_rule() {
            Rule::quantified => {
                let mut inner = term.into_inner();
                let quantity = parse_number(&inner.next().unwrap())?;
                (inner.next().unwrap().as_str().to_string(), quantity)
            }
            Rule::raw => (term.into_inner().next().unwrap().as_str().to_string(), 0),
            _ => unreachable!(),
        };
        // A resource repeated within one list keeps its first quantity.
        result.entry(name).or_insert(quantity);
    }
    Ok(result)
}

fn parse_recipe(pair: Pair<Rule>) -> Result<Recipe, ParseError> {
    let mut inner = pair.into_inner();
    let inputs = parse_terms(inner.next().unwrap())?;
    let outputs = parse_terms(inner.next().unwrap())?;
    let mut numbers = inner.next().unwrap().into_inner();
    let duration_pair = numbers.next().unwrap();
    let duration = parse_number(&duration_pair)?;
    if duration == 0 {
        return Err(ParseError::at_span(
            duration_pair.as_span(),
            "duration must be positive",
        ));
    }
    let cost = parse_number(&numbers.next().unwrap())?;
    Ok(Recipe {
        inputs,
        outputs,
        duration,
        cost,
    })
}

fn parse_demand(pair: Pair<Rule>) -> Result<Demand, ParseError> {
    let mut inner = pair.into_inner();
    let name = inner.next().unwrap().as_str().to_string();
    let units_per_minute = parse_number(&inner.next().unwrap().into_inner().next().unwrap())?;
    Ok(Demand {
        name,
        units_per_minute,
    })
}
