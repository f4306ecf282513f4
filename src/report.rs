//! Human-readable and JSON rendering of a solution.
//!
//! The tables only list nonzero entries: a recipe the plan never runs, or a
//! resource that nets out to zero, is noise in a factory blueprint.

use crate::problem::{Problem, Solution};
use num_traits::Zero;
use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{row, Table};
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::rational::Rational;

fn rate_table(title: &str, rates: &BTreeMap<String, Rational>) -> Table {
    let mut table = Table::new();
    table.set_format(*FORMAT_CLEAN);
    table.set_titles(row![r->title, l->"Resource"]);
    for (resource, rate) in rates {
        if rate.is_zero() {
            continue;
        }
        table.add_row(row![r->rate, l->resource]);
    }
    table
}

/// Renders the recipe uses, production rates, and total cost of a solution.
pub fn render(problem: &Problem, solution: &Solution) -> String {
    let mut uses = Table::new();
    uses.set_format(*FORMAT_CLEAN);
    uses.set_titles(row![r->"Uses", l->"Recipe"]);
    for (recipe, usage) in problem.recipes.iter().zip(&solution.uses) {
        if usage.is_zero() {
            continue;
        }
        uses.add_row(row![r->usage, l->recipe]);
    }

    let mut output = String::new();
    let _ = writeln!(output, "Recipe Uses:\n\n{uses}");
    let _ = writeln!(
        output,
        "Total Production (units/min):\n\n{}",
        rate_table("units/min", &solution.total)
    );
    let _ = writeln!(
        output,
        "Net Production (units/min):\n\n{}",
        rate_table("units/min", &solution.net)
    );
    let _ = write!(output, "For a total cost of {}", solution.cost);
    output
}

/// Renders the solution as pretty-printed JSON.
pub fn to_json(solution: &Solution) -> String {
    serde_json::to_string_pretty(solution).expect("a solution always serializes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_problem;
    use crate::solver::solve;

    fn solved(source: &str) -> (Problem, Solution) {
        let problem = parse_problem(source).unwrap();
        let solution = solve(&problem).expect("test problems are solvable");
        (problem, solution)
    }

    #[test]
    fn report_lists_only_nonzero_rows() {
        let (problem, solution) = solved(
            "(IronOre) -> 1 Iron (1s, cost 1)\n\
             (IronOre) -> 1 Iron (1s, cost 3)\n\
             Iron (60/min)\n",
        );
        let report = render(&problem, &solution);
        assert!(report.contains("Recipe Uses:"));
        assert!(report.contains("(IronOre) -> 1 Iron (1s, cost 1)"));
        // The expensive alternative is unused and therefore unlisted.
        assert!(!report.contains("cost 3"));
        assert!(report.contains("For a total cost of 1"));
        // IronOre nets out to zero and only appears in the recipe echo.
        assert!(report.contains("60"));
    }

    #[test]
    fn json_holds_the_exact_rationals() {
        let (_, solution) = solved(
            "(IronOre) -> 1 Iron (1s, cost 1)\n\
             Iron (30/min)\n",
        );
        let json = to_json(&solution);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["uses"][0], "1/2");
        assert_eq!(value["cost"], "1/2");
        assert_eq!(value["net"]["Iron"], "30");
    }
}
