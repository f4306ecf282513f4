//! Machine-quantity optimization via the revised Simplex method.
//!
//! The planner takes the recipes it may use and the production demands it
//! must fulfil, and computes how many (fractional) machines to run per recipe
//! so that every demand is met at minimum total cost. Fractional counts are
//! deliberate: a machine can be underclocked, so `ceil` is the caller's
//! business.
//!
//! Each recipe becomes a vector of per-resource production rates (outputs
//! positive, inputs negative, everything divided by the recipe duration).
//! This drops information about burstiness, but throughput is all that
//! matters here; bursts smooth out with buffering. With `r` recipes over `n`
//! resources the primal problem is
//!
//! ```text
//! minimize dot(c, x)  subject to  R x >= d,  x >= 0
//! ```
//!
//! where `c` holds the per-recipe costs, column `j` of the `n x r` matrix `R`
//! is recipe `j`'s rate vector, and `d` holds the demanded rates (zero for
//! every undemanded resource, so the plan cannot lean on externally provided
//! inputs). Simplex wants a maximization with a known feasible corner, so we
//! solve the dual instead:
//!
//! ```text
//! maximize dot(d, y)  subject to  R^T y <= c,  y >= 0
//! ```
//!
//! Since costs are nonnegative, `y = 0` with slack `c` is a basic feasible
//! starting point, and the dual's slack variables are exactly the primal
//! unknowns `x`. The initial tableau, with `r + 1` rows and `n + r + 2`
//! columns, is
//!
//! ```text
//!  R^T  I  0 | c
//! -d^T  0  1 | 0
//! ```
//!
//! At optimality the primal solution is read from the objective row under the
//! slack columns, and the shared optimum sits in the bottom-right cell.

use crate::problem::{Problem, Solution};
use crate::rational::Rational;
use crate::table::Table;
use num_traits::{One, Zero};
use std::collections::BTreeMap;

/// Multiplies every element of the row by `x`.
fn multiply_row(row: &mut [Rational], x: Rational) {
    for value in row.iter_mut() {
        *value *= x;
    }
}

/// Adds `x` times the source row to the destination row.
fn add_multiple(destination: &mut [Rational], source: &[Rational], x: Rational) {
    debug_assert_eq!(destination.len(), source.len());
    for (d, s) in destination.iter_mut().zip(source) {
        *d += *s * x;
    }
}

/// The sorted, deduplicated list of every resource referenced by a recipe or
/// a demand. Its order fixes the tableau's column order.
fn resources(problem: &Problem) -> Vec<&str> {
    let mut result: Vec<&str> = Vec::new();
    for recipe in &problem.recipes {
        result.extend(recipe.inputs.keys().map(String::as_str));
        result.extend(recipe.outputs.keys().map(String::as_str));
    }
    result.extend(problem.demands.iter().map(|demand| demand.name.as_str()));
    result.sort_unstable();
    result.dedup();
    result
}

/// Builds the initial Simplex tableau for the dual problem.
fn build_tableau(resources: &[&str], problem: &Problem) -> Table<Rational> {
    let r = problem.recipes.len();
    let n = resources.len();
    let column = |name: &str| {
        resources
            .binary_search(&name)
            .expect("every referenced resource is indexed")
    };
    let mut tableau = Table::new(n + r + 2, r + 1);
    for (y, recipe) in problem.recipes.iter().enumerate() {
        let duration = Rational::from(recipe.duration);
        let row = tableau.row_mut(y);
        // The recipe's net rate per resource.
        for (resource, &quantity) in &recipe.inputs {
            row[column(resource)] -= Rational::from(quantity) / duration;
        }
        for (resource, &quantity) in &recipe.outputs {
            row[column(resource)] += Rational::from(quantity) / duration;
        }
        // The slack variable for this row, which doubles as the primal
        // unknown x_y, and the cost.
        row[n + y] = Rational::one();
        row[n + r + 1] = Rational::from(recipe.cost);
    }
    let final_row = tableau.row_mut(r);
    for demand in &problem.demands {
        final_row[column(&demand.name)] = -(Rational::from(demand.units_per_minute) / Rational::from(60u32));
    }
    final_row[n + r] = Rational::one();
    tableau
}

/// The column with the minimum value in the objective row: the most negative
/// entry buys the largest improvement per unit of the entering variable.
/// `None` means the tableau is optimal.
fn pivot_column(tableau: &Table<Rational>) -> Option<usize> {
    let objective = tableau.row(tableau.height() - 1);
    let mut best = 0;
    for (i, value) in objective.iter().enumerate() {
        if *value < objective[best] {
            best = i;
        }
    }
    if objective[best] < Rational::zero() {
        Some(best)
    } else {
        None
    }
}

/// The row minimizing `rhs / coefficient` over rows with a strictly positive
/// coefficient in the pivot column; ties keep the smallest row index. The
/// minimum-ratio rule keeps every basic variable nonnegative after the pivot.
/// `None` means the entering variable is unbounded.
fn pivot_row(tableau: &Table<Rational>, column: usize) -> Option<usize> {
    let mut best: Option<(usize, Rational)> = None;
    for y in 0..tableau.height() - 1 {
        let row = tableau.row(y);
        let coefficient = row[column];
        if coefficient <= Rational::zero() {
            continue;
        }
        let ratio = row[row.len() - 1] / coefficient;
        match &best {
            Some((_, best_ratio)) if ratio >= *best_ratio => {}
            _ => best = Some((y, ratio)),
        }
    }
    best.map(|(y, _)| y)
}

/// Runs Simplex pivots until the tableau is optimal. `None` means the dual
/// is unbounded, i.e. there is no feasible production plan. With demands
/// bounded and costs nonnegative that only happens when a demanded resource
/// cannot be produced from the given recipes.
fn optimize(mut tableau: Table<Rational>) -> Option<Table<Rational>> {
    let height = tableau.height();
    let width = tableau.width();
    loop {
        let previous_score = tableau.row(height - 1)[width - 1];
        let column = match pivot_column(&tableau) {
            Some(column) => column,
            None => return Some(tableau),
        };
        let row = pivot_row(&tableau, column)?;
        // Gaussian elimination: scale the pivot row so the pivot cell becomes
        // one, then cancel the pivot column everywhere else.
        let pivot = tableau.row(row)[column];
        multiply_row(tableau.row_mut(row), pivot.recip());
        debug_assert!(tableau.row(row)[column] == Rational::one());
        for y in 0..height {
            if y == row {
                continue;
            }
            let factor = tableau.row(y)[column];
            if factor.is_zero() {
                continue;
            }
            // Basic feasibility: the constant column stays nonnegative, so
            // every intermediate tableau remains a basic feasible solution.
            debug_assert!(
                y == height - 1
                    || tableau.row(y)[width - 1] >= factor * tableau.row(row)[width - 1]
            );
            let (destination, source) = tableau.rows_pair_mut(y, row);
            add_multiple(destination, source, -factor);
            debug_assert!(destination[column].is_zero());
        }
        debug_assert!(tableau.row(height - 1)[width - 1] >= previous_score);
    }
}

/// Reads the primal solution out of an optimal dual tableau: the values of
/// `x` appear in the objective row under the slack columns.
fn extract_uses(tableau: &Table<Rational>) -> Vec<Rational> {
    let r = tableau.height() - 1;
    let n = tableau.width() - r - 2;
    tableau.row(r)[n..n + r].to_vec()
}

/// Derives per-resource production rates in units/min from the recipe uses.
fn rates(
    problem: &Problem,
    uses: &[Rational],
) -> (BTreeMap<String, Rational>, BTreeMap<String, Rational>) {
    debug_assert_eq!(problem.recipes.len(), uses.len());
    let minute = Rational::from(60u32);
    let mut total = BTreeMap::new();
    let mut net = BTreeMap::new();
    for (recipe, &usage) in problem.recipes.iter().zip(uses) {
        let duration = Rational::from(recipe.duration);
        for (resource, &quantity) in &recipe.inputs {
            let rate = minute * usage * Rational::from(quantity) / duration;
            *net.entry(resource.clone()).or_default() -= rate;
        }
        for (resource, &quantity) in &recipe.outputs {
            let rate = minute * usage * Rational::from(quantity) / duration;
            *total.entry(resource.clone()).or_default() += rate;
            *net.entry(resource.clone()).or_default() += rate;
        }
    }
    (total, net)
}

/// Computes the cheapest production plan meeting every demand, or `None` if
/// no combination of recipes can meet them.
pub fn solve(problem: &Problem) -> Option<Solution> {
    let resources = resources(problem);
    let tableau = optimize(build_tableau(&resources, problem))?;
    let uses = extract_uses(&tableau);
    let cost = tableau.row(tableau.height() - 1)[tableau.width() - 1];
    let (total, net) = rates(problem, &uses);
    Some(Solution {
        uses,
        total,
        net,
        cost,
    })
}
