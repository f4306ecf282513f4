//! `flp` is a factory production planner.
//!
//! Given a set of recipes (each turning input resources into output
//! resources over some duration, at some cost) and a set of demands
//! (required production rates), it computes the fractional number of
//! machines to run per recipe so that every demand — including the
//! intermediate demand the plan itself creates — is met at minimum total
//! cost. The reduction is to a linear program solved with the revised
//! Simplex method over exact 128-bit rationals, so degenerate problems
//! never suffer floating-point drift.
//!
//! ## An example
//!
//! ```rust
//! use flp::{parse_problem, solve, Rational};
//!
//! let source = "\
//! // Smelt ore, then press plates.
//! (IronOre) -> 1 IronIngot (2s, cost 1)
//! 2 IronIngot -> 1 IronPlate (4s, cost 1)
//! IronPlate (30/min)
//! ";
//! let problem = parse_problem(source).unwrap();
//! let solution = solve(&problem).expect("the plate demand is satisfiable");
//! assert_eq!(solution.uses, vec![Rational::from(2u32), Rational::from(2u32)]);
//! assert_eq!(solution.cost, Rational::from(4u32));
//! assert_eq!(solution.net["IronPlate"], Rational::from(30u32));
//! ```
//!
//! Solutions are fractional by design: machines can be underclocked, so
//! rounding `uses` up to whole machines is the caller's concern.

pub mod cli;
pub mod integer;
pub mod parser;
pub mod problem;
pub mod rational;
pub mod report;
pub mod solver;
pub mod table;

pub use integer::{Int, ParseIntegerError, Uint};
pub use parser::{parse_problem, ParseError};
pub use problem::{Demand, Problem, Recipe, Solution};
pub use rational::Rational;
pub use solver::solve;
pub use table::Table;
