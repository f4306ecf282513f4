//! Problem and solution data model.
//!
//! A [`Problem`] is an ordered list of recipes and demands; the recipe order
//! fixes the variable order of the optimization and therefore the order of
//! [`Solution::uses`]. Resource maps are `BTreeMap`s keyed by owned names so
//! iteration is always byte-lexicographic.

use crate::rational::Rational;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A transformation of input resources into output resources, taking
/// `duration` seconds and costing `cost` per running machine.
///
/// A quantity of zero marks a raw resource: the recipe names it without
/// consuming or producing it, which forces it into the optimization without
/// constraining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub inputs: BTreeMap<String, u64>,
    pub outputs: BTreeMap<String, u64>,
    /// Seconds per execution; always positive.
    pub duration: u64,
    pub cost: u64,
}

/// A required lower bound on the net production rate of one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demand {
    pub name: String,
    pub units_per_minute: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problem {
    pub recipes: Vec<Recipe>,
    pub demands: Vec<Demand>,
}

/// An optimal production plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Fractional machine count per recipe, aligned with
    /// [`Problem::recipes`]. Always nonnegative.
    pub uses: Vec<Rational>,
    /// Gross production per resource in units/min, counting outputs only.
    pub total: BTreeMap<String, Rational>,
    /// Production minus consumption per resource in units/min. Meets every
    /// demand in addition to all intermediate demand.
    pub net: BTreeMap<String, Rational>,
    /// Total cost of the plan: the sum of `uses[i] * cost_i`.
    pub cost: Rational,
}

struct ResourceList<'a>(&'a BTreeMap<String, u64>);

impl fmt::Display for ResourceList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (resource, &quantity)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            if quantity > 0 {
                write!(f, "{quantity} {resource}")?;
            } else {
                write!(f, "({resource})")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}s, cost {})",
            ResourceList(&self.inputs),
            ResourceList(&self.outputs),
            self.duration,
            self.cost
        )
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/min)", self.name, self.units_per_minute)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Produce:\n")?;
        for demand in &self.demands {
            writeln!(f, "  {demand}")?;
        }
        f.write_str("Using:\n")?;
        for recipe in &self.recipes {
            writeln!(f, "  {recipe}")?;
        }
        f.write_str("Minimizing total cost.")
    }
}
