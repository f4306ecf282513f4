use flp::{parse_problem, solve, Problem, Rational, Solution};

fn rat(n: i64, d: i64) -> Rational {
    Rational::new(n.into(), d.into())
}

/// Checks the properties every optimal plan must have: machine counts are
/// nonnegative, the reported cost is the use-weighted recipe cost, and the
/// net production rate covers every demand.
fn check_invariants(problem: &Problem, solution: &Solution) {
    let zero = Rational::from(0u32);
    assert_eq!(solution.uses.len(), problem.recipes.len());
    let mut cost = zero;
    for (recipe, &usage) in problem.recipes.iter().zip(&solution.uses) {
        assert!(usage >= zero, "machine counts must be nonnegative");
        cost = cost + usage * Rational::from(recipe.cost);
    }
    assert_eq!(cost, solution.cost, "cost must be the use-weighted recipe cost");
    for demand in &problem.demands {
        let produced = solution.net.get(&demand.name).copied().unwrap_or(zero);
        assert!(
            produced >= Rational::from(demand.units_per_minute),
            "the demand for {} must be met, got {produced}",
            demand.name
        );
    }
}

fn solve_source(source: &str) -> (Problem, Solution) {
    let problem = parse_problem(source).expect("example must parse");
    let solution = solve(&problem).expect("example must be solvable");
    check_invariants(&problem, &solution);
    (problem, solution)
}

#[test]
fn single_recipe_passthrough() {
    let (_, solution) = solve_source(
        "(IronOre) -> 1 Iron (1s, cost 1)\n\
         Iron (60/min)\n",
    );
    assert_eq!(solution.uses, [rat(1, 1)]);
    assert_eq!(solution.cost, rat(1, 1));
    assert_eq!(solution.net["Iron"], rat(60, 1));
    assert_eq!(solution.net["IronOre"], rat(0, 1));
    assert_eq!(solution.total["Iron"], rat(60, 1));
    assert!(solution.total.get("IronOre").is_none());
}

#[test]
fn demand_below_unit_rate_uses_a_fractional_machine() {
    let (_, solution) = solve_source(
        "(IronOre) -> 1 Iron (1s, cost 1)\n\
         Iron (30/min)\n",
    );
    assert_eq!(solution.uses, [rat(1, 2)]);
    assert_eq!(solution.cost, rat(1, 2));
    assert_eq!(solution.net["Iron"], rat(30, 1));
}

#[test]
fn two_step_chain_covers_intermediate_demand() {
    let (_, solution) = solve_source(
        "(Ore) -> 1 Bar (1s, cost 1)\n\
         1 Bar -> 1 Plate (1s, cost 1)\n\
         Plate (60/min)\n",
    );
    assert_eq!(solution.uses, [rat(1, 1), rat(1, 1)]);
    assert_eq!(solution.cost, rat(2, 1));
    assert_eq!(solution.net["Plate"], rat(60, 1));
    assert_eq!(solution.net["Bar"], rat(0, 1));
    assert_eq!(solution.net["Ore"], rat(0, 1));
    assert_eq!(solution.total["Bar"], rat(60, 1));
}

#[test]
fn the_cheaper_of_two_producers_wins() {
    let (_, solution) = solve_source(
        "(IronOre) -> 1 Iron (1s, cost 1)\n\
         (IronOre) -> 1 Iron (1s, cost 3)\n\
         Iron (60/min)\n",
    );
    assert_eq!(solution.uses, [rat(1, 1), rat(0, 1)]);
    assert_eq!(solution.cost, rat(1, 1));
}

#[test]
fn intermediates_are_shared_across_demands() {
    let (_, solution) = solve_source(
        "(IronOre) -> 1 IronOre (1s, cost 1)\n\
         1 IronOre -> 1 Gear (1s, cost 1)\n\
         1 IronOre -> 1 Plate (1s, cost 1)\n\
         Gear (30/min)\n\
         Plate (30/min)\n",
    );
    assert_eq!(solution.uses, [rat(1, 1), rat(1, 2), rat(1, 2)]);
    assert_eq!(solution.cost, rat(2, 1));
    assert_eq!(solution.net["Gear"], rat(30, 1));
    assert_eq!(solution.net["Plate"], rat(30, 1));
    assert_eq!(solution.net["IronOre"], rat(0, 1));
    assert_eq!(solution.total["IronOre"], rat(60, 1));
}

#[test]
fn awkward_rates_stay_exact() {
    // 3 Iron per 7 seconds is 180/7 per minute per machine.
    let (_, solution) = solve_source(
        "(IronOre) -> 3 Iron (7s, cost 2)\n\
         Iron (60/min)\n",
    );
    assert_eq!(solution.uses, [rat(7, 3)]);
    assert_eq!(solution.cost, rat(14, 3));
    assert_eq!(solution.net["Iron"], rat(60, 1));
}

#[test]
fn unproducible_demands_have_no_solution() {
    let problem = parse_problem("Iron (60/min)\n").unwrap();
    assert!(solve(&problem).is_none());

    // Iron is producible, but only from an ore nothing supplies.
    let problem = parse_problem(
        "1 Ore -> 1 Iron (1s, cost 1)\n\
         Iron (60/min)\n",
    )
    .unwrap();
    assert!(solve(&problem).is_none());
}

#[test]
fn relabeling_recipes_permutes_the_uses() {
    let (_, forward) = solve_source(
        "(IronOre) -> 1 Iron (1s, cost 1)\n\
         (IronOre) -> 1 Iron (1s, cost 3)\n\
         Iron (60/min)\n",
    );
    let (_, backward) = solve_source(
        "(IronOre) -> 1 Iron (1s, cost 3)\n\
         (IronOre) -> 1 Iron (1s, cost 1)\n\
         Iron (60/min)\n",
    );
    assert_eq!(forward.uses, [rat(1, 1), rat(0, 1)]);
    assert_eq!(backward.uses, [rat(0, 1), rat(1, 1)]);
    assert_eq!(forward.cost, backward.cost);
    assert_eq!(forward.net, backward.net);
    assert_eq!(forward.total, backward.total);
}

#[test]
fn scaling_costs_scales_the_total_but_not_the_plan() {
    let (_, base) = solve_source(
        "(Ore) -> 1 Bar (1s, cost 1)\n\
         1 Bar -> 1 Plate (1s, cost 4)\n\
         Plate (60/min)\n",
    );
    let (_, scaled) = solve_source(
        "(Ore) -> 1 Bar (1s, cost 7)\n\
         1 Bar -> 1 Plate (1s, cost 28)\n\
         Plate (60/min)\n",
    );
    assert_eq!(base.uses, scaled.uses);
    assert_eq!(scaled.cost, base.cost * rat(7, 1));
}

#[test]
fn no_demands_means_no_machines() {
    let (_, solution) = solve_source(
        "// An idle factory.\n\
         (Ore) -> 1 Bar (1s, cost 1)\n",
    );
    assert_eq!(solution.uses, [rat(0, 1)]);
    assert_eq!(solution.cost, rat(0, 1));
}

#[test]
fn later_demands_for_a_resource_replace_earlier_ones() {
    let (_, solution) = solve_source(
        "(IronOre) -> 1 Iron (1s, cost 1)\n\
         Iron (30/min)\n\
         Iron (60/min)\n",
    );
    assert_eq!(solution.uses, [rat(1, 1)]);
    assert_eq!(solution.net["Iron"], rat(60, 1));
}
