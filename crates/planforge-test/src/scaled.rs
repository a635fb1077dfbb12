//! Parameterized problem families.

use planforge_strips::{ActionBuilder, GroundProblem, ProblemBuilder};

/// A line of `len + 1` cells, walk from `c0` to `c{len}`.
/// Shortest plan length: `len`.
pub fn corridor(len: usize) -> GroundProblem {
    let cells: Vec<String> = (0..=len).map(|i| format!("c{i}")).collect();
    let mut builder = ProblemBuilder::new(format!("corridor-{len}"))
        .with_facts(cells.iter().cloned())
        .with_init([cells[0].clone()])
        .with_goal([cells[len].clone()]);
    for i in 0..len {
        builder = builder
            .with_action(step(&cells[i], &cells[i + 1]))
            .with_action(step(&cells[i + 1], &cells[i]));
    }
    builder.build().unwrap()
}

/// A `width` x `height` grid with four-way moves, from the top-left to the
/// bottom-right corner. Shortest plan length: `width + height - 2`.
pub fn grid(width: usize, height: usize) -> GroundProblem {
    let cell = |x: usize, y: usize| format!("at_{x}_{y}");
    let mut builder = ProblemBuilder::new(format!("grid-{width}x{height}"))
        .with_facts((0..height).flat_map(|y| (0..width).map(move |x| cell(x, y))))
        .with_init([cell(0, 0)])
        .with_goal([cell(width - 1, height - 1)]);
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                builder = builder
                    .with_action(step(&cell(x, y), &cell(x + 1, y)))
                    .with_action(step(&cell(x + 1, y), &cell(x, y)));
            }
            if y + 1 < height {
                builder = builder
                    .with_action(step(&cell(x, y), &cell(x, y + 1)))
                    .with_action(step(&cell(x, y + 1), &cell(x, y)));
            }
        }
    }
    builder.build().unwrap()
}

fn step(from: &str, to: &str) -> ActionBuilder {
    ActionBuilder::new(format!("move_{from}_to_{to}"))
        .with_precondition([from])
        .with_add([to])
        .with_delete([from])
}

/// Two rooms, a robot with two grippers, and `balls` balls to carry from
/// room `a` to room `b`. Shortest plan length for an even `balls >= 2`:
/// `3 * balls - 1`.
pub fn gripper(balls: usize) -> GroundProblem {
    let rooms = ["a", "b"];
    let grippers = ["left", "right"];

    let mut facts = vec!["robot_at_a".to_string(), "robot_at_b".to_string()];
    for g in grippers {
        facts.push(format!("free_{g}"));
    }
    for ball in 0..balls {
        for room in rooms {
            facts.push(format!("ball{ball}_at_{room}"));
        }
        for g in grippers {
            facts.push(format!("ball{ball}_in_{g}"));
        }
    }

    let mut builder = ProblemBuilder::new(format!("gripper-{balls}"))
        .with_facts(facts)
        .with_init(["robot_at_a", "free_left", "free_right"])
        .with_init((0..balls).map(|b| format!("ball{b}_at_a")))
        .with_goal((0..balls).map(|b| format!("ball{b}_at_b")))
        .with_action(
            ActionBuilder::new("move_a_b")
                .with_precondition(["robot_at_a"])
                .with_add(["robot_at_b"])
                .with_delete(["robot_at_a"]),
        )
        .with_action(
            ActionBuilder::new("move_b_a")
                .with_precondition(["robot_at_b"])
                .with_add(["robot_at_a"])
                .with_delete(["robot_at_b"]),
        );

    for ball in 0..balls {
        for room in rooms {
            for g in grippers {
                let at = format!("ball{ball}_at_{room}");
                let held = format!("ball{ball}_in_{g}");
                let robot = format!("robot_at_{room}");
                let free = format!("free_{g}");
                builder = builder
                    .with_action(
                        ActionBuilder::new(format!("pick_ball{ball}_{room}_{g}"))
                            .with_precondition([at.clone(), robot.clone(), free.clone()])
                            .with_add([held.clone()])
                            .with_delete([at.clone(), free.clone()]),
                    )
                    .with_action(
                        ActionBuilder::new(format!("drop_ball{ball}_{room}_{g}"))
                            .with_precondition([held.clone(), robot])
                            .with_add([at, free])
                            .with_delete([held]),
                    );
            }
        }
    }
    builder.build().unwrap()
}

/// `bits` freely toggled facts (a state space of `2^bits` states) and a
/// goal fact only reachable through a fact nothing ever adds.
///
/// Every engine must give up on this one; it exists to exercise time limits.
pub fn toggle_space(bits: usize) -> GroundProblem {
    let names: Vec<String> = (0..bits).map(|i| format!("bit{i}")).collect();
    let mut builder = ProblemBuilder::new(format!("toggles-{bits}"))
        .with_facts(names.iter().cloned())
        .with_facts(["key", "goal"])
        .with_goal(["goal"])
        .with_action(
            ActionBuilder::new("open")
                .with_precondition(["key"])
                .with_precondition(names.iter().cloned())
                .with_add(["goal"]),
        );
    for name in &names {
        builder = builder
            .with_action(
                ActionBuilder::new(format!("set_{name}"))
                    .with_negative_precondition([name.as_str()])
                    .with_add([name.as_str()]),
            )
            .with_action(
                ActionBuilder::new(format!("clear_{name}"))
                    .with_precondition([name.as_str()])
                    .with_delete([name.as_str()]),
            );
    }
    builder.build().unwrap()
}
