//! Literal task parameters, methods and tier colors for the figure.
//!
//! These constants are the whole "configuration" of the figure: each task lists
//! one target/scale pair per method of its tier, in tier order.

use crate::domain::types::{Method, Rgb, TaskSpec, Tier};

/// Shared x-axis description of every panel.
pub const X_LABEL: &str = "number of policy iterations";

pub const VINE: Method = Method {
    name: "Vine",
    color: Rgb::new(0x1f, 0x77, 0xb4), // blue
};
pub const SINGLE_PATH: Method = Method {
    name: "Single Path",
    color: Rgb::new(0xff, 0x7f, 0x0e), // orange
};
pub const NATURAL_GRADIENT: Method = Method {
    name: "Natural Gradient",
    color: Rgb::new(0x2c, 0xa0, 0x2c), // green
};
pub const MAX_KL: Method = Method {
    name: "Max KL",
    color: Rgb::new(0xe3, 0x77, 0xc2), // pink
};
pub const EMPIRICAL_FIM: Method = Method {
    name: "Empirical FIM",
    color: Rgb::new(0x17, 0xbe, 0xcf), // cyan
};
pub const CEM: Method = Method {
    name: "CEM",
    color: Rgb::new(0xd6, 0x27, 0x28), // red
};
pub const CMA: Method = Method {
    name: "CMA",
    color: Rgb::new(0x8c, 0x56, 0x4b), // brown
};
pub const RWR: Method = Method {
    name: "RWR",
    color: Rgb::new(0x7f, 0x7f, 0x7f), // gray
};

pub const UPPER_METHODS: [Method; 8] = [
    VINE,
    SINGLE_PATH,
    NATURAL_GRADIENT,
    MAX_KL,
    EMPIRICAL_FIM,
    CEM,
    CMA,
    RWR,
];

pub const LOWER_METHODS: [Method; 4] = [VINE, SINGLE_PATH, NATURAL_GRADIENT, CEM];

/// Cartpole: quick rise to ~10 for the good methods, lower for the rest.
pub const CARTPOLE: TaskSpec = TaskSpec {
    name: "Cartpole",
    y_label: "Reward",
    tier: Tier::Upper,
    num_iters: 50,
    targets: &[10.0, 9.0, 8.0, 3.0, 4.0, 2.0, 1.0, 0.5],
    scales: &[5.0, 6.0, 8.0, 20.0, 15.0, 30.0, 35.0, 40.0],
    noise_level: 0.15,
    start_shift: 0.0,
    step: 5,
};

/// Swimmer: good methods rise to ~0.15, poor ones drop to ~-0.05.
pub const SWIMMER: TaskSpec = TaskSpec {
    name: "Swimmer",
    y_label: "Cost (- velocity ctrl)",
    tier: Tier::Upper,
    num_iters: 50,
    targets: &[0.15, 0.13, 0.10, 0.05, 0.02, -0.02, -0.04, -0.05],
    scales: &[5.0, 6.0, 8.0, 10.0, 12.0, 15.0, 20.0, 25.0],
    noise_level: 0.1,
    start_shift: -0.05,
    step: 5,
};

pub const HOPPER: TaskSpec = TaskSpec {
    name: "Hopper",
    y_label: "Reward",
    tier: Tier::Lower,
    num_iters: 200,
    targets: &[2.5, 2.2, 0.8, 0.4],
    scales: &[40.0, 45.0, 100.0, 120.0],
    noise_level: 0.25,
    start_shift: 0.0,
    step: 10,
};

pub const WALKER: TaskSpec = TaskSpec {
    name: "Walker",
    y_label: "Reward",
    tier: Tier::Lower,
    num_iters: 200,
    targets: &[3.2, 2.8, 0.9, 0.5],
    scales: &[50.0, 55.0, 110.0, 130.0],
    noise_level: 0.3,
    start_shift: 0.0,
    step: 10,
};

/// Tasks in display order: top row left to right, then bottom row.
pub const TASKS: [TaskSpec; 4] = [CARTPOLE, SWIMMER, HOPPER, WALKER];
