//! Complete example puzzles exercising the solver end to end. The builder
//! functions are public so benchmarks can reuse them.

pub mod islands;
pub mod mirrors;
