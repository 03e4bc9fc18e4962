//!
//! flowcut solves the [minimum-cost maximum-flow problem](https://en.wikipedia.org/wiki/Minimum-cost_flow_problem)
//! between a single source and sink with integer capacity/cost/flow,
//! and extracts the corresponding minimum cut.
//!
pub mod io;
pub mod min_flow;
