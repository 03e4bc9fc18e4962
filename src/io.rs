//!
//! Text format of networks and reports
//!
//! Input
//! ```text
//! n_vertices n_edges
//! from to capacity cost    (n_edges lines)
//! ```
//!
//! Output
//! ```text
//! max_flow
//! min_cost
//! cut_size    v0 v1 ...
//! from to capacity cost -> flow    (one line per input edge, in input order)
//! ```
//!
use crate::min_flow::{Cost, FlowEdge, FlowError, FlowNetwork, FlowRateLike, FlowReport};
use itertools::Itertools; // for join
use std::io::Write;
use std::str::FromStr;

/// Whitespace separated tokens tagged with their 1-based line number
struct Tokens<'a> {
    iter: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let iter = input
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)));
        Tokens {
            iter: Box::new(iter),
            line: 1,
        }
    }

    fn next_value<T: FromStr>(&mut self, what: &str) -> Result<T, FlowError> {
        match self.iter.next() {
            Some((line, token)) => {
                self.line = line;
                token.parse().map_err(|_| FlowError::Parse {
                    line,
                    message: format!("expected {}, found `{}`", what, token),
                })
            }
            None => Err(FlowError::Parse {
                line: self.line,
                message: format!("unexpected end of input, expected {}", what),
            }),
        }
    }
}

///
/// Parse a network from the text format.
///
/// Tokens after the last edge are ignored.
///
pub fn parse_network<F>(input: &str) -> Result<FlowNetwork<F>, FlowError>
where
    F: FlowRateLike + FromStr,
{
    let mut tokens = Tokens::new(input);
    let n_vertices: usize = tokens.next_value("vertex count")?;
    let n_edges: usize = tokens.next_value("edge count")?;
    if n_vertices == 0 {
        return Err(FlowError::InvalidInput(
            "network must have at least one vertex".to_string(),
        ));
    }

    let mut edges = Vec::with_capacity(n_edges);
    for _ in 0..n_edges {
        let from: usize = tokens.next_value("source vertex")?;
        let to: usize = tokens.next_value("target vertex")?;
        let capacity: F = tokens.next_value("capacity")?;
        let cost: Cost = tokens.next_value("cost")?;

        for vertex in [from, to] {
            if vertex >= n_vertices {
                return Err(FlowError::VertexOutOfRange { vertex, n_vertices });
            }
        }
        if capacity < F::zero() {
            return Err(FlowError::NegativeCapacity {
                from,
                to,
                capacity: capacity.to_cost(),
            });
        }
        edges.push(FlowEdge::new(from, to, capacity, cost));
    }

    Ok(FlowNetwork::new(n_vertices, edges))
}

///
/// Write the report of `network` in the text format.
///
pub fn write_report<W, F>(
    writer: &mut W,
    network: &FlowNetwork<F>,
    report: &FlowReport<F>,
) -> std::io::Result<()>
where
    W: Write,
    F: FlowRateLike,
{
    writeln!(writer, "{}", report.max_flow)?;
    writeln!(writer, "{}", report.min_cost)?;
    writeln!(writer, "{}    {}", report.cut.len(), report.cut.iter().join(" "))?;
    for (edge, flow) in network.edges.iter().zip(report.flow.iter()) {
        writeln!(writer, "{} -> {}", edge, flow)?;
    }
    Ok(())
}
