use std::fs;
use std::str::FromStr;

use log::info;
use serde::Serialize;

use crate::error::{ColorError, Result};
use crate::graph::Graph;

/** builds a random graph on vertices 0..n where each pair is adjacent with probability `density`.
The same seed always gives the same graph.
*/
pub fn random_graph(n:usize, density:f64, seed:u64) -> Result<Graph<usize>> {
    let rng = fastrand::Rng::with_seed(seed);
    let mut res = Graph::new();
    for v in 0..n { res.add_vertex(v); }
    for u in 0..n {
        for v in u+1..n {
            if rng.f64() < density {
                res.add_edge(u, v)?;
            }
        }
    }
    Ok(res)
}

/** parses the value of a command line argument.

# Errors
 - `InvalidArgument` naming the argument if the value cannot be parsed
*/
pub fn parse_arg<T: FromStr>(name:&str, value:&str) -> Result<T> {
    value.parse::<T>().map_err(|_| ColorError::InvalidArgument {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// statistics of a heuristic run
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    /// heuristic name
    pub heuristic: String,
    /// number of vertices of the instance
    pub nb_vertices: usize,
    /// number of edges of the instance
    pub nb_edges: usize,
    /// number of colors in the palette
    pub palette_size: usize,
    /// number of colors used (None if the palette was exhausted)
    pub nb_colors: Option<usize>,
    /// time spent by the heuristic (seconds)
    pub time_searched: f32,
}

/// exports search statistics as JSON to `perf_file` (if any)
pub fn export_results(stats:&RunStats, perf_file:Option<&str>) -> Result<()> {
    match perf_file {
        None => {},
        Some(filename) => {
            fs::write(filename, serde_json::to_string(stats)?)?;
            info!("printed perfs in: {}", filename);
        }
    }
    Ok(())
}
