//! Coloring heuristics. Each one consumes a graph and an ordered palette and returns a total
//! coloring, or fails if the palette is too small for it.

use std::fmt;
use std::str::FromStr;

use crate::color::Coloring;
use crate::error::{ColorError, Result};
use crate::graph::{Graph, Vertex};

/// sequential greedy algorithm (insertion order)
pub mod greedy;

/// Welsh-Powell algorithm (color classes opened one at a time)
pub mod welsh_powell;

/// greedy DSATUR algorithm
pub mod greedy_dsatur;

/// Recursive Largest First algorithm (RLF)
pub mod greedy_rlf;

pub use greedy::greedy;
pub use welsh_powell::welsh_powell;
pub use greedy_dsatur::greedy_dsatur as dsatur;
pub use greedy_rlf::greedy_rlf as rlf;

/// the available coloring heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// see [`greedy()`]
    Greedy,
    /// see [`welsh_powell()`]
    WelshPowell,
    /// see [`dsatur()`]
    Dsatur,
    /// see [`rlf()`]
    Rlf,
}

impl Heuristic {
    /// every heuristic, in a fixed order
    pub const ALL:[Heuristic; 4] = [
        Heuristic::Greedy, Heuristic::WelshPowell, Heuristic::Dsatur, Heuristic::Rlf
    ];

    /// name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Greedy => "greedy",
            Heuristic::WelshPowell => "welsh-powell",
            Heuristic::Dsatur => "dsatur",
            Heuristic::Rlf => "rlf",
        }
    }

    /// colors the graph with this heuristic
    pub fn run<V: Vertex, C: Clone + PartialEq>(&self, graph:&Graph<V>, palette:&[C]) -> Result<Coloring<V,C>> {
        match self {
            Heuristic::Greedy => greedy(graph, palette),
            Heuristic::WelshPowell => welsh_powell(graph, palette),
            Heuristic::Dsatur => dsatur(graph, palette),
            Heuristic::Rlf => rlf(graph, palette),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Heuristic::ALL.iter()
            .find(|h| h.name() == s.to_lowercase().replace('_', "-"))
            .copied()
            .ok_or_else(|| ColorError::UnknownHeuristic(s.to_string()))
    }
}


/// graphs with a known chromatic number, shared by the heuristics tests
#[cfg(test)]
pub(crate) mod fixtures {
    use crate::color::{Coloring, CheckerResult, checker};
    use crate::error::Result;
    use crate::graph::Graph;

    pub const COLORS:&[&str] = &["red", "blue", "green", "yellow", "orange", "purple"];

    /// builds a graph, vertices inserted in order of first appearance in the edge list
    pub fn from_edges<V: crate::graph::Vertex>(edges:&[(V,V)]) -> Graph<V> {
        let mut g = Graph::new();
        for (u,v) in edges {
            g.add_vertex(u.clone());
            g.add_vertex(v.clone());
        }
        for (u,v) in edges {
            g.add_edge(u.clone(), v.clone()).unwrap();
        }
        g
    }

    /// a-b-c-d-a
    pub fn cycle4() -> (Graph<&'static str>, usize) {
        (from_edges(&[("a","b"), ("b","c"), ("c","d"), ("d","a")]), 2)
    }

    /// 4-cycle plus the a-c chord
    pub fn cycle4_chord() -> (Graph<&'static str>, usize) {
        (from_edges(&[("a","b"), ("b","c"), ("c","d"), ("d","a"), ("a","c")]), 3)
    }

    /// complete graph on 4 vertices
    pub fn k4() -> (Graph<&'static str>, usize) {
        (from_edges(&[("a","b"), ("b","c"), ("c","d"), ("d","a"), ("a","c"), ("b","d")]), 4)
    }

    /// complete graph on 5 vertices (some edges listed twice)
    pub fn k5() -> (Graph<&'static str>, usize) {
        (from_edges(&[
            ("a","b"), ("b","c"), ("c","d"), ("d","e"), ("e","a"), ("b","d"),
            ("a","c"), ("b","d"), ("c","e"), ("d","a"), ("e","b"),
        ]), 5)
    }

    /// octahedron (K_{2,2,2}, some edges listed twice)
    pub fn octahedron() -> (Graph<&'static str>, usize) {
        (from_edges(&[
            ("a","b"), ("b","c"), ("c","d"), ("d","e"), ("e","f"), ("f","a"),
            ("a","c"), ("b","d"), ("a","c"), ("b","d"), ("c","e"), ("d","f"),
            ("e","a"), ("f","b"),
        ]), 3)
    }

    /// crown graph on 8 vertices: bipartite, but hard for insertion-order greedies
    pub fn crown() -> (Graph<&'static str>, usize) {
        let mut g = Graph::new();
        for v in ["1", "2", "3", "4", "5", "6", "7", "8"].iter() { g.add_vertex(*v); }
        for (u,v) in [
            ("1","4"), ("1","6"), ("1","8"), ("2","3"), ("2","5"), ("2","7"),
            ("3","6"), ("3","8"), ("4","5"), ("4","7"), ("5","8"), ("6","7"),
        ].iter() {
            g.add_edge(*u, *v).unwrap();
        }
        (g, 2)
    }

    /// runs a heuristic on every fixture and checks validity, totality and the number of colors
    pub fn check_all<F>(heuristic:F)
    where F: Fn(&Graph<&'static str>, &[&'static str]) -> Result<Coloring<&'static str, &'static str>> {
        for (g, chromatic_number) in vec![cycle4(), cycle4_chord(), k4(), k5(), octahedron()] {
            let res = heuristic(&g, COLORS).unwrap();
            assert_eq!(res.len(), g.nb_vertices());
            assert_eq!(checker(&g, &res, COLORS), CheckerResult::Ok(chromatic_number));
        }
        // crown graph: proper, at least 2 colors, at most half the vertices
        let (g, chromatic_number) = crown();
        let res = heuristic(&g, COLORS).unwrap();
        match checker(&g, &res, COLORS) {
            CheckerResult::Ok(k) => assert!(chromatic_number <= k && k <= g.nb_vertices() / 2),
            other => panic!("invalid coloring: {:?}", other),
        }
        // empty graph
        let empty:Graph<&'static str> = Graph::new();
        assert!(heuristic(&empty, COLORS).unwrap().is_empty());
        // single color against an edge
        for (g, _) in vec![cycle4(), k4(), crown()] {
            assert!(heuristic(&g, &COLORS[..1]).unwrap_err().is_exhausted());
        }
        // determinism
        let (g, _) = octahedron();
        assert_eq!(heuristic(&g, COLORS).unwrap(), heuristic(&g, COLORS).unwrap());
    }
}
