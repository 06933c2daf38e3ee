use std::collections::{BTreeMap, HashMap};

use bit_set::BitSet;

use crate::error::{ColorError, Result};
use crate::graph::{Graph, Vertex};

/** Coloring of a graph: color assigned to each vertex.
Ordered by vertex so that iterating over it is deterministic.
*/
pub type Coloring<V, C> = BTreeMap<V, C>;

/** coloring in progress, where colors are positions in the palette */
pub(crate) type Assignment<V> = HashMap<V, usize>;

/// outcome of the coloring checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult<V> {
    /// proper and total coloring, using this many distinct colors
    Ok(usize),
    /// a vertex of the graph is not colored
    MissingVertex(V),
    /// a vertex is colored with a color that is not in the palette
    ForeignColor(V),
    /// both endpoints of an edge share the same color
    Conflict(V, V),
}

/**
checks that a coloring is total, only uses palette colors and is proper.
returns the number of distinct colors used if so.
*/
pub fn checker<V: Vertex, C: PartialEq>(
    graph:&Graph<V>, coloring:&Coloring<V,C>, palette:&[C]
) -> CheckerResult<V> {
    // check that all vertices are colored with palette colors
    for v in graph.vertices() {
        match coloring.get(&v) {
            None => return CheckerResult::MissingVertex(v),
            Some(c) => if !palette.contains(c) { return CheckerResult::ForeignColor(v) }
        }
    }
    // check conflicts
    for (u,v) in graph.edges() {
        if coloring.get(&u) == coloring.get(&v) {
            return CheckerResult::Conflict(u, v);
        }
    }
    // if ok: return the number of colors
    CheckerResult::Ok(nb_colors(coloring))
}

/// number of distinct colors used by a coloring
pub fn nb_colors<V, C: PartialEq>(coloring:&Coloring<V,C>) -> usize {
    let mut seen:Vec<&C> = Vec::new();
    for c in coloring.values() {
        if !seen.contains(&c) { seen.push(c); }
    }
    seen.len()
}

/** checks that no color appears twice in the palette. Heuristics track palette positions,
so two equal colors at different positions could end up on adjacent vertices.

# Errors
 - `DuplicateColor` with the position of the first repeated entry
*/
pub fn check_palette<C: PartialEq>(palette:&[C]) -> Result<()> {
    for (i,c) in palette.iter().enumerate() {
        if palette[..i].contains(c) {
            return Err(ColorError::DuplicateColor(i));
        }
    }
    Ok(())
}

/// palette positions used by the already colored neighbors of v
pub(crate) fn adjacent_colors<V: Vertex>(
    graph:&Graph<V>, v:&V, assignment:&Assignment<V>
) -> BitSet {
    let mut res = BitSet::default();
    for w in graph.adjacent(v) {
        if let Some(c) = assignment.get(w) { res.insert(*c); }
    }
    res
}

/// first palette position not in `forbidden`
pub(crate) fn first_available(forbidden:&BitSet, palette_size:usize) -> Option<usize> {
    (0..palette_size).find(|c| !forbidden.contains(*c))
}

/// translates palette positions into palette colors
pub(crate) fn materialize<V: Vertex, C: Clone>(
    assignment:Assignment<V>, palette:&[C]
) -> Coloring<V,C> {
    assignment.into_iter().map(|(v,c)| (v, palette[c].clone())).collect()
}
