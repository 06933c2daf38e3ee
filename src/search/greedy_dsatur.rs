use std::cmp::{Ordering, Ord, Reverse};

use log::{debug, info, warn};
use priority_queue::PriorityQueue;

use crate::color::{check_palette, Assignment, Coloring, adjacent_colors, first_available, materialize};
use crate::error::{ColorError, Result};
use crate::graph::{Graph, Vertex};

/// selection key of an uncolored vertex
#[derive(PartialEq, Eq)]
struct DSatInfo<V> {
    /// number of times a neighbor got colored
    dsat: usize,
    degree: usize,
    /// smaller vertices first on complete ties
    vertex: Reverse<V>,
}

impl<V: Ord> Ord for DSatInfo<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

// `PartialOrd` needs to be implemented as well.
impl<V: Ord> PartialOrd for DSatInfo<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm.
    1. choose an uncolored vertex that sees the most colored neighbors (break ties by the largest
       degree, then by the smallest vertex)
    2. give it the first palette color none of its neighbors uses (fail if there is none)
    3. raise the saturation of all its uncolored neighbors
    4. repeat until every vertex is colored

The saturation counts colored neighbors, not distinct colors: a neighbor gains a point each time
one of its neighbors gets colored, even if that color is already around it.
*/
pub fn greedy_dsatur<V: Vertex, C: Clone + PartialEq>(graph:&Graph<V>, palette:&[C]) -> Result<Coloring<V,C>> {
    check_palette(palette)?;
    let mut remaining_vertices:PriorityQueue<V, DSatInfo<V>> = PriorityQueue::new();
    for v in graph.vertices() {
        let info = DSatInfo { dsat:0, degree:graph.degree(&v), vertex:Reverse(v.clone()) };
        remaining_vertices.push(v, info);
    }
    let mut assignment:Assignment<V> = Assignment::with_capacity(graph.nb_vertices());
    let mut nb_colors:usize = 0;
    // get current vertex
    while let Some((current_vertex, current_info)) = remaining_vertices.pop() {
        // assign it a color
        let forbidden = adjacent_colors(graph, &current_vertex, &assignment);
        let color = match first_available(&forbidden, palette.len()) {
            None => {
                warn!("dsatur: no color left for {:?} ({} colors)", current_vertex, palette.len());
                return Err(ColorError::exhausted(palette.len()));
            },
            Some(c) => c,
        };
        debug!("dsatur: {:?} (dsat {}, degree {}) <- color {}",
            current_vertex, current_info.dsat, current_info.degree, color
        );
        nb_colors = nb_colors.max(color+1);
        // update saturation degree information (colored vertices are no longer in the queue)
        for neighbor in graph.adjacent(&current_vertex) {
            remaining_vertices.change_priority_by(neighbor, |p| { p.dsat += 1; });
        }
        assignment.insert(current_vertex, color);
    }
    info!("dsatur: {} colors", nb_colors);
    Ok(materialize(assignment, palette))
}
