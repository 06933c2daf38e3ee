use log::{debug, info, warn};

use crate::color::{check_palette, Assignment, Coloring, adjacent_colors, first_available, materialize};
use crate::error::{ColorError, Result};
use crate::graph::{Graph, Vertex};

/** implements the sequential greedy algorithm.
    1. take the vertices in insertion order
    2. give each vertex the first color of the palette that none of its colored neighbors uses
    3. fail if the palette is exhausted for some vertex
*/
pub fn greedy<V: Vertex, C: Clone + PartialEq>(graph:&Graph<V>, palette:&[C]) -> Result<Coloring<V,C>> {
    check_palette(palette)?;
    let mut assignment:Assignment<V> = Assignment::with_capacity(graph.nb_vertices());
    for v in graph.vertices() {
        if assignment.contains_key(&v) { continue; }
        let forbidden = adjacent_colors(graph, &v, &assignment);
        match first_available(&forbidden, palette.len()) {
            None => {
                warn!("greedy: no color left for {:?} ({} colors)", v, palette.len());
                return Err(ColorError::exhausted(palette.len()));
            },
            Some(c) => {
                debug!("greedy: {:?} <- color {}", v, c);
                assignment.insert(v, c);
            }
        }
    }
    let res = materialize(assignment, palette);
    info!("greedy: colored {} vertices", res.len());
    Ok(res)
}
