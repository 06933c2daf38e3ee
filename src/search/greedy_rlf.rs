use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::color::{Coloring, check_palette};
use crate::error::{ColorError, Result};
use crate::graph::{Graph, Vertex};

/** implements a greedy RLF (Recursive Largest First) algorithm. That colors vertices one color
at a time, on a working copy of the graph
    1. selects the vertex with the largest degree in the residual graph
    2. while some residual vertex has no neighbor in the current class, add the one among them
       with the fewest neighbors outside the class
    3. remove the class from the residual graph and give it the next palette color
    4. start over until the residual graph is empty

Ties are broken by insertion order (first vertex encountered).
*/
pub fn greedy_rlf<V: Vertex, C: Clone + PartialEq>(graph:&Graph<V>, palette:&[C]) -> Result<Coloring<V,C>> {
    check_palette(palette)?;
    let mut residual = graph.copy();
    let mut res:Coloring<V,C> = Coloring::new();
    let mut current_color:usize = 0;
    while !residual.is_empty() { // add a new color until everything is colored
        if current_color >= palette.len() {
            warn!("rlf: {} vertices left, no color left ({} colors)", residual.nb_vertices(), palette.len());
            return Err(ColorError::exhausted(palette.len()));
        }
        let class = independent_class(&residual);
        debug!("rlf: color {} <- {:?}", current_color, class);
        for v in class {
            residual.remove_vertex(&v)?;
            res.insert(v, palette[current_color].clone());
        }
        current_color += 1;
    }
    info!("rlf: {} colors", current_color);
    Ok(res)
}

/// builds an independent set of a non-empty graph, in the order vertices were added to it
fn independent_class<V: Vertex>(graph:&Graph<V>) -> Vec<V> {
    let vertices = graph.vertices();
    // max_by_key keeps the last maximum: iterate backwards to keep the first one
    let seed = match vertices.iter().rev().max_by_key(|v| graph.degree(v)) {
        None => return Vec::new(),
        Some(v) => v.clone(),
    };
    let mut class = vec![seed.clone()];
    let mut in_class:BTreeSet<V> = BTreeSet::new();
    in_class.insert(seed);
    let mut uncolored:Vec<V> = vertices.into_iter().filter(|v| !in_class.contains(v)).collect();
    loop {
        // candidates: uncolored vertices that do not see the class
        let next = uncolored.iter()
            .filter(|v| graph.adjacent(v).all(|w| !in_class.contains(w)))
            .min_by_key(|v| graph.adjacent(v).filter(|w| !in_class.contains(*w)).count())
            .cloned();
        match next {
            None => break, // no more candidate
            Some(v) => {
                uncolored.retain(|w| w != &v);
                in_class.insert(v.clone());
                class.push(v);
            }
        }
    }
    class
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::nb_colors;
    use crate::search::fixtures;

    #[test]
    fn test_fixtures() {
        fixtures::check_all(greedy_rlf);
    }

    #[test]
    fn test_input_graph_is_untouched() {
        let (g, _) = fixtures::crown();
        let before = (g.vertices(), g.edges());
        greedy_rlf(&g, fixtures::COLORS).unwrap();
        assert_eq!((g.vertices(), g.edges()), before);
    }

    #[test]
    fn test_independent_class() {
        // 4-cycle a-b-c-d-a: a is the first vertex of maximum degree, c the only candidate
        let (g, _) = fixtures::cycle4();
        assert_eq!(independent_class(&g), vec!["a", "c"]);
    }

    #[test]
    fn test_seed_is_first_maximum_degree() {
        let mut g = Graph::new();
        for v in ["x", "y", "z", "w"].iter() { g.add_vertex(*v); }
        g.add_edge("x", "y").unwrap();
        g.add_edge("z", "w").unwrap();
        // all degrees equal to 1: x seeds the class, then z (first of the two candidates)
        assert_eq!(independent_class(&g), vec!["x", "z"]);
    }

    #[test]
    fn test_crown_graph() {
        let (g, _) = fixtures::crown();
        let res = greedy_rlf(&g, fixtures::COLORS).unwrap();
        assert_eq!(nb_colors(&res), 4);
    }
}
