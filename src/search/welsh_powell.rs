use log::{debug, info, warn};

use crate::color::{check_palette, Assignment, Coloring, materialize};
use crate::error::{ColorError, Result};
use crate::graph::{Graph, Vertex};

/** implements the Welsh-Powell algorithm. Colors are opened one at a time.
    1. sort the vertices by increasing degree (stable: insertion order among equal degrees)
    2. open a new color for the first uncolored vertex
    3. extend this color to every later uncolored vertex that has no neighbor using it
    4. repeat until every vertex is colored, fail if more colors are needed than the palette holds
*/
pub fn welsh_powell<V: Vertex, C: Clone + PartialEq>(graph:&Graph<V>, palette:&[C]) -> Result<Coloring<V,C>> {
    check_palette(palette)?;
    let mut vertices = graph.vertices();
    vertices.sort_by_key(|v| graph.degree(v));
    let mut assignment:Assignment<V> = Assignment::with_capacity(vertices.len());
    let mut next_color:usize = 0;
    for (i,v1) in vertices.iter().enumerate() {
        if assignment.contains_key(v1) { continue; }
        if next_color >= palette.len() {
            warn!("welsh-powell: no color left to open for {:?} ({} colors)", v1, palette.len());
            return Err(ColorError::exhausted(palette.len()));
        }
        let color = next_color;
        next_color += 1;
        assignment.insert(v1.clone(), color);
        let mut class_size:usize = 1;
        for v2 in &vertices[i+1..] {
            if assignment.contains_key(v2) { continue; }
            if graph.adjacent(v2).all(|w| assignment.get(w) != Some(&color)) {
                assignment.insert(v2.clone(), color);
                class_size += 1;
            }
        }
        debug!("welsh-powell: color {} opened by {:?} ({} vertices)", color, v1, class_size);
    }
    info!("welsh-powell: {} colors", next_color);
    Ok(materialize(assignment, palette))
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::nb_colors;
    use crate::search::fixtures;

    #[test]
    fn test_fixtures() {
        fixtures::check_all(welsh_powell);
    }

    #[test]
    fn test_lowest_degree_opens_first_color() {
        // star centered on "h" plus an isolated "z"
        let mut g = Graph::new();
        for v in ["h", "a", "b", "z"].iter() { g.add_vertex(*v); }
        g.add_edge("h", "a").unwrap();
        g.add_edge("h", "b").unwrap();
        let res = welsh_powell(&g, fixtures::COLORS).unwrap();
        assert_eq!(res["z"], "red");
        assert_eq!(res["a"], "red");
        assert_eq!(res["b"], "red");
        assert_eq!(res["h"], "blue");
    }

    #[test]
    fn test_color_absorbs_many_vertices() {
        // K_{1,4}: a single color is extended over the four leaves
        let mut g = Graph::new();
        for v in 0..5 { g.add_vertex(v); }
        for v in 1..5 { g.add_edge(0, v).unwrap(); }
        let res = welsh_powell(&g, &["x", "y"]).unwrap();
        assert_eq!(nb_colors(&res), 2);
        assert_eq!(res[&0], "y");
    }
}
