use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use log::info;

use crate::error::{ColorError, Result};

/**
Vertex of a graph. Identity is given by equality/hash, ties in the heuristics are broken
by the total order. Implemented for every type providing these capabilities.
*/
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Vertex for T {}

/** models an undirected graph without self-loops nor parallel edges */
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    /// vertices in the order they were introduced
    order: Vec<V>,
    /// adj[v]: set of vertices adjacent to v (isolated vertices map to an empty set)
    adj: HashMap<V, BTreeSet<V>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self { Self::new() }
}

impl<V: Vertex> Graph<V> {

    /// creates an empty graph
    pub fn new() -> Self {
        Self { order: Vec::new(), adj: HashMap::new() }
    }

    /// true iff no vertices remain
    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    /// deep snapshot of the graph. The copy shares no storage with `self`.
    pub fn copy(&self) -> Self { self.clone() }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.order.len() }

    /// number of edges
    pub fn nb_edges(&self) -> usize {
        // ∑ d(v) = 2m
        self.adj.values().map(|s| s.len()).sum::<usize>() / 2
    }

    /// vertices, in insertion order
    pub fn vertices(&self) -> Vec<V> { self.order.clone() }

    /// edge set. Each edge (u,v) is reported once with u < v
    pub fn edges(&self) -> BTreeSet<(V,V)> {
        let mut res = BTreeSet::new();
        for (u,l) in self.adj.iter() {
            for v in l {
                if u < v {
                    res.insert((u.clone(), v.clone()));
                }
            }
        }
        res
    }

    /// true if v is a vertex of the graph
    pub fn contains_vertex(&self, v:&V) -> bool { self.adj.contains_key(v) }

    /** copy of the set of vertices adjacent to v.

# Errors
 - `UnknownVertex` if v is not in the graph
    */
    pub fn neighbors(&self, v:&V) -> Result<BTreeSet<V>> {
        self.adj.get(v).cloned().ok_or_else(|| unknown(v))
    }

    /// borrowing view over the neighbors of v (empty if v is unknown)
    pub fn adjacent<'a>(&'a self, v:&V) -> impl Iterator<Item=&'a V> + 'a {
        self.adj.get(v).into_iter().flatten()
    }

    /// number of vertices adjacent to v (0 if v is unknown)
    pub fn degree(&self, v:&V) -> usize {
        self.adj.get(v).map_or(0, |s| s.len())
    }

    /// returns if u and v are adjacent
    pub fn are_adjacent(&self, u:&V, v:&V) -> bool {
        self.adj.get(u).map_or(false, |s| s.contains(v))
    }

    /// adds a vertex. Does nothing if it already exists.
    pub fn add_vertex(&mut self, v:V) {
        if !self.adj.contains_key(&v) {
            self.adj.insert(v.clone(), BTreeSet::new());
            self.order.push(v);
        }
    }

    /** adds the undirected edge {u,v}. Both endpoints must have been added before.
    Adding an existing edge does nothing.

# Errors
 - `SelfLoop` if u == v
 - `UnknownVertex` if an endpoint is not in the graph (the graph is left untouched)
    */
    pub fn add_edge(&mut self, u:V, v:V) -> Result<()> {
        if u == v { return Err(ColorError::SelfLoop(format!("{:?}", u))); }
        if !self.contains_vertex(&u) { return Err(unknown(&u)); }
        if !self.contains_vertex(&v) { return Err(unknown(&v)); }
        if let Some(s) = self.adj.get_mut(&u) { s.insert(v.clone()); }
        if let Some(s) = self.adj.get_mut(&v) { s.insert(u); }
        Ok(())
    }

    /** removes v and all its incident edges.

# Errors
 - `UnknownVertex` if v is not in the graph
    */
    pub fn remove_vertex(&mut self, v:&V) -> Result<()> {
        let neighbors = self.adj.remove(v).ok_or_else(|| unknown(v))?;
        for w in &neighbors {
            if let Some(s) = self.adj.get_mut(w) { s.remove(v); }
        }
        self.order.retain(|w| w != v);
        Ok(())
    }

    /// print statistics of the graph
    pub fn display_statistics(&self) {
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.order.iter().map(|v| self.degree(v)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            info!("\t{} \t min degree", min);
            info!("\t{} \t max degree", max);
        }
    }
}

fn unknown<V: Vertex>(v:&V) -> ColorError {
    ColorError::UnknownVertex(format!("{:?}", v))
}
