// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Weakly Connected Components (union-find).

use crate::algo::view::GraphView;

pub struct ComponentsResult {
    /// Component id per slot. Ids are contiguous and numbered by lowest member slot.
    pub labels: Vec<u32>,
    pub component_count: usize,
}

impl ComponentsResult {
    /// Member slots of each component, in ascending slot order.
    pub fn members(&self) -> Vec<Vec<u32>> {
        let mut members = vec![Vec::new(); self.component_count];
        for (slot, &cid) in self.labels.iter().enumerate() {
            members[cid as usize].push(slot as u32);
        }
        members
    }
}

/// Components of the underlying undirected graph (edge direction ignored).
pub fn weakly_connected_components<G: GraphView>(graph: &G) -> ComponentsResult {
    let n = graph.vertex_count();

    // Union-Find with path compression
    let mut parent: Vec<u32> = (0..n as u32).collect();
    let mut rank: Vec<u8> = vec![0; n];

    fn find(parent: &mut [u32], mut x: u32) -> u32 {
        while parent[x as usize] != x {
            parent[x as usize] = parent[parent[x as usize] as usize]; // path compression
            x = parent[x as usize];
        }
        x
    }

    fn union(parent: &mut [u32], rank: &mut [u8], x: u32, y: u32) {
        let px = find(parent, x);
        let py = find(parent, y);
        if px == py {
            return;
        }
        // Union by rank
        match rank[px as usize].cmp(&rank[py as usize]) {
            std::cmp::Ordering::Less => parent[px as usize] = py,
            std::cmp::Ordering::Greater => parent[py as usize] = px,
            std::cmp::Ordering::Equal => {
                parent[py as usize] = px;
                rank[px as usize] += 1;
            }
        }
    }

    // Every edge is an outgoing edge of its source, so this covers both directions
    for v in 0..n as u32 {
        for &u in graph.out_neighbors(v) {
            union(&mut parent, &mut rank, v, u);
        }
    }

    // Assign contiguous component IDs
    let mut root_to_id = vec![u32::MAX; n];
    let mut labels = Vec::with_capacity(n);
    let mut next_id = 0u32;
    for slot in 0..n as u32 {
        let root = find(&mut parent, slot) as usize;
        if root_to_id[root] == u32::MAX {
            root_to_id[root] = next_id;
            next_id += 1;
        }
        labels.push(root_to_id[root]);
    }

    ComponentsResult {
        labels,
        component_count: next_id as usize,
    }
}
