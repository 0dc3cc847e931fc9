use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::EdgeConfig;

/// Routing table from a queue index to the single queue it feeds.
///
/// Queues without an entry are open: clients leave the network once served.
#[derive(Clone, Debug, Default)]
pub struct Topology {
    downstream: Vec<Option<usize>>,
}

impl Topology {
    /// A topology over `len` queues with no edges.
    pub fn open(len: usize) -> Self {
        Self {
            downstream: vec![None; len],
        }
    }

    /// Resolves `edges` against `index` (queue id -> position).
    pub fn build(edges: &[EdgeConfig], index: &HashMap<String, usize>) -> Result<Self> {
        let mut topology = Self::open(index.len());
        for edge in edges {
            let from = lookup(index, edge.from.as_str())?;
            let to = lookup(index, edge.to.as_str())?;
            if topology.downstream[from].is_some() {
                return Err(Error::DuplicateRoute(edge.from.to_string()));
            }
            topology.downstream[from] = Some(to);
        }
        Ok(topology)
    }

    pub fn downstream_of(&self, queue: usize) -> Option<usize> {
        self.downstream.get(queue).copied().flatten()
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.downstream
            .iter()
            .enumerate()
            .filter_map(|(from, to)| to.map(|to| (from, to)))
    }
}

fn lookup(index: &HashMap<String, usize>, id: &str) -> Result<usize> {
    index
        .get(id)
        .copied()
        .ok_or_else(|| Error::UnknownTopologyQueue(id.to_string()))
}
