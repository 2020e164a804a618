//! Connected-component selection.
//!
//! After pruning, the graph may still contain disconnected pieces:
//! thinning noise, but also real disconnected vessels. Selection keeps
//! the largest component and, when preservation is enabled, every
//! secondary component big enough to be anatomy rather than noise.

use std::fmt;

use centerline_types::{GraphError, GraphResult, SkeletonGraph};
use tracing::info;

use crate::filter::retain_nodes;
use crate::params::ComponentParams;

/// Result of component selection.
#[derive(Debug, Clone)]
pub struct ComponentOutcome {
    /// The graph restricted to the kept components.
    pub graph: SkeletonGraph,
    /// Connected components in the input.
    pub components_found: usize,
    /// Components kept.
    pub components_kept: usize,
    /// Nodes dropped with the discarded components.
    pub nodes_removed: usize,
}

impl fmt::Display for ComponentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kept {}/{} components ({} nodes dropped)",
            self.components_kept, self.components_found, self.nodes_removed,
        )
    }
}

/// Keeps the significant connected components of the graph.
///
/// With preservation enabled, a component is significant when its node
/// count reaches `max(keep_ratio × largest, min_nodes)`; if no secondary
/// component reaches that bar, only the largest is kept. With
/// preservation disabled, only the largest survives. Ties go to the
/// component containing the lowest node id.
///
/// # Errors
///
/// Returns [`GraphError::NoStructure`] when the input graph is empty.
#[allow(clippy::cast_precision_loss)]
pub fn select_components(
    graph: &SkeletonGraph,
    params: &ComponentParams,
) -> GraphResult<ComponentOutcome> {
    if graph.is_empty() {
        return Err(GraphError::NoStructure {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        });
    }

    let (component_of, sizes) = label_components(graph);
    if sizes.len() == 1 {
        return Ok(ComponentOutcome {
            graph: graph.clone(),
            components_found: 1,
            components_kept: 1,
            nodes_removed: 0,
        });
    }

    let mut largest = 0;
    for (label, &size) in sizes.iter().enumerate() {
        if size > sizes[largest] {
            largest = label;
        }
    }

    let mut keep_component = vec![false; sizes.len()];
    if params.preserve {
        let bar = (params.keep_ratio * sizes[largest] as f64).max(params.min_nodes as f64);
        let mut kept = 0_usize;
        for (label, &size) in sizes.iter().enumerate() {
            if size as f64 >= bar {
                keep_component[label] = true;
                kept += 1;
            }
        }
        if kept <= 1 {
            keep_component.fill(false);
            keep_component[largest] = true;
        }
    } else {
        keep_component[largest] = true;
    }

    let keep: Vec<bool> = component_of
        .iter()
        .map(|&label| keep_component[label])
        .collect();
    let selected = retain_nodes(graph, &keep);
    let components_kept = keep_component.iter().filter(|&&k| k).count();
    let nodes_removed = graph.node_count() - selected.node_count();

    info!(
        components_found = sizes.len(),
        components_kept,
        nodes_removed,
        "Component selection complete"
    );

    Ok(ComponentOutcome {
        graph: selected,
        components_found: sizes.len(),
        components_kept,
        nodes_removed,
    })
}

/// Labels every node with its component and returns the component sizes.
fn label_components(graph: &SkeletonGraph) -> (Vec<usize>, Vec<usize>) {
    let mut component_of = vec![usize::MAX; graph.node_count()];
    let mut sizes = Vec::new();

    for start in graph.nodes() {
        if component_of[start.id as usize] != usize::MAX {
            continue;
        }
        let label = sizes.len();
        let mut size = 0_usize;
        let mut frontier = vec![start.id];
        component_of[start.id as usize] = label;
        while let Some(id) = frontier.pop() {
            size += 1;
            for &neighbor in graph.neighbors(id) {
                if component_of[neighbor as usize] == usize::MAX {
                    component_of[neighbor as usize] = label;
                    frontier.push(neighbor);
                }
            }
        }
        sizes.push(size);
    }

    (component_of, sizes)
}
