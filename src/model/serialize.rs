use crate::model::{EdgeId, Interval, ReachTask, SpdiEdge, SpdiGraph};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete reachability problem instance: an SPDI graph together with the
/// start/final task posed over it.
///
/// This is the on-disk representation consumed by the `spdi_reach` binary and by
/// the fixture-driven tests. The JSON layout is:
///
/// ```json
/// {
///   "edges": [
///     { "name": "e0", "successors": [1], "lower": [0.0, 1.0], "upper": [0.0, 1.0] }
///   ],
///   "start": [ { "edge": 0, "part": { "lo": 0.1, "hi": 0.2 } } ],
///   "final": [ { "edge": 0, "part": { "lo": 0.85, "hi": 0.95 } } ]
/// }
/// ```
///
/// Control points are `[image of 0, image of 1]` pairs of the lower/upper extremal
/// maps. Successor indices and part edges are range-checked during loading.
#[derive(Clone, PartialEq, Debug)]
pub struct SpdiSystem {
    pub graph: SpdiGraph,
    pub task: ReachTask,
}

#[derive(Serialize, Deserialize)]
struct SystemFile {
    edges: Vec<SpdiEdge>,
    #[serde(default)]
    start: Vec<TaskPart>,
    #[serde(rename = "final", default)]
    finals: Vec<TaskPart>,
}

#[derive(Serialize, Deserialize)]
struct TaskPart {
    edge: EdgeId,
    part: Interval,
}

impl SpdiSystem {
    /// Load a system from a JSON model file.
    pub fn try_from_file<P: AsRef<Path>>(path: P) -> Result<SpdiSystem, String> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Cannot read model file: {}", e))?;
        SpdiSystem::try_from_json(&json)
    }

    /// Parse a system from a JSON string.
    pub fn try_from_json(json: &str) -> Result<SpdiSystem, String> {
        let file: SystemFile =
            serde_json::from_str(json).map_err(|e| format!("Invalid model file: {}", e))?;

        let num_edges = file.edges.len();
        for (index, edge) in file.edges.iter().enumerate() {
            for successor in &edge.successors {
                if successor.to_index() >= num_edges {
                    return Err(format!(
                        "Successor {} of edge `{}` (index {}) is out of range.",
                        successor, edge.name, index
                    ));
                }
            }
        }

        let mut task = ReachTask::new();
        for part in &file.start {
            if part.edge.to_index() >= num_edges {
                return Err(format!("Start part references unknown edge {}.", part.edge));
            }
            task.start_edge_parts.insert(part.edge, part.part);
        }
        for part in &file.finals {
            if part.edge.to_index() >= num_edges {
                return Err(format!("Final part references unknown edge {}.", part.edge));
            }
            task.final_edge_parts.insert(part.edge, part.part);
        }

        Ok(SpdiSystem {
            graph: SpdiGraph::new(file.edges),
            task,
        })
    }

    /// Serialize the system back into the JSON model format.
    pub fn to_json_string(&self) -> Result<String, String> {
        let file = SystemFile {
            edges: self.graph.edges().to_vec(),
            start: collect_parts(&self.task.start_edge_parts),
            finals: collect_parts(&self.task.final_edge_parts),
        };
        serde_json::to_string_pretty(&file).map_err(|e| format!("Cannot serialize model: {}", e))
    }
}

fn collect_parts(parts: &std::collections::BTreeMap<EdgeId, Interval>) -> Vec<TaskPart> {
    parts
        .iter()
        .map(|(edge, part)| TaskPart {
            edge: *edge,
            part: *part,
        })
        .collect()
}
