use std::fmt::{self, Display, Formatter};
use std::time::Duration;

/// Runtime statistics for the last move a strategy chose.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchStats {
    /// Deepest search that finished. Zero if none did.
    pub completed_depth: usize,
    /// Nodes visited by searches that finished.
    pub nodes_explored: usize,
    /// Nodes visited by a search that was abandoned, and thus thrown away work.
    pub abandoned_nodes: usize,
    /// Whether the clock stopped the search.
    pub timed_out: bool,
    pub wall_time: Duration,
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let secs = self.wall_time.as_secs_f64();
        let throughput = if secs > 0. {
            (self.nodes_explored + self.abandoned_nodes) as f64 / secs
        } else {
            0.
        };
        write!(
            f,
            "Explored {} nodes to depth {}.\n{} nodes of an interrupted search were discarded.\n{} nodes/sec",
            self.nodes_explored, self.completed_depth, self.abandoned_nodes, throughput as usize
        )
    }
}
