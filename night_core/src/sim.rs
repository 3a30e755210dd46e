//! Property bags for the external actor-simulation layer.
//!
//! The core never owns the animation or physics of an actor; it reads
//! and writes the handful of fields below through an [`ActorHandle`]
//! while the host's own per-frame update moves the underlying
//! simulation. Bags are shared single-threaded via `Rc<RefCell<_>>`,
//! one bag per live actor.
//!
//! [`ActorHandle`]: crate::actors::ActorHandle

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// One stop on a patrol route.
///
/// Nodes form a singly linked chain through `next`; the head of the
/// chain is the node nearest the actor's home stage. `office` marks the
/// terminal office-entry flag carried by the final node: an activation
/// flag, not a further node.
#[derive(Debug, Clone, Serialize)]
pub struct PositionNode {
    pub timer: f32,
    pub wait: f32,
    pub difficulty_override: i32,
    pub active: bool,
    pub visible: bool,
    pub office: bool,
    pub next: Option<usize>,
}

impl PositionNode {
    fn new(next: Option<usize>) -> Self {
        PositionNode {
            timer: 0.0,
            wait: 0.0,
            difficulty_override: 0,
            active: false,
            visible: false,
            office: false,
            next,
        }
    }
}

/// Arena-backed singly linked patrol route.
///
/// Traversal always follows `next` links from the head, so chain order
/// (not storage order) defines position indices. At most one node is
/// active at a time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PositionGraph {
    nodes: Vec<PositionNode>,
}

impl PositionGraph {
    pub fn empty() -> Self {
        PositionGraph::default()
    }

    /// Builds a straight chain of `len` nodes.
    pub fn chain(len: usize) -> Self {
        let nodes = (0..len)
            .map(|i| {
                let next = if i + 1 < len { Some(i + 1) } else { None };
                PositionNode::new(next)
            })
            .collect();
        PositionGraph { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    pub fn get(&self, node: usize) -> Option<&PositionNode> {
        self.nodes.get(node)
    }

    pub fn get_mut(&mut self, node: usize) -> Option<&mut PositionNode> {
        self.nodes.get_mut(node)
    }

    /// First active node found scanning from the head.
    pub fn active_node(&self) -> Option<usize> {
        let mut cursor = self.head();
        while let Some(node) = cursor {
            if self.nodes[node].active {
                return Some(node);
            }
            cursor = self.nodes[node].next;
        }
        None
    }

    /// Chain position of `node`, counting from the head.
    pub fn index_of(&self, node: usize) -> Option<usize> {
        let mut cursor = self.head();
        let mut index = 0;
        while let Some(current) = cursor {
            if current == node {
                return Some(index);
            }
            index += 1;
            cursor = self.nodes[current].next;
        }
        None
    }

    /// Node at chain position `index`, walking from the head.
    pub fn node_at(&self, index: usize) -> Option<usize> {
        let mut cursor = self.head();
        for _ in 0..index {
            cursor = cursor.and_then(|node| self.nodes[node].next);
        }
        cursor
    }

    /// Final node of the chain.
    pub fn last(&self) -> Option<usize> {
        let mut cursor = self.head()?;
        while let Some(next) = self.nodes[cursor].next {
            cursor = next;
        }
        Some(cursor)
    }

    /// Activates `node`, deactivating any other active node first.
    pub fn activate(&mut self, node: usize) {
        if node >= self.nodes.len() {
            return;
        }
        if let Some(current) = self.active_node() {
            if current != node {
                self.nodes[current].active = false;
                self.nodes[current].visible = false;
            }
        }
        self.nodes[node].active = true;
        self.nodes[node].visible = true;
        self.nodes[node].timer = 0.0;
    }
}

/// Position-graph actor: walks a patrol route off a home stage.
#[derive(Debug, Clone, Serialize)]
pub struct PatrolSim {
    pub enabled: bool,
    pub difficulty: f32,
    pub start_timer: f32,
    /// Withered actors have no stage mechanism to lower on departure.
    pub withered: bool,
    pub off_stage: bool,
    pub stage_down: bool,
    pub stage_wait: f32,
    pub stage_visible: bool,
    pub graph: PositionGraph,
}

impl PatrolSim {
    pub fn new(route_len: usize, withered: bool) -> Self {
        PatrolSim {
            enabled: false,
            difficulty: 0.0,
            start_timer: 0.0,
            withered,
            off_stage: false,
            stage_down: false,
            stage_wait: 0.0,
            stage_visible: true,
            graph: PositionGraph::chain(route_len),
        }
    }
}

/// Runner actor: charges the office after a wind-up instead of
/// patrolling node to node.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunnerSim {
    pub enabled: bool,
    /// Whether a run is currently in progress.
    pub active: bool,
    pub difficulty: f32,
    pub start_timer: f32,
}

/// One of the two alternate sub-states of a vent actor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VentSlot {
    pub active: bool,
    pub progress: f32,
    pub timer: f32,
}

/// Vent actor: leaves its camera spot, crawls the vent, then loiters in
/// the office. Vent and office sub-states are independent booleans.
#[derive(Debug, Clone, Serialize)]
pub struct VentSim {
    pub enabled: bool,
    /// Whether the actor has left its camera spot at all.
    pub active: bool,
    pub difficulty: f32,
    pub start_timer: f32,
    pub move_timer: f32,
    pub cam_visible: bool,
    pub cam_wait: f32,
    pub vent: VentSlot,
    pub office: VentSlot,
}

impl Default for VentSim {
    fn default() -> Self {
        VentSim {
            enabled: false,
            active: false,
            difficulty: 0.0,
            start_timer: 0.0,
            move_timer: 0.0,
            cam_visible: true,
            cam_wait: 0.0,
            vent: VentSlot::default(),
            office: VentSlot::default(),
        }
    }
}

pub const BREAKER_CHOICES: usize = 4;

/// One of the four mutually exclusive breaker targets.
#[derive(Debug, Clone, Serialize)]
pub struct BreakerChoice {
    pub arrived: bool,
    pub outage_timer: f32,
    /// Breaker-row switches; the sabotage effect forces these off.
    pub switches: Vec<bool>,
}

impl Default for BreakerChoice {
    fn default() -> Self {
        BreakerChoice {
            arrived: false,
            outage_timer: 0.0,
            switches: vec![true; 5],
        }
    }
}

/// Breaker-choice actor: wanders between four breaker panels and trips
/// whichever one it reaches.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BreakerSim {
    pub enabled: bool,
    pub active: bool,
    pub moving: bool,
    pub difficulty: f32,
    pub start_timer: f32,
    pub move_timer: f32,
    pub choices: [BreakerChoice; BREAKER_CHOICES],
}

/// Freeform actor with no positional state; only the uniform fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimpleSim {
    pub enabled: bool,
    pub difficulty: f32,
    pub start_timer: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_links_every_node_to_its_successor() {
        let graph = PositionGraph::chain(3);
        assert_eq!(graph.get(0).unwrap().next, Some(1));
        assert_eq!(graph.get(1).unwrap().next, Some(2));
        assert_eq!(graph.get(2).unwrap().next, None);
        assert_eq!(graph.last(), Some(2));
    }

    #[test]
    fn empty_graph_has_no_positions() {
        let graph = PositionGraph::empty();
        assert_eq!(graph.active_node(), None);
        assert_eq!(graph.node_at(0), None);
        assert_eq!(graph.last(), None);
    }

    #[test]
    fn at_most_one_node_is_active() {
        let mut graph = PositionGraph::chain(4);
        graph.activate(1);
        graph.activate(3);
        let active: Vec<usize> = (0..4).filter(|&n| graph.get(n).unwrap().active).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn index_of_matches_a_manual_scan() {
        let graph = PositionGraph::chain(5);
        for index in 0..5 {
            let node = graph.node_at(index).unwrap();
            assert_eq!(graph.index_of(node), Some(index));
        }
        assert_eq!(graph.node_at(5), None);
        assert_eq!(graph.index_of(17), None);
    }
}
