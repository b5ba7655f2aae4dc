//! Message initialization, max-product updates and belief readout
//!
//! Every operation reads and writes messages through the grid arena, so a
//! node's inbox is only ever mutated by updates run on behalf of that node.

use crate::algorithm::domain::MessageDomain;
use crate::algorithm::messages::Message;
use crate::math::labels::{argmax, nan_propagating_max};
use crate::math::potential::{PairwisePotential, labels};
use crate::spatial::{GridGraph, NodeId};
use ndarray::Array1;

/// Stateless rule set applied to nodes of a `GridGraph`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BeliefEngine {
    potential: PairwisePotential,
    domain: MessageDomain,
}

impl BeliefEngine {
    /// Create an engine for the given potential and arithmetic domain
    pub const fn new(potential: PairwisePotential, domain: MessageDomain) -> Self {
        Self { potential, domain }
    }

    /// Seed the inbox of an unobserved node
    ///
    /// An observed neighbour contributes the raw potential against its fixed
    /// value; an unobserved neighbour contributes the domain placeholder.
    /// Observed nodes carry no inbox and are skipped.
    pub fn init(&self, graph: &mut GridGraph, node: NodeId) {
        if graph.is_observed(node) {
            return;
        }

        let seeded: Vec<(NodeId, Message)> = graph
            .neighbors(node)
            .iter()
            .map(|&neighbor| {
                let message = if graph.is_observed(neighbor) {
                    graph.value(neighbor).map_or_else(
                        || self.domain.placeholder(),
                        |value| self.potential.message_from_observed(value),
                    )
                } else {
                    self.domain.placeholder()
                };
                (neighbor, message)
            })
            .collect();

        if let Some(inbox) = graph.inbox_mut(node) {
            for (neighbor, message) in seeded {
                inbox.insert(neighbor, message);
            }
        }
    }

    /// Combination of everything `node` has heard except from `toward`
    ///
    /// This is what `node` propagates to `toward`; leaving out the message
    /// `toward` itself sent prevents immediate echo.
    pub fn outgoing_summary(&self, graph: &GridGraph, node: NodeId, toward: NodeId) -> Message {
        let mut summary = self.domain.placeholder();
        if let Some(inbox) = graph.inbox(node) {
            for (sender, message) in inbox.iter() {
                if sender != toward {
                    self.domain.combine(&mut summary, message);
                }
            }
        }
        summary
    }

    /// Max-product message for every receiving label given a sender summary
    ///
    /// Entry `l` is the maximum over sender labels `x` of the potential
    /// `phi(l, x)` joined with `summary[x]`, normalized per the domain.
    pub fn compute_message(&self, summary: &Message) -> Message {
        let raw = Array1::from_iter(labels().map(|label| {
            nan_propagating_max(labels().zip(summary.iter()).map(|(other, &score)| {
                self.domain
                    .join(self.potential.log_compatibility(label, other), score)
            }))
        }));
        self.domain.normalize(&raw)
    }

    /// Refresh the messages `node` holds from each unobserved neighbour
    ///
    /// Messages are replaced in place, so later updates in the same sweep
    /// see them immediately.
    pub fn update(&self, graph: &mut GridGraph, node: NodeId) {
        if graph.is_observed(node) {
            return;
        }

        let senders: Vec<NodeId> = graph
            .neighbors(node)
            .iter()
            .copied()
            .filter(|&neighbor| !graph.is_observed(neighbor))
            .collect();

        for sender in senders {
            let summary = self.outgoing_summary(graph, sender, node);
            let message = self.compute_message(&summary);
            if let Some(inbox) = graph.inbox_mut(node) {
                inbox.insert(sender, message);
            }
        }
    }

    /// Combination of all messages a node has received
    pub fn belief(&self, graph: &GridGraph, node: NodeId) -> Message {
        let mut belief = self.domain.placeholder();
        if let Some(inbox) = graph.inbox(node) {
            for (_, message) in inbox.iter() {
                self.domain.combine(&mut belief, message);
            }
        }
        belief
    }

    /// Label maximizing the node's belief; lowest label wins ties
    pub fn decode(&self, graph: &GridGraph, node: NodeId) -> u8 {
        argmax(self.belief(graph, node).iter().copied()) as u8
    }
}
