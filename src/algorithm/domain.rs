//! Arithmetic used to combine and normalize messages

use crate::algorithm::messages::Message;
use crate::io::configuration::LABEL_COUNT;
use crate::math::labels::log_sum_exp;
use ndarray::Array1;

/// Numeric domain the belief engine computes in
///
/// `Mixed` is the reference behaviour: messages from observed neighbours are
/// log potentials, messages from unobserved neighbours start as linear-domain
/// ones, messages are combined by elementwise product, and an updated message
/// is `ln(M) / sum(M)` with the sum taken before the logarithm. Its output is
/// what the reference procedure produces and is the default.
///
/// `Log` is the consistent max-sum variant: neutral messages are zero,
/// combination is elementwise addition, and an updated message is `M`
/// shifted by its log-sum-exp. It yields different labels than `Mixed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageDomain {
    /// Reference mixed linear/log arithmetic
    #[default]
    Mixed,
    /// Consistent log-domain (max-sum) arithmetic
    Log,
}

impl MessageDomain {
    /// Neutral element of message combination
    pub const fn identity(self) -> f64 {
        match self {
            Self::Mixed => 1.0,
            Self::Log => 0.0,
        }
    }

    /// Message assumed from a neighbour that has not sent anything yet
    pub fn placeholder(self) -> Message {
        Array1::from_elem(LABEL_COUNT, self.identity())
    }

    /// Fold `message` into the running combination `acc`
    pub fn combine(self, acc: &mut Message, message: &Message) {
        match self {
            Self::Mixed => *acc *= message,
            Self::Log => *acc += message,
        }
    }

    /// Score of one label pair: pairwise potential joined with the sender's summary
    pub const fn join(self, potential: f64, summary: f64) -> f64 {
        match self {
            Self::Mixed => potential * summary,
            Self::Log => potential + summary,
        }
    }

    /// Turn the per-label maxima `raw` into the stored message
    pub fn normalize(self, raw: &Message) -> Message {
        match self {
            Self::Mixed => {
                let total = raw.sum();
                raw.mapv(|score| score.ln() / total)
            }
            Self::Log => {
                let shift = log_sum_exp(raw.iter().copied());
                raw.mapv(|score| score - shift)
            }
        }
    }
}
