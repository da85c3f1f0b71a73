//! Differential operators and the closed set of shapes they accept.

use crate::shape::MAX_RANK;
use std::fmt;

/// Highest sample arity the engine supports.
pub const MAX_ARITY: usize = 4;

/// A discrete differential operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Per-axis first derivative of every component.
    Gradient,
    /// Sum of axis-aligned partials of a vector field.
    Divergence,
    /// Antisymmetric combination of cross-axis partials.
    Curl,
}

/// How many fields an operator returns and the arity of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    /// Number of output fields.
    pub fields: usize,
    /// Components per sample in each output field.
    pub arity: usize,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 3] = [Operator::Gradient, Operator::Divergence, Operator::Curl];

    /// Lower-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Divergence => "divergence",
            Self::Curl => "curl",
        }
    }

    /// Whether the operator is defined for a field of this rank and arity.
    ///
    /// Gradient accepts every rank and arity in range. Divergence and curl
    /// need a vector field (arity >= 2); on a scalar field they are
    /// rejected rather than silently returning zero.
    pub fn supports(self, rank: usize, arity: usize) -> bool {
        if !(1..=MAX_RANK).contains(&rank) || !(1..=MAX_ARITY).contains(&arity) {
            return false;
        }
        match self {
            Self::Gradient => true,
            Self::Divergence | Self::Curl => arity >= 2,
        }
    }

    /// Output layout for a supported input, `None` otherwise.
    ///
    /// Output extents always equal input extents; only the field count and
    /// arity vary:
    ///
    /// | Operator | Rank | Fields | Arity |
    /// |----------|------|--------|-------|
    /// | Gradient | r | r | a |
    /// | Divergence | r | 1 | 1 |
    /// | Curl | 1 | 1 | a (all zero) |
    /// | Curl | n = 2 | 1 | 1 |
    /// | Curl | n = 3 | 1 | 3 |
    /// | Curl | n = 4 | 6 | 1 |
    ///
    /// For curl, `n` is [`curl_embedding_rank`]: a field with more
    /// components than grid axes is curled in the larger space.
    pub fn output_layout(self, rank: usize, arity: usize) -> Option<OutputLayout> {
        if !self.supports(rank, arity) {
            return None;
        }
        let (fields, arity) = match (self, curl_embedding_rank(rank, arity)) {
            (Self::Gradient, _) => (rank, arity),
            (Self::Divergence, _) => (1, 1),
            (Self::Curl, 1) => (1, arity),
            (Self::Curl, 2) => (1, 1),
            (Self::Curl, 3) => (1, 3),
            (Self::Curl, n) => (n * (n - 1) / 2, 1),
        };
        Some(OutputLayout { fields, arity })
    }

    /// Every supported `(operator, rank, arity)` triple.
    pub fn supported_combinations() -> impl Iterator<Item = (Operator, usize, usize)> {
        Self::ALL.into_iter().flat_map(|op| {
            (1..=MAX_RANK).flat_map(move |rank| {
                (1..=MAX_ARITY)
                    .filter(move |&arity| op.supports(rank, arity))
                    .map(move |arity| (op, rank, arity))
            })
        })
    }
}

/// Dimension of the space a curl is taken in.
///
/// A rank-1 grid has no plane to rotate in, so it stays 1 whatever the
/// arity. Otherwise it is `max(rank, arity)`: components beyond the grid
/// rank are kept, and the axes they point along have zero derivative.
///
/// ```
/// use nabla_core::curl_embedding_rank;
///
/// assert_eq!(curl_embedding_rank(1, 3), 1);
/// assert_eq!(curl_embedding_rank(2, 3), 3);
/// assert_eq!(curl_embedding_rank(3, 2), 3);
/// assert_eq!(curl_embedding_rank(3, 4), 4);
/// ```
pub fn curl_embedding_rank(rank: usize, arity: usize) -> usize {
    if rank <= 1 {
        rank
    } else {
        rank.max(arity)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
