//! Every (operator, rank, arity) triple: supported ones produce the
//! documented layout, the rest fail with `UnsupportedShape`.

use nabla_core::{Operator, OutputLayout, StencilError, MAX_ARITY, MAX_RANK};
use nabla_stencil::{Curl, StencilEngine};
use nabla_test_utils::sample;

const EXTENTS: [usize; MAX_RANK] = [3, 4, 2, 3];

/// Run `op` on a rank-`rank` field of arity `A` and describe what came out.
fn evaluate<const A: usize>(op: Operator, rank: usize) -> Result<OutputLayout, StencilError> {
    let extents = &EXTENTS[..rank];
    let f = sample::<f64, A>(extents, |x| {
        std::array::from_fn(|k| x.iter().map(|v| v * (k + 1) as f64).sum())
    });
    let engine = StencilEngine::default();
    let layout = match op {
        Operator::Gradient => {
            let g = engine.gradient(&f)?;
            assert!(g.axes().iter().all(|a| a.extents() == extents));
            OutputLayout {
                fields: g.rank(),
                arity: A,
            }
        }
        Operator::Divergence => {
            let d = engine.divergence(&f)?;
            assert_eq!(d.extents(), extents);
            OutputLayout {
                fields: 1,
                arity: d.arity(),
            }
        }
        Operator::Curl => {
            let c = engine.curl(&f)?;
            assert_eq!(c.shape().extents(), extents);
            match c {
                Curl::Vanishing(z) => OutputLayout {
                    fields: 1,
                    arity: z.arity(),
                },
                Curl::Scalar(s) => OutputLayout {
                    fields: 1,
                    arity: s.arity(),
                },
                Curl::Vector(v) => OutputLayout {
                    fields: 1,
                    arity: v.arity(),
                },
                Curl::Bivector(b) => OutputLayout {
                    fields: b.len(),
                    arity: 1,
                },
            }
        }
    };
    Ok(layout)
}

fn evaluate_any(op: Operator, rank: usize, arity: usize) -> Result<OutputLayout, StencilError> {
    match arity {
        1 => evaluate::<1>(op, rank),
        2 => evaluate::<2>(op, rank),
        3 => evaluate::<3>(op, rank),
        4 => evaluate::<4>(op, rank),
        _ => unreachable!("arity {arity}"),
    }
}

#[test]
fn full_matrix() {
    for op in Operator::ALL {
        for rank in 1..=MAX_RANK {
            for arity in 1..=MAX_ARITY {
                let got = evaluate_any(op, rank, arity);
                match op.output_layout(rank, arity) {
                    Some(want) => assert_eq!(got, Ok(want), "{op} rank {rank} arity {arity}"),
                    None => assert_eq!(
                        got,
                        Err(StencilError::UnsupportedShape {
                            operator: op,
                            rank,
                            arity
                        }),
                        "{op} rank {rank} arity {arity}"
                    ),
                }
            }
        }
    }
}

#[test]
fn only_scalar_divergence_and_curl_are_rejected() {
    let rejected: Vec<_> = Operator::ALL
        .into_iter()
        .flat_map(|op| (1..=MAX_RANK).map(move |rank| (op, rank)))
        .flat_map(|(op, rank)| (1..=MAX_ARITY).map(move |arity| (op, rank, arity)))
        .filter(|&(op, rank, arity)| evaluate_any(op, rank, arity).is_err())
        .collect();
    assert_eq!(rejected.len(), 8);
    assert!(rejected
        .iter()
        .all(|&(op, _, arity)| op != Operator::Gradient && arity == 1));
}
