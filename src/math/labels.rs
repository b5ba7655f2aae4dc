//! Reductions over dense label vectors

use num_traits::Float;

/// Maximum that propagates NaN like a vectorized reduction would
///
/// `f64::max` silently drops NaN operands; message computation must not.
pub fn nan_propagating_max<F: Float>(values: impl IntoIterator<Item = F>) -> F {
    let mut best = F::neg_infinity();
    for value in values {
        if value.is_nan() {
            return value;
        }
        if value > best {
            best = value;
        }
    }
    best
}

/// Index of the largest entry
///
/// Ties resolve to the lowest index. NaN compares above every number, so the
/// first NaN entry wins outright; an empty vector yields index 0.
pub fn argmax<F: Float>(values: impl IntoIterator<Item = F>) -> usize {
    let mut best: Option<(usize, F)> = None;
    for (index, value) in values.into_iter().enumerate() {
        if value.is_nan() {
            return index;
        }
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((index, value)),
        }
    }
    best.map_or(0, |(index, _)| index)
}

/// Numerically stable `ln(sum(exp(values)))`
///
/// Returns negative infinity for an empty input or when every entry is
/// negative infinity.
pub fn log_sum_exp<F, I>(values: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F> + Clone,
{
    let peak = values
        .clone()
        .into_iter()
        .fold(F::neg_infinity(), |acc, value| acc.max(value));
    if !peak.is_finite() {
        return peak;
    }
    let total = values
        .into_iter()
        .fold(F::zero(), |acc, value| acc + (value - peak).exp());
    peak + total.ln()
}
