//! A cheap upper bound on the number of letter arrangements a rack can produce.
use crate::pattern::BoardConstraint;
use crate::tiles::{Rack, LETTER_COUNT};

fn factorial(n: usize) -> u128 {
    (1..=n as u128).fold(1, |acc, k| acc.saturating_mul(k))
}

fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    // after step i the accumulator holds C(n, i + 1)
    (0..k).fold(1, |acc, i| acc.saturating_mul(n - i) / (i + 1))
}

/// Estimate the number of arrangements of `num_alpha` letters and `num_blanks` wildcards:
///
/// `Σ_{i=1}^{num_alpha} Σ_{j=0}^{num_blanks} 26^j · (i+j)! · C(num_alpha, i) · C(num_blanks, j)`
///
/// Duplicate letters and the shape of the board window are ignored, so this over-counts.
/// Saturates at `u128::MAX`.
/// ## Examples
/// ```
/// use rack_solver::search::estimate;
/// assert_eq!(estimate(1, 0), 1);
/// assert_eq!(estimate(3, 0), 15);
/// assert_eq!(estimate(1, 1), 53);
/// ```
pub fn estimate(num_alpha: usize, num_blanks: usize) -> u128 {
    let mut total: u128 = 0;
    for i in 1..=num_alpha {
        for j in 0..=num_blanks {
            let term = (LETTER_COUNT as u128)
                .saturating_pow(j as u32)
                .saturating_mul(factorial(i + j))
                .saturating_mul(binomial(num_alpha, i))
                .saturating_mul(binomial(num_blanks, j));
            total = total.saturating_add(term);
        }
    }
    total
}

/// Estimate the arrangements of a rack together with the letters on the board.
pub fn estimate_rack(rack: &Rack, constraint: &BoardConstraint) -> u128 {
    let num_alpha = rack.tiles().len() + constraint.board_tiles().len();
    estimate(num_alpha, rack.wildcards())
}
