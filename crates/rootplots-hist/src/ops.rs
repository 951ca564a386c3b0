//! Cell-wise arithmetic between binned objects
//!
//! Both operands must share the same binning. Errors propagate as if the
//! cells were independent:
//!
//! | op | content | error² |
//! |----|---------|--------|
//! | add | `c1 + c2` | `e1² + e2²` |
//! | subtract | `c1 - c2` | `e1² + e2²` |
//! | multiply | `c1 * c2` | `(c2 e1)² + (c1 e2)²` |
//! | divide | `c1 / c2` | `(e1 / c2)² + (c1 e2 / c2²)²` |

use crate::types::HistND;
use rootplots_core::{ArithmeticConfig, BinnedContent, Error, Result, ZeroDivisorPolicy};
use std::fmt;
use tracing::{debug, instrument};

/// A cell-wise binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Operator symbol used in result titles
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        }
    }

    /// Combine one pair of cells, returning `(content, error²)`
    ///
    /// Division by a zero content yields `None`.
    pub fn apply(self, c1: f64, e1_2: f64, c2: f64, e2_2: f64) -> Option<(f64, f64)> {
        match self {
            BinaryOp::Add => Some((c1 + c2, e1_2 + e2_2)),
            BinaryOp::Subtract => Some((c1 - c2, e1_2 + e2_2)),
            BinaryOp::Multiply => Some((c1 * c2, c2 * c2 * e1_2 + c1 * c1 * e2_2)),
            BinaryOp::Divide => {
                if c2 == 0.0 {
                    return None;
                }
                let c2_2 = c2 * c2;
                Some((c1 / c2, e1_2 / c2_2 + c1 * c1 * e2_2 / (c2_2 * c2_2)))
            }
        }
    }

    /// Entries of the result: summed for add/subtract, the left operand's otherwise
    fn entries(self, lhs: u64, rhs: u64) -> u64 {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => lhs + rhs,
            BinaryOp::Multiply | BinaryOp::Divide => lhs,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Combine two binned objects cell by cell into a new histogram
///
/// Neither operand is modified. The result carries a fresh title
/// `"<lhs> <op> <rhs>"` and statistics rebuilt from its cells.
#[instrument(level = "debug", skip_all, fields(op = %op, cells = lhs.cells()))]
pub fn combine<A, B>(lhs: &A, rhs: &B, op: BinaryOp, config: &ArithmeticConfig) -> Result<HistND>
where
    A: BinnedContent + ?Sized,
    B: BinnedContent + ?Sized,
{
    lhs.binning().ensure_compatible(rhs.binning())?;

    let cells = lhs.cells();
    let mut contents = Vec::with_capacity(cells);
    let mut errors2 = Vec::with_capacity(cells);
    let mut zero_divisors = 0usize;

    for cell in 0..cells {
        let combined = op.apply(
            lhs.content_at(cell),
            lhs.error2_at(cell),
            rhs.content_at(cell),
            rhs.error2_at(cell),
        );
        let (content, error2) = match combined {
            Some(pair) => pair,
            None => match config.zero_divisor {
                ZeroDivisorPolicy::Error => return Err(Error::DivideByZero { cell }),
                ZeroDivisorPolicy::Zero => {
                    zero_divisors += 1;
                    (0.0, 0.0)
                }
            },
        };
        contents.push(content);
        errors2.push(error2);
    }

    if zero_divisors > 0 {
        debug!(zero_divisors, "zero divisor cells set to 0");
    }

    let entries = op.entries(lhs.entries(), rhs.entries());
    let title = format!("{} {} {}", lhs.title(), op, rhs.title());
    Ok(HistND::from_cells(lhs.binning().clone(), contents, errors2, entries)?.with_title(title))
}
