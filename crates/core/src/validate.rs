//! Range and distribution checks shared by every operation.
//!
//! Each operation validates its operands once, at entry, before touching the
//! output buffer. Nothing here mutates.

use std::ops::Range;

use crate::error::{ExploreError, ExploreResult};
use crate::numeric::{total_mass, Probability};

/// Validate a `begin..end` span against a buffer of length `len`.
pub fn checked_span(len: usize, range: &Range<usize>) -> ExploreResult<()> {
    if range.end < range.start || range.end > len {
        return Err(ExploreError::BadRange {
            begin: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

pub fn checked_slice<'a, T>(buf: &'a [T], range: Range<usize>) -> ExploreResult<&'a [T]> {
    checked_span(buf.len(), &range)?;
    Ok(&buf[range])
}

pub fn checked_slice_mut<'a, T>(
    buf: &'a mut [T],
    range: Range<usize>,
) -> ExploreResult<&'a mut [T]> {
    checked_span(buf.len(), &range)?;
    Ok(&mut buf[range])
}

#[inline]
pub fn ensure_non_empty(len: usize) -> ExploreResult<()> {
    if len == 0 {
        return Err(ExploreError::EmptyDistribution);
    }
    Ok(())
}

/// True when every entry is non-negative and the entries sum to one within
/// `tolerance`.
pub fn is_normalized<T: Probability>(pdf: &[T], tolerance: f64) -> bool {
    if pdf.iter().any(|p| *p < T::zero()) {
        return false;
    }
    (total_mass(pdf) - 1.0).abs() <= tolerance
}
