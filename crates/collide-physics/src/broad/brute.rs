// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::PolygonPair;

/// Emits every `(i, j)` with `i < j < count`, in ascending order.
///
/// No bounds are consulted: the narrow phase sees every pair. Kept as the
/// correctness baseline for the tree strategy.
pub fn collect_all_pairs(count: usize, out: &mut Vec<PolygonPair>) {
    out.reserve(count.saturating_sub(1) * count / 2);
    for a in 0..count {
        for b in a + 1..count {
            out.push(PolygonPair { a, b });
        }
    }
}
