use pt_core::Direction;

use crate::cell::CornerMask;

/// Marching-squares lookup: (corner mask, incoming direction) to outgoing
/// direction.
///
/// Every entry is registered together with its reciprocal (if entering
/// with `from` exits `to`, entering with `reverse(to)` exits
/// `reverse(from)`), so the table is symmetric under path reversal by
/// construction. The all-clear and all-set masks have no entries; cells
/// with those masks are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    entries: [[Option<Direction>; 4]; 16],
}

impl TransitionTable {
    pub fn new() -> Self {
        let mut table = Self {
            entries: [[None; 4]; 16],
        };

        // Single corner: a diagonal stub redirecting a perpendicular pair.
        table.set(CornerMask::TOP_LEFT, Direction::Down, Direction::Left);
        table.set(CornerMask::TOP_RIGHT, Direction::Down, Direction::Right);
        table.set(CornerMask::BOTTOM_LEFT, Direction::Up, Direction::Left);
        table.set(CornerMask::BOTTOM_RIGHT, Direction::Up, Direction::Right);

        // Two corners on the same side: straight pass-through.
        table.set(
            CornerMask::TOP_LEFT | CornerMask::TOP_RIGHT,
            Direction::Left,
            Direction::Left,
        );
        table.set(
            CornerMask::BOTTOM_LEFT | CornerMask::BOTTOM_RIGHT,
            Direction::Left,
            Direction::Left,
        );
        table.set(
            CornerMask::TOP_LEFT | CornerMask::BOTTOM_LEFT,
            Direction::Up,
            Direction::Up,
        );
        table.set(
            CornerMask::TOP_RIGHT | CornerMask::BOTTOM_RIGHT,
            Direction::Up,
            Direction::Up,
        );

        // Saddles: the ambiguous diagonal case, resolved so the boundary
        // keeps the two filled corners apart. Each saddle gets two
        // independent direction pairs, one per disjoint path.
        table.set(
            CornerMask::TOP_LEFT | CornerMask::BOTTOM_RIGHT,
            Direction::Right,
            Direction::Up,
        );
        table.set(
            CornerMask::TOP_LEFT | CornerMask::BOTTOM_RIGHT,
            Direction::Left,
            Direction::Down,
        );
        table.set(
            CornerMask::TOP_RIGHT | CornerMask::BOTTOM_LEFT,
            Direction::Left,
            Direction::Up,
        );
        table.set(
            CornerMask::TOP_RIGHT | CornerMask::BOTTOM_LEFT,
            Direction::Right,
            Direction::Down,
        );

        // Three corners: redirect around the single empty corner.
        table.set(
            CornerMask::TOP_LEFT | CornerMask::TOP_RIGHT | CornerMask::BOTTOM_LEFT,
            Direction::Up,
            Direction::Right,
        );
        table.set(
            CornerMask::TOP_LEFT | CornerMask::TOP_RIGHT | CornerMask::BOTTOM_RIGHT,
            Direction::Up,
            Direction::Left,
        );
        table.set(
            CornerMask::TOP_LEFT | CornerMask::BOTTOM_LEFT | CornerMask::BOTTOM_RIGHT,
            Direction::Left,
            Direction::Up,
        );
        table.set(
            CornerMask::TOP_RIGHT | CornerMask::BOTTOM_LEFT | CornerMask::BOTTOM_RIGHT,
            Direction::Right,
            Direction::Up,
        );

        table
    }

    /// Outgoing direction for a path entering a cell with `corners` while
    /// travelling `from`; `None` when the mask has no path for that entry.
    pub fn get(&self, corners: CornerMask, from: Direction) -> Option<Direction> {
        self.entries[corners.index()][from.index()]
    }

    fn set(&mut self, corners: CornerMask, from: Direction, to: Direction) {
        self.entries[corners.index()][from.index()] = Some(to);
        self.entries[corners.index()][to.reverse().index()] = Some(from.reverse());
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pt_core::Direction;

    use super::TransitionTable;
    use crate::cell::CornerMask;

    fn masks() -> impl Iterator<Item = CornerMask> {
        (0..16).map(|bits| {
            let mut mask = CornerMask::NONE;
            if bits & 1 != 0 {
                mask |= CornerMask::TOP_LEFT;
            }
            if bits & 2 != 0 {
                mask |= CornerMask::TOP_RIGHT;
            }
            if bits & 4 != 0 {
                mask |= CornerMask::BOTTOM_LEFT;
            }
            if bits & 8 != 0 {
                mask |= CornerMask::BOTTOM_RIGHT;
            }
            mask
        })
    }

    #[test]
    fn reciprocal_under_reversal() {
        let table = TransitionTable::new();

        for mask in masks() {
            for from in Direction::ALL {
                if let Some(to) = table.get(mask, from) {
                    assert_eq!(
                        table.get(mask, to.reverse()),
                        Some(from.reverse()),
                        "mask {mask}, {from} -> {to}"
                    );
                }
            }
        }
    }

    #[test]
    fn boundary_free_masks_have_no_entries() {
        let table = TransitionTable::new();

        for from in Direction::ALL {
            assert_eq!(table.get(CornerMask::NONE, from), None);
            assert_eq!(table.get(CornerMask::ALL, from), None);
        }
    }

    #[test]
    fn entry_counts_by_popcount() {
        let table = TransitionTable::new();

        for mask in masks() {
            let entries = Direction::ALL
                .into_iter()
                .filter(|&from| table.get(mask, from).is_some())
                .count();

            let expected = if mask.is_none() || mask.is_all() {
                0
            } else if mask.is_saddle() {
                4
            } else {
                2
            };
            assert_eq!(entries, expected, "mask {mask}");
        }
    }

    #[test]
    fn stub_redirects_perpendicular_pair() {
        let table = TransitionTable::new();

        assert_eq!(
            table.get(CornerMask::TOP_LEFT, Direction::Down),
            Some(Direction::Left)
        );
        assert_eq!(
            table.get(CornerMask::TOP_LEFT, Direction::Right),
            Some(Direction::Up)
        );
        assert_eq!(table.get(CornerMask::TOP_LEFT, Direction::Up), None);
        assert_eq!(table.get(CornerMask::TOP_LEFT, Direction::Left), None);
    }

    #[test]
    fn same_side_pairs_pass_straight_through() {
        let table = TransitionTable::new();
        let tops = CornerMask::TOP_LEFT | CornerMask::TOP_RIGHT;
        let lefts = CornerMask::TOP_LEFT | CornerMask::BOTTOM_LEFT;

        assert_eq!(table.get(tops, Direction::Left), Some(Direction::Left));
        assert_eq!(table.get(tops, Direction::Right), Some(Direction::Right));
        assert_eq!(table.get(lefts, Direction::Up), Some(Direction::Up));
        assert_eq!(table.get(lefts, Direction::Down), Some(Direction::Down));
    }

    #[test]
    fn saddles_hold_two_disjoint_paths() {
        let table = TransitionTable::new();

        // Top-left + bottom-right: one path hugs the top-left corner, the
        // other the bottom-right; neither pair feeds into the other.
        let tl_br = CornerMask::TOP_LEFT | CornerMask::BOTTOM_RIGHT;
        assert_eq!(table.get(tl_br, Direction::Right), Some(Direction::Up));
        assert_eq!(table.get(tl_br, Direction::Down), Some(Direction::Left));
        assert_eq!(table.get(tl_br, Direction::Left), Some(Direction::Down));
        assert_eq!(table.get(tl_br, Direction::Up), Some(Direction::Right));

        let tr_bl = CornerMask::TOP_RIGHT | CornerMask::BOTTOM_LEFT;
        assert_eq!(table.get(tr_bl, Direction::Left), Some(Direction::Up));
        assert_eq!(table.get(tr_bl, Direction::Down), Some(Direction::Right));
        assert_eq!(table.get(tr_bl, Direction::Right), Some(Direction::Down));
        assert_eq!(table.get(tr_bl, Direction::Up), Some(Direction::Left));
    }
}
