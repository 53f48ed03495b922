use mazegrid_core::Coord;

/// Manhattan (L1) distance between two grid coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(0, 0)), 0);
        assert_eq!(manhattan(Coord::new(1, 2), Coord::new(4, 0)), 5);
        assert_eq!(manhattan(Coord::new(4, 0), Coord::new(1, 2)), 5);
    }
}
