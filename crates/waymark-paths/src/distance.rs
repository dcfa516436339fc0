use waymark_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u64 {
    ((a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Pos::new(0, 0);
        let b = Pos::new(-3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }
}
