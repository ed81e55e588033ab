use crate::board::Board;
use crate::draw::Rgba;
use crate::pos::Pos;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fruit {
    pub pos: Pos,
    pub color: Rgba,
}

impl Fruit {
    pub fn new(pos: Pos, color: Rgba) -> Self {
        Self { pos, color }
    }

    /// Any cell of the board, snake cells included. A fruit landing under the
    /// body is a known cosmetic quirk and stays that way.
    pub fn spawn<R: Rng>(board: &Board, color: Rgba, rng: &mut R) -> Self {
        let pos = board.random_pos(rng);
        debug_assert!(board.contains(pos));
        Self::new(pos, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn spawn_is_on_board_and_keeps_color() {
        let b = Board::new(12, 9, 16);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let f = Fruit::spawn(&b, Rgba::RED, &mut rng);
            assert!(b.contains(f.pos));
            assert_eq!(f.color, Rgba::RED);
        }
    }

    #[test]
    fn spawn_covers_whole_board() {
        let b = Board::new(2, 2, 16);
        let mut rng = SmallRng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Fruit::spawn(&b, Rgba::RED, &mut rng).pos);
        }
        assert_eq!(seen.len(), 4);
    }
}
