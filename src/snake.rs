use crate::board::Board;
use crate::draw::Rgba;
use crate::pos::{Dir, Pos};

/// Where a freshly grown segment starts; never a cell of any board.
pub const SENTINEL: Pos = Pos::new(-10, -10);

#[derive(Clone, Debug)]
pub struct Snake {
    pieces: Vec<Pos>, // head is pieces[0]
    ready_to_grow: bool,
    pub color: Rgba,
}

impl Snake {
    pub fn new(head: Pos, color: Rgba) -> Self {
        Self::with_body(head, [], color)
    }

    pub fn with_body(head: Pos, body: impl IntoIterator<Item = Pos>, color: Rgba) -> Self {
        let mut pieces = vec![head];
        pieces.extend(body);
        Self { pieces, ready_to_grow: false, color }
    }

    pub fn head(&self) -> Pos {
        self.pieces[0]
    }

    pub fn pieces(&self) -> &[Pos] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_growing(&self) -> bool {
        self.ready_to_grow
    }

    /// Growth is realized on the next update, not now.
    pub fn grow(&mut self) {
        self.ready_to_grow = true;
    }

    /// Advances one tick: optional growth, body shift, head move, wrap.
    pub fn update(&mut self, heading: Option<Dir>, board: &Board) {
        if self.ready_to_grow {
            self.pieces.push(SENTINEL);
            self.ready_to_grow = false;
        }

        // high to low so every piece copies its predecessor's old position
        for i in (1..self.pieces.len()).rev() {
            self.pieces[i] = self.pieces[i - 1];
        }

        if let Some(dir) = heading {
            self.pieces[0] = board.wrap(self.pieces[0].step(dir));
        }
    }

    /// True when the head sits on any body segment.
    pub fn bit_itself(&self) -> bool {
        let head = self.head();
        self.pieces[1..].iter().any(|&p| p == head)
    }
}
