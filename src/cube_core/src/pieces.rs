//! Edge and corner slots, described by the stickers that make them up.
//!
//! Slots are grouped by layer. Within a layer the index is a view: view 0 is
//! the front/right side and each following view is a quarter turn further
//! round, matching `Move::seen_from`.

use crate::state::{Color, CubeState, Face};

type Facelet = (Face, usize);

const EDGE_FACELETS: [[Facelet; 2]; 12] = {
    use Face::*;

    [
        [(D, 1), (F, 7)],
        [(D, 5), (R, 7)],
        [(D, 7), (B, 7)],
        [(D, 3), (L, 7)],
        [(F, 5), (R, 3)],
        [(R, 5), (B, 3)],
        [(B, 5), (L, 3)],
        [(L, 5), (F, 3)],
        [(U, 7), (F, 1)],
        [(U, 5), (R, 1)],
        [(U, 1), (B, 1)],
        [(U, 3), (L, 1)],
    ]
};

const CORNER_FACELETS: [[Facelet; 3]; 8] = {
    use Face::*;

    [
        [(D, 2), (F, 8), (R, 6)],
        [(D, 8), (R, 8), (B, 6)],
        [(D, 6), (B, 8), (L, 6)],
        [(D, 0), (L, 8), (F, 6)],
        [(U, 8), (F, 2), (R, 0)],
        [(U, 2), (R, 2), (B, 0)],
        [(U, 0), (B, 2), (L, 0)],
        [(U, 6), (L, 2), (F, 0)],
    ]
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Layer {
    Bottom,
    Middle,
    Top,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EdgeSlot(usize);

impl EdgeSlot {
    pub const ALL: [EdgeSlot; 12] = {
        let mut all = [EdgeSlot(0); 12];

        let mut i = 0;
        while i < all.len() {
            all[i] = EdgeSlot(i);
            i += 1;
        }

        all
    };

    pub fn new(layer: Layer, view: usize) -> EdgeSlot {
        let base = match layer {
            Layer::Bottom => 0,
            Layer::Middle => 4,
            Layer::Top => 8,
        };
        EdgeSlot(base + view % 4)
    }

    pub fn layer(self) -> Layer {
        match self.0 / 4 {
            0 => Layer::Bottom,
            1 => Layer::Middle,
            _ => Layer::Top,
        }
    }

    pub fn view(self) -> usize {
        self.0 % 4
    }

    fn colors(self, state: &CubeState) -> [Color; 2] {
        EDGE_FACELETS[self.0].map(|(face, i)| state[face][i])
    }

    fn home_colors(self, state: &CubeState) -> [Color; 2] {
        EDGE_FACELETS[self.0].map(|(face, _)| state.center(face))
    }

    /// The right piece sits here with the right orientation.
    pub fn is_solved(self, state: &CubeState) -> bool {
        self.colors(state) == self.home_colors(state)
    }

    /// Where the piece that belongs in this slot currently is.
    pub fn locate(self, state: &CubeState) -> EdgeSlot {
        let wanted = sorted(self.home_colors(state));

        EdgeSlot::ALL
            .into_iter()
            .find(|slot| sorted(slot.colors(state)) == wanted)
            .unwrap_or(self)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CornerSlot(usize);

impl CornerSlot {
    pub const ALL: [CornerSlot; 8] = {
        let mut all = [CornerSlot(0); 8];

        let mut i = 0;
        while i < all.len() {
            all[i] = CornerSlot(i);
            i += 1;
        }

        all
    };

    pub fn new(layer: Layer, view: usize) -> CornerSlot {
        let base = match layer {
            Layer::Bottom | Layer::Middle => 0,
            Layer::Top => 4,
        };
        CornerSlot(base + view % 4)
    }

    pub fn layer(self) -> Layer {
        if self.0 < 4 { Layer::Bottom } else { Layer::Top }
    }

    pub fn view(self) -> usize {
        self.0 % 4
    }

    fn colors(self, state: &CubeState) -> [Color; 3] {
        CORNER_FACELETS[self.0].map(|(face, i)| state[face][i])
    }

    fn home_colors(self, state: &CubeState) -> [Color; 3] {
        CORNER_FACELETS[self.0].map(|(face, _)| state.center(face))
    }

    pub fn is_solved(self, state: &CubeState) -> bool {
        self.colors(state) == self.home_colors(state)
    }

    /// The right piece is here, possibly twisted.
    pub fn is_permuted(self, state: &CubeState) -> bool {
        sorted(self.colors(state)) == sorted(self.home_colors(state))
    }

    pub fn locate(self, state: &CubeState) -> CornerSlot {
        let wanted = sorted(self.home_colors(state));

        CornerSlot::ALL
            .into_iter()
            .find(|slot| sorted(slot.colors(state)) == wanted)
            .unwrap_or(self)
    }
}

fn sorted<const N: usize>(mut colors: [Color; N]) -> [Color; N] {
    colors.sort_unstable();
    colors
}
