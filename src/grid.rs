use derive_more::{Deref, From};
use glam::UVec2;

pub trait Area {
    type Output;
    fn area(&self) -> Self::Output;
}

impl Area for Grid {
    type Output = u64;

    fn area(&self) -> Self::Output {
        return u64::from(self.x) * u64::from(self.y);
    }
}

/// The dimensions of the tile grid, measured in cells
#[derive(Deref, From, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grid(pub UVec2);

impl Grid {
    /// Cells that fit entirely inside the canvas.
    /// A remainder narrower than a tile gets no cell
    pub fn for_canvas(canvas_size: UVec2, tile_size: u32) -> Self {
        return Grid(canvas_size / tile_size);
    }

    pub fn iter_locs(&self) -> impl Iterator<Item = UVec2> {
        return UVec2Iter::new(self.0);
    }
}

/// Walks every location in `[0, end)` row by row
#[derive(Clone, Debug)]
pub struct UVec2Iter {
    pub cur: UVec2,
    pub end: UVec2,
}

impl UVec2Iter {
    pub fn new(end: UVec2) -> Self {
        return Self { cur: UVec2::ZERO, end };
    }
}

impl Iterator for UVec2Iter {
    type Item = UVec2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end.x == 0 || self.cur.y >= self.end.y {
            return None;
        }
        let ret = self.cur;
        self.cur.x += 1;
        if self.cur.x == self.end.x {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        return Some(ret);
    }
}

/// The pixel rectangle `[min, max)` covered by the cell at `loc`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub min: UVec2,
    pub max: UVec2,
}

impl CellRect {
    pub fn at(loc: UVec2, tile_size: u32) -> Self {
        let min = loc * tile_size;
        return CellRect {
            min,
            max: min + UVec2::splat(tile_size),
        };
    }

    pub fn clip(self, bounds: UVec2) -> Self {
        return CellRect {
            min: self.min.min(bounds),
            max: self.max.min(bounds),
        };
    }
}
