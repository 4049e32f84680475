use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent.
/// `extent.i` is the row count, `extent.j` the column count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(height: i32, width: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { i: height, j: width },
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.extent.i && pos.j >= 0 && pos.j < self.extent.j
    }

    pub fn area(&self) -> i32 {
        self.extent.i * self.extent.j
    }

    pub fn height(&self) -> i32 {
        self.extent.i
    }

    pub fn width(&self) -> i32 {
        self.extent.j
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + use<> {
        let width = self.extent.j;
        (0..self.extent.i).flat_map(move |i| (0..width).map(move |j| Vec2 { i, j }))
    }
}
