use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

/// Row-major flat buffer over a fixed rectangle. Cloning copies the whole buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(height: i32, width: i32, default: T) -> Self
    where
        T: Clone,
    {
        let bounds = BoundsOriginRoot::new(height, width);
        BoundedGrid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area().max(0) as usize];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    /// Row-major iteration paired with each cell's position.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        self.bounds.positions().zip(self.cells.iter())
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl BoundedGrid<bool> {
    pub fn positions_set(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.iter().filter(|&(_, &flag)| flag).map(|(pos, _)| pos)
    }

    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&flag| flag).count()
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}
