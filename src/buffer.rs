use crate::Target;
use core::fmt;

/// A 2-dimensional buffer of cells.
///
/// Used as a plotting surface for rasterized lattice points: cell `[0, 0]` is the top-left
/// corner, x grows to the right and y grows downward.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Buffer2d<T> {
    size: [usize; 2],
    items: Vec<T>,
}

impl<T: Clone> Buffer2d<T> {
    /// Create a new buffer with the given size, filled with duplicates of the given element.
    pub fn fill([width, height]: [usize; 2], item: T) -> Self {
        Self {
            size: [width, height],
            items: vec![item; width * height],
        }
    }
}

impl<T> Buffer2d<T> {
    #[inline]
    fn linear_index(&self, [x, y]: [usize; 2]) -> Option<usize> {
        let [width, height] = self.size;
        if x < width && y < height {
            Some(y * width + x)
        } else {
            None
        }
    }

    /// View this buffer as a linear slice of elements, row by row.
    #[inline]
    pub fn raw(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the rows of this buffer, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `max(1)` keeps `chunks` happy on zero-width buffers, which hold no items anyway.
        self.items.chunks(self.size[0].max(1))
    }
}

impl<T: Clone> Target for Buffer2d<T> {
    type Item = T;

    #[inline]
    fn size(&self) -> [usize; 2] {
        self.size
    }

    #[inline]
    fn get(&self, pos: [usize; 2]) -> Option<&T> {
        self.linear_index(pos).map(|idx| &self.items[idx])
    }

    #[inline]
    fn set(&mut self, pos: [usize; 2], item: T) -> bool {
        match self.linear_index(pos) {
            Some(idx) => {
                self.items[idx] = item;
                true
            }
            None => false,
        }
    }

    fn clear(&mut self, fill: T) {
        self.items.iter_mut().for_each(|item| *item = fill.clone());
    }
}

impl<T> AsRef<[T]> for Buffer2d<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> fmt::Debug for Buffer2d<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Buffer2d(dimensions: {:?})", self.size)
    }
}
