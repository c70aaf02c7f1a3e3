use ndarray::Array2;

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Conversion of board coordinates into an `ndarray` index.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        let (row, col) = self;
        [usize::from(row), usize::from(col)]
    }
}

/// Cell count of a `height` x `width` board; `255 * 255` still fits a `CellCount`.
pub const fn mult(height: Coord, width: Coord) -> CellCount {
    height as CellCount * width as CellCount
}

/// Whether `coords` lies inside a board of `size`.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Chebyshev (king-move) distance between two cells.
pub fn chebyshev_distance(a: Coord2, b: Coord2) -> Coord {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

/// Shape of an `Array2` as board coordinates, saturating on oversized arrays.
pub fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (
        Coord::try_from(rows).unwrap_or(Coord::MAX),
        Coord::try_from(cols).unwrap_or(Coord::MAX),
    )
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter {
        NeighborIter::new(center, grid_size(self))
    }
}

/// `[center - 1, center + 1]` clipped to `[0, len)`, or `None` when nothing is left.
fn clipped_span(center: Coord, len: Coord) -> Option<(Coord, Coord)> {
    let first = center.saturating_sub(1);
    let last = center.saturating_add(1).min(len.checked_sub(1)?);
    (first <= last).then_some((first, last))
}

/// In-bounds 8-neighbourhood of a cell, row-major.
///
/// Walks the 3x3 window around `center` clipped to the board, skipping the
/// center itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    cursor: Option<Coord2>,
    first_col: Coord,
    last: Coord2,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let window = clipped_span(center.0, bounds.0).zip(clipped_span(center.1, bounds.1));
        match window {
            Some(((top, bottom), (left, right))) => Self {
                center,
                cursor: Some((top, left)),
                first_col: left,
                last: (bottom, right),
            },
            None => Self {
                center,
                cursor: None,
                first_col: 0,
                last: (0, 0),
            },
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current @ (row, col) = self.cursor?;
            self.cursor = if col < self.last.1 {
                Some((row, col + 1))
            } else if row < self.last.0 {
                Some((row + 1, self.first_col))
            } else {
                None
            };

            if current != self.center {
                return Some(current);
            }
        }
    }
}
