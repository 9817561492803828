/// One board axis: a row or column index, or a board dimension.
pub type Coord = u8;

/// Count type for mines, cells and the remaining safe-cell counter.
pub type CellCount = u16;

/// Board position `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

/// Chebyshev distance between two positions.
pub const fn chebyshev((ai, aj): Coord2, (bi, bj): Coord2) -> Coord {
    let di = ai.abs_diff(bi);
    let dj = aj.abs_diff(bj);
    if di > dj { di } else { dj }
}

pub const fn in_bounds((i, j): Coord2, (rows, columns): Coord2) -> bool {
    i < rows && j < columns
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ZONE_OFFSETS: [(i8, i8); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn offset((i, j): Coord2, (di, dj): (i8, i8), size: Coord2) -> Option<Coord2> {
    let next = (i.checked_add_signed(di)?, j.checked_add_signed(dj)?);
    in_bounds(next, size).then_some(next)
}

/// In-bounds positions around a center, following a fixed offset table.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    size: Coord2,
    offsets: &'static [(i8, i8)],
    index: usize,
}

impl Neighbors {
    /// The up-to-8 cells touching `center`.
    pub fn around(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            offsets: &NEIGHBOR_OFFSETS,
            index: 0,
        }
    }

    /// `center` itself plus its neighbors: every cell within Chebyshev distance 1.
    pub fn zone(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            offsets: &ZONE_OFFSETS,
            index: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = self.offsets.get(self.index) {
            self.index += 1;
            if let Some(pos) = offset(self.center, delta, self.size) {
                return Some(pos);
            }
        }
        None
    }
}
