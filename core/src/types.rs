/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Relative displacement `(dx, dy)` from one cell to a neighbor.
pub type Offset = (i8, i8);

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
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Coordinates of the `index`-th cell in column-major order (`x` outer, `y` inner), the
/// memory order of a standard-layout grid indexed `[x, y]`.
pub(crate) const fn from_linear_index(index: CellCount, size: Coord2) -> Coord2 {
    let height = size.1 as CellCount;
    ((index / height) as Coord, (index % height) as Coord)
}
