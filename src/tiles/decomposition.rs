use log::debug;

use crate::utils::NBodyError;

/// A contiguous slice of the point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Position of the tile in the decomposition, `0..subdivisions`.
    pub index: usize,
    /// First point index covered by the tile.
    pub start: usize,
    /// Number of points covered by the tile.
    pub len: usize,
}

impl Tile {
    /// The half-open range of point indices `[start, start + len)`.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// An unordered pair of tiles scheduled for the kernel, with
/// `a.index >= b.index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePair {
    pub a: Tile,
    pub b: Tile,
    /// True when both ranges are the same slice.
    pub diagonal: bool,
}

/// Splits `n` points into fixed-size tiles and enumerates every unordered
/// tile pair exactly once.
///
/// The pair domain is triangular. To split it into equal independent chunks,
/// the triangle is cut in half along one dimension and the smaller piece is
/// flipped in both directions and placed next to the bottom part, giving a
/// rectangle of `(subdivisions + 1) * subdivisions / 2` cells.
#[derive(Debug, Clone)]
pub struct TileDecomposition {
    tile: usize,
    subdivisions: usize,
    last_len: usize,
}

impl TileDecomposition {
    /// Splits `n` points into tiles of `tile` points each.
    ///
    /// The last tile absorbs any remainder, and when the split produces an
    /// odd tile count the final two tiles are merged so the count stays even.
    ///
    /// # Arguments
    /// * `n` - Number of points to cover.
    /// * `tile` - Tile side length.
    ///
    /// # Returns
    /// The decomposition, or an error when the inputs cannot produce at least
    /// two tiles.
    ///
    /// # Example
    /// ```
    /// use rs_nbody::tiles::TileDecomposition;
    ///
    /// let decomposition = TileDecomposition::new(10, 3).unwrap();
    /// assert_eq!(decomposition.subdivisions(), 4);
    /// ```
    pub fn new(n: usize, tile: usize) -> Result<Self, NBodyError> {
        if tile == 0 {
            return Err(NBodyError::InvalidArgument("tile must be greater than zero"));
        }
        if n == 0 {
            return Err(NBodyError::EmptyInput);
        }
        let mut subdivisions = n / tile + usize::from(n % tile != 0);
        let mut last_len = if n % tile != 0 { n % tile } else { tile };
        if subdivisions % 2 != 0 {
            subdivisions -= 1;
            last_len += tile;
        }
        if subdivisions == 0 {
            return Err(NBodyError::TileTooLarge);
        }
        debug!(
            "decomposed {} points into {} tiles of {} (last tile holds {})",
            n, subdivisions, tile, last_len
        );
        Ok(TileDecomposition { tile, subdivisions, last_len })
    }

    /// Number of tiles in the decomposition. Always even.
    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// The tile at position `index`.
    ///
    /// Every tile covers exactly `tile` points except the last, which carries
    /// the remainder and any merged partner.
    pub fn tile_at(&self, index: usize) -> Tile {
        let len = if index == self.subdivisions - 1 {
            self.last_len
        } else {
            self.tile
        };
        Tile { index, start: index * self.tile, len }
    }

    /// Every unordered tile pair `(a, b)` with `a.index >= b.index`, each
    /// exactly once.
    ///
    /// The enumeration walks the flattened rectangle, so each outer index
    /// contributes the same number of pairs and the schedule splits into
    /// balanced contiguous spans.
    pub fn pair_schedule(&self) -> Vec<TilePair> {
        let s = self.subdivisions;
        let mut pairs = Vec::with_capacity((s + 1) * (s / 2));
        for i in 0..=s {
            for j in 0..s / 2 {
                let mut x = i + j;
                let mut y = j;
                if x >= s {
                    y = s - 1 - j;
                    x = 2 * s - 1 - x;
                }
                pairs.push(TilePair {
                    a: self.tile_at(x),
                    b: self.tile_at(y),
                    diagonal: x == y,
                });
            }
        }
        pairs
    }
}
