//! TileGrid: the static gold/grass map with cell lookups.

use rand::Rng;
use serde::{Deserialize, Serialize};

use goldfield_core::enums::TileKind;
use goldfield_core::state::GridView;
use goldfield_core::types::GridPos;

/// One grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
}

/// Rectangular tile map. Dimensions and tile kinds are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: u32,
    height: u32,
    /// Row-major (`tiles[y * width + x]`).
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Generate a grid where each tile is independently gold with
    /// probability `gold_probability`, grass otherwise.
    pub fn generate<R: Rng>(
        width: u32,
        height: u32,
        gold_probability: f64,
        rng: &mut R,
    ) -> Self {
        Self::from_fn(width, height, |_| {
            if rng.gen::<f64>() < gold_probability {
                TileKind::Gold
            } else {
                TileKind::Grass
            }
        })
    }

    /// Build a grid from a closure, visiting cells row by row.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(GridPos) -> TileKind) -> Self {
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                tiles.push(Tile {
                    kind: f(GridPos::new(x, y)),
                });
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// A grid with every tile of one kind.
    pub fn filled(width: u32, height: u32, kind: TileKind) -> Self {
        Self::from_fn(width, height, |_| kind)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Tile kind at a cell, or `None` outside the grid.
    pub fn tile(&self, pos: GridPos) -> Option<TileKind> {
        if !self.contains(pos) {
            return None;
        }
        let index = pos.y as usize * self.width as usize + pos.x as usize;
        Some(self.tiles[index].kind)
    }

    pub fn is_gold(&self, pos: GridPos) -> bool {
        self.tile(pos) == Some(TileKind::Gold)
    }

    /// Iterate all cells with their tile kind, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, TileKind)> + '_ {
        let width = self.width as usize;
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let pos = GridPos::new((i % width) as i32, (i / width) as i32);
            (pos, tile.kind)
        })
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }

    /// Uniformly random cell inside the grid.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> GridPos {
        GridPos::new(
            rng.gen_range(0..self.width) as i32,
            rng.gen_range(0..self.height) as i32,
        )
    }

    /// Cell under a pixel offset on a canvas with `tile_size` pixel tiles.
    /// Returns None outside the grid.
    pub fn cell_at_pixel(&self, px: f64, py: f64, tile_size: u32) -> Option<GridPos> {
        if tile_size == 0 || px < 0.0 || py < 0.0 {
            return None;
        }
        let pos = GridPos::new(
            (px / tile_size as f64).floor() as i32,
            (py / tile_size as f64).floor() as i32,
        );
        self.contains(pos).then_some(pos)
    }

    /// Read-only view for snapshots.
    pub fn view(&self) -> GridView {
        GridView {
            width: self.width,
            height: self.height,
            tiles: self.tiles.iter().map(|t| t.kind).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_probability_is_all_grass() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let grid = TileGrid::generate(20, 15, 0.0, &mut rng);
        assert_eq!(grid.count(TileKind::Grass), 300);
        assert_eq!(grid.count(TileKind::Gold), 0);
    }

    #[test]
    fn unit_probability_is_all_gold() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let grid = TileGrid::generate(20, 15, 1.0, &mut rng);
        assert_eq!(grid.count(TileKind::Gold), 300);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = TileGrid::generate(20, 15, 0.1, &mut ChaCha8Rng::seed_from_u64(7));
        let b = TileGrid::generate(20, 15, 0.1, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn gold_density_tracks_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let grid = TileGrid::generate(100, 100, 0.1, &mut rng);
        let gold = grid.count(TileKind::Gold);
        // 10_000 draws at p = 0.1: mean 1000, sd 30.
        assert!((850..1150).contains(&gold), "gold tiles: {gold}");
    }

    #[test]
    fn lookups_respect_bounds() {
        let grid = TileGrid::from_fn(4, 3, |pos| {
            if pos == GridPos::new(3, 2) {
                TileKind::Gold
            } else {
                TileKind::Grass
            }
        });
        assert_eq!(grid.tile(GridPos::new(3, 2)), Some(TileKind::Gold));
        assert_eq!(grid.tile(GridPos::new(0, 0)), Some(TileKind::Grass));
        assert_eq!(grid.tile(GridPos::new(4, 0)), None);
        assert_eq!(grid.tile(GridPos::new(0, -1)), None);
        assert!(grid.is_gold(GridPos::new(3, 2)));
        assert_eq!(grid.cells().count(), 12);
    }

    #[test]
    fn pixel_to_cell() {
        let grid = TileGrid::filled(20, 15, TileKind::Grass);
        assert_eq!(grid.cell_at_pixel(0.0, 0.0, 40), Some(GridPos::new(0, 0)));
        assert_eq!(grid.cell_at_pixel(79.9, 40.0, 40), Some(GridPos::new(1, 1)));
        assert_eq!(grid.cell_at_pixel(799.0, 599.0, 40), Some(GridPos::new(19, 14)));
        assert_eq!(grid.cell_at_pixel(800.0, 10.0, 40), None);
        assert_eq!(grid.cell_at_pixel(-1.0, 10.0, 40), None);
    }

    #[test]
    fn random_cells_stay_in_bounds() {
        let grid = TileGrid::filled(5, 3, TileKind::Grass);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }

    #[test]
    fn view_is_row_major() {
        let grid = TileGrid::from_fn(3, 2, |pos| {
            if pos.x == 2 && pos.y == 1 {
                TileKind::Gold
            } else {
                TileKind::Grass
            }
        });
        let view = grid.view();
        assert_eq!(view.tiles.len(), 6);
        assert_eq!(view.tiles[5], TileKind::Gold);
    }
}
