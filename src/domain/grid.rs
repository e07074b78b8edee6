use log::info;
use rand::Rng;
use rand::distr::{Bernoulli, Distribution};
use rayon::prelude::*;

use super::{Cell, Neighborhood, Rule, Tessellation};
use crate::error::{ConfigError, GridError};

/// Grid owns every cell of the automaton and their neighbor topology.
///
/// Topology is resolved once in [`Grid::new`] and never changes afterwards;
/// a different shape needs a new grid.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A 0x0 grid. Stepping and toggling on it do nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a grid with every cell dead and all neighbor lists resolved.
    ///
    /// With `wrap` the grid is a torus; without it, offsets that leave the grid
    /// are dropped, so edge cells simply have fewer neighbors.
    pub fn new(
        tessellation: Tessellation,
        neighborhood: Neighborhood,
        wrap: bool,
        width: usize,
        height: usize,
    ) -> Self {
        let mut cells = vec![Cell::new(false); width * height];

        for y in 0..height {
            for x in 0..width {
                let reflected = tessellation.is_reflected_at(x, y);
                cells[y * width + x].neighbors = neighborhood
                    .displacements()
                    .iter()
                    .filter_map(|&(dx, dy)| {
                        let dx = if reflected { -dx } else { dx };
                        Self::resolve(x, y, dx, dy, width, height, wrap)
                    })
                    .map(|(nx, ny)| ny * width + nx)
                    .collect();
            }
        }

        info!(
            "Init {} grid {} by {}: {} cells, {} neighborhood, wrap {}",
            tessellation.name(),
            width,
            height,
            width * height,
            neighborhood.name(),
            wrap
        );

        Self { width, height, cells }
    }

    /// Target of offset `(dx, dy)` from `(x, y)`, or `None` when it falls off a
    /// non-wrapping edge.
    fn resolve(
        x: usize,
        y: usize,
        dx: i32,
        dy: i32,
        width: usize,
        height: usize,
        wrap: bool,
    ) -> Option<(usize, usize)> {
        let (w, h) = (width as i64, height as i64);
        let ux = x as i64 + dx as i64;
        let uy = y as i64 + dy as i64;

        if wrap {
            Some((ux.rem_euclid(w) as usize, uy.rem_euclid(h) as usize))
        } else {
            ((0..w).contains(&ux) && (0..h).contains(&uy)).then(|| (ux as usize, uy as usize))
        }
    }

    /// Replace every cell state with an independent draw that is alive with
    /// probability `density`.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        let alive = Bernoulli::new(density).map_err(|_| ConfigError::InvalidDensity(density))?;
        self.cells
            .iter_mut()
            .for_each(|cell| cell.alive = alive.sample(rng));
        Ok(())
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 2D coordinates to 1D index
    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Coordinates of the cell stored at `index`
    const fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Whether the cell at `(x, y)` is alive
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.index(x, y).map(|i| self.cells[i].alive)
    }

    /// Set cell state directly
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i].alive = alive;
        Ok(())
    }

    /// Flip a cell without consulting the rule.
    ///
    /// On an empty grid this is a no-op; otherwise coordinates must be in range.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        if self.is_empty() {
            return Ok(());
        }
        let i = self.index(x, y)?;
        self.cells[i].toggle();
        Ok(())
    }

    /// Resolved neighbor coordinates of `(x, y)`, in resolution order
    pub fn neighbors_of(&self, x: usize, y: usize) -> Result<Vec<(usize, usize)>, GridError> {
        let i = self.index(x, y)?;
        Ok(self.cells[i].neighbors().iter().map(|&n| self.coords(n)).collect())
    }

    /// Live neighbor count recorded by the latest step
    pub fn live_neighbors(&self, x: usize, y: usize) -> Result<u8, GridError> {
        self.index(x, y).map(|i| self.cells[i].live_neighbors)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Live neighbors of the cell at `index`, read from the current states
    fn count_live_neighbors(&self, index: usize) -> u8 {
        self.cells[index]
            .neighbors()
            .iter()
            .filter(|&&n| self.cells[n].alive)
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// Counting finishes for the whole grid before any state changes, so the
    /// result does not depend on the order cells are visited in.
    pub fn step(&mut self, rule: &Rule) {
        for i in 0..self.cells.len() {
            let count = self.count_live_neighbors(i);
            self.cells[i].live_neighbors = count;
        }

        self.cells.iter_mut().for_each(|cell| cell.evolve(rule));
    }

    /// Same two passes as [`Grid::step`], each split across rayon workers.
    pub fn step_parallel(&mut self, rule: &Rule) {
        let counts: Vec<u8> = (0..self.cells.len())
            .into_par_iter()
            .map(|i| self.count_live_neighbors(i))
            .collect();

        self.cells
            .par_iter_mut()
            .zip(counts)
            .for_each(|(cell, count)| {
                cell.live_neighbors = count;
                cell.evolve(rule);
            });
    }

    /// Release every cell, clearing neighbor lists first. Leaves a 0x0 grid.
    pub fn teardown(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.neighbors.clear());
        self.cells.clear();
        self.width = 0;
        self.height = 0;
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let (x, y) = self.coords(i);
            (x, y, cell.alive)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Build a grid from rows of `#` (alive) and `.` (dead)
    fn parse(tessellation: Tessellation, neighborhood: Neighborhood, wrap: bool, rows: &[&str]) -> Grid {
        let height = rows.len();
        let width = rows[0].len();
        let mut grid = Grid::new(tessellation, neighborhood, wrap, width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                grid.set(x, y, c == '#').unwrap();
            }
        }
        grid
    }

    fn render(grid: &Grid) -> Vec<String> {
        let (w, h) = grid.dimensions();
        (0..h)
            .map(|y| {
                (0..w)
                    .map(|x| if grid.is_alive(x, y).unwrap() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_wrapped_topology_is_total() {
        for tessellation in Tessellation::all() {
            for neighborhood in Neighborhood::all() {
                let grid = Grid::new(tessellation, neighborhood, true, 6, 5);
                for (x, y, _) in grid.iter_cells() {
                    assert_eq!(grid.neighbors_of(x, y).unwrap().len(), neighborhood.len());
                }
            }
        }
    }

    #[test]
    fn test_truncated_edges_drop_out_of_range_offsets() {
        let (w, h) = (5usize, 4usize);
        for tessellation in Tessellation::all() {
            for neighborhood in Neighborhood::all() {
                let grid = Grid::new(tessellation, neighborhood, false, w, h);
                for (x, y, _) in grid.iter_cells() {
                    let sign = if tessellation.is_reflected_at(x, y) { -1 } else { 1 };
                    let expected: Vec<(usize, usize)> = neighborhood
                        .displacements()
                        .iter()
                        .map(|&(dx, dy)| (x as i64 + (sign * dx) as i64, y as i64 + dy as i64))
                        .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && nx < w as i64 && ny < h as i64)
                        .map(|(nx, ny)| (nx as usize, ny as usize))
                        .collect();
                    assert_eq!(grid.neighbors_of(x, y).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn test_truncated_corner_counts() {
        let grid = Grid::new(Tessellation::Rectangular, Neighborhood::RectMoore, false, 4, 4);
        assert_eq!(grid.neighbors_of(0, 0).unwrap(), vec![(1, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.neighbors_of(3, 0).unwrap().len(), 3);
        assert_eq!(grid.neighbors_of(1, 0).unwrap().len(), 5);
        assert_eq!(grid.neighbors_of(1, 1).unwrap().len(), 8);
    }

    #[test]
    fn test_wraparound_uses_floor_modulo() {
        let grid = Grid::new(Tessellation::Rectangular, Neighborhood::RectVonNeumann, true, 4, 3);
        assert_eq!(
            grid.neighbors_of(0, 0).unwrap(),
            vec![(0, 2), (3, 0), (1, 0), (0, 1)]
        );
    }

    #[test]
    fn test_triangular_reflection() {
        let grid = Grid::new(Tessellation::Triangular, Neighborhood::TriVonNeumann, true, 6, 6);

        // Even diagonal: offsets used as-is
        assert_eq!(grid.neighbors_of(2, 2).unwrap(), vec![(2, 1), (1, 2), (2, 3)]);
        // Odd diagonal: dx mirrored
        assert_eq!(grid.neighbors_of(3, 2).unwrap(), vec![(3, 1), (4, 2), (3, 3)]);
        assert_eq!(grid.neighbors_of(2, 3).unwrap(), vec![(2, 2), (3, 3), (2, 4)]);
    }

    #[test]
    fn test_hexagonal_is_never_reflected() {
        let grid = Grid::new(Tessellation::Hexagonal, Neighborhood::HexTripod, true, 6, 6);
        assert_eq!(grid.neighbors_of(3, 2).unwrap(), vec![(4, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_all_dead_stays_dead_without_spawn_bit_zero() {
        let mut grid = Grid::new(Tessellation::Hexagonal, Neighborhood::HexHoneycomb, true, 7, 7);
        grid.step(&Rule::conway());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_spawn_bit_zero_fills_empty_grid() {
        let mut grid = Grid::new(Tessellation::Rectangular, Neighborhood::RectMoore, true, 5, 5);
        grid.step(&Rule::new(0, 0b1));
        assert_eq!(grid.population(), 25);

        // Every cell now has 8 live neighbors and keep is empty
        grid.step(&Rule::new(0, 0b1));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_spawn_bit_zero_only_revives_isolated_cells() {
        let mut grid = parse(
            Tessellation::Rectangular,
            Neighborhood::RectVonNeumann,
            false,
            &["#...", "....", "...."],
        );
        grid.step(&Rule::new(0, 0b1));
        assert_eq!(render(&grid), vec!["..##", ".###", "####"]);
    }

    #[test]
    fn test_blinker_on_wrapped_four_by_four() {
        let mut grid = parse(
            Tessellation::Rectangular,
            Neighborhood::RectMoore,
            true,
            &["....", "###.", "....", "...."],
        );
        let rule = Rule::conway();

        grid.step(&rule);
        assert_eq!(render(&grid), vec![".#..", ".#..", ".#..", "...."]);
        assert_eq!(grid.live_neighbors(1, 0).unwrap(), 3);
        assert_eq!(grid.live_neighbors(0, 1).unwrap(), 1);
        assert_eq!(grid.live_neighbors(3, 1).unwrap(), 2);
        assert_eq!(grid.live_neighbors(0, 3).unwrap(), 0);

        grid.step(&rule);
        assert_eq!(render(&grid), vec!["....", "###.", "....", "...."]);

        grid.step(&rule);
        assert_eq!(render(&grid), vec![".#..", ".#..", ".#..", "...."]);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let mut grid = parse(
            Tessellation::Rectangular,
            Neighborhood::RectMoore,
            true,
            &[".#....", "..#...", "###...", "......", "......", "......"],
        );
        for _ in 0..4 {
            grid.step(&Rule::conway());
        }
        assert_eq!(
            render(&grid),
            vec!["......", "..#...", "...#..", ".###..", "......", "......"]
        );
    }

    #[test]
    fn test_update_is_synchronous() {
        // A sequential in-place update would let (1,0) see (0,0) already born.
        let mut grid = parse(
            Tessellation::Rectangular,
            Neighborhood::RectVonNeumann,
            false,
            &["...", "...", "..."],
        );
        grid.step(&Rule::new(0, 0b1));
        assert_eq!(render(&grid), vec!["###", "###", "###"]);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(7);
        for tessellation in Tessellation::all() {
            for neighborhood in Neighborhood::for_tessellation(tessellation) {
                for wrap in [true, false] {
                    let mut serial = Grid::new(tessellation, neighborhood, wrap, 23, 17);
                    serial.randomize(0.35, &mut rng).unwrap();
                    let mut parallel = serial.clone();
                    let rule = Rule::hex_life();

                    for _ in 0..5 {
                        serial.step(&rule);
                        parallel.step_parallel(&rule);
                        assert_eq!(render(&serial), render(&parallel));
                    }
                }
            }
        }
    }

    #[test]
    fn test_randomize_density_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(Tessellation::Rectangular, Neighborhood::RectMoore, true, 10, 10);

        grid.randomize(1.0, &mut rng).unwrap();
        assert_eq!(grid.population(), 100);
        grid.randomize(0.0, &mut rng).unwrap();
        assert_eq!(grid.population(), 0);

        assert!(matches!(
            grid.randomize(1.5, &mut rng),
            Err(ConfigError::InvalidDensity(d)) if d == 1.5
        ));
        assert!(grid.randomize(f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_toggle_cell() {
        let mut grid = Grid::new(Tessellation::Hexagonal, Neighborhood::HexHoneycomb, true, 3, 3);
        grid.toggle_cell(2, 1).unwrap();
        assert!(grid.is_alive(2, 1).unwrap());
        let before = grid.neighbors_of(2, 1).unwrap();
        grid.toggle_cell(2, 1).unwrap();
        assert!(!grid.is_alive(2, 1).unwrap());
        assert_eq!(grid.neighbors_of(2, 1).unwrap(), before);
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut grid = Grid::new(Tessellation::Rectangular, Neighborhood::RectMoore, true, 3, 2);
        assert_eq!(
            grid.toggle_cell(3, 0),
            Err(GridError::OutOfBounds { x: 3, y: 0, width: 3, height: 2 })
        );
        assert!(grid.toggle_cell(0, 2).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_empty_grid_is_inert() {
        let mut grid = Grid::new(Tessellation::Triangular, Neighborhood::TriMoore, true, 0, 0);
        assert!(grid.is_empty());
        grid.step(&Rule::new(0, 0b1));
        grid.step_parallel(&Rule::new(0, 0b1));
        assert_eq!(grid.toggle_cell(4, 4), Ok(()));
        assert_eq!(grid.iter_cells().count(), 0);

        // One axis zero is just as empty
        let mut grid = Grid::new(Tessellation::Rectangular, Neighborhood::RectMoore, true, 5, 0);
        assert!(grid.is_empty());
        assert_eq!(grid.toggle_cell(0, 0), Ok(()));
    }

    #[test]
    fn test_teardown() {
        let mut grid = Grid::new(Tessellation::Rectangular, Neighborhood::RectMoore, true, 4, 4);
        grid.teardown();
        assert_eq!(grid.dimensions(), (0, 0));
        assert!(grid.is_empty());
        grid.teardown();
        assert!(grid.neighbors_of(0, 0).is_err());
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = parse(
            Tessellation::Rectangular,
            Neighborhood::RectMoore,
            true,
            &["#.", ".#", "#."],
        );
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells[1], (1, 0, false));
        assert_eq!(cells[3], (1, 1, true));
        assert_eq!(cells[4], (0, 2, true));
    }
}
