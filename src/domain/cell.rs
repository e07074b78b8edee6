use super::Rule;

/// Cell is the fundamental unit of the automaton.
///
/// Neighbors are stored as indices into the owning grid's cell storage, so a
/// cell never holds a reference to a sibling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    /// Live neighbor count from the latest counting pass
    pub live_neighbors: u8,
    pub(crate) neighbors: Vec<usize>,
}

impl Cell {
    pub const fn new(alive: bool) -> Self {
        Self {
            alive,
            live_neighbors: 0,
            neighbors: Vec::new(),
        }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flip the cell state, bypassing the rule
    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    /// Indices of the resolved neighbors, in resolution order
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Apply `rule` to the stored neighbor count
    pub fn evolve(&mut self, rule: &Rule) {
        self.alive = rule.evolve(self.alive, self.live_neighbors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_count(alive: bool, live_neighbors: u8) -> Cell {
        Cell {
            live_neighbors,
            ..Cell::new(alive)
        }
    }

    #[test]
    fn test_underpopulation() {
        let mut cell = with_count(true, 1);
        cell.evolve(&Rule::conway());
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_survival() {
        let mut cell = with_count(true, 2);
        cell.evolve(&Rule::conway());
        assert!(cell.is_alive());
    }

    #[test]
    fn test_reproduction() {
        let mut cell = with_count(false, 3);
        cell.evolve(&Rule::conway());
        assert!(cell.is_alive());
    }

    #[test]
    fn test_toggle() {
        let mut cell = Cell::new(false);
        cell.toggle();
        assert!(cell.is_alive());
        cell.toggle();
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_neighbors_keep_resolution_order() {
        let mut cell = Cell::new(false);
        assert!(cell.neighbors().is_empty());
        cell.neighbors = vec![4, 1, 7];
        assert_eq!(cell.neighbors(), &[4, 1, 7]);
    }
}
