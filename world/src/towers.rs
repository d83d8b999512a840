//! Authoritative tower state management utilities.

use std::collections::{BTreeMap, BTreeSet};

use elemental_defence_core::{GridCoord, SupportTower, SupportTowerId, Tower, TowerId};

/// Registry that stores attack and support towers and tracks occupied tiles.
#[derive(Debug, Default)]
pub(crate) struct TowerRegistry {
    pub(crate) towers: BTreeMap<TowerId, Tower>,
    pub(crate) supports: Vec<SupportTower>,
    occupied: BTreeSet<GridCoord>,
}

impl TowerRegistry {
    /// Creates an empty registry.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_occupied(&self, grid: GridCoord) -> bool {
        self.occupied.contains(&grid)
    }

    pub(crate) fn insert_tower(&mut self, tower: Tower) {
        let _ = self.occupied.insert(tower.grid);
        let _ = self.towers.insert(tower.id, tower);
    }

    pub(crate) fn insert_support(&mut self, support: SupportTower) {
        let _ = self.occupied.insert(support.grid);
        let index = self
            .supports
            .partition_point(|existing| existing.id < support.id);
        self.supports.insert(index, support);
    }

    pub(crate) fn remove_tower(&mut self, id: TowerId) -> Option<Tower> {
        let tower = self.towers.remove(&id)?;
        let _ = self.occupied.remove(&tower.grid);
        Some(tower)
    }

    pub(crate) fn remove_support(&mut self, id: SupportTowerId) -> Option<SupportTower> {
        let index = self.supports.iter().position(|support| support.id == id)?;
        let support = self.supports.remove(index);
        let _ = self.occupied.remove(&support.grid);
        Some(support)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elemental_defence_core::{SupportKind, Tier};

    fn support(id: u32, column: i32) -> SupportTower {
        SupportTower::new(
            SupportTowerId::new(id),
            SupportKind::Range,
            Tier::One,
            GridCoord::new(column, 0),
            100.0,
            0.1,
        )
    }

    #[test]
    fn registry_starts_empty() {
        let registry = TowerRegistry::new();
        assert!(registry.towers.is_empty());
        assert!(registry.supports.is_empty());
        assert!(!registry.is_occupied(GridCoord::new(0, 0)));
    }

    #[test]
    fn supports_stay_sorted_and_free_their_tile() {
        let mut registry = TowerRegistry::new();
        registry.insert_support(support(5, 0));
        registry.insert_support(support(2, 1));
        assert_eq!(
            registry
                .supports
                .iter()
                .map(|support| support.id.get())
                .collect::<Vec<_>>(),
            vec![2, 5]
        );
        assert!(registry.is_occupied(GridCoord::new(1, 0)));

        assert!(registry.remove_support(SupportTowerId::new(2)).is_some());
        assert!(!registry.is_occupied(GridCoord::new(1, 0)));
        assert!(registry.remove_support(SupportTowerId::new(2)).is_none());
    }
}
