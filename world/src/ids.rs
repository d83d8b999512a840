use elemental_defence_core::{EnemyId, ProjectileId, SupportTowerId, TowerId};

/// Monotonic identifier counters; ids are never reused.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    enemy: u32,
    tower: u32,
    support: u32,
    projectile: u32,
}

impl IdAllocator {
    pub(crate) fn next_enemy(&mut self) -> EnemyId {
        self.enemy += 1;
        EnemyId::new(self.enemy)
    }

    pub(crate) fn next_tower(&mut self) -> TowerId {
        self.tower += 1;
        TowerId::new(self.tower)
    }

    pub(crate) fn next_support(&mut self) -> SupportTowerId {
        self.support += 1;
        SupportTowerId::new(self.support)
    }

    pub(crate) fn next_projectile(&mut self) -> ProjectileId {
        self.projectile = self.projectile.wrapping_add(1);
        ProjectileId::new(self.projectile)
    }
}
