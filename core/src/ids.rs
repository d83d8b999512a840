//! Strongly typed identifiers for simulation entities.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(u32);

        impl $name {
            /// Creates a new identifier with the provided numeric value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Retrieves the numeric representation of the identifier.
            #[must_use]
            pub const fn get(&self) -> u32 {
                self.0
            }
        }
    };
}

entity_id!(
    /// Unique identifier assigned to an enemy.
    EnemyId
);
entity_id!(
    /// Unique identifier assigned to an attack tower.
    TowerId
);
entity_id!(
    /// Unique identifier assigned to a support tower.
    SupportTowerId
);
entity_id!(
    /// Unique identifier assigned to an in-flight projectile.
    ProjectileId
);
entity_id!(
    /// Stable identifier of a path produced by the map generator.
    PathId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_order_by_numeric_value() {
        assert!(EnemyId::new(3) < EnemyId::new(7));
        assert_eq!(TowerId::new(42).get(), 42);
    }
}
