use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::CollectionConfig;

/// Pumpkin positions for a collection session. The same seed always yields
/// the same layout.
pub fn scatter_positions(config: &CollectionConfig) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let extent = config.scatter_half_extent;
    (0..config.collectible_count)
        .map(|_| {
            let x = (rng.gen::<f32>() * 2.0 - 1.0) * extent;
            let z = (rng.gen::<f32>() * 2.0 - 1.0) * extent;
            Vec3::new(x, config.collectible_height, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_reproducible_and_bounded() {
        let config = CollectionConfig::default();
        let first = scatter_positions(&config);
        let second = scatter_positions(&config);
        assert_eq!(first, second);
        assert_eq!(first.len(), 12);
        for position in &first {
            assert!(position.x.abs() <= 60.0 && position.z.abs() <= 60.0);
            assert_eq!(position.y, 0.6);
        }
    }

    #[test]
    fn zero_extent_stacks_at_origin() {
        let config = CollectionConfig {
            scatter_half_extent: 0.0,
            collectible_count: 3,
            ..Default::default()
        };
        assert!(scatter_positions(&config).iter().all(|p| p.x == 0.0 && p.z == 0.0));
    }
}
