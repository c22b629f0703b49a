//! Procedural layout generation
//!
//! Platforms and trees are placed left to right: each new entity starts a
//! random gap after the furthest one. The caller owns the lists and appends.

use rand::Rng;

use super::state::{Platform, Tree, TreeColor};
use crate::tuning::Tuning;

/// Right edge assumed when there is nothing to extend yet
const BOOTSTRAP_X: f32 = 0.0;

/// Generate the platform that follows `platforms`
pub fn generate_platform<R: Rng>(
    platforms: &[Platform],
    tuning: &Tuning,
    rng: &mut R,
) -> Platform {
    // X coordinate of the right edge of the furthest platform
    let furthest_x = platforms.last().map_or(BOOTSTRAP_X, Platform::right);

    let x = furthest_x + tuning.platform_gap.sample(rng);
    let width = tuning.platform_width.sample(rng);

    Platform::new(x, width)
}

/// Generate the tree that follows `trees`
pub fn generate_tree<R: Rng>(trees: &[Tree], tuning: &Tuning, rng: &mut R) -> Tree {
    let furthest_x = trees.last().map_or(BOOTSTRAP_X, |tree| tree.x);

    let x = furthest_x + tuning.tree_gap.sample(rng);
    let color = TreeColor::ALL[rng.random_range(0..TreeColor::ALL.len())];

    Tree { x, color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn platforms_for(seed: u64, count: usize) -> Vec<Platform> {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut platforms = vec![Platform::new(50.0, 50.0)];
        for _ in 0..count {
            let next = generate_platform(&platforms, &tuning, &mut rng);
            platforms.push(next);
        }
        platforms
    }

    #[test]
    fn test_bootstrap_from_empty_list() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let platform = generate_platform(&[], &tuning, &mut rng);
        assert!((40.0..200.0).contains(&platform.x));

        let tree = generate_tree(&[], &tuning, &mut rng);
        assert!((30.0..150.0).contains(&tree.x));
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(platforms_for(77, 20), platforms_for(77, 20));
        assert_ne!(platforms_for(77, 20), platforms_for(78, 20));
    }

    #[test]
    fn test_tree_colors_cover_palette() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut trees = Vec::new();
        for _ in 0..200 {
            let tree = generate_tree(&trees, &tuning, &mut rng);
            trees.push(tree);
        }
        for color in TreeColor::ALL {
            assert!(trees.iter().any(|t| t.color == color), "{:?} never drawn", color);
        }
    }

    proptest! {
        #[test]
        fn platforms_keep_gap_and_width(seed in any::<u64>(), count in 1usize..60) {
            let platforms = platforms_for(seed, count);
            for pair in platforms.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(b.x >= a.right() + 40.0);
                prop_assert!(b.x < a.right() + 200.0);
                prop_assert!(b.width >= 20.0 && b.width < 100.0);
            }
        }

        #[test]
        fn trees_keep_gap(seed in any::<u64>(), count in 1usize..60) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut trees = Vec::new();
            for _ in 0..count {
                let tree = generate_tree(&trees, &tuning, &mut rng);
                trees.push(tree);
            }
            for pair in trees.windows(2) {
                let gap = pair[1].x - pair[0].x;
                prop_assert!((30.0..150.0).contains(&gap));
            }
        }
    }
}
