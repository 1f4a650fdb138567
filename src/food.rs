use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Samples a food cell uniformly over the whole grid.
///
/// Sampling does not consult the snake body: food may land under the snake,
/// where it sits until the head passes over that cell again. This matches
/// the classic behavior and keeps the sample O(1) regardless of length.
#[must_use]
pub fn sample_food<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;

    use super::sample_food;

    #[test]
    fn samples_stay_inside_the_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 20,
            height: 20,
        };

        for _ in 0..1_000 {
            let food = sample_food(&mut rng, bounds);
            assert!(food.is_within_bounds(bounds));
        }
    }

    #[test]
    fn sampling_eventually_reaches_every_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize {
            width: 4,
            height: 4,
        };

        let mut seen = [[false; 4]; 4];
        for _ in 0..2_000 {
            let food = sample_food(&mut rng, bounds);
            seen[food.y as usize][food.x as usize] = true;
        }

        assert!(seen.iter().flatten().all(|cell| *cell));
    }
}
