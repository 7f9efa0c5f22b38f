//! Player-versus-car collision detection
//!
//! A linear scan over every car. Car counts stay in the tens, so no spatial
//! partitioning is used.

use super::object::GameObject;

/// Index of the first car (in storage order) whose box overlaps the player
pub fn first_collision(player: &GameObject, cars: &[GameObject]) -> Option<usize> {
    let player_rect = player.rect();
    cars.iter().position(|car| player_rect.overlaps(&car.rect()))
}

/// True if the player overlaps any car
pub fn check_collision(player: &GameObject, cars: &[GameObject]) -> bool {
    first_collision(player, cars).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::object::Direction;
    use glam::Vec2;
    use proptest::prelude::*;

    fn player_at(x: f32, y: f32) -> GameObject {
        let mut player = GameObject::player();
        player.pos = Vec2::new(x, y);
        player
    }

    fn car_at(x: f32, y: f32) -> GameObject {
        GameObject::car(Vec2::new(x, y), 2.0, Direction::Right)
    }

    #[test]
    fn test_no_cars_no_collision() {
        assert!(!check_collision(&player_at(100.0, 100.0), &[]));
    }

    #[test]
    fn test_overlap_detected() {
        let player = player_at(100.0, 100.0);
        let cars = [car_at(300.0, 100.0), car_at(80.0, 110.0)];
        assert_eq!(first_collision(&player, &cars), Some(1));
    }

    #[test]
    fn test_edge_contact_is_not_collision() {
        let player = player_at(100.0, 100.0);
        // Car ends exactly where the player starts, and one directly above
        let cars = [car_at(36.0, 100.0), car_at(100.0, 68.0), car_at(132.0, 100.0)];
        assert!(!check_collision(&player, &cars));
    }

    #[test]
    fn test_subpixel_positions_snap() {
        // 36.9 snaps to 36, so the car still ends at 100
        let player = player_at(100.0, 100.0);
        assert!(!check_collision(&player, &[car_at(36.9, 100.0)]));
        assert!(check_collision(&player, &[car_at(37.0, 100.0)]));
    }

    #[test]
    fn test_first_hit_follows_storage_order() {
        let player = player_at(100.0, 100.0);
        let cars = [car_at(90.0, 100.0), car_at(95.0, 100.0)];
        assert_eq!(first_collision(&player, &cars), Some(0));
    }

    proptest! {
        #[test]
        fn prop_matches_interval_test(
            px in 0i32..608, py in 5i32..448, cx in -64i32..640, cy in 5i32..448
        ) {
            let player = player_at(px as f32, py as f32);
            let car = car_at(cx as f32, cy as f32);
            let expected = px < cx + 64 && cx < px + 32 && py < cy + 32 && cy < py + 32;
            prop_assert_eq!(check_collision(&player, &[car]), expected);
        }
    }
}
