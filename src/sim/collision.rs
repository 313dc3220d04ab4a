//! Sphere-overlap collision passes
//!
//! Brute-force O(bullets x asteroids) scans over small entity counts. The
//! pass functions are pure over slices and return index pairs; the session
//! applies score/damage effects. An implementer chasing hundreds of entities
//! would want spatial hashing here; current counts stay in the tens.

use glam::Vec3;

use super::entity::{Asteroid, Bullet, Player};

/// Boundary-inclusive sphere overlap using full 3-D distance
#[inline]
pub fn spheres_overlap(pos_a: Vec3, radius_a: f32, pos_b: Vec3, radius_b: f32) -> bool {
    let r = radius_a + radius_b;
    pos_a.distance_squared(pos_b) <= r * r
}

/// Bullet-asteroid pass. Returns (bullet index, asteroid index) pairs in
/// scan order. Each bullet claims at most one asteroid per frame, and a
/// claimed asteroid cannot be hit again in the same pass.
pub fn find_bullet_hits(bullets: &[Bullet], asteroids: &[Asteroid]) -> Vec<(usize, usize)> {
    let mut hits = Vec::new();
    let mut claimed = vec![false; asteroids.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        if !bullet.alive {
            continue;
        }
        for (ai, asteroid) in asteroids.iter().enumerate() {
            if !asteroid.alive || claimed[ai] {
                continue;
            }
            if spheres_overlap(bullet.pos, bullet.radius(), asteroid.pos, asteroid.radius) {
                claimed[ai] = true;
                hits.push((bi, ai));
                break;
            }
        }
    }

    hits
}

/// Player-asteroid pass. Returns the first overlapping alive asteroid in
/// list order, if any; only one player hit is processed per frame.
pub fn find_player_hit(player: &Player, asteroids: &[Asteroid]) -> Option<usize> {
    if !player.alive {
        return None;
    }

    asteroids.iter().position(|a| {
        a.alive && spheres_overlap(player.pos, player.radius(), a.pos, a.radius)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn asteroid_at(id: u32, pos: Vec3, radius: f32) -> Asteroid {
        let mut rng = Pcg32::seed_from_u64(id as u64);
        let mut a = Asteroid::new(id, &mut rng);
        a.pos = pos;
        a.radius = radius;
        a
    }

    #[test]
    fn test_overlap_boundary_inclusive() {
        let a = Vec3::ZERO;
        let b = Vec3::new(3.0, 0.0, 0.0);
        // Touching at exactly rA + rB = 3.0 counts as a hit
        assert!(spheres_overlap(a, 1.0, b, 2.0));
        // Epsilon further apart does not
        assert!(!spheres_overlap(a, 1.0, Vec3::new(3.001, 0.0, 0.0), 2.0));
    }

    #[test]
    fn test_overlap_uses_full_3d_distance() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 2.0, 2.0); // |b| = 3
        assert!(spheres_overlap(a, 1.5, b, 1.5));
        assert!(!spheres_overlap(a, 1.4, b, 1.5));
    }

    #[test]
    fn test_bullet_claims_one_asteroid() {
        let bullet = Bullet::new(1, Vec3::ZERO);
        // Two asteroids both overlapping the bullet
        let asteroids = vec![
            asteroid_at(10, Vec3::new(0.5, 0.0, 0.0), 1.0),
            asteroid_at(11, Vec3::new(-0.5, 0.0, 0.0), 1.0),
        ];

        let hits = find_bullet_hits(&[bullet], &asteroids);
        // Only the first in iteration order is destroyed
        assert_eq!(hits, vec![(0, 0)]);
    }

    #[test]
    fn test_two_bullets_cannot_share_an_asteroid() {
        let bullets = vec![Bullet::new(1, Vec3::ZERO), Bullet::new(2, Vec3::new(0.1, 0.0, 0.0))];
        let asteroids = vec![asteroid_at(10, Vec3::new(0.5, 0.0, 0.0), 1.0)];

        let hits = find_bullet_hits(&bullets, &asteroids);
        assert_eq!(hits, vec![(0, 0)]);
    }

    #[test]
    fn test_dead_entities_skipped() {
        let mut bullet = Bullet::new(1, Vec3::ZERO);
        bullet.destroy();
        let asteroids = vec![asteroid_at(10, Vec3::ZERO, 2.0)];
        assert!(find_bullet_hits(&[bullet], &asteroids).is_empty());

        let bullet = Bullet::new(2, Vec3::ZERO);
        let mut dead = asteroid_at(11, Vec3::ZERO, 2.0);
        dead.destroy();
        assert!(find_bullet_hits(&[bullet], &[dead]).is_empty());
    }

    #[test]
    fn test_player_hit_first_in_list_order() {
        let player = Player::new();
        let asteroids = vec![
            asteroid_at(10, player.pos + Vec3::new(50.0, 0.0, 0.0), 1.0),
            asteroid_at(11, player.pos + Vec3::new(0.5, 0.0, 0.0), 1.0),
            asteroid_at(12, player.pos, 1.0),
        ];

        assert_eq!(find_player_hit(&player, &asteroids), Some(1));
    }

    #[test]
    fn test_dead_player_never_hit() {
        let mut player = Player::new();
        let asteroids = vec![asteroid_at(10, player.pos, 1.0)];
        player.destroy();
        assert_eq!(find_player_hit(&player, &asteroids), None);
    }
}
