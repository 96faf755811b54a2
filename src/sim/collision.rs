//! Axis-aligned collision detection
//!
//! Every shape in the game is treated as its bounding box. Rocks are drawn
//! round but collide as squares.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleStream;
use super::player::Player;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// True when the interiors intersect. Rectangles that only share an
    /// edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// Check the player against every live obstacle, rocks first
pub fn check(player: &Player, rocks: &ObstacleStream, trees: &ObstacleStream) -> bool {
    let bounds = player.bounds();
    rocks
        .iter()
        .chain(trees.iter())
        .any(|obstacle| bounds.overlaps(&obstacle.bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::{Obstacle, ObstacleKind};
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn player_at(x: f32, y: f32) -> Player {
        let mut p = Player::new(Viewport::new(800.0, 600.0), &Tuning::default());
        p.pos = Vec2::new(x, y);
        p
    }

    fn rock(x: f32, y: f32, size: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Rock,
            pos: Vec2::new(x, y),
            size: Vec2::splat(size),
            speed: 3.0,
        }
    }

    fn tree(x: f32, y: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Tree,
            pos: Vec2::new(x, y),
            size: Vec2::new(50.0, 80.0),
            speed: 3.0,
        }
    }

    #[test]
    fn test_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&rect(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&rect(2.0, 2.0, 1.0, 1.0)));
        assert!(!a.overlaps(&rect(20.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&rect(0.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_check_empty_streams() {
        let p = player_at(100.0, 100.0);
        assert!(!check(&p, &ObstacleStream::new(), &ObstacleStream::new()));
    }

    #[test]
    fn test_check_hits_rock() {
        let p = player_at(100.0, 100.0);
        let mut rocks = ObstacleStream::new();
        rocks.push(rock(500.0, 0.0, 50.0));
        rocks.push(rock(120.0, 130.0, 40.0));
        assert!(check(&p, &rocks, &ObstacleStream::new()));
    }

    #[test]
    fn test_check_hits_tree() {
        let p = player_at(15.0, 300.0);
        let mut trees = ObstacleStream::new();
        trees.push(tree(15.0, 250.0));
        assert!(check(&p, &ObstacleStream::new(), &trees));
    }

    #[test]
    fn test_check_near_miss() {
        // Player spans x 100..140, y 100..160
        let p = player_at(100.0, 100.0);
        let mut rocks = ObstacleStream::new();
        rocks.push(rock(140.0, 100.0, 40.0));
        rocks.push(rock(100.0, 160.0, 40.0));
        let mut trees = ObstacleStream::new();
        trees.push(tree(50.0, 20.0));
        assert!(!check(&p, &rocks, &trees));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn overlap_is_symmetric(
                ax in -100.0f32..100.0, ay in -100.0f32..100.0,
                aw in 1.0f32..80.0, ah in 1.0f32..80.0,
                bx in -100.0f32..100.0, by in -100.0f32..100.0,
                bw in 1.0f32..80.0, bh in 1.0f32..80.0,
            ) {
                let a = rect(ax, ay, aw, ah);
                let b = rect(bx, by, bw, bh);
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }

            #[test]
            fn separated_boxes_never_collide(
                gap in 0.0f32..50.0,
                size in 40.0f32..60.0,
                offset in -200.0f32..200.0,
            ) {
                // Rock placed entirely to the right of the player
                let p = player_at(200.0, 200.0);
                let mut rocks = ObstacleStream::new();
                rocks.push(rock(240.0 + gap, 200.0 + offset, size));
                prop_assert!(!check(&p, &rocks, &ObstacleStream::new()));
            }
        }
    }
}
