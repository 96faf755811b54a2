//! Obstacles and their streams
//!
//! Rocks and trees live in two independent streams. Each stream is spawned
//! from the top of the slope, descends, and is trimmed from the front.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::Viewport;
use crate::tuning::{Span, Tuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Rock,
    Tree,
}

/// A single obstacle. Speed is fixed at spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Rocks are `d x d`, trees `width x height`
    pub size: Vec2,
    /// Own descent per tick
    pub speed: f32,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Rock diameter; trees are not round
    pub fn diameter(&self) -> Option<f32> {
        match self.kind {
            ObstacleKind::Rock => Some(self.size.x),
            ObstacleKind::Tree => None,
        }
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, span: Span) -> f32 {
    rng.random_range(span.min..span.max)
}

/// New rock just above the top edge at a random column
pub fn spawn_rock<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, tuning: &Tuning) -> Obstacle {
    let size = sample(rng, tuning.rock_size);
    let max_x = viewport.width - size;
    let x = if max_x > 0.0 {
        rng.random_range(0.0..max_x)
    } else {
        0.0
    };
    Obstacle {
        kind: ObstacleKind::Rock,
        pos: Vec2::new(x, -size),
        size: Vec2::splat(size),
        speed: sample(rng, tuning.obstacle_speed),
    }
}

/// New tree just above the top edge in the left or right lane
pub fn spawn_tree<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, tuning: &Tuning) -> Obstacle {
    let x = if rng.random_bool(0.5) {
        tuning.tree_left_x
    } else {
        viewport.width - tuning.tree_right_inset
    };
    Obstacle {
        kind: ObstacleKind::Tree,
        pos: Vec2::new(x, -tuning.tree_height),
        size: Vec2::new(tuning.tree_width, tuning.tree_height),
        speed: sample(rng, tuning.obstacle_speed),
    }
}

/// Obstacles of one kind, oldest at the front.
///
/// Entries are appended in spawn order and only ever removed from the
/// front, once the front has fallen past the bottom edge. Every obstacle
/// spawns at the same height for its kind, so the front is the one that
/// has been descending longest. An obstacle that overtakes a slower front
/// stays in the stream until that front is culled; by then it is already
/// below the viewport and cannot touch the player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleStream {
    items: VecDeque<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.items.push_back(obstacle);
    }

    /// Descend every obstacle by its own speed plus a share of the
    /// player's forward speed
    pub fn advance(&mut self, player_speed: f32, parallax: f32) {
        let extra = player_speed * parallax;
        for obstacle in &mut self.items {
            obstacle.pos.y += obstacle.speed + extra;
        }
    }

    /// Drop obstacles from the front while they are below `viewport_height`.
    /// Returns how many were removed.
    pub fn cull(&mut self, viewport_height: f32) -> usize {
        let mut removed = 0;
        while self
            .items
            .front()
            .is_some_and(|front| front.pos.y > viewport_height)
        {
            self.items.pop_front();
            removed += 1;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.items.iter()
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    fn rock_at(y: f32, speed: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Rock,
            pos: Vec2::new(100.0, y),
            size: Vec2::splat(50.0),
            speed,
        }
    }

    #[test]
    fn test_rock_spawn_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let rock = spawn_rock(&mut rng, VIEW, &tuning);
            let d = rock.diameter().unwrap();
            assert_eq!(rock.kind, ObstacleKind::Rock);
            assert!((40.0..60.0).contains(&d));
            assert_eq!(rock.size, Vec2::splat(d));
            assert!(rock.pos.x >= 0.0 && rock.pos.x < VIEW.width - d);
            assert_eq!(rock.pos.y, -d);
            assert!((3.0..5.0).contains(&rock.speed));
        }
    }

    #[test]
    fn test_rock_in_narrow_viewport() {
        let mut rng = Pcg32::seed_from_u64(1);
        let rock = spawn_rock(&mut rng, Viewport::new(30.0, 600.0), &Tuning::default());
        assert_eq!(rock.pos.x, 0.0);
    }

    #[test]
    fn test_tree_spawn_lanes() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let (mut left, mut right) = (0, 0);
        for _ in 0..200 {
            let tree = spawn_tree(&mut rng, VIEW, &tuning);
            assert_eq!(tree.kind, ObstacleKind::Tree);
            assert_eq!(tree.diameter(), None);
            assert_eq!(tree.size, Vec2::new(50.0, 80.0));
            assert_eq!(tree.pos.y, -80.0);
            assert!((3.0..5.0).contains(&tree.speed));
            match tree.pos.x {
                x if x == 15.0 => left += 1,
                x if x == 755.0 => right += 1,
                x => panic!("tree outside lanes at x={x}"),
            }
        }
        assert!(left > 0 && right > 0);
    }

    #[test]
    fn test_advance_adds_half_player_speed() {
        let mut stream = ObstacleStream::new();
        stream.push(rock_at(0.0, 3.0));
        stream.push(rock_at(-50.0, 4.5));
        stream.advance(4.0, 0.5);
        let ys: Vec<f32> = stream.iter().map(|o| o.pos.y).collect();
        assert_eq!(ys, vec![5.0, -43.5]);
    }

    #[test]
    fn test_cull_front_only() {
        let mut stream = ObstacleStream::new();
        stream.push(rock_at(650.0, 3.0));
        stream.push(rock_at(601.0, 3.0));
        stream.push(rock_at(600.0, 3.0));
        stream.push(rock_at(700.0, 3.0));

        assert_eq!(stream.cull(600.0), 2);
        assert_eq!(stream.len(), 2);
        // Exactly at the edge is still visible
        assert_eq!(stream.front().map(|o| o.pos.y), Some(600.0));
    }

    #[test]
    fn test_cull_empty() {
        let mut stream = ObstacleStream::new();
        assert_eq!(stream.cull(600.0), 0);
        assert!(stream.is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cull_removes_only_fallen_front(ys in proptest::collection::vec(-100.0f32..900.0, 0..30)) {
                let mut stream = ObstacleStream::new();
                for &y in &ys {
                    stream.push(rock_at(y, 3.0));
                }
                let removed = stream.cull(600.0);

                prop_assert!(ys[..removed].iter().all(|&y| y > 600.0));
                prop_assert_eq!(stream.len(), ys.len() - removed);
                if let Some(front) = stream.front() {
                    prop_assert!(front.pos.y <= 600.0);
                }
                let kept: Vec<f32> = stream.iter().map(|o| o.pos.y).collect();
                prop_assert_eq!(&kept[..], &ys[removed..]);
            }

            #[test]
            fn equal_speed_streams_stay_ordered(seed in any::<u64>(), ticks in 1usize..400) {
                let tuning = Tuning::default();
                let mut rng = Pcg32::seed_from_u64(seed);
                let mut stream = ObstacleStream::new();
                for t in 0..ticks {
                    stream.advance(4.0, tuning.parallax);
                    stream.cull(VIEW.height);
                    if t % 40 == 0 {
                        let mut tree = spawn_tree(&mut rng, VIEW, &tuning);
                        tree.speed = 4.0;
                        stream.push(tree);
                    }
                }
                let ys: Vec<f32> = stream.iter().map(|o| o.pos.y).collect();
                prop_assert!(ys.windows(2).all(|w| w[0] >= w[1]));
                prop_assert!(stream.iter().all(|o| o.pos.y <= VIEW.height));
            }
        }
    }
}
