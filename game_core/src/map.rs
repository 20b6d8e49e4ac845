use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// True when the box has no area
    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    /// Overlap test with exclusive edges: boxes that only touch do not
    /// intersect, and an empty box never intersects anything.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Static wall and net geometry of the play-field
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub top: Aabb,
    pub bottom: Aabb,
    pub left: Aabb,
    pub right: Aabb,
    pub net: Aabb,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        let w = config.window_width;
        let h = config.window_height;
        let t = config.boundary_thickness;

        Self {
            top: Aabb::new(Vec2::ZERO, Vec2::new(w, t)),
            bottom: Aabb::new(Vec2::new(0.0, h - t), Vec2::new(w, h)),
            left: Aabb::new(Vec2::ZERO, Vec2::new(t, h)),
            right: Aabb::new(Vec2::new(w - t, 0.0), Vec2::new(w, h)),
            net: Aabb::new(
                Vec2::new(w / 2.0 - config.net_width / 2.0, 0.0),
                Vec2::new(w / 2.0 + config.net_width / 2.0, h),
            ),
        }
    }

    /// Highest and lowest legal top edge for a box of the given height
    pub fn clamp_range(&self, height: f32) -> (f32, f32) {
        (self.top.max.y, self.bottom.min.y - height)
    }

    /// Draw order used by the presenter
    pub fn rects(&self) -> [Aabb; 5] {
        [self.net, self.top, self.bottom, self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a), "Intersection should be symmetric");
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let right = rect(10.0, 0.0, 10.0, 10.0);
        let below = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right), "Shared vertical edge is not a hit");
        assert!(!a.intersects(&below), "Shared horizontal edge is not a hit");
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 20.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_sub_pixel_overlap_counts() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(9.5, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_empty_box_never_intersects() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let empty = rect(5.0, 5.0, 0.0, 3.0);
        assert!(empty.is_empty());
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    #[test]
    fn test_arena_walls() {
        let arena = Arena::new(&Config::new());
        assert_eq!(arena.top, rect(0.0, 0.0, 640.0, 5.0));
        assert_eq!(arena.bottom, rect(0.0, 475.0, 640.0, 5.0));
        assert_eq!(arena.left, rect(0.0, 0.0, 5.0, 480.0));
        assert_eq!(arena.right, rect(635.0, 0.0, 5.0, 480.0));
        assert_eq!(arena.net, rect(315.0, 0.0, 10.0, 480.0));
    }

    #[test]
    fn test_arena_clamp_range() {
        let arena = Arena::new(&Config::new());
        assert_eq!(arena.clamp_range(60.0), (5.0, 415.0));
    }
}
