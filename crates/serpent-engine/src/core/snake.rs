use glam::Vec2;

/// The snake's body: an ordered chain of points, head first.
///
/// Consecutive points are kept at most one segment distance apart by
/// [`Snake::relax`]. The chain only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    points: Vec<Vec2>,
}

impl Snake {
    /// A snake of `length` points all stacked at `at`. Length is at least 1.
    pub fn new(length: usize, at: Vec2) -> Self {
        Self {
            points: vec![at; length.max(1)],
        }
    }

    pub fn head(&self) -> Vec2 {
        self.points[0]
    }

    pub fn set_head(&mut self, pos: Vec2) {
        self.points[0] = pos;
    }

    pub fn tail(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true; a snake always has a head.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Follow-the-leader pass: any point farther than `segment_distance` from
    /// its predecessor is pulled onto the line toward it at exactly that
    /// distance. One pass per call, front to back.
    pub fn relax(&mut self, segment_distance: f32) {
        for i in 1..self.points.len() {
            let prev = self.points[i - 1];
            let offset = prev - self.points[i];
            let dist = offset.length();
            if dist > segment_distance {
                self.points[i] = prev - offset / dist * segment_distance;
            }
        }
    }

    /// Append `count` copies of the current tail.
    pub fn grow(&mut self, count: usize) {
        let tail = self.tail();
        self.points.extend(std::iter::repeat(tail).take(count));
    }

    /// Largest gap between consecutive points (0 for a one-point snake).
    pub fn max_link_length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .fold(0.0, f32::max)
    }
}
