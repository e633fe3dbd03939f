// Swipe gesture state for touch steering.
use crate::model::Direction;

#[derive(Default, Debug, Clone)]
pub struct SwipeTracker {
    pub active: bool,
    pub moved: bool,
    pub start_x: f64,
    pub start_y: f64,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.active = true;
        self.moved = false;
        self.start_x = x;
        self.start_y = y;
    }

    pub fn mark_moved(&mut self) {
        if self.active {
            self.moved = true;
        }
    }

    /// Resolves the gesture; taps (no movement) yield nothing.
    pub fn finish(&mut self, x: f64, y: f64) -> Option<Direction> {
        let swiped = self.active && self.moved;
        self.active = false;
        self.moved = false;
        if !swiped {
            return None;
        }
        Some(swipe_direction(x - self.start_x, y - self.start_y))
    }
}

pub fn swipe_direction(dx: f64, dy: f64) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::RIGHT
        } else {
            Direction::LEFT
        }
    } else if dy > 0.0 {
        Direction::DOWN
    } else {
        Direction::UP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(swipe_direction(40.0, 10.0), Direction::RIGHT);
        assert_eq!(swipe_direction(-40.0, 39.0), Direction::LEFT);
        assert_eq!(swipe_direction(3.0, 30.0), Direction::DOWN);
        assert_eq!(swipe_direction(3.0, -30.0), Direction::UP);
    }

    #[test]
    fn ties_fall_to_vertical() {
        assert_eq!(swipe_direction(20.0, 20.0), Direction::DOWN);
        assert_eq!(swipe_direction(-20.0, -20.0), Direction::UP);
        assert_eq!(swipe_direction(0.0, 0.0), Direction::UP);
    }

    #[test]
    fn tap_is_ignored() {
        let mut t = SwipeTracker::default();
        t.begin(10.0, 10.0);
        assert_eq!(t.finish(80.0, 10.0), None);
    }

    #[test]
    fn swipe_resolves_once() {
        let mut t = SwipeTracker::default();
        t.begin(100.0, 100.0);
        t.mark_moved();
        assert_eq!(t.finish(100.0, 20.0), Some(Direction::UP));
        assert_eq!(t.finish(100.0, 20.0), None);
    }
}
