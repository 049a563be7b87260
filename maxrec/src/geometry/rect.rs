use crate::geometry::geo_traits::{AlmostContains, AlmostOverlapsWith};
use crate::util::FPA;

///Axis-aligned rectangle, `y` grows downwards (sheet coordinates with the origin at the top-left corner)
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns a new rectangle with the same centre as `self` but shrunk by `d` on every side.
    /// If nothing remains (x_min >= x_max or y_min >= y_max), returns None.
    pub fn shrink_by(mut self, d: f64) -> Option<Self> {
        self.x_min += d;
        self.y_min += d;
        self.x_max -= d;
        self.y_max -= d;

        if self.x_min < self.x_max && self.y_min < self.y_max {
            Some(self)
        } else {
            None
        }
    }
}

impl AlmostOverlapsWith<Rect> for Rect {
    #[inline(always)]
    fn almost_overlaps_with(&self, other: &Rect) -> bool {
        FPA(f64::max(self.x_min, other.x_min)) < FPA(f64::min(self.x_max, other.x_max))
            && FPA(f64::max(self.y_min, other.y_min)) < FPA(f64::min(self.y_max, other.y_max))
    }
}

impl AlmostContains<Rect> for Rect {
    #[inline(always)]
    fn almost_contains(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }
}
