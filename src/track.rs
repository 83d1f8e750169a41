use nalgebra as na;

use crate::bbox::{BBox, Ltwh};
use crate::circular_queue::CircularQueue;
use crate::detection::Detection;
use crate::palette::Color;

/// Weight of the newest displacement measurement in the velocity blend.
const VELOCITY_SMOOTHING: f64 = 0.5;

/// Recent box centers kept per track for overlay polylines.
const TRAIL_CAPACITY: usize = 30;

/// One tracked object: the latest box estimate plus its motion state.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: u32,
    pub bbox: BBox<Ltwh>,
    pub label: String,
    pub score: f64,

    // px per frame, (x,y)
    pub velocity: na::Vector2<f64>,

    // consecutive frames without a matched detection
    pub missing_streak: u32,

    // fixed at spawn, for drawing
    pub color: Color,

    trail: CircularQueue<na::Point2<f64>>,
}

impl Track {
    pub(crate) fn spawn(id: u32, det: &Detection, color: Color) -> Self {
        let bbox = det.bbox();

        let mut trail = CircularQueue::with_capacity(TRAIL_CAPACITY);
        trail.push(na::Point2::new(bbox.cx(), bbox.cy()));

        Self {
            id,
            bbox,
            label: det.label.clone(),
            score: det.score,
            velocity: na::Vector2::zeros(),
            missing_streak: 0,
            color,
            trail,
        }
    }

    /// Moves the box one frame forward along the estimated velocity.
    pub(crate) fn advance(&mut self) {
        self.bbox = self.bbox.translated(self.velocity.x, self.velocity.y);
    }

    /// Folds a matched detection into the track.
    ///
    /// The displacement is measured against the position the track held
    /// before [`advance`](Self::advance), so a prediction that landed on
    /// target does not inflate the velocity estimate.
    pub(crate) fn observe(&mut self, det: &Detection) {
        let prev = na::Point2::new(self.bbox.left(), self.bbox.top()) - self.velocity;
        let measured = na::Point2::new(det.x, det.y) - prev;

        self.velocity =
            self.velocity * (1.0 - VELOCITY_SMOOTHING) + measured * VELOCITY_SMOOTHING;
        self.bbox = det.bbox();
        self.label = det.label.clone();
        self.score = det.score;
        self.missing_streak = 0;

        self.push_trail();
    }

    pub(crate) fn mark_missed(&mut self) {
        self.missing_streak += 1;
        self.push_trail();
    }

    fn push_trail(&mut self) {
        self.trail
            .push(na::Point2::new(self.bbox.cx(), self.bbox.cy()));
    }

    /// Recent box centers, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = &na::Point2<f64>> {
        self.trail.asc_iter()
    }
}
