pub mod bbox;
pub mod detection;
pub mod error;
pub mod palette;
pub mod tracker;

mod circular_queue;
mod track;

pub use detection::Detection;
pub use track::Track;
pub use tracker::{Tracker, TrackerConfig};

use error::Error;
use std::collections::HashMap;
use std::rc::Rc;

pub trait Tracking {
    fn update(&mut self, detections: &[Detection], src: &str) -> Result<Rc<[Track]>, Error>;
    fn tracks(&self, src: &str) -> Rc<[Track]>;
    fn reset(&mut self, src: &str);
}

/// Fans detection streams out to one [`Tracker`] per source id.
///
/// A source is created lazily on its first update and keeps its own id
/// space, so track 1 of one camera is unrelated to track 1 of another.
pub struct LinearTracker {
    config: TrackerConfig,
    sources: HashMap<String, Tracker>,
}

impl LinearTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            sources: HashMap::new(),
        }
    }

    pub fn reset_all(&mut self) {
        for tracker in self.sources.values_mut() {
            tracker.reset();
        }
    }
}

impl Default for LinearTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl Tracking for LinearTracker {
    /// Validates the whole frame up front; a bad detection rejects the
    /// frame without touching the source's state.
    fn update(&mut self, detections: &[Detection], src: &str) -> Result<Rc<[Track]>, Error> {
        for (index, det) in detections.iter().enumerate() {
            if !det.is_well_formed() {
                return Err(Error::MalformedBox { index });
            }

            if !(0.0..=1.0).contains(&det.score) {
                return Err(Error::ScoreOutOfRange {
                    index,
                    score: det.score,
                });
            }
        }

        let config = self.config;
        let tracker = self
            .sources
            .entry(src.to_string())
            .or_insert_with(|| Tracker::new(config));

        Ok(tracker.update(detections).into())
    }

    #[inline]
    fn tracks(&self, src: &str) -> Rc<[Track]> {
        if let Some(tracker) = self.sources.get(src) {
            return tracker.tracks().into();
        }

        Rc::new([])
    }

    fn reset(&mut self, src: &str) {
        if let Some(tracker) = self.sources.get_mut(src) {
            tracker.reset();
        }
    }
}
