use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_derive::{Deserialize, Serialize};

use crate::detection::Detection;
use crate::palette;
use crate::track::Track;

/// Tuning knobs for the frame-to-frame association pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Minimum IoU between a predicted box and a detection for the pair
    /// to be considered a match candidate. Default: 0.25.
    pub match_threshold: f64,

    /// A track that goes this many consecutive frames without a matched
    /// detection is dropped. Default: 30.
    pub max_missing_streak: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.25,
            max_missing_streak: 30,
        }
    }
}

/// Online multi-object tracker over a single detection stream.
///
/// Tracks are carried between frames by a constant-velocity motion
/// model and re-associated to fresh detections greedily by IoU.
/// Association is fully deterministic; randomness only enters when a
/// display color is drawn for a newly spawned track.
pub struct Tracker {
    config: TrackerConfig,
    next_id: u32,
    tracks: Vec<Track>,
    colors: StdRng,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) but with a fixed color sequence.
    pub fn seeded(config: TrackerConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: TrackerConfig, colors: StdRng) -> Self {
        Self {
            config,
            next_id: 1,
            tracks: Vec::with_capacity(64),
            colors,
        }
    }

    /// Advances every track one frame and folds in the given detections.
    ///
    /// Returns the live set. Re-observed tracks come first in their
    /// previous order, followed by unmatched tracks still inside the
    /// missing budget and finally tracks spawned from unclaimed
    /// detections in input order. The returned slice is also what
    /// [`tracks`](Self::tracks) reports until the next call.
    pub fn update(&mut self, detections: &[Detection]) -> &[Track] {
        for track in &mut self.tracks {
            track.advance();
        }

        let (det_for_track, det_used) = self.assign(detections);

        let live = std::mem::take(&mut self.tracks);
        let mut matched = Vec::with_capacity(live.len());
        let mut aged = Vec::new();

        for (mut track, det_idx) in live.into_iter().zip(det_for_track) {
            match det_idx {
                Some(di) => {
                    track.observe(&detections[di]);
                    matched.push(track);
                }
                None => {
                    track.mark_missed();
                    if track.missing_streak < self.config.max_missing_streak {
                        aged.push(track);
                    } else {
                        debug!(
                            "track {} dropped after {} missed frames",
                            track.id, track.missing_streak
                        );
                    }
                }
            }
        }

        let mut spawned = Vec::new();
        for (di, det) in detections.iter().enumerate() {
            if det_used[di] {
                continue;
            }

            let id = self.next_id;
            self.next_id += 1;

            debug!("track {} spawned from detection {}", id, di);
            spawned.push(Track::spawn(id, det, palette::pick(&mut self.colors)));
        }

        self.tracks = matched;
        self.tracks.extend(aged);
        self.tracks.extend(spawned);

        &self.tracks
    }

    /// Greedy one-to-one assignment by descending IoU.
    ///
    /// Returns the claimed detection index per track, plus a used flag
    /// per detection. Candidate pairs are generated track-major, and the
    /// sort is stable, so equal scores resolve to the earlier track and
    /// the earlier detection.
    fn assign(&self, detections: &[Detection]) -> (Vec<Option<usize>>, Vec<bool>) {
        let mut pairs = Vec::new();

        for (ti, track) in self.tracks.iter().enumerate() {
            for (di, det) in detections.iter().enumerate() {
                let iou = track.bbox.iou(&det.bbox());
                if iou >= self.config.match_threshold {
                    pairs.push((ti, di, iou));
                }
            }
        }

        pairs.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

        let mut det_for_track = vec![None; self.tracks.len()];
        let mut det_used = vec![false; detections.len()];

        for (ti, di, iou) in pairs {
            if det_for_track[ti].is_none() && !det_used[di] {
                trace!(
                    "track {} matched detection {} (iou {:.3})",
                    self.tracks[ti].id,
                    di,
                    iou
                );
                det_for_track[ti] = Some(di);
                det_used[di] = true;
            }
        }

        (det_for_track, det_used)
    }

    /// Drops all tracks and restarts id numbering from 1.
    pub fn reset(&mut self) {
        self.tracks.clear();
        self.next_id = 1;
    }

    #[inline]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[inline]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}
