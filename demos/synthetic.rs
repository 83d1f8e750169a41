use ltrack::bbox::BBox;
use ltrack::{Detection, Tracker, TrackerConfig};

/// Center-format box from a pretend detector, converted to the
/// tracker's corner convention.
fn det(cx: f64, cy: f64, w: f64, h: f64, score: f64, label: &str) -> Detection {
    let b = BBox::xywh(cx, cy, w, h).as_ltwh();

    Detection {
        x: b.left(),
        y: b.top(),
        w: b.width(),
        h: b.height(),
        score,
        label: label.to_string(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut tracker = Tracker::seeded(TrackerConfig::default(), 7);

    // two objects on crossing straight paths, one of them hidden
    // between frames 20 and 26
    for frame in 0..60u32 {
        let t = frame as f64;

        let mut dets = Vec::new();

        if !(20..26).contains(&frame) {
            dets.push(det(70.0 + 8.0 * t, 220.0, 60.0, 40.0, 0.92, "car"));
        }

        dets.push(det(620.0 - 6.0 * t, 200.0 + 1.5 * t, 50.0, 44.0, 0.85, "van"));

        let tracks = tracker.update(&dets);

        println!("frame {:02}: {} tracks", frame, tracks.len());
        for tr in tracks {
            println!(
                "  #{:<3} {:4} box {:6.1?} v ({:+5.1}, {:+5.1}) missed {} trail {}",
                tr.id,
                tr.label,
                tr.bbox.as_slice(),
                tr.velocity.x,
                tr.velocity.y,
                tr.missing_streak,
                tr.trail().count(),
            );
        }
    }
}
