use ltrack::error::Error;
use ltrack::{Detection, LinearTracker, TrackerConfig, Tracking};

fn det(x: f64, y: f64, w: f64, h: f64) -> Detection {
    Detection {
        x,
        y,
        w,
        h,
        score: 0.9,
        label: "person".into(),
    }
}

#[test]
fn sources_keep_separate_id_spaces() {
    let mut front = LinearTracker::default();

    let north = front.update(&[det(10.0, 10.0, 20.0, 20.0)], "north").unwrap();
    let south = front
        .update(
            &[det(300.0, 10.0, 20.0, 20.0), det(400.0, 10.0, 20.0, 20.0)],
            "south",
        )
        .unwrap();

    assert_eq!(north.len(), 1);
    assert_eq!(north[0].id, 1);

    let ids: Vec<u32> = south.iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 2]);

    assert_eq!(front.tracks("north").len(), 1);
    assert_eq!(front.tracks("south").len(), 2);
    assert!(front.tracks("nowhere").is_empty());
}

#[test]
fn update_result_matches_snapshot() {
    let mut front = LinearTracker::default();

    let updated = front.update(&[det(10.0, 10.0, 20.0, 20.0)], "cam").unwrap();
    let snapshot = front.tracks("cam");

    assert_eq!(updated.len(), snapshot.len());
    assert_eq!(updated[0].id, snapshot[0].id);
    assert_eq!(updated[0].bbox, snapshot[0].bbox);
}

#[test]
fn malformed_box_rejects_the_whole_frame() {
    let mut front = LinearTracker::default();
    front.update(&[det(10.0, 10.0, 20.0, 20.0)], "cam").unwrap();

    let bad = [det(12.0, 10.0, 20.0, 20.0), det(f64::NAN, 0.0, 5.0, 5.0)];
    let err = front.update(&bad, "cam").unwrap_err();

    assert!(matches!(err, Error::MalformedBox { index: 1 }));
    assert!(err.to_string().contains("detection 1"));

    // the good detection in the bad frame was not applied
    let tracks = front.tracks("cam");
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].missing_streak, 0);
    assert_eq!(tracks[0].bbox.left(), 10.0);
}

#[test]
fn negative_size_is_malformed() {
    let mut front = LinearTracker::default();

    let err = front
        .update(&[det(0.0, 0.0, -5.0, 10.0)], "cam")
        .unwrap_err();

    assert!(matches!(err, Error::MalformedBox { index: 0 }));
    // the frame was rejected before the source existed
    assert!(front.tracks("cam").is_empty());
}

#[test]
fn out_of_range_score_is_rejected() {
    let mut front = LinearTracker::default();

    let mut d = det(0.0, 0.0, 10.0, 10.0);
    d.score = 1.5;

    let err = front.update(&[d], "cam").unwrap_err();
    match err {
        Error::ScoreOutOfRange { index, score } => {
            assert_eq!(index, 0);
            assert_eq!(score, 1.5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reset_only_touches_the_named_source() {
    let mut front = LinearTracker::default();
    front.update(&[det(10.0, 10.0, 20.0, 20.0)], "a").unwrap();
    front.update(&[det(10.0, 10.0, 20.0, 20.0)], "b").unwrap();

    front.reset("a");

    assert!(front.tracks("a").is_empty());
    assert_eq!(front.tracks("b").len(), 1);

    // ids restart from 1 on the cleared source
    let tracks = front.update(&[det(50.0, 50.0, 20.0, 20.0)], "a").unwrap();
    assert_eq!(tracks[0].id, 1);
}

#[test]
fn reset_all_clears_every_source() {
    let mut front = LinearTracker::default();
    front.update(&[det(10.0, 10.0, 20.0, 20.0)], "a").unwrap();
    front.update(&[det(10.0, 10.0, 20.0, 20.0)], "b").unwrap();

    front.reset_all();

    assert!(front.tracks("a").is_empty());
    assert!(front.tracks("b").is_empty());
}

#[test]
fn occlusion_gap_keeps_identity() {
    let config = TrackerConfig {
        max_missing_streak: 5,
        ..TrackerConfig::default()
    };
    let mut front = LinearTracker::new(config);

    // constant 4 px/frame to the right
    for frame in 0..4 {
        let x = 10.0 + 4.0 * frame as f64;
        front.update(&[det(x, 50.0, 30.0, 30.0)], "cam").unwrap();
    }

    // three frames with the object hidden
    for _ in 0..3 {
        let tracks = front.update(&[], "cam").unwrap();
        assert_eq!(tracks.len(), 1);
    }

    // reappears where the motion model expects it
    let tracks = front.update(&[det(38.0, 50.0, 30.0, 30.0)], "cam").unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, 1);
    assert_eq!(tracks[0].missing_streak, 0);
}
