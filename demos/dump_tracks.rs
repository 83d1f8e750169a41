use ltrack::{Detection, LinearTracker, Tracking};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::BufRead;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args();

    let _ = args.next().unwrap();
    let in_file_name = args.next().expect("expected detections file name");
    let src = args.next().unwrap_or_else(|| "file".to_string());

    let dets_file = std::fs::File::open(in_file_name)?;

    let mut tracker = LinearTracker::default();

    for line in std::io::BufReader::new(dets_file).lines() {
        let line = line?;

        let (ts, dets): (u64, Vec<Detection>) = if let Some(idx) = line.find(':') {
            let (ts, vector) = line.split_at(idx);

            match (ts.trim().parse::<u64>(), serde_json::from_str(&vector[1..])) {
                (Ok(ts), Ok(vector)) => (ts, vector),
                (Ok(_), _) => {
                    eprintln!("wrong file format: parse json failed");
                    continue;
                }
                (_, Ok(_)) => {
                    eprintln!("wrong file format: parse timestamp failed");
                    continue;
                }
                _ => {
                    eprintln!("wrong file format: parse failed");
                    continue;
                }
            }
        } else {
            eprintln!("wrong file format: expected `:`");
            continue;
        };

        let tracks = tracker.update(&dets, &src)?;

        for t in tracks.iter() {
            let b = t.bbox.as_ltrb();
            println!(
                "{} {} {} {:.1} {:.1} {:.1} {:.1} {:.2} {}",
                ts,
                t.id,
                t.label,
                b.left(),
                b.top(),
                b.right(),
                b.bottom(),
                t.score,
                t.missing_streak
            );
        }
    }

    Ok(())
}
