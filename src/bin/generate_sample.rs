//! Writes a deterministic sample dataset (one JSON document per channel)
//! into `channel-ratings/` for manual runs of the main binary.

use channel_ratings::ChannelRating;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (name, tags) pairs; scores are derived from simulated P/Z/N weights.
    let channels: Vec<(&str, Vec<&str>)> = vec![
        ("SaintsAndLatte", vec!["catholic", "religion"]),
        ("ReasonOverRite", vec!["atheist", "popular"]),
        ("GraceNotesDaily", vec!["protestant", "religion"]),
        ("CrescentLectures", vec!["islam", "education"]),
        ("SliceOfLifeSubs", vec!["anime"]),
        ("PrideAndPixels", vec!["queer", "popular"]),
        ("EndgameEtudes", vec!["chess", "education"]),
        ("OpeningPrepLab", vec!["chess"]),
        ("CivicsCrashCart", vec!["education", "left"]),
        ("HeartlandSignal", vec!["right", "popular"]),
        ("UnionHallLive", vec!["left"]),
        ("QuietHomilies", vec!["catholic"]),
    ];

    let out_dir = std::path::Path::new("channel-ratings");
    std::fs::create_dir_all(out_dir).expect("Failed to create output directory");

    for (name, tags) in &channels {
        // Weighted sentiment averages, normalized to sum to 1.
        let p = rng.range(0.1, 0.8);
        let n = rng.range(0.05, 1.0 - p - 0.05);
        let z = 1.0 - p - n;

        let kindness = (p - n) / (p + n);
        let volatility = 1.0 / (z + (p - n).abs());

        let record = ChannelRating {
            channel_name: name.to_string(),
            num_comments_analyzed: (rng.range(50.0, 5000.0)) as u64,
            kindness: (kindness * 1000.0).round() / 1000.0,
            volatility: (volatility * 1000.0).round() / 1000.0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };

        let path = out_dir.join(format!("{name}.json"));
        let body = serde_json::to_string_pretty(&record).expect("Failed to serialize record");
        std::fs::write(&path, body).expect("Failed to write record file");
    }

    println!("Wrote {} rating documents to {}", channels.len(), out_dir.display());
}
