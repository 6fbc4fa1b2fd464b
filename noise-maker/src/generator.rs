use chrono::{Duration, Local};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery", 10),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const MAX_AGE_SECS: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    TooFewTokens,
    BadTimestamp,
    BadDuration,
}

const MALFORMED: [Malformed; 3] = [
    Malformed::TooFewTokens,
    Malformed::BadTimestamp,
    Malformed::BadDuration,
];

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, table: &[(T, u8)]) -> T {
    table
        .choose_weighted(rng, |(_, w)| *w)
        .map(|(v, _)| *v)
        .unwrap_or(table[0].0)
}

pub fn generate_access_log<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    );
    let age = Duration::seconds(rng.random_range(0..MAX_AGE_SECS));
    let timestamp = (Local::now() - age).format("%d/%b/%Y:%H:%M:%S %z");
    let method = pick(rng, &METHODS);
    let path = pick(rng, &PATHS);
    let status = pick(rng, &STATUS);
    let size = rng.random_range(100..2000);
    let duration = rng.random_range(1..1500);

    format!("{ip} - - [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {size} {duration}")
}

pub fn generate_malformed_log<R: Rng + ?Sized>(rng: &mut R) -> String {
    let line = generate_access_log(rng);
    let kind = MALFORMED.choose(rng).copied().unwrap_or(Malformed::TooFewTokens);
    corrupt(&line, kind)
}

pub fn corrupt(line: &str, kind: Malformed) -> String {
    match kind {
        Malformed::TooFewTokens => line.split(' ').take(5).collect::<Vec<_>>().join(" "),
        Malformed::BadTimestamp => line.replacen("[", "[99/", 1),
        Malformed::BadDuration => match line.rsplit_once(' ') {
            Some((head, _)) => format!("{head} n/a"),
            None => line.to_string(),
        },
    }
}
