//! Ranking and reporting of counted tokens.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{cmp::Ordering, fmt, time::Duration};

use log::info;
use serde::{Serialize, Serializer};

/// Number of tokens shown in a report.
pub const TOP_N: usize = 10;

/// The counting strategy a report was produced with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Linear,
    HashTable,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linearly"),
            Self::HashTable => f.write_str("with Hash Table"),
        }
    }
}

/// Logs the banner opening a pass, before any token is counted.
pub fn log_start(strategy: Strategy, path: &str, size_bytes: usize) {
    info!("Analyzing {} {}", path, strategy);
    info!("  Size: {} bytes", size_bytes);
}

/// Orders (token, count) pairs by decreasing count.
pub fn by_count_desc(a: &(&[u8], usize), b: &(&[u8], usize)) -> Ordering {
    b.1.cmp(&a.1)
}

/// Sorts entries by decreasing count. Equal counts keep their relative order.
pub fn rank(mut entries: Vec<(&[u8], usize)>) -> Vec<(&[u8], usize)> {
    entries.sort_by(by_count_desc);
    entries
}

/// One line of a report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ranked {
    /// 0-based position in the ranking.
    pub rank: usize,
    /// The token, with invalid UTF-8 replaced.
    pub token: String,
    pub count: usize,
}

/// Outcome of one counting pass. Owns its data, nothing borrows from the counter or the buffer.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub path: String,
    pub size_bytes: usize,
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    /// Time spent counting, ranking excluded.
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs")]
    pub elapsed: Duration,
    pub top: Vec<Ranked>,
}

fn as_secs<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl Report {
    /// Ranks `entries` and keeps the first [`TOP_N`].
    pub fn new(
        strategy: Strategy,
        path: &str,
        size_bytes: usize,
        total_tokens: usize,
        entries: Vec<(&[u8], usize)>,
        elapsed: Duration,
    ) -> Self {
        let distinct_tokens = entries.len();
        let top = rank(entries)
            .into_iter()
            .take(TOP_N)
            .enumerate()
            .map(|(rank, (token, count))| Ranked {
                rank,
                token: String::from_utf8_lossy(token).into_owned(),
                count,
            })
            .collect();

        Self {
            strategy,
            path: path.to_string(),
            size_bytes,
            total_tokens,
            distinct_tokens,
            elapsed,
            top,
        }
    }

    /// Logs the distinct count, the top tokens and the elapsed time.
    pub fn log(&self) {
        info!("  Tokens: {} tokens", self.distinct_tokens);
        info!("  Top {} tokens", TOP_N);
        for Ranked { rank, token, count } in &self.top {
            info!("    {}: {} => {}", rank, token, count);
        }
        info!("  Elapsed time {:.3}s", self.elapsed.as_secs_f64());
    }
}
