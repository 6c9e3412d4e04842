use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Summary table indexed by a bounded draw; order is part of the contract.
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: DateTime<Utc>,
    pub temperature_c: i32,
    pub summary: String,
}

/// Bounded integer randomness consumed by forecast generation.
///
/// Injected rather than global so handlers stay deterministic under test.
/// Implementations shared across requests own their thread safety.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `[low, high)`.
    fn next_in_range(&self, low: i32, high: i32) -> i32;
}

pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_in_range(&self, low: i32, high: i32) -> i32 {
        use rand::Rng;
        rand::thread_rng().gen_range(low..high)
    }
}

/// Deterministic source resolving every draw to the same zero-based offset
/// from the low bound of the requested range, so `FixedDraw(0)` pins the
/// minimum of every range. Used by tests.
pub struct FixedDraw(pub i32);

impl RandomSource for FixedDraw {
    fn next_in_range(&self, low: i32, high: i32) -> i32 {
        low + self.0.rem_euclid(high - low)
    }
}

pub fn generate_forecast(random: &dyn RandomSource, now: DateTime<Utc>) -> Vec<ForecastEntry> {
    (1..=5).map(|day| create_entry(random, now, day)).collect()
}

fn create_entry(random: &dyn RandomSource, now: DateTime<Utc>, day: i64) -> ForecastEntry {
    // One temperature draw then one summary draw per entry; tests rely on
    // this consumption order.
    let temperature_c = random.next_in_range(-20, 55);
    let summary = SUMMARIES[random.next_in_range(0, SUMMARIES.len() as i32) as usize];

    ForecastEntry {
        date: now + Duration::days(day),
        temperature_c,
        summary: summary.to_string(),
    }
}
