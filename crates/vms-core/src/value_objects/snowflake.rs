//! 64-bit time-sortable IDs.
//!
//! Layout, from the high bit down: 42 bits of milliseconds since the
//! service epoch, 10 bits of worker ID, 12 bits of per-millisecond
//! sequence. Sorting by ID is sorting by creation time.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const WORKER_BITS: u8 = 10;
const SEQUENCE_BITS: u8 = 12;
const MAX_WORKER_ID: u16 = (1 << WORKER_BITS) - 1;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;

/// Time-sortable 64-bit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Service epoch: 2024-01-01 00:00:00 UTC, in milliseconds
    pub const EPOCH: i64 = 1_704_067_200_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw value, for binding into SQL queries.
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Creation time in milliseconds since the Unix epoch.
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> (WORKER_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    /// Worker that generated this ID.
    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) as u16) & MAX_WORKER_ID
    }

    /// Position within the generating millisecond.
    #[inline]
    pub fn sequence(&self) -> u16 {
        (self.0 & SEQUENCE_MASK) as u16
    }

    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// JSON carries IDs as strings; 64-bit integers overflow JS numbers.
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Accept either a string or a bare integer on the way in.
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(i64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(n) => Ok(Snowflake(n)),
            Repr::Str(s) => s
                .parse::<i64>()
                .map(Snowflake)
                .map_err(|_| de::Error::custom("invalid snowflake string")),
        }
    }
}

/// Lock-free ID generator for one worker.
///
/// The whole generator state lives in a single atomic: the last issued
/// millisecond shifted left by 12 bits, plus the sequence used within it.
/// A CAS claims the next slot; losers retry.
pub struct SnowflakeGenerator {
    worker_id: u16,
    state: AtomicI64,
}

impl SnowflakeGenerator {
    /// # Panics
    /// Panics if `worker_id` does not fit in 10 bits.
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id <= MAX_WORKER_ID, "Worker ID must be < 1024");
        Self {
            worker_id,
            state: AtomicI64::new(0),
        }
    }

    /// Issue the next ID. Monotonic per generator even if the wall clock
    /// steps backwards, since the state never moves back in time.
    pub fn generate(&self) -> Snowflake {
        loop {
            let observed = self.state.load(Ordering::Acquire);
            let last_ms = observed >> SEQUENCE_BITS;
            let last_seq = observed & SEQUENCE_MASK;

            let now = current_millis();
            let (ms, seq) = if now > last_ms {
                (now, 0)
            } else if last_seq < SEQUENCE_MASK {
                (last_ms, last_seq + 1)
            } else {
                // 4096 IDs issued this millisecond; wait it out
                std::hint::spin_loop();
                continue;
            };

            let next = (ms << SEQUENCE_BITS) | seq;
            if self
                .state
                .compare_exchange(observed, next, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                let id = ((ms - Snowflake::EPOCH) << (WORKER_BITS + SEQUENCE_BITS))
                    | (i64::from(self.worker_id) << SEQUENCE_BITS)
                    | seq;
                return Snowflake::new(id);
            }
        }
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[inline]
fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn raw_value_round_trips() {
        let id = Snowflake::new(987_654_321);
        assert_eq!(id.into_inner(), 987_654_321);
        assert_eq!(id.to_string(), "987654321");
        assert_eq!("987654321".parse::<Snowflake>().unwrap(), id);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(Snowflake::parse("12ab").is_err());
        assert!(Snowflake::parse("").is_err());
    }

    #[test]
    fn json_uses_strings_outbound() {
        let id = Snowflake::new(123_456_789_012_345_678);
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"123456789012345678\""
        );
    }

    #[test]
    fn json_accepts_string_or_integer_inbound() {
        let from_str: Snowflake = serde_json::from_str("\"123456789012345678\"").unwrap();
        let from_num: Snowflake = serde_json::from_str("54321").unwrap();

        assert_eq!(from_str.into_inner(), 123_456_789_012_345_678);
        assert_eq!(from_num.into_inner(), 54_321);
    }

    #[test]
    fn bit_fields_unpack() {
        let gen = SnowflakeGenerator::new(731);
        let id = gen.generate();

        assert_eq!(id.worker_id(), 731);
        assert!(id.sequence() < 4096);

        let now = current_millis();
        assert!(id.timestamp() <= now);
        assert!(id.timestamp() > Snowflake::EPOCH);
    }

    #[test]
    fn ids_sort_by_issue_order() {
        let gen = SnowflakeGenerator::new(3);
        let mut previous = Snowflake::default();

        for _ in 0..2000 {
            let id = gen.generate();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn concurrent_generation_never_collides() {
        let gen = Arc::new(SnowflakeGenerator::new(7));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gen = Arc::clone(&gen);
                thread::spawn(move || (0..1000).map(|_| gen.generate()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate ID {id}");
            }
        }
        assert_eq!(seen.len(), 4000);
    }

    #[test]
    #[should_panic(expected = "Worker ID must be < 1024")]
    fn oversized_worker_id_panics() {
        SnowflakeGenerator::new(1024);
    }
}
