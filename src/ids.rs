use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const NODE_BITS: u64 = 10;
const SEQ_BITS: u64 = 12;
const NODE_MASK: u64 = (1 << NODE_BITS) - 1;
const SEQ_MASK: u64 = (1 << SEQ_BITS) - 1;

#[derive(Debug)]
struct Tick {
    millis: u64,
    sequence: u64,
}

/// Snowflake-style ID source: millisecond timestamp (41 bits effective),
/// node id (10 bits), per-millisecond sequence (12 bits). IDs from one
/// generator never repeat; generators with distinct node ids never collide.
#[derive(Debug)]
pub struct IdGenerator {
    node_id: u64,
    inner: Mutex<Tick>,
}

impl IdGenerator {
    pub fn new(node_id: u64) -> Self {
        Self {
            node_id: node_id & NODE_MASK,
            inner: Mutex::new(Tick {
                millis: 0,
                sequence: 0,
            }),
        }
    }

    /// Returns `None` when the sequence for the current millisecond is
    /// exhausted (4096 IDs) or the clock reads before the Unix epoch.
    pub fn next(&self) -> Option<u64> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()?
            .as_millis() as u64;

        let mut tick = self.inner.lock().ok()?;
        if millis > tick.millis {
            tick.millis = millis;
            tick.sequence = 0;
        }
        if tick.sequence > SEQ_MASK {
            return None;
        }

        let id = (tick.millis << (NODE_BITS + SEQ_BITS)) | (self.node_id << SEQ_BITS) | tick.sequence;
        tick.sequence += 1;
        Some(id)
    }
}
