//! Touchdown log - one JSON object per line.
//!
//! Each touchdown is appended as a record so a run can be inspected or
//! replayed offline. The score in a record already includes its touchdown.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use tris_core::Touchdown;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TouchdownRecord {
    pub seq: u64,
    pub piece_id: u32,
    pub shape: &'static str,
    pub color: &'static str,
    /// Absolute `[x, y]` of the settled cells
    pub cells: [[i32; 2]; 4],
    pub rows_cleared: Vec<usize>,
    pub score_delta: u32,
    pub score: u32,
    pub forced: bool,
}

impl TouchdownRecord {
    pub fn new(seq: u64, touchdown: &Touchdown) -> Self {
        let cells = touchdown.piece.cells().map(|c| [c.x, c.y]);
        Self {
            seq,
            piece_id: touchdown.piece_id,
            shape: touchdown.piece.shape.as_str(),
            color: touchdown.piece.color.as_str(),
            cells,
            rows_cleared: touchdown.clear.rows.to_vec(),
            score_delta: touchdown.clear.score_delta,
            score: touchdown.score,
            forced: touchdown.forced,
        }
    }
}

/// Line-delimited JSON writer for touchdown records
pub struct TouchdownLog<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
}

impl TouchdownLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening touchdown log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TouchdownLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    /// Number of records written so far
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, touchdown: &Touchdown) -> Result<()> {
        self.seq += 1;
        let record = TouchdownRecord::new(self.seq, touchdown);

        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
