//! JSONL replay of recorded hand landmark frames.
//!
//! One record per line:
//! `{"t": 0.033, "hand": [[0.41, 0.52], ...21 points...]}` or
//! `{"t": 0.066, "hand": null}` for a frame with no hand detected.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use super::{LandmarkSource, TimedFrame};
use crate::gesture::{HandFrame, LandmarkPoint};

#[derive(Debug, Deserialize)]
struct ReplayRecord {
    /// Seconds since the start of the recording
    t: f64,
    /// 21 normalized [x, y] points, or null when no hand was detected
    hand: Option<Vec<[f32; 2]>>,
}

/// Replays landmark frames from a line-oriented JSON reader
pub struct ReplaySource<R> {
    reader: R,
    line_no: usize,
}

impl ReplaySource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open landmark replay {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ReplaySource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }
}

impl<R: BufRead> LandmarkSource for ReplaySource<R> {
    fn next_frame(&mut self) -> Result<Option<TimedFrame>> {
        loop {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read landmark replay line")?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }

            let record: ReplayRecord = serde_json::from_str(&line)
                .with_context(|| format!("Malformed landmark record at line {}", self.line_no))?;

            let hand = match record.hand {
                None => None,
                Some(raw) => {
                    let points: Vec<LandmarkPoint> = raw
                        .iter()
                        .map(|&[x, y]| LandmarkPoint::new(x, y))
                        .collect();
                    let frame = HandFrame::new(&points).with_context(|| {
                        format!("Invalid hand frame at line {}", self.line_no)
                    })?;
                    Some(frame)
                }
            };

            return Ok(Some(TimedFrame {
                at: Duration::from_secs_f64(record.t),
                hand,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn hand_json(x: f32, y: f32) -> String {
        let points: Vec<String> = (0..21).map(|_| format!("[{x},{y}]")).collect();
        format!("[{}]", points.join(","))
    }

    #[test]
    fn test_replay_round() {
        let data = format!(
            "{{\"t\":0.0,\"hand\":{}}}\n{{\"t\":0.033,\"hand\":null}}\n",
            hand_json(0.4, 0.5)
        );
        let mut source = ReplaySource::new(Cursor::new(data));

        let first = source.next_frame().unwrap().unwrap();
        assert_eq!(first.at, Duration::from_secs(0));
        let hand = first.hand.unwrap();
        assert_eq!(hand.wrist(), LandmarkPoint::new(0.4, 0.5));

        let second = source.next_frame().unwrap().unwrap();
        assert_eq!(second.at, Duration::from_secs_f64(0.033));
        assert!(second.hand.is_none());

        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let data = format!("\n{{\"t\":0.1,\"hand\":{}}}\n\n", hand_json(0.2, 0.3));
        let mut source = ReplaySource::new(Cursor::new(data));

        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_wrong_point_count_is_error() {
        let data = "{\"t\":0.0,\"hand\":[[0.1,0.2],[0.3,0.4]]}\n";
        let mut source = ReplaySource::new(Cursor::new(data));
        assert!(source.next_frame().is_err());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let mut source = ReplaySource::new(Cursor::new("not json\n"));
        assert!(source.next_frame().is_err());
    }
}
