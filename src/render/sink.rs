use std::io::Write;

use crate::{
    foundation::{
        core::{Canvas, Fps, FrameIndex},
        error::{ReelError, ReelResult},
    },
    scene::model::FrameOutput,
};

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SinkConfig {
    /// Output size the visual trees are laid out for.
    pub canvas: Canvas,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Number of frames that will be pushed.
    pub frames: u64,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested render range.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, frame: &FrameOutput) -> ReelResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ReelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameOutput>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[FrameOutput] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameOutput) -> ReelResult<()> {
        check_order(self.frames.last().map(|f| f.frame), frame.frame)?;
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes one JSON object per frame, one per line, preceded by a header line carrying the
/// [`SinkConfig`]. Each `begin` starts a new header; frames are accepted only between `begin`
/// and `end`.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    started: bool,
    last_idx: Option<FrameIndex>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            started: false,
            last_idx: None,
        }
    }

    /// Give the writer back once the sink is no longer needed.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn writer(&mut self) -> ReelResult<&mut W> {
        if !self.started {
            return Err(ReelError::evaluation("jsonl sink not started"));
        }
        Ok(&mut self.out)
    }

    fn write_line(&mut self, value: &impl serde::Serialize) -> ReelResult<()> {
        let w = self.writer()?;
        serde_json::to_writer(&mut *w, value)?;
        w.write_all(b"\n")
            .map_err(|e| ReelError::evaluation(format!("failed to write jsonl line: {e}")))
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.started = true;
        self.last_idx = None;
        self.write_line(&cfg)
    }

    fn push_frame(&mut self, frame: &FrameOutput) -> ReelResult<()> {
        check_order(self.last_idx, frame.frame)?;
        self.write_line(frame)?;
        self.last_idx = Some(frame.frame);
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.writer()?
            .flush()
            .map_err(|e| ReelError::evaluation(format!("failed to flush jsonl output: {e}")))?;
        self.started = false;
        Ok(())
    }
}

fn check_order(last: Option<FrameIndex>, idx: FrameIndex) -> ReelResult<()> {
    if let Some(last) = last
        && idx.0 <= last.0
    {
        return Err(ReelError::evaluation(format!(
            "sink received out-of-order frame index {} after {}",
            idx.0, last.0
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
