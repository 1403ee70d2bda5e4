use rayon::prelude::*;

use crate::{
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
    render::sink::{FrameSink, SinkConfig},
    scene::model::FrameOutput,
    timeline::sequencer::Timeline,
};

/// Render a single frame.
///
/// This is the primary "one-shot" API for producing a visual tree from a [`Timeline`].
pub fn render_frame(timeline: &Timeline, frame: FrameIndex) -> ReelResult<FrameOutput> {
    timeline.render(frame)
}

/// Render a range of frames (inclusive start, exclusive end) sequentially.
pub fn render_frames(timeline: &Timeline, range: FrameRange) -> ReelResult<Vec<FrameOutput>> {
    render_frames_with_stats(timeline, range, &RenderThreading::default()).map(|(frames, _)| frames)
}

/// Threading and chunking for range renders.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Render each chunk on a rayon pool.
    pub parallel: bool,
    /// Frames per chunk; 0 is treated as 1.
    pub chunk_size: usize,
    /// Pool size; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters for a range render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Frames in the requested range.
    pub frames_total: u64,
    /// Frames actually rendered.
    pub frames_rendered: u64,
    /// Side outputs declared by the rendered frames.
    pub artifacts: u64,
}

impl RenderStats {
    fn absorb(&mut self, frames: &[FrameOutput]) {
        let n = frames.len() as u64;
        self.frames_total += n;
        self.frames_rendered += n;
        self.artifacts += frames.iter().map(|f| f.artifacts.len() as u64).sum::<u64>();
    }
}

/// Render a range, returning the frames in order together with counters.
#[tracing::instrument(skip(timeline, threading), fields(start = range.start.0, end = range.end.0))]
pub fn render_frames_with_stats(
    timeline: &Timeline,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<(Vec<FrameOutput>, RenderStats)> {
    check_range(timeline, range)?;

    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let mut stats = RenderStats::default();
    let pool = threading
        .parallel
        .then(|| build_thread_pool(threading.threads))
        .transpose()?;

    for_each_chunk(range, threading.chunk_size, |chunk| {
        let mut frames = render_chunk(timeline, chunk, pool.as_ref())?;
        stats.absorb(&frames);
        out.append(&mut frames);
        Ok(())
    })?;

    tracing::info!(
        frames = stats.frames_rendered,
        artifacts = stats.artifacts,
        parallel = threading.parallel,
        "range rendered"
    );
    Ok((out, stats))
}

/// Render a range straight into `sink`, chunk by chunk, in strictly increasing frame order.
#[tracing::instrument(skip(timeline, threading, sink), fields(start = range.start.0, end = range.end.0))]
pub fn render_to_sink(
    timeline: &Timeline,
    range: FrameRange,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> ReelResult<RenderStats> {
    check_range(timeline, range)?;

    let pool = threading
        .parallel
        .then(|| build_thread_pool(threading.threads))
        .transpose()?;
    let mut stats = RenderStats::default();

    sink.begin(SinkConfig {
        canvas: timeline.canvas(),
        fps: timeline.fps(),
        frames: range.len_frames(),
    })?;
    for_each_chunk(range, threading.chunk_size, |chunk| {
        let frames = render_chunk(timeline, chunk, pool.as_ref())?;
        for frame in &frames {
            sink.push_frame(frame)?;
        }
        stats.absorb(&frames);
        Ok(())
    })?;
    sink.end()?;

    tracing::info!(
        frames = stats.frames_rendered,
        artifacts = stats.artifacts,
        parallel = threading.parallel,
        "range written to sink"
    );
    Ok(stats)
}

fn check_range(timeline: &Timeline, range: FrameRange) -> ReelResult<()> {
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    if range.end.0 > timeline.total_frames() {
        return Err(ReelError::validation(format!(
            "render range end {} exceeds timeline length {}",
            range.end.0,
            timeline.total_frames()
        )));
    }
    Ok(())
}

fn for_each_chunk(
    range: FrameRange,
    chunk_size: usize,
    mut f: impl FnMut(FrameRange) -> ReelResult<()>,
) -> ReelResult<()> {
    let chunk_size = normalized_chunk_size(chunk_size);
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| ReelError::evaluation(format!("invalid chunk range: {e}")))?;
        f(chunk)?;
        chunk_start = chunk_end;
    }
    Ok(())
}

fn render_chunk(
    timeline: &Timeline,
    range: FrameRange,
    pool: Option<&rayon::ThreadPool>,
) -> ReelResult<Vec<FrameOutput>> {
    match pool {
        Some(pool) => pool.install(|| {
            (range.start.0..range.end.0)
                .into_par_iter()
                .map(|f| timeline.render(FrameIndex(f)))
                .collect()
        }),
        None => (range.start.0..range.end.0)
            .map(|f| timeline.render(FrameIndex(f)))
            .collect(),
    }
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
