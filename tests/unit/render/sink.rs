use super::*;
use crate::scene::dsl::NodeBuilder;
use crate::foundation::core::Color;

fn cfg() -> SinkConfig {
    SinkConfig {
        canvas: Canvas::default(),
        fps: Fps::default(),
        frames: 2,
    }
}

fn frame(i: u64) -> FrameOutput {
    FrameOutput {
        frame: FrameIndex(i),
        root: NodeBuilder::stage("root", Color::rgb(0, 0, 0)).build(),
        artifacts: Vec::new(),
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(&frame(3)).unwrap();
    sink.push_frame(&frame(4)).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.config(), Some(cfg()));
    assert_eq!(
        sink.frames().iter().map(|f| f.frame.0).collect::<Vec<_>>(),
        [3, 4]
    );
    assert!(sink.is_ended());
}

#[test]
fn sinks_reject_out_of_order_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(&frame(5)).unwrap();
    assert!(sink.push_frame(&frame(5)).is_err());
    assert!(sink.push_frame(&frame(4)).is_err());

    let mut sink = JsonLinesSink::new(Vec::new());
    sink.begin(cfg()).unwrap();
    sink.push_frame(&frame(1)).unwrap();
    assert!(sink.push_frame(&frame(0)).is_err());
}

#[test]
fn jsonl_writes_header_then_one_line_per_frame() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.begin(cfg()).unwrap();
    sink.push_frame(&frame(0)).unwrap();
    sink.push_frame(&frame(1)).unwrap();
    sink.end().unwrap();

    let bytes = sink.into_inner();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);

    let header: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(header["frames"], 2);
    assert_eq!(header["canvas"]["width"], 1920);

    let second: FrameOutput = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(second, frame(1));
}

#[test]
fn jsonl_requires_begin() {
    let mut sink = JsonLinesSink::new(Vec::new());
    assert!(sink.push_frame(&frame(0)).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn jsonl_rejects_frames_after_end_until_restarted() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.begin(cfg()).unwrap();
    sink.push_frame(&frame(7)).unwrap();
    sink.end().unwrap();
    assert!(sink.push_frame(&frame(8)).is_err());
    assert!(sink.end().is_err());

    sink.begin(cfg()).unwrap();
    sink.push_frame(&frame(0)).unwrap();
    sink.end().unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text.lines().count(), 4);
}
