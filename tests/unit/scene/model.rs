use super::*;
use crate::scene::dsl::{NodeBuilder, font, label};

fn sample_tree() -> Node {
    NodeBuilder::stage("root", Color::rgb(10, 10, 15))
        .child(
            NodeBuilder::group("col")
                .child(NodeBuilder::text("title", label(font("Inter", 40.0, 700), Color::rgb(255, 255, 255), "Hi")).build())
                .build(),
        )
        .child(NodeBuilder::image("bg", "https://example.invalid/bg.png").build())
        .build()
}

#[test]
fn find_walks_depth_first() {
    let root = sample_tree();
    assert_eq!(root.find("title").map(|n| n.id.as_str()), Some("title"));
    assert!(root.find("missing").is_none());
    assert_eq!(root.count(), 4);
}

#[test]
fn text_concatenates_runs() {
    let root = sample_tree();
    assert_eq!(root.find("title").and_then(Node::text).as_deref(), Some("Hi"));
    assert!(root.find("bg").and_then(Node::text).is_none());
}

#[test]
fn json_roundtrip_preserves_tree() {
    let root = sample_tree();
    let s = serde_json::to_string(&root).unwrap();
    let back: Node = serde_json::from_str(&s).unwrap();
    assert_eq!(back, root);
    assert!(s.contains("\"#0a0a0fff\""));
}

#[test]
fn frame_output_serializes_artifacts() {
    let out = FrameOutput {
        frame: FrameIndex(0),
        root: sample_tree(),
        artifacts: vec![Artifact {
            kind: ArtifactKind::Thumbnail,
            filename: "thumbnail.jpeg".to_owned(),
        }],
    };
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["artifacts"][0]["kind"], "thumbnail");
    assert_eq!(v["frame"], 0);
}
