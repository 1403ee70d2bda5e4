use super::*;
use crate::{
    foundation::core::FrameIndex,
    scene::{dsl::NodeBuilder, model::Artifact, model::ArtifactKind},
};

fn tree(opacity: f64) -> Node {
    NodeBuilder::stage("root", Color::rgb(10, 10, 15))
        .child(
            NodeBuilder::shape("dot", Shape::Ellipse, Fill::Solid(Color::rgb(74, 222, 128)))
                .size(20.0, 20.0)
                .opacity(opacity)
                .build(),
        )
        .build()
}

#[test]
fn fingerprint_is_deterministic_for_same_tree() {
    assert_eq!(fingerprint_node(&tree(1.0)), fingerprint_node(&tree(1.0)));
}

#[test]
fn fingerprint_changes_when_tree_changes() {
    assert_ne!(fingerprint_node(&tree(1.0)), fingerprint_node(&tree(0.5)));

    let mut moved = tree(1.0);
    moved.children[0].transform.translate.x = 1.0;
    assert_ne!(fingerprint_node(&tree(1.0)), fingerprint_node(&moved));
}

#[test]
fn frame_index_and_artifacts_are_not_hashed() {
    let a = FrameOutput {
        frame: FrameIndex(0),
        root: tree(1.0),
        artifacts: vec![Artifact {
            kind: ArtifactKind::Thumbnail,
            filename: "thumbnail.jpeg".to_owned(),
        }],
    };
    let b = FrameOutput {
        frame: FrameIndex(42),
        artifacts: Vec::new(),
        ..a.clone()
    };
    assert_eq!(fingerprint_frame(&a), fingerprint_frame(&b));
}

#[test]
fn display_is_32_hex_digits() {
    let s = fingerprint_node(&tree(1.0)).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}
