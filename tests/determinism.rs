mod common;

use std::collections::HashSet;

use common::{everything_on, signature, RecordingTarget};
use pixel_plant::phenotype::{FlowerShape, StemShape};
use pixel_plant::{generate_plant, Background, Phenotype, RenderingBuffer};

#[test]
fn test_repeated_renders_are_identical() {
    for p in [Phenotype::DEFAULT, everything_on()] {
        for frame in 0..4 {
            let mut a = RenderingBuffer::canvas();
            let mut b = RenderingBuffer::canvas();
            generate_plant(&mut a, &p, "same-seed", frame, Background::Transparent);
            generate_plant(&mut b, &p, "same-seed", frame, Background::Transparent);
            assert_eq!(a.data(), b.data(), "frame {}", frame);
        }
    }
}

#[test]
fn test_test_seed_signature_is_stable() {
    let first = signature(&Phenotype::DEFAULT, "test-seed", 0, Background::Transparent);
    assert!(!first.is_empty());
    for _ in 0..3 {
        assert_eq!(
            signature(&Phenotype::DEFAULT, "test-seed", 0, Background::Transparent),
            first
        );
    }
}

#[test]
fn test_distinct_seeds_give_distinct_plants() {
    let sigs: HashSet<Vec<String>> = (0..10)
        .map(|i| signature(&Phenotype::DEFAULT, &format!("seed-{}", i), 0, Background::Transparent))
        .collect();
    assert!(sigs.len() >= 9, "only {} distinct renders", sigs.len());
}

#[test]
fn test_frame_zero_and_one_differ() {
    for p in [
        Phenotype::DEFAULT,
        Phenotype {
            stem: StemShape::Vine,
            ..Phenotype::DEFAULT
        },
    ] {
        let f0 = signature(&p, "breeze", 0, Background::Transparent);
        let f1 = signature(&p, "breeze", 1, Background::Transparent);
        assert_ne!(f0, f1);
    }
}

#[test]
fn test_only_frame_mod_four_matters() {
    let p = everything_on();
    for frame in 0..4 {
        let base = signature(&p, "cycle", frame, Background::Dark);
        assert_eq!(signature(&p, "cycle", frame + 4, Background::Dark), base);
        assert_eq!(signature(&p, "cycle", frame - 8, Background::Dark), base);
    }
}

#[test]
fn test_calm_frames_coincide() {
    // Frames 0 and 2 both have zero wind and the same streams.
    let p = Phenotype {
        flower_shape: FlowerShape::Tulip,
        ..Phenotype::DEFAULT
    };
    assert_eq!(
        signature(&p, "calm", 0, Background::Transparent),
        signature(&p, "calm", 2, Background::Transparent)
    );
}

#[test]
fn test_disabling_a_layer_keeps_other_layers() {
    // Glow draws last from its own stream, so every pixel of the plain
    // render that the glow did not overwrite must survive unchanged.
    let plain = Phenotype::DEFAULT;
    let glowing = Phenotype {
        glow: true,
        ..plain
    };
    let mut a = RenderingBuffer::canvas();
    let mut b = RenderingBuffer::canvas();
    generate_plant(&mut a, &plain, "layers", 1, Background::Transparent);
    generate_plant(&mut b, &glowing, "layers", 1, Background::Transparent);
    let changed = a
        .painted_pixels()
        .filter(|&(x, y, c)| b.get(x, y) != c)
        .count();
    assert!(changed < 80, "{} pixels changed", changed);
    assert!(b.painted_pixels().count() > a.painted_pixels().count());
}

#[test]
fn test_custom_target_matches_buffer() {
    let mut target = RecordingTarget::new();
    let mut buf = RenderingBuffer::canvas();
    generate_plant(&mut target, &everything_on(), "target", 3, Background::White);
    generate_plant(&mut buf, &everything_on(), "target", 3, Background::White);
    assert_eq!(target.buf, buf);
    assert!(target.writes > 0);
}
