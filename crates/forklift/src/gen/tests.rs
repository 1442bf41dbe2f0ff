use super::*;
use proptest::prelude::*;

const TOL: f64 = 1e-4;

fn check_pair(pair: &SegmentPair, cfg: &GenCfg) {
    for (seg, pose) in pair.segments().into_iter().zip(pair.poses.iter()) {
        assert!((seg.length() - 2.0 * cfg.half_length).abs() < TOL);
        assert!((seg.midpoint() - pose.center()).norm() < TOL);
        assert!(pose.angle >= 0.0 && pose.angle < TAU);
        assert!(pose.distance >= 0.0 && pose.distance <= cfg.max_distance);
    }
}

#[test]
fn generator_yields_count_pairs() {
    let cfg = GenCfg {
        count: 37,
        ..GenCfg::default()
    };
    let gen = SegmentGenerator::new(cfg, 5).unwrap();
    assert_eq!(gen.len(), 37);
    let pairs: Vec<_> = gen.collect();
    assert_eq!(pairs.len(), 37);
    for p in &pairs {
        check_pair(p, &cfg);
    }
}

#[test]
fn pair_draws_both_angles_before_distances() {
    let cfg = GenCfg::default();
    let mut rng = StdRng::seed_from_u64(17);
    let pair = generate_pair(&mut rng, &cfg);
    let mut replay = StdRng::seed_from_u64(17);
    let angle1: f64 = replay.gen_range(0.0..TAU);
    let angle2: f64 = replay.gen_range(0.0..TAU);
    let dist1: f64 = replay.gen_range(0.0..=cfg.max_distance);
    let dist2: f64 = replay.gen_range(0.0..=cfg.max_distance);
    assert_eq!(pair.poses, [Pose::new(angle1, dist1), Pose::new(angle2, dist2)]);
}

#[test]
fn extreme_max_distance_rejected_before_sampling() {
    let cfg = GenCfg {
        count: 1,
        half_length: 1.5,
        max_distance: f64::MAX,
    };
    assert!(SegmentGenerator::new(cfg, 1).is_err());
    let at_limit = GenCfg {
        max_distance: crate::cfg::MAX_DISTANCE_LIMIT,
        ..cfg
    };
    let pairs: Vec<_> = SegmentGenerator::new(at_limit, 1).unwrap().collect();
    assert_eq!(pairs.len(), 1);
    assert!(pairs[0].poses.iter().all(|p| p.distance.is_finite()));
}

#[test]
fn generator_exposes_cfg_and_seed() {
    let cfg = GenCfg {
        count: 4,
        ..GenCfg::default()
    };
    let gen = SegmentGenerator::new(cfg, 31).unwrap();
    assert_eq!(gen.cfg(), &cfg);
    assert_eq!(gen.seed(), 31);
}

#[test]
fn same_seed_same_pairs() {
    let cfg = GenCfg {
        count: 1,
        ..GenCfg::default()
    };
    let a: Vec<_> = SegmentGenerator::new(cfg, 2025).unwrap().collect();
    let b: Vec<_> = SegmentGenerator::new(cfg, 2025).unwrap().collect();
    assert_eq!(a, b);
    let c: Vec<_> = SegmentGenerator::new(cfg, 2026).unwrap().collect();
    assert_ne!(a, c);
}

#[test]
fn iterator_matches_free_function() {
    let cfg = GenCfg {
        count: 20,
        ..GenCfg::default()
    };
    let mut rng = StdRng::seed_from_u64(11);
    let direct = generate(&cfg, &mut rng).unwrap();
    let streamed: Vec<_> = SegmentGenerator::new(cfg, 11).unwrap().collect();
    assert_eq!(direct, streamed);
}

#[test]
fn zero_max_distance_centers_everything() {
    let cfg = GenCfg {
        count: 50,
        max_distance: 0.0,
        ..GenCfg::default()
    };
    for pair in SegmentGenerator::new(cfg, 3).unwrap() {
        for (seg, pose) in pair.segments().into_iter().zip(pair.poses.iter()) {
            assert_eq!(pose.distance, 0.0);
            assert!(seg.midpoint().norm() < 1e-12);
            let d = pose.direction() * cfg.half_length;
            assert!((seg.a - d).norm() < 1e-12);
            assert!((seg.b + d).norm() < 1e-12);
        }
    }
}

#[test]
fn zero_count_is_empty() {
    let cfg = GenCfg {
        count: 0,
        ..GenCfg::default()
    };
    assert_eq!(SegmentGenerator::new(cfg, 1).unwrap().count(), 0);
}

#[test]
fn invalid_cfg_rejected() {
    let cfg = GenCfg {
        max_distance: f64::INFINITY,
        ..GenCfg::default()
    };
    assert!(matches!(
        SegmentGenerator::new(cfg, 0),
        Err(GeneratorError::InvalidParams { .. })
    ));
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generate(&cfg, &mut rng).is_err());
}

proptest! {
    #[test]
    fn pairs_hold_geometry_invariants(
        seed in any::<u64>(),
        half_length in 0.01f64..10.0,
        max_distance in 0.0f64..100.0,
    ) {
        let cfg = GenCfg { count: 16, half_length, max_distance };
        for pair in SegmentGenerator::new(cfg, seed).unwrap() {
            check_pair(&pair, &cfg);
        }
    }

    #[test]
    fn sampled_pose_in_range(seed in any::<u64>(), max_distance in 0.0f64..50.0) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..32 {
            let p = sample_pose(&mut rng, max_distance);
            prop_assert!(p.angle >= 0.0 && p.angle < TAU);
            prop_assert!(p.distance >= 0.0 && p.distance <= max_distance);
        }
    }
}
