use app_core::NoiseField;

#[test]
fn output_stays_in_unit_range_with_default_detail() {
    let field = NoiseField::new(1);
    for ix in 0..50 {
        for iy in 0..50 {
            let x = ix as f32 * 0.37;
            let y = iy as f32 * 0.53;
            let v = field.sample(x, y);
            assert!((0.0..1.0).contains(&v), "sample({x}, {y}) = {v}");
        }
    }
}

#[test]
fn same_seed_is_deterministic() {
    let a = NoiseField::new(42);
    let b = NoiseField::new(42);
    for i in 0..100 {
        let x = i as f32 * 0.19;
        assert_eq!(a.sample(x, x * 1.7), b.sample(x, x * 1.7));
    }
}

#[test]
fn different_seeds_differ() {
    let a = NoiseField::new(1);
    let b = NoiseField::new(2);
    let mut any_diff = false;
    for i in 0..100 {
        let x = i as f32 * 0.19;
        if a.sample(x, x * 1.7) != b.sample(x, x * 1.7) {
            any_diff = true;
            break;
        }
    }
    assert!(any_diff);
}

#[test]
fn negative_inputs_mirror_positive_ones() {
    let field = NoiseField::new(7);
    assert_eq!(field.sample(-1.25, -3.5), field.sample(1.25, 3.5));
}

#[test]
fn sampling_is_continuous() {
    let field = NoiseField::new(3);
    let mut prev = field.sample(0.0, 2.5);
    for i in 1..2000 {
        let x = i as f32 * 1e-3;
        let v = field.sample(x, 2.5);
        assert!(
            (v - prev).abs() < 0.05,
            "jump of {} at x = {x}",
            (v - prev).abs()
        );
        prev = v;
    }
}

#[test]
fn set_detail_changes_the_field() {
    let mut field = NoiseField::new(11);
    let before = field.sample(1.37, 2.41);
    field.set_detail(8, 0.9);
    let after = field.sample(1.37, 2.41);
    assert_ne!(before, after);
}

#[test]
fn set_detail_ignores_non_positive_arguments() {
    let mut field = NoiseField::new(11);
    let before = field.sample(1.37, 2.41);
    field.set_detail(0, 0.0);
    assert_eq!(field.sample(1.37, 2.41), before);
    field.set_detail(-3, -0.5);
    assert_eq!(field.sample(1.37, 2.41), before);
}
