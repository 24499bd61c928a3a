use app_core::{
    build_frame, dots_per_ring, max_dots, NoiseField, ParamId, ParameterStore, MAX_RINGS,
    NOISE_SEED, RADIUS_DIVISOR,
};

fn run_frame(store: &ParameterStore, time_ms: f32) -> Vec<glam::Vec2> {
    let mut noise = NoiseField::new(NOISE_SEED);
    let mut out = Vec::new();
    build_frame(store, &mut noise, time_ms, 300.0, 300.0, &mut out);
    out
}

#[test]
fn emits_one_ring_of_dots_per_circle() {
    let store = ParameterStore::new();
    let dots = run_frame(&store, 0.0);
    assert_eq!(dots.len(), 3 * dots_per_ring());

    let mut store = ParameterStore::new();
    store.set(ParamId::NumberOfCircles, 10.0);
    assert_eq!(run_frame(&store, 0.0).len(), 10 * dots_per_ring());
}

#[test]
fn zero_circles_draws_nothing() {
    let mut store = ParameterStore::new();
    store.set(ParamId::NumberOfCircles, 0.0);
    assert!(run_frame(&store, 0.0).is_empty());
}

#[test]
fn max_dots_covers_the_slider_range() {
    assert_eq!(max_dots(), MAX_RINGS * dots_per_ring());
    let mut store = ParameterStore::new();
    store.set(ParamId::NumberOfCircles, MAX_RINGS as f32);
    assert!(run_frame(&store, 0.0).len() <= max_dots());
}

#[test]
fn dots_are_finite_and_bounded() {
    let store = ParameterStore::new();
    let dots = run_frame(&store, 12_345.0);
    let base_radius = 300.0 / RADIUS_DIVISOR;
    let noise_size = store.get(ParamId::NoiseSize);
    let bound = base_radius + noise_size;
    for d in &dots {
        assert!(d.x.is_finite() && d.y.is_finite());
        assert!(d.x.abs() <= bound, "x = {} out of bound {bound}", d.x);
        assert!(d.y.abs() <= bound, "y = {} out of bound {bound}", d.y);
    }
}

#[test]
fn time_moves_the_pattern() {
    let store = ParameterStore::new();
    let early = run_frame(&store, 0.0);
    let late = run_frame(&store, 100_000.0);
    assert_eq!(early.len(), late.len());
    assert!(early.iter().zip(&late).any(|(a, b)| a != b));
}

#[test]
fn zero_noise_size_leaves_clean_circles() {
    let mut store = ParameterStore::new();
    store.set(ParamId::NoiseSize, 0.0);
    store.set(ParamId::NumberOfCircles, 1.0);
    let dots = run_frame(&store, 0.0);
    let radius = 300.0 / RADIUS_DIVISOR;
    for d in &dots {
        let r = (d.x * d.x + d.y * d.y).sqrt();
        assert!((r - radius).abs() < 1e-3, "r = {r}, expected {radius}");
    }
}

#[test]
fn rebuilding_clears_previous_frame() {
    let store = ParameterStore::new();
    let mut noise = NoiseField::new(NOISE_SEED);
    let mut out = Vec::new();
    build_frame(&store, &mut noise, 0.0, 300.0, 300.0, &mut out);
    let first = out.len();
    build_frame(&store, &mut noise, 16.0, 300.0, 300.0, &mut out);
    assert_eq!(out.len(), first);
}
