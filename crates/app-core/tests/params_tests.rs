use app_core::{ParamId, ParameterStore, PARAM_COUNT, PARAM_DEFS};

#[test]
fn definitions_are_well_formed() {
    assert_eq!(PARAM_DEFS.len(), PARAM_COUNT);
    for def in &PARAM_DEFS {
        assert!(def.min < def.max, "{} has an empty range", def.name);
        assert!(def.step > 0.0, "{} has a non-positive step", def.name);
        assert!(
            def.default >= def.min && def.default <= def.max,
            "{} default outside [min, max]",
            def.name
        );
    }
}

#[test]
fn definition_table_matches_the_sketch() {
    let d = ParamId::TimeMultiplier.def();
    assert_eq!((d.min, d.max, d.step, d.default), (0.0, 1.0, 0.0001, 0.0001));
    let d = ParamId::NoiseSize.def();
    assert_eq!((d.min, d.max, d.step, d.default), (0.0, 100.0, 1.0, 80.0));
    let d = ParamId::NoiseScale.def();
    assert_eq!((d.min, d.max, d.step, d.default), (0.0, 10.0, 0.1, 5.0));
    let d = ParamId::NoiseDetailOctave.def();
    assert_eq!((d.min, d.max, d.step, d.default), (0.0, 10.0, 1.0, 5.0));
    let d = ParamId::NoiseDetailFalloff.def();
    assert_eq!((d.min, d.max, d.step, d.default), (0.0, 1.0, 0.05, 0.5));
    let d = ParamId::NoiseOffset.def();
    assert_eq!((d.min, d.max, d.step, d.default), (10.0, 1000.0, 10.0, 100.0));
    let d = ParamId::NumberOfCircles.def();
    assert_eq!((d.min, d.max, d.step, d.default), (1.0, 10.0, 1.0, 3.0));
}

#[test]
fn store_is_seeded_with_defaults() {
    let store = ParameterStore::new();
    for def in &PARAM_DEFS {
        assert_eq!(store.get(def.id), def.default, "{}", def.name);
    }
}

#[test]
fn set_then_get_round_trips() {
    let mut store = ParameterStore::new();
    store.set(ParamId::NoiseScale, 7.3);
    assert_eq!(store.get(ParamId::NoiseScale), 7.3);
    // Out-of-range writes are not validated; only the widgets clamp
    store.set(ParamId::NumberOfCircles, 99.0);
    assert_eq!(store.get(ParamId::NumberOfCircles), 99.0);
}

#[test]
fn reset_restores_defaults() {
    let mut store = ParameterStore::new();
    for id in ParamId::ALL {
        store.set(id, -1.0);
    }
    store.reset();
    assert_eq!(store, ParameterStore::new());
}

#[test]
fn nudge_moves_by_one_step_and_clamps() {
    let mut store = ParameterStore::new();
    store.nudge(ParamId::NoiseSize, 1.0);
    assert_eq!(store.get(ParamId::NoiseSize), 81.0);
    store.nudge(ParamId::NoiseSize, -2.0);
    assert_eq!(store.get(ParamId::NoiseSize), 79.0);

    store.set(ParamId::NoiseDetailFalloff, 1.0);
    store.nudge(ParamId::NoiseDetailFalloff, 1.0);
    assert_eq!(store.get(ParamId::NoiseDetailFalloff), 1.0);

    store.set(ParamId::NumberOfCircles, 1.0);
    store.nudge(ParamId::NumberOfCircles, -1.0);
    assert_eq!(store.get(ParamId::NumberOfCircles), 1.0);
}

#[test]
fn name_lookup_round_trips() {
    for id in ParamId::ALL {
        assert_eq!(ParamId::from_name(id.name()), Some(id));
    }
    assert_eq!(ParamId::from_name("bogus"), None);
    assert_eq!(ParamId::from_name(""), None);
}

#[test]
fn display_uses_the_definition_name() {
    assert_eq!(ParamId::TimeMultiplier.to_string(), "timeMultiplier");
    assert_eq!(ParamId::NumberOfCircles.to_string(), "numberOfCircles");
}
