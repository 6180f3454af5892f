use super::*;
use crate::snapshot::model::MaskRect;

fn layer(i: u8) -> LayerIndex {
    LayerIndex::new(i).unwrap()
}

fn boxed(i: u8, enabled: bool, scale: f64, x: f64, y: f64) -> BoxState {
    let mut b = BoxState::new(layer(i));
    b.enabled = enabled;
    b.scale = scale;
    b.x = x;
    b.y = y;
    b
}

fn run(initial: &[BoxState], target: &[BoxState], frames: i64, ease: &str) -> Transition {
    let a: Snapshot = initial.iter().copied().collect();
    let b: Snapshot = target.iter().copied().collect();
    Transition::from_names(&a, &b, frames, ease).unwrap()
}

#[test]
fn linear_two_frame_scenario() {
    let tr = run(
        &[boxed(0, true, 0.5, 0.0, 0.0)],
        &[boxed(0, true, 1.0, 10.0, 0.0)],
        2,
        "linear",
    );
    let f1 = tr.frame_states(1)[0];
    assert_eq!(f1.scale, 0.75);
    assert_eq!(f1.x, 5.0);
    let f2 = tr.frame_states(2)[0];
    assert_eq!(f2.scale, 1.0);
    assert_eq!(f2.x, 10.0);
}

#[test]
fn endpoints_reproduce_inputs_for_every_curve() {
    let mut a = boxed(1, true, 0.33, -5.333_220_163_981_12, 0.1);
    a.mask_enabled = true;
    a.mask = MaskRect {
        left: 2.0,
        top: 0.3,
        right: 2.0,
        bottom: 0.7,
    };
    let mut b = boxed(1, true, 0.7, -26.6666, -0.0001);
    b.mask = MaskRect {
        left: 9.0,
        top: 0.0,
        right: 9.1,
        bottom: 0.0,
    };

    for ease in Ease::ALL {
        let tr = Transition::new(
            &[a].into_iter().collect(),
            &[b].into_iter().collect(),
            FrameCount::new(7).unwrap(),
            ease,
        );
        let start = tr.interpolate_layer(layer(1), 0.0);
        let end = tr.interpolate_layer(layer(1), 1.0);
        assert_eq!((start.scale, start.x, start.y), (a.scale, a.x, a.y), "{ease}");
        assert_eq!(start.mask, a.mask, "{ease}");
        assert_eq!((end.scale, end.x, end.y), (b.scale, b.x, b.y), "{ease}");
        assert_eq!(end.mask, b.mask, "{ease}");
    }
}

#[test]
fn participation_is_enabled_at_either_end() {
    let tr = run(
        &[boxed(0, true, 1.0, 0.0, 0.0), boxed(1, false, 1.0, 0.0, 0.0)],
        &[boxed(1, true, 1.0, 0.0, 0.0), boxed(2, false, 0.3, 4.0, 4.0)],
        10,
        "linear",
    );
    assert!(tr.participates(layer(0)));
    assert!(tr.participates(layer(1)));
    assert!(!tr.participates(layer(2)));
    assert!(!tr.participates(layer(3)));
    assert_eq!(tr.participating_layers(), vec![layer(0), layer(1)]);
}

#[test]
fn visibility_flips_only_at_the_end() {
    let tr = run(
        &[boxed(0, true, 1.0, 0.0, 0.0)],
        &[boxed(0, false, 0.5, 0.0, 0.0)],
        4,
        "ease_in_out_cubic",
    );
    for k in 0..4 {
        assert!(tr.frame_states(k)[0].enabled, "frame {k}");
    }
    assert!(!tr.frame_states(4)[0].enabled);

    let appear = tr.swapped();
    for k in 0..4 {
        assert!(!appear.frame_states(k)[0].enabled, "frame {k}");
    }
    assert!(appear.frame_states(4)[0].enabled);
}

#[test]
fn mask_flag_is_or_of_both_ends() {
    let a = boxed(2, true, 1.0, 0.0, 0.0);
    let mut b = a;
    b.mask_enabled = true;
    b.mask.left = 4.0;
    let tr = run(&[a], &[b], 2, "linear");
    assert!(tr.mask_relevant(layer(2)));
    let mid = tr.frame_states(1)[2];
    assert!(mid.mask_enabled);
    assert_eq!(mid.mask.left, 2.0);
    assert!(!tr.mask_relevant(layer(0)));
}

#[test]
fn absent_layers_are_disabled_placeholders() {
    let tr = run(&[], &[boxed(3, true, 0.5, 1.0, 1.0)], 1, "linear");
    for l in LayerIndex::ALL {
        assert_eq!(tr.initial_states()[l.as_usize()], BoxState::new(l));
    }
    assert_eq!(tr.final_states()[0], BoxState::new(layer(0)));
    assert!(tr.final_states()[3].enabled);
}

#[test]
fn caller_snapshots_are_untouched() {
    let a: Snapshot = [boxed(0, true, 0.5, 0.0, 0.0)].into_iter().collect();
    let b = Snapshot::new();
    let before = (a.clone(), b.clone());
    let _ = Transition::from_names(&a, &b, 3, "linear").unwrap();
    assert_eq!((a, b), before);
}

#[test]
fn non_positive_duration_is_rejected() {
    let s = Snapshot::new();
    for d in [0, -1] {
        let err = Transition::from_names(&s, &s, d, "linear").unwrap_err();
        assert!(err.to_string().contains("validation error:"));
    }
}

#[test]
fn unknown_easing_is_linear_unless_strict() {
    let s = Snapshot::new();
    let tr = Transition::from_names(&s, &s, 5, "bogus_curve").unwrap();
    assert_eq!(tr.ease(), Ease::Linear);
    assert!(Transition::from_names_strict(&s, &s, 5, "bogus_curve").is_err());
    let strict = Transition::from_names_strict(&s, &s, 5, "ease_out_expo").unwrap();
    assert_eq!(strict.ease(), Ease::OutExpo);
}

#[test]
fn overshoot_is_not_clamped() {
    let tr = run(
        &[boxed(0, true, 0.5, 0.0, 0.0)],
        &[boxed(0, true, 0.5, 10.0, 0.0)],
        10,
        "ease_out_back",
    );
    let peak = (1..10).map(|k| tr.frame_states(k)[0].x).fold(f64::MIN, f64::max);
    assert!(peak > 10.0, "{peak}");
}

#[test]
fn summary_reports_selected_curve() {
    let tr = run(&[boxed(1, true, 1.0, 0.0, 0.0)], &[], 12, "EASE_IN");
    assert_eq!(tr.ease(), Ease::InQuad);
    let summary = tr.summary();
    assert_eq!(summary.frames, 12);
    assert_eq!(summary.easing, "ease_in");
    assert_eq!(summary.participating, vec![layer(1)]);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["participating"], serde_json::json!([1]));
}

#[test]
fn easing_name_keeps_selection_and_falls_back_to_linear() {
    let s = Snapshot::new();
    let named = |name: &str| {
        Transition::from_names(&s, &s, 3, name)
            .unwrap()
            .easing_name()
            .to_owned()
    };
    assert_eq!(named("ease_in_out"), "ease_in_out");
    assert_eq!(named(" Ease_Out_Bounce "), "ease_out_bounce");
    assert_eq!(named("bogus_curve"), "linear");

    let direct = Transition::new(&s, &s, FrameCount::new(3).unwrap(), Ease::InOutQuad);
    assert_eq!(direct.easing_name(), "ease_in_out_quad");
    // A label that names a different curve is not trusted.
    assert_eq!(direct.with_easing_name("ease_in").easing_name(), "ease_in_out_quad");
}

#[test]
fn intermediate_frames_follow_start_plus_eased_delta() {
    let mut a = boxed(2, true, 0.6667, -14.5469, 3.0311);
    a.mask_enabled = true;
    a.mask.left = 1.37;
    let mut b = boxed(2, true, 0.2513, 6.6824, -8.4417);
    b.mask.left = 7.91;

    for ease in [
        Ease::Linear,
        Ease::InOutCubic,
        Ease::InOutSine,
        Ease::OutBack,
        Ease::InOutElastic,
        Ease::OutBounce,
    ] {
        let tr = Transition::new(
            &[a].into_iter().collect(),
            &[b].into_iter().collect(),
            FrameCount::new(7).unwrap(),
            ease,
        );
        for k in 1..7 {
            let e = ease.apply(tr.progress(k));
            let got = tr.frame_states(k)[2];
            for (v, start, end) in [
                (got.scale, a.scale, b.scale),
                (got.x, a.x, b.x),
                (got.y, a.y, b.y),
                (got.mask.left, a.mask.left, b.mask.left),
            ] {
                let want = start + (end - start) * e;
                assert_eq!(v, want, "{ease} frame {k}");
                assert_eq!(format!("{v:.4}"), format!("{want:.4}"), "{ease} frame {k}");
            }
        }
    }
}
