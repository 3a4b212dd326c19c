use super::*;

#[test]
fn present_grows_from_hidden_to_identity() {
    let kf = TransitionKeyframes::present(&CalloutMetrics::default());
    assert_eq!(kf.direction, TransitionDirection::Present);
    assert_eq!(kf.from.alpha, 0.0);
    assert_eq!(kf.from.scale, 0.8);
    assert_eq!(kf.to, CalloutVisualState::PRESENTED);
    assert_eq!(kf.to.transform(), Affine::IDENTITY);
    assert_eq!(kf.duration_secs, 0.5);
}

#[test]
fn dismiss_mirrors_present() {
    let m = CalloutMetrics::default();
    let present = TransitionKeyframes::present(&m);
    let dismiss = TransitionKeyframes::dismiss(&m);
    assert_eq!(present.reversed(), dismiss);
    assert_eq!(dismiss.reversed(), present);
}

#[test]
fn sample_interpolates_and_clamps() {
    let m = CalloutMetrics {
        present_scale: 0.5,
        ..CalloutMetrics::default()
    };
    let kf = TransitionKeyframes::present(&m);
    let mid = kf.sample(0.5);
    assert_eq!(mid.alpha, 0.5);
    assert_eq!(mid.scale, 0.75);
    assert_eq!(mid.chrome_alpha, 0.5);
    assert_eq!(kf.sample(-3.0), kf.from);
    assert_eq!(kf.sample(7.0), kf.to);
}

#[test]
fn hidden_transform_scales_uniformly() {
    let hidden = CalloutVisualState::hidden(&CalloutMetrics::default());
    assert_eq!(hidden.transform(), Affine::scale(0.8));
}
