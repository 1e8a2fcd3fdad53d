use windowing::{make_default_samples, make_samples, DEFAULT_WINDOW};

fn ramp(len: usize) -> Vec<f64> {
    (0..len).map(|i| 100.0 + i as f64 * 0.25).collect()
}

#[test]
fn seven_prices_give_two_samples() {
    let series = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
    let samples = make_samples(&series, 5).unwrap();

    assert_eq!(samples.inputs().shape(), &[2, 5, 1]);
    assert_eq!(samples.targets().shape(), &[2, 1]);

    let first: Vec<f32> = samples.inputs().slice(ndarray::s![0, .., 0]).to_vec();
    assert_eq!(first, vec![10.0, 11.0, 12.0, 13.0, 14.0]);
    assert_eq!(samples.target_at(0), 15.0);

    let second: Vec<f32> = samples.inputs().slice(ndarray::s![1, .., 0]).to_vec();
    assert_eq!(second, vec![11.0, 12.0, 13.0, 14.0, 15.0]);
    assert_eq!(samples.target_at(1), 16.0);
}

#[test]
fn series_equal_to_window_is_empty() {
    let samples = make_samples(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).unwrap();
    assert!(samples.is_empty());
    assert_eq!(samples.inputs().shape(), &[0, 5, 1]);
    assert_eq!(samples.targets().shape(), &[0, 1]);
}

#[test]
fn short_and_empty_series_are_empty() {
    for len in 0..=DEFAULT_WINDOW {
        let samples = make_default_samples(&ramp(len));
        assert_eq!(samples.len(), 0, "len {len}");
        assert_eq!(samples.window(), DEFAULT_WINDOW);
    }
}

#[test]
fn shapes_follow_series_length_and_window() {
    for window in 1..8 {
        for len in window + 1..window + 12 {
            let samples = make_samples(&ramp(len), window).unwrap();
            assert_eq!(samples.inputs().shape(), &[len - window, window, 1]);
            assert_eq!(samples.targets().shape(), &[len - window, 1]);
        }
    }
}

#[test]
fn every_sample_is_a_slice_of_the_series() {
    let series = ramp(23);
    let window = 4;
    let samples = make_samples(&series, window).unwrap();
    for s in 0..samples.len() {
        for t in 0..window {
            assert_eq!(samples.input_at(s, t), series[s + t] as f32);
        }
        assert_eq!(samples.target_at(s), series[s + window] as f32);
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let series: Vec<f64> = (0..40).map(|i| (i as f64 * 0.7).sin() * 30.0 + 40.0).collect();
    let a = make_samples(&series, 6).unwrap();
    let b = make_samples(&series, 6).unwrap();
    let bits = |set: &windowing::SampleSet| -> Vec<u32> {
        set.inputs()
            .iter()
            .chain(set.targets().iter())
            .map(|v| v.to_bits())
            .collect()
    };
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn into_arrays_returns_owned_x_and_y() {
    let (x, y) = make_samples(&ramp(9), 3).unwrap().into_arrays();
    assert_eq!(x.dim(), (6, 3, 1));
    assert_eq!(y.dim(), (6, 1));
    assert_eq!(y[[5, 0]], 102.0);
}
