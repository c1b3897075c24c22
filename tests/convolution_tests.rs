use convolver::{cdf, convolve, convolve_multiple, Catalog, ConvolutionSeries, DiscreteDistribution};

#[test]
fn offsets_add_and_mass_multiplies() {
    let a = DiscreteDistribution::new(-3, vec![0.2, 0.3, 0.5]);
    let b = DiscreteDistribution::new(7, vec![0.9, 0.1]);
    let c = convolve(&a, &b);
    assert_eq!(c.offset(), 4);
    assert_eq!(c.len(), 4);
    assert!((c.total_mass() - a.total_mass() * b.total_mass()).abs() < 1e-9);
}

#[test]
fn convolution_is_associative() {
    let a = DiscreteDistribution::from_values(vec![0.5, 0.5]);
    let b = DiscreteDistribution::new(-1, vec![0.25, 0.5, 0.25]);
    let c = DiscreteDistribution::new(2, vec![0.1, 0.9]);
    let left = convolve(&convolve(&a, &b), &c);
    let right = convolve(&a, &convolve(&b, &c));
    assert_eq!(left.offset(), right.offset());
    for (x, y) in left.values().iter().zip(right.values()) {
        assert!((x - y).abs() < 1e-12);
    }
}

#[test]
fn convolve_multiple_once_is_a_deep_copy() {
    let d = Catalog::global().generate("dice", &[]).unwrap();
    assert_eq!(convolve_multiple(&d, 1), d);
}

#[test]
fn two_dice_sum_to_seven_most_often() {
    let die = Catalog::global().generate("dice", &[]).unwrap();
    let two = convolve_multiple(&die, 2);
    let peak = (two.support_min().unwrap()..=two.support_max().unwrap())
        .max_by(|&x, &y| two.mass_at(x).partial_cmp(&two.mass_at(y)).unwrap())
        .unwrap();
    assert_eq!(peak, 7);
    assert!((two.mass_at(7) - 6.0 / 36.0).abs() < 1e-12);
}

#[test]
fn series_shares_work_but_matches_refolding() {
    let base = Catalog::global().generate("binomial", &[5.0, 0.3]).unwrap();
    for (i, level) in ConvolutionSeries::new(&base).take(6).enumerate() {
        let refolded = convolve_multiple(&base, i + 1);
        assert_eq!(level.offset(), refolded.offset());
        for (x, y) in level.values().iter().zip(refolded.values()) {
            assert!((x - y).abs() < 1e-12);
        }
    }
}

#[test]
fn cdf_is_monotone_and_converges_to_one() {
    let catalog = Catalog::global();
    for id in ["bernoulli", "binomial", "dice", "normal", "poisson", "uniform", "zeta"] {
        let descriptor = catalog.descriptor(id).unwrap();
        let d = descriptor.generate(&descriptor.default_params());
        let c = cdf(&d);
        assert_eq!(c.offset(), d.offset());
        for pair in c.values().windows(2) {
            assert!(pair[1] >= pair[0] - 1e-12, "'{id}' CDF decreased");
        }
        assert!((c.values().last().unwrap() - 1.0).abs() < 1e-6, "'{id}' CDF tail");
    }
}

#[test]
fn cdf_of_convolved_offset_distribution_keeps_the_offset() {
    let d = DiscreteDistribution::new(-2, vec![0.5, 0.5]);
    let sum = convolve_multiple(&d, 3);
    assert_eq!(sum.offset(), -6);
    let c = cdf(&sum);
    assert_eq!(c.offset(), -6);
    assert!((c.values().last().unwrap() - 1.0).abs() < 1e-9);
}
