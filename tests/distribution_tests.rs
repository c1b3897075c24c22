use convolver::DiscreteDistribution;

#[test]
fn limit_range_trims_and_adjusts_offset() {
    let d = DiscreteDistribution::new(-5, (1..=10).map(f64::from).collect());
    let trimmed = d.limit_range(-2, 2);
    assert_eq!(trimmed.offset(), -2);
    assert_eq!(trimmed.values(), &[3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn limit_range_left_only() {
    let d = DiscreteDistribution::new(-3, vec![1.0, 2.0, 3.0, 4.0]);
    let trimmed = d.limit_range(-1, 100);
    assert_eq!(trimmed.offset(), -1);
    assert_eq!(trimmed.values(), &[3.0, 4.0]);
}

#[test]
fn limit_range_right_only() {
    let d = DiscreteDistribution::new(0, vec![1.0, 2.0, 3.0, 4.0]);
    let trimmed = d.limit_range(-100, 1);
    assert_eq!(trimmed.offset(), 0);
    assert_eq!(trimmed.values(), &[1.0, 2.0]);
}

#[test]
fn limit_range_excluding_whole_support_is_empty_not_an_error() {
    let d = DiscreteDistribution::new(0, vec![1.0, 2.0]);
    let empty = d.limit_range(10, 20);
    assert!(empty.is_empty());
    assert_eq!(empty.offset(), 10);
    assert_eq!(empty.mass_at(10), 0.0);
}

#[test]
fn operations_do_not_mutate_their_input() {
    let d = DiscreteDistribution::new(-5, (1..=10).map(f64::from).collect());
    let before = d.clone();
    let _ = d.limit_range(-2, 2);
    let _ = d.normalized();
    assert_eq!(d, before);
}

#[test]
fn unit_impulse_is_all_mass_at_zero() {
    let impulse = DiscreteDistribution::unit_impulse();
    assert_eq!(impulse.offset(), 0);
    assert_eq!(impulse.values(), &[1.0]);
    assert_eq!(impulse.mass_at(0), 1.0);
    assert_eq!(impulse.mass_at(1), 0.0);
}

#[test]
fn support_bounds_track_the_offset() {
    let d = DiscreteDistribution::new(-2, vec![0.1, 0.2, 0.3, 0.4]);
    assert_eq!(d.support_min(), Some(-2));
    assert_eq!(d.support_max(), Some(1));

    let empty = DiscreteDistribution::empty(7);
    assert_eq!(empty.support_min(), None);
    assert_eq!(empty.support_max(), None);
}
