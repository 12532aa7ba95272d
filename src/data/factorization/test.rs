use crate::data::factorization::{Factorizable, Factorization, FactorizationError};

#[test]
fn rendering_of_known_values() {
    let test_list: Vec<(u64, &str)> = vec![
        (1, ""),
        (2, "2"),
        (12, "2^2 * 3"),
        (17, "17"),
        (97, "97"),
        (360, "2^3 * 3^2 * 5"),
        (1024, "2^10"),
        (2 * 2 * 7 * 7 * 13, "2^2 * 7^2 * 13"),
    ];

    for (input, expected) in test_list {
        let factorization = Factorization::compute(input).unwrap();
        assert_eq!(factorization.to_string(), expected, "input {}", input);
    }
}

#[test]
fn one_has_an_empty_factorization() {
    let factorization = Factorization::compute(1_u32).unwrap();

    assert!(factorization.is_empty());
    assert_eq!(factorization.factors().len(), 0);
    assert_eq!(factorization.product(), 1);
}

#[test]
fn product_reconstructs_the_input() {
    for n in 1..=1_000_u64 {
        assert_eq!(Factorization::compute(n).unwrap().product(), n);
    }
}

#[test]
fn number_of_divisors() {
    let test_list: Vec<(u64, u64)> = vec![
        (1, 1),
        (2, 2),
        (12, 6),
        (17, 2),
        (36, 9),
        (360, 24),
    ];

    for (input, expected) in test_list {
        let factorization = Factorization::compute(input).unwrap();
        assert_eq!(factorization.number_of_divisors(), expected, "input {}", input);
    }
}

#[test]
fn primality_through_the_factorization() {
    assert!(Factorization::compute(17_u32).unwrap().is_prime());
    assert!(!Factorization::compute(1_u32).unwrap().is_prime());
    assert!(!Factorization::compute(4_u32).unwrap().is_prime());
    assert!(!Factorization::compute(15_u32).unwrap().is_prime());
}

#[test]
fn trait_is_implemented_across_integer_widths() {
    assert_eq!(90_u8.prime_factors(), Ok(vec![(2, 1), (3, 2), (5, 1)]));
    assert_eq!(90_i16.prime_factors(), Ok(vec![(2, 1), (3, 2), (5, 1)]));
    assert_eq!(90_u32.prime_factors(), Ok(vec![(2, 1), (3, 2), (5, 1)]));
    assert_eq!(90_i64.prime_factors(), Ok(vec![(2, 1), (3, 2), (5, 1)]));
    assert_eq!(90_usize.prime_factors(), Ok(vec![(2, 1), (3, 2), (5, 1)]));
}

#[test]
fn nonpositive_input_is_rejected() {
    assert_eq!(
        Factorization::compute(0_i32),
        Err(FactorizationError::NotPositive),
    );
    assert_eq!(
        Factorization::compute(-12_i32),
        Err(FactorizationError::NotPositive),
    );
}

#[test]
fn error_renders_a_message() {
    assert_eq!(
        FactorizationError::NotPositive.to_string(),
        "factorization is defined for positive integers only",
    );
}
