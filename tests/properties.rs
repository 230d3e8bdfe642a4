extern crate dcomplex;
extern crate env_logger;
extern crate threadpool;

use dcomplex::{Complex, DoubleComplex, Error};
use std::sync::mpsc;
use threadpool::ThreadPool;

fn samples() -> Vec<DoubleComplex> {
    vec![
        DoubleComplex::ZERO,
        DoubleComplex::ONE,
        DoubleComplex::I,
        DoubleComplex::value_of(123.0, 456.0),
        DoubleComplex::value_of(-123.0, 456.0),
        DoubleComplex::value_of(0.5, -0.25),
        DoubleComplex::value_of(-1e10, 3e-5),
    ]
}

#[test]
fn addition_commutes() {
    for x in samples() {
        for y in samples() {
            assert_eq!(x.added_to(&y), y.added_to(&x), "{} + {}", x, y);
        }
    }
}

#[test]
fn identities() {
    for x in samples() {
        assert_eq!(x.added_to(&DoubleComplex::ZERO), x);
        assert_eq!(x.multiplied_by(&DoubleComplex::ONE), x);
        assert_eq!(x.subtracted_from(&x), DoubleComplex::ZERO);
    }
}

#[test]
fn division_by_zero_always_fails() {
    let _ = env_logger::builder().is_test(true).try_init();
    for x in samples() {
        assert_eq!(x.divided_by(&DoubleComplex::ZERO), Err(Error::DivideByZero));
    }
}

#[test]
fn worked_examples() {
    let z1 = DoubleComplex::value_of(123.0, 456.0);
    let z2 = DoubleComplex::value_of(345.0, 456.0);
    let s = 345.0 * 345.0 + 456.0 * 456.0;

    assert_eq!(z1.added_to(&z2), DoubleComplex::value_of(468.0, 912.0));
    assert_eq!(z1.subtracted_from(&z2), DoubleComplex::value_of(222.0, 0.0));
    assert_eq!(
        z1.multiplied_by(&z2),
        DoubleComplex::value_of(123.0 * 345.0 - 456.0 * 456.0, 123.0 * 456.0 + 456.0 * 345.0)
    );
    assert_eq!(
        z1.divided_by(&z2),
        Ok(DoubleComplex::value_of(
            (123.0 * 345.0 + 456.0 * 456.0) / s,
            (123.0 * 456.0 - 456.0 * 345.0) / s
        ))
    );
}

/// Generic code sees the same results through the `Complex` trait.
fn sum_of_squares<Z: Complex>(z: &Z, w: &Z) -> Z {
    z.multiplied_by(z).added_to(&w.multiplied_by(w))
}

#[test]
fn usable_through_trait() {
    let z = DoubleComplex::value_of(3.0, 0.0);
    let w = DoubleComplex::I;
    assert_eq!(sum_of_squares(&z, &w), DoubleComplex::value_of(8.0, 0.0));
    assert_eq!(Complex::real(&z), 3.0);
    assert_eq!(Complex::imaginary(&w), 1.0);
}

#[test]
fn shared_across_threads() {
    let pool = ThreadPool::new(4);
    let (tx, rx) = mpsc::channel();
    let base = DoubleComplex::value_of(2.0, -3.0);

    for n in 0..16 {
        let tx = tx.clone();
        pool.execute(move || {
            let z = DoubleComplex::value_of(n as f64, 1.0);
            let _ = tx.send((n, base.multiplied_by(&z), DoubleComplex::value_of(0.0, 1.0)));
        });
    }
    drop(tx);

    let mut results: Vec<_> = rx.iter().collect();
    results.sort_by_key(|&(n, _, _)| n);
    assert_eq!(results.len(), 16);
    for (n, product, unit) in results {
        assert_eq!(product, base * DoubleComplex::value_of(n as f64, 1.0));
        assert!(unit.is_identical(&DoubleComplex::I));
    }
}
