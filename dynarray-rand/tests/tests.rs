use dynarray::DynArray;
use dynarray_rand::rand::distr::Uniform;
use dynarray_rand::rand::rngs::SmallRng;
use dynarray_rand::rand::SeedableRng;
use dynarray_rand::RandomExt;
use quickcheck::quickcheck;

#[test]
fn test_len_and_range()
{
    let dist = Uniform::new_inclusive(10, 1000).unwrap();
    for n in 0..10 {
        let a = DynArray::random(n, dist);
        assert_eq!(a.len(), n);
        assert!(a.iter().all(|&x| x >= 10));
        assert!(a.iter().all(|&x| x <= 1000));
    }
}

#[test]
fn test_fill_appends_after_existing_elements()
{
    let mut a = DynArray::from_vec(vec![1, 2, 3]);
    a.fill_random(5, Uniform::new_inclusive(-3, 3).unwrap()).unwrap();
    assert_eq!(a.len(), 8);
    assert_eq!(a.get(0), Ok(1));
    assert_eq!(a.get(1), Ok(2));
    assert_eq!(a.get(2), Ok(3));
    assert!(a.iter().skip(3).all(|&x| (-3..=3).contains(&x)));
}

#[test]
fn test_same_seed_same_sequence()
{
    let dist = Uniform::new_inclusive(0, 99).unwrap();
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let a = DynArray::random_using(32, dist, &mut rng1);
    let b = DynArray::random_using(32, dist, &mut rng2);
    assert_eq!(a, b);
}

#[test]
fn test_fill_zero_is_noop()
{
    let mut a = DynArray::from_vec(vec![5]);
    a.fill_random(0, Uniform::new_inclusive(0, 1).unwrap()).unwrap();
    assert_eq!(a.as_slice(), &[5]);
}

quickcheck! {
    fn prop_fill_respects_growth_invariant(n: usize, seed: u64) -> bool {
        let n = n % 64;
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut a = DynArray::new();
        a.fill_random_using(n, Uniform::new_inclusive(-5, 5).unwrap(), &mut rng)
            .unwrap();
        a.len() == n && a.len() <= a.capacity()
    }
}
