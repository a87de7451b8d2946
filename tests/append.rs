use dynarray::{DynArray, GROWTH_FACTOR, INITIAL_CAPACITY};
use quickcheck::quickcheck;

#[test]
fn growth_doubles_from_one()
{
    let mut a = DynArray::with_capacity(1);
    for i in 0..10 {
        a.push(i).unwrap();
    }
    assert_eq!(a.len(), 10);
    // capacity sequence 1, 2, 4, 8, 16
    assert_eq!(a.capacity(), 16);
}

#[test]
fn growth_only_when_full()
{
    let mut a = DynArray::with_capacity(4);
    a.push(1).unwrap();
    a.push(2).unwrap();
    a.push(3).unwrap();
    assert_eq!(a.capacity(), 4);
    a.push(4).unwrap();
    assert_eq!(a.capacity(), 4);
    assert!(a.is_full());
    a.push(5).unwrap();
    assert_eq!(a.capacity(), 4 * GROWTH_FACTOR);
}

#[test]
fn growth_preserves_elements()
{
    let mut a = DynArray::with_capacity(2);
    a.push(1).unwrap();
    a.push(2).unwrap();
    a.push(3).unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3]);
    assert_eq!(a.as_entire_slice(), &[1, 2, 3, 0]);
}

#[test]
fn insert_into_full_array_grows()
{
    let mut a = DynArray::with_capacity(2);
    a.push(1).unwrap();
    a.push(3).unwrap();
    assert!(a.is_full());
    a.insert(1, 2).unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3]);
    assert_eq!(a.capacity(), 4);
}

#[test]
fn removal_never_shrinks_capacity()
{
    let mut a = DynArray::with_capacity(1);
    for i in 0..10 {
        a.push(i).unwrap();
    }
    let cap = a.capacity();
    a.pop();
    a.remove(0).unwrap();
    a.clear();
    assert_eq!(a.capacity(), cap);
}

#[test]
fn zero_capacity_is_bumped_to_one()
{
    let a = DynArray::with_capacity(0);
    assert_eq!(a.capacity(), 1);

    let b = DynArray::new();
    assert_eq!(b.capacity(), INITIAL_CAPACITY);

    let c = DynArray::try_with_capacity(0).unwrap();
    assert_eq!(c.capacity(), 1);
}

#[test]
fn try_with_capacity_ok()
{
    let a = DynArray::try_with_capacity(32).unwrap();
    assert_eq!(a.capacity(), 32);
    assert!(a.is_empty());
}

#[test]
fn growth_factor_is_multiplicative()
{
    assert!(GROWTH_FACTOR > 1);
}

quickcheck! {
    // starting from capacity 1 and only doubling, every observed capacity
    // is a power of two and capacities are monotone
    fn prop_capacity_is_power_of_two(xs: Vec<i32>) -> bool {
        let mut a = DynArray::new();
        let mut last_cap = a.capacity();
        for &x in &xs {
            a.push(x).unwrap();
            if a.capacity() < last_cap || !a.capacity().is_power_of_two() {
                return false;
            }
            last_cap = a.capacity();
        }
        true
    }
}
