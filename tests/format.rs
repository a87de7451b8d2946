use dynarray::DynArray;

#[test]
fn formatting()
{
    let a = DynArray::from_vec(vec![3, 1, 2]);
    assert_eq!(format!("{}", a), "[3, 1, 2]");

    let single = DynArray::from_vec(vec![42]);
    assert_eq!(format!("{}", single), "[42]");

    let empty = DynArray::new();
    assert_eq!(format!("{}", empty), "[]");
}

#[test]
fn display_shows_only_occupied_slots()
{
    let mut a = DynArray::with_capacity(4);
    a.push(1).unwrap();
    a.push(2).unwrap();
    assert_eq!(format!("{}", a), "[1, 2]");
}

#[test]
fn debug_shows_entire_buffer()
{
    let mut a = DynArray::with_capacity(4);
    a.push(1).unwrap();
    a.push(2).unwrap();
    assert_eq!(format!("{:?}", a), "[1, 2, 0, 0] len=2, capacity=4");

    let empty = DynArray::new();
    assert_eq!(format!("{:?}", empty), "[0] len=0, capacity=1");
}
