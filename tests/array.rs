use defmac::defmac;

use astroarray::{DimensionIndex, DimensionSize, ErrorKind, MultiArray1, MultiArray3};

astroarray::dimension! {
    pub A, "a";
    pub B, "b";
    pub C, "c";
}

type Cube = MultiArray3<i32, A, B, C>;

defmac!(asize n => DimensionSize::<A>::new(n));
defmac!(bsize n => DimensionSize::<B>::new(n));
defmac!(csize n => DimensionSize::<C>::new(n));
defmac!(ai i => DimensionIndex::<A>::new(i));
defmac!(bi i => DimensionIndex::<B>::new(i));
defmac!(ci i => DimensionIndex::<C>::new(i));

/// The 10 x 20 x 30 block from the design scenario, filled with sequential
/// integers in storage order.
fn sequential_cube() -> Cube
{
    Cube::from_shape_vec((asize!(10), bsize!(20), csize!(30)), (0..6000).collect()).unwrap()
}

#[test]
fn construction_sizes_match_by_tag_in_any_order()
{
    let declared = Cube::zeros((asize!(2), bsize!(3), csize!(4)));
    let scrambled = Cube::zeros((csize!(4), asize!(2), bsize!(3)));
    assert_eq!(declared, scrambled);
    assert_eq!(scrambled.size::<A, _>(), 2);
    assert_eq!(scrambled.size::<B, _>(), 3);
    assert_eq!(scrambled.size::<C, _>(), 4);
    assert_eq!(scrambled.dimension::<C, _>(), 4);
    assert_eq!(scrambled.data_size(), 24);
}

#[test]
fn row_major_layout_first_axis_slowest()
{
    let arr = sequential_cube();
    for i in [0usize, 3, 9] {
        for j in [0usize, 7, 19] {
            for k in [0usize, 1, 29] {
                let expected = (i * 600 + j * 30 + k) as i32;
                assert_eq!(arr.index_axis(ai!(i)).index_axis(bi!(j))[ci!(k)], expected);
            }
        }
    }
}

#[test]
fn from_elem_and_zeros()
{
    let filled = Cube::from_elem((asize!(2), bsize!(2), csize!(2)), 7);
    assert!(filled.iter().all(|&value| value == 7));
    let zeroed = Cube::zeros((asize!(2), bsize!(2), csize!(2)));
    assert!(zeroed.iter().all(|&value| value == 0));
    let defaulted = Cube::new((asize!(2), bsize!(2), csize!(2)));
    assert_eq!(zeroed, defaulted);
}

#[test]
fn from_shape_vec_rejects_wrong_length()
{
    let result = Cube::from_shape_vec((asize!(2), bsize!(3), csize!(4)), vec![0; 23]);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::IncompatibleShape);
    assert!(Cube::from_shape_vec((asize!(2), bsize!(3), csize!(4)), vec![0; 24]).is_ok());
}

#[test]
fn equality_requires_sizes_and_elements()
{
    let arr = sequential_cube();
    let same = sequential_cube();
    assert_eq!(arr, same);
    assert!(arr.equal_size(&same));

    let mut changed = sequential_cube();
    changed.as_slice_mut()[123] = -1;
    assert_ne!(arr, changed);
    assert!(arr.equal_size(&changed));
}

#[test]
fn clone_is_a_deep_copy()
{
    let arr = sequential_cube();
    let mut copy = arr.clone();
    copy.as_slice_mut()[0] = -1;
    assert_eq!(arr.as_slice()[0], 0);
    assert_ne!(arr, copy);
}

#[test]
fn resize_updates_named_axes_and_reallocates()
{
    let mut arr = Cube::zeros((asize!(2), bsize!(3), csize!(4)));
    arr.resize((bsize!(5),));
    assert_eq!(arr.size::<A, _>(), 2);
    assert_eq!(arr.size::<B, _>(), 5);
    assert_eq!(arr.size::<C, _>(), 4);
    assert_eq!(arr.data_size(), 40);

    arr.resize((asize!(1), csize!(2)));
    assert_eq!(arr.data_size(), 10);
}

#[test]
fn resize_keeps_storage_order_not_shape()
{
    let mut arr =
        MultiArray3::<i32, A, B, C>::from_shape_vec((asize!(2), bsize!(2), csize!(2)), (0..8).collect())
            .unwrap();
    arr.resize((csize!(3),));
    // the surviving prefix is raw storage order; nothing is reflowed
    assert_eq!(&arr.as_slice()[..8], &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(&arr.as_slice()[8..], &[0, 0, 0, 0]);

    let mut arr =
        MultiArray3::<i32, A, B, C>::from_shape_vec((asize!(2), bsize!(2), csize!(2)), (0..8).collect())
            .unwrap();
    arr.resize_with((asize!(3),), -1);
    assert_eq!(&arr.as_slice()[..8], &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert!(arr.as_slice()[8..].iter().all(|&value| value == -1));
}

#[test]
fn rank_one_arrays_index_directly()
{
    let mut arr = MultiArray1::<u8, A>::from_shape_vec((asize!(4),), vec![10, 11, 12, 13]).unwrap();
    assert_eq!(arr[ai!(2)], 12);
    arr[ai!(2)] = 99;
    assert_eq!(arr[ai!(2)], 99);
    assert_eq!(arr.get(ai!(4)), None);
    assert_eq!(arr.get(ai!(3)), Some(&13));
}

#[test]
#[should_panic(expected = "out of bounds for axis a")]
fn rank_one_indexing_is_checked()
{
    let arr = MultiArray1::<u8, A>::zeros((asize!(4),));
    let _ = arr[ai!(4)];
}

#[test]
fn debug_output_names_axes()
{
    let arr = MultiArray1::<u8, A>::zeros((asize!(2),));
    let formatted = format!("{:?}", arr);
    assert!(formatted.contains("a: 2"), "{}", formatted);
}

#[test]
fn into_raw_vec_round_trips()
{
    let arr = sequential_cube();
    let v = arr.into_raw_vec();
    assert_eq!(v.len(), 6000);
    assert_eq!(v[4321], 4321);
}
