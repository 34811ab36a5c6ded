use itertools::assert_equal;
use quickcheck::quickcheck;

use astroarray::{
    DimensionIndex, DimensionSize, DimensionSpan, MultiArray3, Slice,
};

astroarray::dimension! {
    pub A, "a";
    pub B, "b";
    pub C, "c";
}

type Cube = MultiArray3<i32, A, B, C>;
type CubeSlice<'a> = Slice<'a, i32, astroarray::Dims3<A, B, C>>;

fn sequential(a: usize, b: usize, c: usize) -> Cube
{
    Cube::from_shape_vec(
        (
            DimensionSize::<A>::new(a),
            DimensionSize::<B>::new(b),
            DimensionSize::<C>::new(c),
        ),
        (0..(a * b * c) as i32).collect(),
    )
    .unwrap()
}

/// Walk a view's selection with plain nested loops over its spans, reading
/// from the parent's storage directly.
fn reference_traversal(arr: &Cube, view: &CubeSlice<'_>) -> Vec<i32>
{
    let b_size = usize::from(arr.size::<B, _>());
    let c_size = usize::from(arr.size::<C, _>());
    let mut out = Vec::new();
    for i in view.span::<A, _>().indices() {
        for j in view.span::<B, _>().indices() {
            for k in view.span::<C, _>().indices() {
                let offset =
                    usize::from(i) * b_size * c_size + usize::from(j) * c_size + usize::from(k);
                out.push(arr.as_slice()[offset]);
            }
        }
    }
    out
}

#[test]
fn iteration_yields_every_selected_element_once()
{
    let arr = sequential(10, 20, 30);
    let view = arr.slice((
        DimensionSpan::<A>::from(2..6),
        DimensionSpan::<B>::from(5..15),
        DimensionSpan::<C>::from(29..30),
    ));
    assert_eq!(view.data_size(), 4 * 10 * 1);
    assert_eq!(view.iter().count(), view.data_size());
    assert_equal(view.iter().copied(), reference_traversal(&arr, &view));
}

#[test]
fn rollover_crosses_non_contiguous_rows()
{
    // only the middle axis narrowed: every inner run ends before the row does
    let arr = sequential(3, 10, 4);
    let view = arr.slice_axis(DimensionSpan::<B>::from(4..7));
    assert_equal(view.iter().copied(), reference_traversal(&arr, &view));
}

#[test]
fn full_views_traverse_in_storage_order()
{
    let arr = sequential(3, 4, 5);
    assert_equal(arr.view().iter(), arr.iter());
}

#[test]
fn reduced_views_with_strided_innermost_axis_iterate_correctly()
{
    // removing the innermost axis leaves B innermost with stride 4
    let arr = sequential(3, 5, 4);
    let c_fixed = arr.index_axis(DimensionIndex::<C>::new(2));
    let expected: Vec<i32> = (0..3)
        .flat_map(|i| (0..5).map(move |j| (i * 20 + j * 4 + 2) as i32))
        .collect();
    assert_equal(c_fixed.iter().copied(), expected);
}

#[test]
fn empty_spans_iterate_nothing()
{
    let arr = sequential(3, 4, 5);
    let empty = arr.slice_axis(DimensionSpan::<B>::from(4..4));
    assert_eq!(empty.data_size(), 0);
    assert_eq!(empty.iter().next(), None);

    let zero_sized = Cube::zeros((
        DimensionSize::<A>::new(0),
        DimensionSize::<B>::new(4),
        DimensionSize::<C>::new(5),
    ));
    assert_eq!(zero_sized.view().iter().next(), None);
}

#[test]
fn iterators_know_their_exact_length()
{
    let arr = sequential(4, 5, 6);
    let view = arr.slice((
        DimensionSpan::<A>::from(1..3),
        DimensionSpan::<C>::from(0..2),
    ));
    let mut iter = view.iter();
    let total = view.data_size();
    assert_eq!(iter.len(), total);
    for consumed in 0..total {
        assert_eq!(iter.len(), total - consumed);
        assert_eq!(iter.size_hint(), (total - consumed, Some(total - consumed)));
        assert!(iter.next().is_some());
    }
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
    // fused: stays finished
    assert_eq!(iter.next(), None);
}

#[test]
fn mutable_iteration_writes_every_selected_element()
{
    let mut arr = sequential(4, 5, 6);
    let mut view = arr.slice_mut((
        DimensionSpan::<A>::from(1..3),
        DimensionSpan::<B>::from(2..4),
    ));
    let count = view.iter_mut().map(|element| *element = -*element).count();
    assert_eq!(count, 2 * 2 * 6);

    for i in 0..4 {
        for j in 0..5 {
            for k in 0..6 {
                let value = arr.as_slice()[i * 30 + j * 6 + k];
                let expected = (i * 30 + j * 6 + k) as i32;
                let selected = (1..3).contains(&i) && (2..4).contains(&j);
                assert_eq!(value, if selected { -expected } else { expected });
            }
        }
    }
}

#[test]
fn into_iterator_forms_agree()
{
    let arr = sequential(2, 3, 4);
    let view = arr.slice_axis(DimensionSpan::<B>::from(1..3));
    let by_value: Vec<i32> = view.into_iter().copied().collect();
    let by_ref: Vec<i32> = (&view).into_iter().copied().collect();
    let by_loop: Vec<i32> = {
        let mut out = Vec::new();
        for &element in view {
            out.push(element);
        }
        out
    };
    assert_eq!(by_value, by_ref);
    assert_eq!(by_value, by_loop);
}

quickcheck! {
    fn iteration_matches_reference_for_arbitrary_spans(
        a0: usize, al: usize, b0: usize, bl: usize, c0: usize, cl: usize
    ) -> bool {
        let arr = sequential(4, 5, 6);
        // arbitrary requests, clamped by the engine's own trim policy
        let view = arr.slice((
            DimensionSpan::<A>::new(DimensionIndex::new(a0 % 6), DimensionSize::new(al % 6)),
            DimensionSpan::<B>::new(DimensionIndex::new(b0 % 7), DimensionSize::new(bl % 7)),
            DimensionSpan::<C>::new(DimensionIndex::new(c0 % 8), DimensionSize::new(cl % 8)),
        ));
        let expected = reference_traversal(&arr, &view);
        expected.len() == view.data_size()
            && view.iter().copied().eq(expected)
    }
}
