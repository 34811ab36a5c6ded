#![cfg(feature = "serde")]

use astroarray::{DimensionIndex, DimensionSize, Frequency, MultiArray2, Time, TimeFrequency};

astroarray::dimension! {
    pub A, "a";
    pub B, "b";
}

#[test]
fn round_trip_through_json()
{
    let mut block = TimeFrequency::<u16>::zeros((
        DimensionSize::<Time>::new(3),
        DimensionSize::<Frequency>::new(4),
    ));
    for (offset, element) in block.iter_mut().enumerate() {
        *element = offset as u16;
    }

    let encoded = serde_json::to_string(&block).unwrap();
    let decoded: TimeFrequency<u16> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(block, decoded);
}

#[test]
fn serialized_form_is_shape_then_data()
{
    let arr =
        MultiArray2::<i8, A, B>::from_shape_vec(
            (DimensionSize::<A>::new(2), DimensionSize::<B>::new(3)),
            vec![1, 2, 3, 4, 5, 6],
        )
        .unwrap();
    let encoded = serde_json::to_value(&arr).unwrap();
    assert_eq!(encoded["shape"], serde_json::json!([2, 3]));
    assert_eq!(encoded["data"], serde_json::json!([1, 2, 3, 4, 5, 6]));
}

#[test]
fn mismatched_payload_is_rejected()
{
    let bad_length = r#"{"shape":[2,3],"data":[1,2,3,4,5]}"#;
    assert!(serde_json::from_str::<MultiArray2<i8, A, B>>(bad_length).is_err());

    let bad_rank = r#"{"shape":[2,3,1],"data":[1,2,3,4,5,6]}"#;
    assert!(serde_json::from_str::<MultiArray2<i8, A, B>>(bad_rank).is_err());
}

#[test]
fn indexes_survive_the_round_trip()
{
    let mut block = TimeFrequency::<i32>::zeros((
        DimensionSize::<Time>::new(4),
        DimensionSize::<Frequency>::new(5),
    ));
    *block
        .spectrum_mut(DimensionIndex::new(2))
        .get_mut(DimensionIndex::new(3))
        .unwrap() = 42;

    let decoded: TimeFrequency<i32> =
        serde_json::from_str(&serde_json::to_string(&block).unwrap()).unwrap();
    assert_eq!(decoded.spectrum(DimensionIndex::new(2))[DimensionIndex::new(3)], 42);
}
