use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dimension::DimensionList;
use crate::multi_array::MultiArray;

/// Arrays serialize as a struct of the axis sizes (in declared order) and
/// the elements in storage order.
///
/// **Requires crate feature `"serde"`**
impl<A, L> Serialize for MultiArray<A, L>
where
    A: Serialize,
    L: DimensionList,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        let mut sizes = Vec::with_capacity(L::RANK);
        L::push_sizes(&self.sizes, &mut sizes);
        let mut state = serializer.serialize_struct("MultiArray", 2)?;
        state.serialize_field("shape", &sizes)?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

enum ArrayField
{
    Shape,
    Data,
}

impl<'de> Deserialize<'de> for ArrayField
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where De: Deserializer<'de>
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor
        {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
            {
                formatter.write_str("`shape` or `data`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where E: de::Error
            {
                match value {
                    "shape" => Ok(ArrayField::Shape),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, &["shape", "data"])),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

struct ArrayVisitor<A, L>
{
    marker: PhantomData<(A, L)>,
}

/// **Requires crate feature `"serde"`**
impl<'de, A, L> Deserialize<'de> for MultiArray<A, L>
where
    A: Deserialize<'de>,
    L: DimensionList,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where De: Deserializer<'de>
    {
        deserializer.deserialize_struct(
            "MultiArray",
            &["shape", "data"],
            ArrayVisitor { marker: PhantomData },
        )
    }
}

fn build_array<A, L, E>(shape: Vec<usize>, data: Vec<A>) -> Result<MultiArray<A, L>, E>
where
    L: DimensionList,
    E: de::Error,
{
    let sizes = L::read_sizes(&shape)
        .ok_or_else(|| de::Error::custom(format_args!("expected {} axis sizes", L::RANK)))?;
    MultiArray::from_raw_parts(sizes, data)
        .map_err(|_| de::Error::custom("data length does not match shape"))
}

impl<'de, A, L> Visitor<'de> for ArrayVisitor<A, L>
where
    A: Deserialize<'de>,
    L: DimensionList,
{
    type Value = MultiArray<A, L>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(formatter, "an array with {} axes", L::RANK)
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where V: SeqAccess<'de>
    {
        let shape: Vec<usize> = visitor
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let data: Vec<A> = visitor
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        build_array(shape, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where V: MapAccess<'de>
    {
        let mut shape: Option<Vec<usize>> = None;
        let mut data: Option<Vec<A>> = None;
        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Shape => {
                    shape = Some(visitor.next_value()?);
                }
                ArrayField::Data => {
                    data = Some(visitor.next_value()?);
                }
            }
        }
        let shape = shape.ok_or_else(|| de::Error::missing_field("shape"))?;
        let data = data.ok_or_else(|| de::Error::missing_field("data"))?;
        build_array(shape, data)
    }
}
