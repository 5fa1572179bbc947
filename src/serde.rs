use crate::DynArray;
use ::serde::{
    de::{Deserialize, Deserializer, Error as _, SeqAccess, Visitor},
    ser::{Serialize, SerializeSeq, Serializer},
};
use std::{
    fmt::{self, Formatter},
    marker::PhantomData,
};

// Bounds the allocation made from an untrusted length hint.
const MAX_PREALLOCATION: usize = 4096;

impl<T> Serialize for DynArray<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for DynArray<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(DynArrayVisitor(PhantomData))
    }
}

struct DynArrayVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for DynArrayVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = DynArray<T>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATION);
        let mut out = DynArray::try_with_capacity(capacity).map_err(A::Error::custom)?;
        while let Some(next) = seq.next_element()? {
            out.try_push(next).map_err(A::Error::custom)?;
        }
        Ok(out)
    }
}
