// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::complex::Complex;
use crate::{Iter, NArray, Shape};

/// Version of the serialized array layout.
const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for Shape {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        self.dims().serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<usize>::deserialize(deserializer).map(Shape::from)
    }
}

/// Serialized as the pair `[re, im]`.
///
/// **Requires crate feature `"serde"`**
impl<T: Copy + Serialize> Serialize for Complex<T> {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        (self.real(), self.imag()).serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Complex<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (re, im) = <(T, T)>::deserialize(deserializer)?;
        Ok(Complex::new(re, im))
    }
}

/// **Requires crate feature `"serde"`**
impl<T> Serialize for NArray<T>
where
    T: Copy + Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut state = serializer.serialize_struct("NArray", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("dim", self.shape())?;
        state.serialize_field("data", &Sequence(self.iter()))?;
        state.end()
    }
}

// private iterator wrapper
struct Sequence<'a, T: Copy>(Iter<'a, T>);

impl<'a, T> Serialize for Sequence<'a, T>
where
    T: Copy + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let iter = &self.0;
        let mut seq = serializer.serialize_seq(Some(iter.len()))?;
        for elt in iter.clone() {
            seq.serialize_element(&elt)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T> {
    _marker: PhantomData<T>,
}

enum ArrayField {
    Version,
    Dim,
    Data,
}

impl<T> ArrayVisitor<T> {
    pub fn new() -> Self {
        ArrayVisitor { _marker: PhantomData }
    }
}

static ARRAY_FIELDS: &[&str] = &["v", "dim", "data"];

/// **Requires crate feature `"serde"`**
impl<'de, T> Deserialize<'de> for NArray<T>
where
    T: Copy + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<NArray<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("NArray", ARRAY_FIELDS, ArrayVisitor::new())
    }
}

impl<'de> Deserialize<'de> for ArrayField {
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(r#""v", "dim", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    "v" => Ok(ArrayField::Version),
                    "dim" => Ok(ArrayField::Dim),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    b"v" => Ok(ArrayField::Version),
                    b"dim" => Ok(ArrayField::Dim),
                    b"data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(
                        &String::from_utf8_lossy(other),
                        ARRAY_FIELDS,
                    )),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

fn build_array<T, E>(dim: Shape, data: Vec<T>) -> Result<NArray<T>, E>
where
    E: de::Error,
{
    NArray::from_shape_vec(dim, data)
        .map_err(|_| de::Error::custom("data and dimension must match in size"))
}

impl<'de, T> Visitor<'de> for ArrayVisitor<T>
where
    T: Copy + Deserialize<'de>,
{
    type Value = NArray<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("narray representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<NArray<T>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(0, &self));
            }
        };

        verify_version(v)?;

        let dim: Shape = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(1, &self));
            }
        };

        let data: Vec<T> = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(2, &self));
            }
        };

        build_array(dim, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<NArray<T>, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut v: Option<u8> = None;
        let mut data: Option<Vec<T>> = None;
        let mut dim: Option<Shape> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                ArrayField::Data => {
                    data = Some(visitor.next_value()?);
                }
                ArrayField::Dim => {
                    dim = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }
        let data = data.ok_or_else(|| de::Error::missing_field("data"))?;
        let dim = dim.ok_or_else(|| de::Error::missing_field("dim"))?;

        build_array(dim, data)
    }
}
