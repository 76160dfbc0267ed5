//! Property type inference across `GeoJSON` features.

use arrow_schema::DataType;
use geojson::JsonValue;

use crate::parser::FeatureRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InferredScalarType {
    Null,
    Boolean,
    Int32,
    Int64,
    Float64,
    Utf8,
}

impl InferredScalarType {
    fn update(self, value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => self,
            JsonValue::Bool(_) => match self {
                Self::Null | Self::Boolean => Self::Boolean,
                _ => Self::Utf8,
            },
            JsonValue::Number(n) => {
                let observed = match n.as_i64() {
                    Some(int) if i32::try_from(int).is_ok() => Self::Int32,
                    Some(_) => Self::Int64,
                    None if n.is_u64() => Self::Int64,
                    None => Self::Float64,
                };
                match self {
                    Self::Null => observed,
                    Self::Int32 | Self::Int64 | Self::Float64 => self.max(observed),
                    _ => Self::Utf8,
                }
            },
            JsonValue::String(_) | JsonValue::Array(_) | JsonValue::Object(_) => Self::Utf8,
        }
    }

    // Numeric widening order: Int32 < Int64 < Float64.
    fn max(self, other: Self) -> Self {
        let rank = |ty: Self| match ty {
            Self::Int32 => 0,
            Self::Int64 => 1,
            _ => 2,
        };
        if rank(other) > rank(self) { other } else { self }
    }

    fn to_datatype(self) -> DataType {
        match self {
            Self::Null | Self::Utf8 => DataType::Utf8,
            Self::Boolean => DataType::Boolean,
            Self::Int32 => DataType::Int32,
            Self::Int64 => DataType::Int64,
            Self::Float64 => DataType::Float64,
        }
    }
}

/// Infer one data type per property key, in first-appearance order.
#[must_use]
pub fn infer_property_types(records: &[FeatureRecord]) -> Vec<(String, DataType)> {
    let mut inferred: Vec<(String, InferredScalarType)> = Vec::new();

    for record in records {
        for (key, value) in &record.properties {
            let idx = match inferred.iter().position(|(name, _)| name == key) {
                Some(idx) => idx,
                None => {
                    inferred.push((key.clone(), InferredScalarType::Null));
                    inferred.len() - 1
                },
            };
            let entry = &mut inferred[idx].1;
            *entry = entry.update(value);
        }
    }

    inferred
        .into_iter()
        .map(|(name, ty)| (name, ty.to_datatype()))
        .collect()
}
