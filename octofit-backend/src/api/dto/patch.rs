// src/api/dto/patch.rs

use serde::{de, Deserialize, Deserializer};

pub const NULL_FIELD_MESSAGE: &str = "This field may not be null.";

/// PATCH 用のフィールドデシリアライザ
///
/// `#[serde(default, deserialize_with = "non_null")]` と組み合わせて使う。
/// キーの省略は `None`（変更なし）、明示的な `null` はエラーになる。
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| de::Error::custom(NULL_FIELD_MESSAGE))
}
