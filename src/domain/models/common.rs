// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::utils::errors::RecordError;

/// 数值布尔标志
///
/// 在线上格式中编码为整数 0/1，而不是原生布尔值，
/// 以保持与现有下游消费者的兼容。其它任何数值都会在反序列化时被拒绝。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flag(bool);

impl Flag {
    pub const TRUE: Flag = Flag(true);
    pub const FALSE: Flag = Flag(false);

    pub fn new(value: bool) -> Self {
        Self(value)
    }

    /// 以原生布尔值读取标志
    pub fn as_bool(self) -> bool {
        self.0
    }

    /// 线上格式的整数值
    pub fn as_u8(self) -> u8 {
        u8::from(self.0)
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Flag> for bool {
    fn from(flag: Flag) -> Self {
        flag.0
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u64::deserialize(deserializer)? {
            0 => Ok(Flag(false)),
            1 => Ok(Flag(true)),
            other => Err(de::Error::invalid_value(
                Unexpected::Unsigned(other),
                &"0 or 1",
            )),
        }
    }
}

/// 事件时间戳
///
/// 保存采集端给出的原始 ISO-8601 字符串，序列化时原样输出，
/// 需要时再通过 [`Timestamp::parse`] 解析为 chrono 时间。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 以毫秒精度、`Z` 后缀生成当前 UTC 时间戳
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 按 RFC 3339 解析时间戳
    ///
    /// # 返回值
    ///
    /// * `Ok(DateTime<FixedOffset>)` - 解析成功
    /// * `Err(RecordError::InvalidTimestamp)` - 字符串不是合法的 RFC 3339 时间
    pub fn parse(&self) -> Result<DateTime<FixedOffset>, RecordError> {
        DateTime::parse_from_rfc3339(&self.0).map_err(|source| RecordError::InvalidTimestamp {
            value: self.0.clone(),
            source,
        })
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 爬取（浏览器实例）标识符
///
/// 分区数据集读取器只支持最多 32 位的整数分区列，因此限定为 u32。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrawlId(pub u32);

impl CrawlId {
    /// 随机生成一个 32 位爬取ID
    pub fn generate() -> Self {
        Self(rand::random::<u32>())
    }
}

impl fmt::Display for CrawlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 页面访问标识符
///
/// JavaScript 只能精确表示 53 位以内的整数，生成的值不超过 2^53 - 1。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitId(pub i64);

impl VisitId {
    pub const MAX: i64 = (1 << 53) - 1;

    /// 随机生成一个非负的 53 位访问ID
    pub fn generate() -> Self {
        Self((rand::random::<u64>() >> 11) as i64)
    }
}

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
