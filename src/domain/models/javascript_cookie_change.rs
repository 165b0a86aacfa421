// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::common::{CrawlId, Flag, Timestamp, VisitId};

/// Cookie 变更类型
///
/// 封闭的三值标签，取值之外的字符串在反序列化时被拒绝。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookieChange {
    /// Cookie 被删除
    Deleted,
    /// 新增 Cookie
    Added,
    /// 已有 Cookie 被修改
    Changed,
}

impl fmt::Display for CookieChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CookieChange::Deleted => write!(f, "deleted"),
            CookieChange::Added => write!(f, "added"),
            CookieChange::Changed => write!(f, "changed"),
        }
    }
}

impl FromStr for CookieChange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deleted" => Ok(CookieChange::Deleted),
            "added" => Ok(CookieChange::Added),
            "changed" => Ok(CookieChange::Changed),
            _ => Err(()),
        }
    }
}

/// JavaScript Cookie 变更记录
///
/// 一次被观察到的 Cookie 变动，包括 Cookie 本身的属性快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JavascriptCookieChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_id: Option<CrawlId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<VisitId>,
    /// 变更类型
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<CookieChange>,
    /// Cookie 创建时间
    #[serde(rename = "creationTime")]
    pub creation_time: Timestamp,
    /// 过期时间
    pub expiry: Timestamp,
    pub is_http_only: Flag,
    pub is_host_only: Flag,
    pub is_session: Flag,
    pub last_accessed: Timestamp,
    pub raw_host: String,
    /// 过期时间，整数秒级时间戳；带小数的值会被拒绝
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
    pub host: String,
    pub is_domain: Flag,
    pub is_secure: Flag,
    pub name: String,
    pub path: String,
    /// 浏览器 Cookie 策略
    pub policy: i32,
    /// 浏览器 Cookie 状态
    pub status: i32,
    pub value: String,
    pub time_stamp: Timestamp,
}
