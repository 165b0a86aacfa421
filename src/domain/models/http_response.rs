// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::common::{CrawlId, Flag, Timestamp, VisitId};

/// HTTP响应记录
///
/// 通过 `channel_id` 与对应的请求关联。`content_hash` 只有在
/// 对响应体做了哈希时才会出现。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_id: Option<CrawlId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<VisitId>,
    pub url: String,
    pub method: String,
    pub referrer: String,
    /// HTTP状态码
    pub response_status: u16,
    /// 状态行文本，例如 "OK"
    pub response_status_text: String,
    /// 是否命中缓存
    pub is_cached: Flag,
    pub headers: String,
    pub channel_id: String,
    /// Location 头（重定向目标），无则为空串
    pub location: String,
    pub time_stamp: Timestamp,
    /// 响应体内容哈希
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

impl HttpResponse {
    /// 状态码是否属于 3xx 重定向区间
    pub fn is_redirect_status(&self) -> bool {
        (300..400).contains(&self.response_status)
    }
}
