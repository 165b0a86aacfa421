// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::models::{
    CrawlId, HttpRedirect, HttpRequest, HttpResponse, JavascriptCookieChange, JavascriptOperation,
    Timestamp, VisitId,
};
use crate::utils::errors::RecordError;

/// 记录类型枚举
///
/// 每种记录对应下游存储中的一张表，枚举值即表名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "http_requests")]
    HttpRequests,
    #[serde(rename = "http_responses")]
    HttpResponses,
    #[serde(rename = "http_redirects")]
    HttpRedirects,
    #[serde(rename = "javascript")]
    Javascript,
    #[serde(rename = "javascript_cookies")]
    JavascriptCookies,
}

impl RecordType {
    pub const ALL: [RecordType; 5] = [
        RecordType::HttpRequests,
        RecordType::HttpResponses,
        RecordType::HttpRedirects,
        RecordType::Javascript,
        RecordType::JavascriptCookies,
    ];

    /// 表名
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::HttpRequests => "http_requests",
            RecordType::HttpResponses => "http_responses",
            RecordType::HttpRedirects => "http_redirects",
            RecordType::Javascript => "javascript",
            RecordType::JavascriptCookies => "javascript_cookies",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RecordError::UnknownRecordType(s.to_string()))
    }
}

/// 记录信封
///
/// 采集端以 `{"record_type": "<表名>", "data": {...}}` 的形式发送记录，
/// 这里把表名和记录体合成一个和类型。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record_type", content = "data")]
pub enum Record {
    #[serde(rename = "http_requests")]
    HttpRequest(HttpRequest),
    #[serde(rename = "http_responses")]
    HttpResponse(HttpResponse),
    #[serde(rename = "http_redirects")]
    HttpRedirect(HttpRedirect),
    #[serde(rename = "javascript")]
    JavascriptOperation(JavascriptOperation),
    #[serde(rename = "javascript_cookies")]
    JavascriptCookieChange(JavascriptCookieChange),
}

impl Record {
    /// 从 JSON 文本解码一个记录信封
    pub fn from_json_str(input: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(input)?)
    }

    /// 编码为单行 JSON 文本
    pub fn to_json_string(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Record::HttpRequest(_) => RecordType::HttpRequests,
            Record::HttpResponse(_) => RecordType::HttpResponses,
            Record::HttpRedirect(_) => RecordType::HttpRedirects,
            Record::JavascriptOperation(_) => RecordType::Javascript,
            Record::JavascriptCookieChange(_) => RecordType::JavascriptCookies,
        }
    }

    pub fn time_stamp(&self) -> &Timestamp {
        match self {
            Record::HttpRequest(r) => &r.time_stamp,
            Record::HttpResponse(r) => &r.time_stamp,
            Record::HttpRedirect(r) => &r.time_stamp,
            Record::JavascriptOperation(r) => &r.time_stamp,
            Record::JavascriptCookieChange(r) => &r.time_stamp,
        }
    }

    pub fn crawl_id(&self) -> Option<CrawlId> {
        match self {
            Record::HttpRequest(r) => r.crawl_id,
            Record::HttpResponse(r) => r.crawl_id,
            Record::HttpRedirect(r) => r.crawl_id,
            Record::JavascriptOperation(r) => r.crawl_id,
            Record::JavascriptCookieChange(r) => r.crawl_id,
        }
    }

    pub fn visit_id(&self) -> Option<VisitId> {
        match self {
            Record::HttpRequest(r) => r.visit_id,
            Record::HttpResponse(r) => r.visit_id,
            Record::HttpRedirect(r) => r.visit_id,
            Record::JavascriptOperation(r) => r.visit_id,
            Record::JavascriptCookieChange(r) => r.visit_id,
        }
    }

    /// 填写爬取ID和访问ID
    ///
    /// 采集端创建记录时通常不带这两个标识符，由持久化层在写入前补齐。
    pub fn assign_ids(&mut self, crawl_id: CrawlId, visit_id: VisitId) {
        let (crawl, visit) = match self {
            Record::HttpRequest(r) => (&mut r.crawl_id, &mut r.visit_id),
            Record::HttpResponse(r) => (&mut r.crawl_id, &mut r.visit_id),
            Record::HttpRedirect(r) => (&mut r.crawl_id, &mut r.visit_id),
            Record::JavascriptOperation(r) => (&mut r.crawl_id, &mut r.visit_id),
            Record::JavascriptCookieChange(r) => (&mut r.crawl_id, &mut r.visit_id),
        };
        *crawl = Some(crawl_id);
        *visit = Some(visit_id);
    }
}

impl From<HttpRequest> for Record {
    fn from(value: HttpRequest) -> Self {
        Record::HttpRequest(value)
    }
}

impl From<HttpResponse> for Record {
    fn from(value: HttpResponse) -> Self {
        Record::HttpResponse(value)
    }
}

impl From<HttpRedirect> for Record {
    fn from(value: HttpRedirect) -> Self {
        Record::HttpRedirect(value)
    }
}

impl From<JavascriptOperation> for Record {
    fn from(value: JavascriptOperation) -> Self {
        Record::JavascriptOperation(value)
    }
}

impl From<JavascriptCookieChange> for Record {
    fn from(value: JavascriptCookieChange) -> Self {
        Record::JavascriptCookieChange(value)
    }
}
