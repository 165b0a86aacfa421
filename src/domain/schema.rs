// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::record::RecordType;

/// 列的取值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// 整数（包括标识符、状态码、策略值）
    Integer,
    /// 0/1 数值标志
    Flag,
    /// 任意字符串，包括序列化后的头部和请求体
    Text,
    /// ISO-8601 时间字符串
    DateTime,
    /// deleted / added / changed 三者之一
    CookieChange,
}

/// 列定义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub required: bool,
}

/// 表定义
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableSchema {
    pub table: RecordType,
    pub columns: &'static [Column],
}

const fn required(name: &'static str, column_type: ColumnType) -> Column {
    Column {
        name,
        column_type,
        required: true,
    }
}

const fn optional(name: &'static str, column_type: ColumnType) -> Column {
    Column {
        name,
        column_type,
        required: false,
    }
}

use ColumnType::{CookieChange, DateTime, Flag, Integer, Text};

const HTTP_REQUESTS: &[Column] = &[
    optional("id", Integer),
    optional("crawl_id", Integer),
    optional("visit_id", Integer),
    required("url", Text),
    optional("top_level_url", Text),
    required("method", Text),
    required("referrer", Text),
    required("headers", Text),
    required("channel_id", Text),
    optional("is_XHR", Flag),
    optional("is_frame_load", Flag),
    optional("is_full_page", Flag),
    optional("is_third_party_channel", Flag),
    optional("is_third_party_to_top_window", Flag),
    optional("triggering_origin", Text),
    optional("loading_origin", Text),
    optional("loading_href", Text),
    optional("req_call_stack", Text),
    required("resource_type", Text),
    optional("post_body", Text),
    required("time_stamp", DateTime),
];

const HTTP_RESPONSES: &[Column] = &[
    optional("id", Integer),
    optional("crawl_id", Integer),
    optional("visit_id", Integer),
    required("url", Text),
    required("method", Text),
    required("referrer", Text),
    required("response_status", Integer),
    required("response_status_text", Text),
    required("is_cached", Flag),
    required("headers", Text),
    required("channel_id", Text),
    required("location", Text),
    required("time_stamp", DateTime),
    optional("content_hash", Text),
];

const HTTP_REDIRECTS: &[Column] = &[
    optional("id", Integer),
    optional("crawl_id", Integer),
    optional("visit_id", Integer),
    required("old_channel_id", Text),
    required("new_channel_id", Text),
    required("is_temporary", Flag),
    required("is_permanent", Flag),
    required("is_internal", Flag),
    required("is_sts_upgrade", Flag),
    required("time_stamp", DateTime),
];

const JAVASCRIPT: &[Column] = &[
    optional("id", Integer),
    optional("crawl_id", Integer),
    optional("visit_id", Integer),
    required("script_url", Text),
    required("script_line", Text),
    required("script_col", Text),
    required("func_name", Text),
    required("script_loc_eval", Text),
    required("document_url", Text),
    required("top_level_url", Text),
    required("call_stack", Text),
    required("symbol", Text),
    required("operation", Text),
    required("value", Text),
    optional("arguments", Text),
    required("time_stamp", DateTime),
];

const JAVASCRIPT_COOKIES: &[Column] = &[
    optional("id", Integer),
    optional("crawl_id", Integer),
    optional("visit_id", Integer),
    optional("change", CookieChange),
    required("creationTime", DateTime),
    required("expiry", DateTime),
    required("is_http_only", Flag),
    required("is_host_only", Flag),
    required("is_session", Flag),
    required("last_accessed", DateTime),
    required("raw_host", Text),
    optional("expires", Integer),
    required("host", Text),
    required("is_domain", Flag),
    required("is_secure", Flag),
    required("name", Text),
    required("path", Text),
    required("policy", Integer),
    required("status", Integer),
    required("value", Text),
    required("time_stamp", DateTime),
];

/// 获取指定记录类型的表定义
pub fn table_schema(table: RecordType) -> TableSchema {
    let columns = match table {
        RecordType::HttpRequests => HTTP_REQUESTS,
        RecordType::HttpResponses => HTTP_RESPONSES,
        RecordType::HttpRedirects => HTTP_REDIRECTS,
        RecordType::Javascript => JAVASCRIPT,
        RecordType::JavascriptCookies => JAVASCRIPT_COOKIES,
    };
    TableSchema { table, columns }
}

/// 全部五张表的定义，按 [`RecordType::ALL`] 的顺序排列
pub fn all_tables() -> Vec<TableSchema> {
    RecordType::ALL.into_iter().map(table_schema).collect()
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&'static Column> {
        let columns: &'static [Column] = self.columns;
        columns.iter().find(|c| c.name == name)
    }

    /// 记录体中出现但表定义里没有的列名
    pub fn unknown_columns(&self, data: &Map<String, Value>) -> Vec<String> {
        data.keys()
            .filter(|key| self.column(key).is_none())
            .cloned()
            .collect()
    }

    /// 记录体中缺失的必填列名
    ///
    /// 显式的 `null` 与缺失同等对待。
    pub fn missing_columns(&self, data: &Map<String, Value>) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| c.required && data.get(c.name).map_or(true, Value::is_null))
            .map(|c| c.name)
            .collect()
    }
}
