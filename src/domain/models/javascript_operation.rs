// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::common::{CrawlId, Timestamp, VisitId};

/// JavaScript 操作记录
///
/// 一次被插桩拦截的 JS API 调用或属性访问。`value` 和 `arguments`
/// 是采集端自由序列化的字符串，这里不做解释。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JavascriptOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_id: Option<CrawlId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<VisitId>,
    /// 发起调用的脚本URL
    pub script_url: String,
    pub script_line: String,
    pub script_col: String,
    pub func_name: String,
    /// eval 链中的脚本位置
    pub script_loc_eval: String,
    pub document_url: String,
    pub top_level_url: String,
    pub call_stack: String,
    /// 被访问的符号，例如 `window.navigator.userAgent`
    pub symbol: String,
    /// 操作类型，例如 get、set、call
    pub operation: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    pub time_stamp: Timestamp,
}

impl JavascriptOperation {
    /// 是否是函数调用
    pub fn is_call(&self) -> bool {
        self.operation == "call"
    }
}
