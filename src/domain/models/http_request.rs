// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::common::{CrawlId, Flag, Timestamp, VisitId};

/// HTTP请求记录
///
/// 表示浏览会话中观察到的一次出站HTTP请求。许多字段只在特定的
/// 请求上下文中才有意义，缺失表示"未记录"，而不是"假"。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// 记录ID，由下游持久化层分配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 爬取ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_id: Option<CrawlId>,
    /// 访问ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<VisitId>,
    /// 请求URL
    pub url: String,
    /// 顶层文档URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_level_url: Option<String>,
    /// HTTP方法
    pub method: String,
    /// Referer 头
    pub referrer: String,
    /// 序列化后的请求头
    pub headers: String,
    /// 网络栈中的通道ID，用于关联响应和重定向
    pub channel_id: String,
    #[serde(rename = "is_XHR", default, skip_serializing_if = "Option::is_none")]
    pub is_xhr: Option<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_frame_load: Option<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_full_page: Option<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_third_party_channel: Option<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_third_party_to_top_window: Option<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggering_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_href: Option<String>,
    /// 发起请求时的 JS 调用栈
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req_call_stack: Option<String>,
    /// 资源类型（document、script、image 等）
    pub resource_type: String,
    /// 序列化后的 POST 请求体
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_body: Option<String>,
    /// 事件时间戳
    pub time_stamp: Timestamp,
}

impl HttpRequest {
    /// 创建只包含必填字段的请求记录
    ///
    /// # 参数
    ///
    /// * `url` - 请求URL
    /// * `method` - HTTP方法
    /// * `channel_id` - 通道ID
    /// * `resource_type` - 资源类型
    /// * `time_stamp` - 事件时间戳
    ///
    /// 其余必填的字符串字段（referrer、headers）初始化为空串，
    /// 可选字段全部为 `None`。
    pub fn new(
        url: String,
        method: String,
        channel_id: String,
        resource_type: String,
        time_stamp: Timestamp,
    ) -> Self {
        Self {
            id: None,
            crawl_id: None,
            visit_id: None,
            url,
            top_level_url: None,
            method,
            referrer: String::new(),
            headers: String::new(),
            channel_id,
            is_xhr: None,
            is_frame_load: None,
            is_full_page: None,
            is_third_party_channel: None,
            is_third_party_to_top_window: None,
            triggering_origin: None,
            loading_origin: None,
            loading_href: None,
            req_call_stack: None,
            resource_type,
            post_body: None,
            time_stamp,
        }
    }
}
