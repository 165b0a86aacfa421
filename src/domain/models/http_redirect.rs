// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::common::{CrawlId, Flag, Timestamp, VisitId};

/// HTTP重定向记录
///
/// 描述两个网络通道之间的一次重定向跳转。四个标志分别描述
/// 重定向的性质，类型本身并不保证它们互斥。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRedirect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_id: Option<CrawlId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<VisitId>,
    /// 原通道ID
    pub old_channel_id: String,
    /// 新通道ID
    pub new_channel_id: String,
    pub is_temporary: Flag,
    pub is_permanent: Flag,
    pub is_internal: Flag,
    /// HSTS 升级
    pub is_sts_upgrade: Flag,
    pub time_stamp: Timestamp,
}

impl HttpRedirect {
    pub fn new(old_channel_id: String, new_channel_id: String, time_stamp: Timestamp) -> Self {
        Self {
            id: None,
            crawl_id: None,
            visit_id: None,
            old_channel_id,
            new_channel_id,
            is_temporary: Flag::FALSE,
            is_permanent: Flag::FALSE,
            is_internal: Flag::FALSE,
            is_sts_upgrade: Flag::FALSE,
            time_stamp,
        }
    }
}
