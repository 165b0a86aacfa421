// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::models::VisitId;
use crate::domain::record::RecordType;

/// 单行校验错误
#[derive(Debug, Clone, Serialize)]
pub struct LineError {
    /// 行号，从 1 开始
    pub line: usize,
    /// 能识别出记录类型时给出表名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    /// 错误描述
    pub message: String,
}

/// 校验报告数据传输对象
///
/// 汇总一次 JSON Lines 输入的校验结果
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    /// 非空行数
    pub lines_read: usize,
    /// 通过校验的记录数
    pub valid: usize,
    /// 未通过校验的记录数
    pub invalid: usize,
    /// 各表通过校验的记录数
    pub per_table: BTreeMap<RecordType, usize>,
    /// 通过校验的记录中出现过的访问ID
    pub visits: BTreeSet<VisitId>,
    /// 收集到的错误，最多 `max_errors` 条
    pub errors: Vec<LineError>,
    /// 错误数超过上限而被截断
    pub truncated: bool,
}

impl ValidationReport {
    /// 所有记录均通过校验
    pub fn is_clean(&self) -> bool {
        self.invalid == 0
    }
}
