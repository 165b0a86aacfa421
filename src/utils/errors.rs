// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 记录层错误类型
///
/// 覆盖记录解码、信封结构检查和列校验过程中可能出现的错误
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("行内容不是合法的UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("未知的记录类型: {0}")]
    UnknownRecordType(String),

    #[error("信封格式错误: {0}")]
    MalformedEnvelope(String),

    #[error("表 {table} 缺少必填列: {columns}")]
    MissingColumns { table: String, columns: String },

    #[error("表 {table} 中存在未知列: {columns}")]
    UnknownColumns { table: String, columns: String },

    #[error("无效的时间戳 {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// 校验用例错误类型
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("记录错误: {0}")]
    Record(#[from] RecordError),
}
