// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::application::dto::validation_report::{LineError, ValidationReport};
use crate::config::settings::ValidationSettings;
use crate::domain::models::Timestamp;
use crate::domain::record::{Record, RecordType};
use crate::domain::schema::{table_schema, ColumnType};
use crate::utils::errors::{RecordError, ValidationError};

// === Section: Use Case Definition ===

/// 被拒绝的一行
#[derive(Debug)]
pub struct LineRejection {
    /// 信封中能识别出的记录类型
    pub record_type: Option<RecordType>,
    pub error: RecordError,
}

impl LineRejection {
    fn new(record_type: Option<RecordType>, error: impl Into<RecordError>) -> Self {
        Self {
            record_type,
            error: error.into(),
        }
    }
}

/// 记录校验用例
///
/// 逐行读取 JSON Lines 格式的记录信封，检查每条记录是否符合
/// 对应表的结构，并生成汇总报告。
pub struct ValidateRecordsUseCase {
    settings: ValidationSettings,
}

// === Section: Implementation ===

impl ValidateRecordsUseCase {
    pub fn new(settings: ValidationSettings) -> Self {
        Self { settings }
    }

    /// 校验单行信封
    ///
    /// 检查顺序：JSON 语法、信封结构、记录类型、必填列、未知列（严格模式）、
    /// 类型化解码，以及可选的 DateTime 列格式检查。
    ///
    /// # 返回值
    ///
    /// * `Ok(Record)` - 解码后的记录
    /// * `Err(LineRejection)` - 第一个失败的检查
    pub fn check_line(&self, line: &str) -> Result<Record, LineRejection> {
        let value: Value = serde_json::from_str(line).map_err(|e| LineRejection::new(None, e))?;

        let envelope = value.as_object().ok_or_else(|| {
            LineRejection::new(
                None,
                RecordError::MalformedEnvelope("expected a JSON object".to_string()),
            )
        })?;

        let record_type: RecordType = envelope
            .get("record_type")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                LineRejection::new(
                    None,
                    RecordError::MalformedEnvelope("missing string field `record_type`".to_string()),
                )
            })?
            .parse::<RecordType>()
            .map_err(|e| LineRejection::new(None, e))?;

        let data = envelope
            .get("data")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                LineRejection::new(
                    Some(record_type),
                    RecordError::MalformedEnvelope("field `data` must be an object".to_string()),
                )
            })?;

        let schema = table_schema(record_type);

        let missing = schema.missing_columns(data);
        if !missing.is_empty() {
            return Err(LineRejection::new(
                Some(record_type),
                RecordError::MissingColumns {
                    table: record_type.to_string(),
                    columns: missing.join(", "),
                },
            ));
        }

        if self.settings.strict_columns {
            let mut unknown = schema.unknown_columns(data);
            unknown.extend(
                envelope
                    .keys()
                    .filter(|k| k.as_str() != "record_type" && k.as_str() != "data")
                    .cloned(),
            );
            if !unknown.is_empty() {
                return Err(LineRejection::new(
                    Some(record_type),
                    RecordError::UnknownColumns {
                        table: record_type.to_string(),
                        columns: unknown.join(", "),
                    },
                ));
            }
        }

        let record =
            Record::deserialize(&value).map_err(|e| LineRejection::new(Some(record_type), e))?;

        if self.settings.check_timestamps {
            // 检查所有 DateTime 列，不只是 time_stamp
            for column in schema
                .columns
                .iter()
                .filter(|c| c.column_type == ColumnType::DateTime)
            {
                if let Some(text) = data.get(column.name).and_then(Value::as_str) {
                    Timestamp::from(text)
                        .parse()
                        .map_err(|e| LineRejection::new(Some(record_type), e))?;
                }
            }
        }

        Ok(record)
    }

    /// 校验一段 JSON Lines 输入
    ///
    /// 空行会被跳过。单行失败（包括非 UTF-8 内容）不会中止校验，
    /// 只有读取失败才返回错误。
    pub async fn execute<R>(&self, mut reader: R) -> Result<ValidationReport, ValidationError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut report = ValidationReport::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            line_no += 1;

            let outcome = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.check_line(line),
                Err(e) => Err(LineRejection::new(None, e)),
            };
            report.lines_read += 1;

            match outcome {
                Ok(record) => {
                    let record_type = record.record_type();
                    report.valid += 1;
                    *report.per_table.entry(record_type).or_default() += 1;
                    if let Some(visit_id) = record.visit_id() {
                        report.visits.insert(visit_id);
                    }
                    debug!(line = line_no, record_type = %record_type, "Record accepted");
                }
                Err(rejection) => {
                    report.invalid += 1;
                    warn!(line = line_no, error = %rejection.error, "Record rejected");
                    if report.errors.len() < self.settings.max_errors {
                        report.errors.push(LineError {
                            line: line_no,
                            record_type: rejection.record_type,
                            message: rejection.error.to_string(),
                        });
                    } else {
                        report.truncated = true;
                    }
                }
            }
        }

        info!(
            lines = report.lines_read,
            valid = report.valid,
            invalid = report.invalid,
            visits = report.visits.len(),
            "Validation finished"
        );

        Ok(report)
    }
}
