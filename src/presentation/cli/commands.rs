// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use serde::Serialize;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::info;

use crate::application::dto::validation_report::ValidationReport;
use crate::application::usecases::validate_records::ValidateRecordsUseCase;
use crate::config::settings::{OutputFormat, OutputSettings, Settings};
use crate::domain::models::{CrawlId, VisitId};
use crate::domain::record::RecordType;
use crate::domain::schema::{all_tables, table_schema};

use super::args::Command;

/// 一对新生成的标识符
#[derive(Debug, Serialize)]
pub struct GeneratedIds {
    pub crawl_id: CrawlId,
    pub visit_id: VisitId,
}

/// 执行子命令并返回进程退出码
pub async fn run_command(command: Command, mut settings: Settings) -> anyhow::Result<ExitCode> {
    match command {
        Command::Validate {
            input,
            lenient,
            check_timestamps,
        } => {
            if lenient {
                settings.validation.strict_columns = false;
            }
            if check_timestamps {
                settings.validation.check_timestamps = true;
            }
            let report = validate(input.as_deref(), &settings).await?;
            println!("{}", render(&settings.output, &report)?);
            Ok(if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Describe { table } => {
            let rendered = match table {
                Some(name) => {
                    let table: RecordType = name.parse()?;
                    render(&settings.output, &table_schema(table))?
                }
                None => render(&settings.output, &all_tables())?,
            };
            println!("{}", rendered);
            Ok(ExitCode::SUCCESS)
        }
        Command::Ids => {
            let ids = GeneratedIds {
                crawl_id: CrawlId::generate(),
                visit_id: VisitId::generate(),
            };
            println!("{}", render(&settings.output, &ids)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// 校验文件或标准输入
pub async fn validate(
    input: Option<&Path>,
    settings: &Settings,
) -> anyhow::Result<ValidationReport> {
    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match input {
        Some(path) if path != Path::new("-") => {
            info!(path = %path.display(), "Validating records from file");
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        _ => {
            info!("Validating records from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        }
    };

    let use_case = ValidateRecordsUseCase::new(settings.validation.clone());
    Ok(use_case.execute(reader).await?)
}

/// 按配置的输出格式渲染结果
pub fn render<T: Serialize>(output: &OutputSettings, value: &T) -> anyhow::Result<String> {
    let rendered = match output.format {
        OutputFormat::Json if output.pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}
