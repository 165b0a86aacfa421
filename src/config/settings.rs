// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含记录校验、输出格式和日志三部分配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 记录校验配置
    pub validation: ValidationSettings,
    /// 输出配置
    pub output: OutputSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 记录校验配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSettings {
    /// 是否拒绝表定义之外的列
    pub strict_columns: bool,
    /// 是否要求所有 DateTime 列（time_stamp、creationTime、expiry、last_accessed）
    /// 为合法的 RFC 3339 时间
    pub check_timestamps: bool,
    /// 最多收集的错误条数
    pub max_errors: usize,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            strict_columns: true,
            check_timestamps: false,
            max_errors: 100,
        }
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 输出格式 (json, yaml)
    pub format: OutputFormat,
    /// JSON 输出是否缩进
    pub pretty: bool,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// 默认过滤规则，RUST_LOG 存在时以其为准
    pub filter: String,
    /// 是否输出 JSON 格式日志
    pub json: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// 加载配置，可额外指定一个必须存在的配置文件
    ///
    /// 优先级从低到高：默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// 指定的配置文件、`CRAWL_SCHEMA__` 前缀的环境变量。
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let mut builder = Config::builder()
            // Default validation settings
            .set_default("validation.strict_columns", true)?
            .set_default("validation.check_timestamps", false)?
            .set_default("validation.max_errors", 100)?
            // Default output settings
            .set_default("output.format", "json")?
            .set_default("output.pretty", true)?
            // Default logging settings
            .set_default("logging.filter", "info,crawl_schema=debug")?
            .set_default("logging.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("CRAWL_SCHEMA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
