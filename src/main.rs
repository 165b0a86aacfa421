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

use std::process::ExitCode;

use clap::Parser;
use crawl_schema::config::settings::Settings;
use crawl_schema::presentation::cli::{run_command, Cli};
use crawl_schema::utils::telemetry;
use tracing::debug;

/// 主函数
///
/// 应用程序入口点，负责加载配置、初始化日志并分发子命令
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 1. Load configuration
    let settings = Settings::load(cli.config.as_deref())?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    debug!(?settings, "Configuration loaded");

    // 3. Dispatch
    run_command(cli.command, settings).await
}
