// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 命令行模块
///
/// 提供以下子命令：
/// - validate：校验 JSON Lines 格式的记录信封
/// - describe：输出表的列目录
/// - ids：生成新的爬取ID和访问ID
mod args;
mod commands;

pub use args::{Cli, Command};
pub use commands::{render, run_command, validate, GeneratedIds};
