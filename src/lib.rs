// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含记录校验用例和报告数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含五类事件记录、记录信封和表结构目录
pub mod domain;

/// 表示层模块
///
/// 命令行接口
pub mod presentation;

/// 工具模块
///
/// 提供错误类型和日志初始化
pub mod utils;
