// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含记录契约本身：
/// - 领域模型（models）：五类事件记录及其值类型
/// - 记录信封（record）：表名与记录体组成的和类型
/// - 表结构（schema）：每张表的列目录
///
/// 领域层不做任何采集、传输或持久化，
/// 只描述生产者和消费者之间交换的数据形状。
pub mod models;
pub mod record;
pub mod schema;
