// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含应用程序的用例实现
/// 用例只协调领域对象，不关心输入来自文件还是标准输入
pub mod dto;
pub mod usecases;
