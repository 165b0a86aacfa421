// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// crawl-schema - 浏览器插桩爬取记录的校验与结构查看工具
#[derive(Parser, Debug)]
#[command(name = "crawl-schema")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// 额外的配置文件路径
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON Lines file of record envelopes
    Validate {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,

        /// Accept columns that are not part of the table schema
        #[arg(long)]
        lenient: bool,

        /// Require every date-time column to be RFC 3339
        #[arg(long)]
        check_timestamps: bool,
    },

    /// Print the column catalogue of one table or all tables
    Describe {
        /// Table name, e.g. http_requests
        table: Option<String>,
    },

    /// Generate a fresh crawl_id / visit_id pair
    Ids,
}
