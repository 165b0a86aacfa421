// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了浏览器插桩系统产生的五类事件记录：
/// - HTTP请求（http_request）：浏览会话中的出站请求
/// - HTTP响应（http_response）：通过通道ID与请求关联的响应
/// - HTTP重定向（http_redirect）：两个通道之间的跳转
/// - JS操作（javascript_operation）：被拦截的 JS API 调用
/// - Cookie变更（javascript_cookie_change）：被观察到的 Cookie 变动
///
/// 以及它们共用的值类型（common）：数值标志、时间戳和标识符。
pub mod common;
pub mod http_redirect;
pub mod http_request;
pub mod http_response;
pub mod javascript_cookie_change;
pub mod javascript_operation;

pub use common::{CrawlId, Flag, Timestamp, VisitId};
pub use http_redirect::HttpRedirect;
pub use http_request::HttpRequest;
pub use http_response::HttpResponse;
pub use javascript_cookie_change::{CookieChange, JavascriptCookieChange};
pub use javascript_operation::JavascriptOperation;
