// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod http_redirect_test;
pub mod http_request_test;
pub mod javascript_cookie_change_test;
