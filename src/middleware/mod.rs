// ABOUTME: HTTP middleware for the exercise service
// ABOUTME: Request correlation IDs and per-request tracing spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Request ID generation and tracing spans
pub mod tracing;

pub use self::tracing::{
    create_request_span, generate_request_id, MakeRequestHexId, RequestContext,
};
