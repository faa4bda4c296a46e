// ABOUTME: Error types for the nutrilabel engine, re-exported from the foundation crate
// ABOUTME: Keeps `crate::errors::AppError` as the single error path used by every module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling
//!
//! Validation failures (`INVALID_INPUT`) and domain failures
//! (`VALUE_OUT_OF_RANGE`) share [`AppError`]. Use
//! [`AppError::is_validation`] to tell a caller bug from an engine failure.

pub use nutrilabel_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
