// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project
// ABOUTME: Helper modules for fittrack-cli
// ABOUTME: Output formatting and tracker state loading

pub mod display;
pub mod state;
