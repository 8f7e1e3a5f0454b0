// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project
// ABOUTME: Re-exports command modules for fittrack-cli
// ABOUTME: One module per tracker domain plus estimation and reporting

pub mod dashboard;
pub mod estimate;
pub mod log;
pub mod profile;
pub mod progress;
pub mod report;
pub mod water;
pub mod workout;
