// ABOUTME: Command modules for strength-cli
// ABOUTME: Read-only analyses and the workout logging command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod log;
