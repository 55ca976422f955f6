// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod profile;
pub mod income;
pub mod expenses;
pub mod investments;
pub mod goals;
pub mod cards;
pub mod dashboard;
pub mod features;
pub mod news;
pub mod exporter;
pub mod doctor;
