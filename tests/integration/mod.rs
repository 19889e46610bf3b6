// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod auth_test;
pub mod car_views_test;
pub mod health_check;
pub mod helpers;
pub mod manufacturer_views_test;
