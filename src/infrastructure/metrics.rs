// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 新建记录计数器名称，标签 `entity`
pub const RECORDS_CREATED: &str = "taxi_records_created_total";
/// 登录尝试计数器名称，标签 `outcome`
pub const LOGINS: &str = "taxi_logins_total";

/// 启动 Prometheus 导出器
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.address, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次新建
pub fn record_created(entity: &'static str) {
    metrics::counter!(RECORDS_CREATED, "entity" => entity).increment(1);
}

/// 记录一次登录尝试
pub fn record_login(outcome: &'static str) {
    metrics::counter!(LOGINS, "outcome" => outcome).increment(1);
}
