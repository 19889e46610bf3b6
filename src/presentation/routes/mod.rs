// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::password_hasher::PasswordHasher;
use crate::infrastructure::repositories::car_repo_impl::CarRepositoryImpl;
use crate::infrastructure::repositories::driver_repo_impl::DriverRepositoryImpl;
use crate::infrastructure::repositories::manufacturer_repo_impl::ManufacturerRepositoryImpl;
use crate::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;
use crate::presentation::handlers::{
    admin_handler, auth_handler, car_handler, driver_handler, index_handler,
    manufacturer_handler,
};
use crate::presentation::middleware::auth_middleware::{
    auth_middleware, staff_middleware, AuthState,
};
use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

type Manufacturers = ManufacturerRepositoryImpl;
type Drivers = DriverRepositoryImpl;
type Cars = CarRepositoryImpl;
type Sessions = SessionRepositoryImpl;

/// 创建应用路由
///
/// 公开路由（健康检查、版本、登录/登出）之外的所有路由都经过会话认证中间件，
/// 管理后台路由另外要求员工权限。
///
/// # 参数
///
/// * `db` - 数据库连接
/// * `settings` - 应用配置
///
/// # 返回值
///
/// 返回配置好的路由
pub fn build_router(db: Arc<DatabaseConnection>, settings: &Settings) -> Router {
    let auth_state = AuthState::new(db.clone(), settings.auth.clone());
    let hasher = PasswordHasher::new(settings.auth.password_iterations);

    let manufacturer_repo = Arc::new(Manufacturers::new(db.clone()));
    let driver_repo = Arc::new(Drivers::new(db.clone()));
    let car_repo = Arc::new(Cars::new(db.clone()));
    let session_repo = Arc::new(Sessions::new(db));

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route(
            "/accounts/login/",
            get(auth_handler::login_page).post(auth_handler::login),
        )
        .route("/accounts/logout/", post(auth_handler::logout))
        .with_state(auth_state.clone());

    let admin_routes = Router::new()
        .route(
            "/admin/taxi/driver/",
            get(admin_handler::driver_changelist::<Drivers>),
        )
        .route(
            "/admin/taxi/driver/add/",
            get(admin_handler::driver_add_view).post(admin_handler::driver_add::<Drivers>),
        )
        .route(
            "/admin/taxi/driver/{pk}/change/",
            get(admin_handler::driver_change_view::<Drivers>)
                .post(admin_handler::driver_change::<Drivers>),
        )
        .route(
            "/admin/taxi/car/",
            get(admin_handler::car_changelist::<Cars, Manufacturers>),
        )
        .route(
            "/admin/taxi/manufacturer/",
            get(admin_handler::manufacturer_changelist::<Manufacturers>),
        )
        .layer(middleware::from_fn(staff_middleware));

    let protected_routes = Router::new()
        .route(
            "/",
            get(index_handler::index::<Manufacturers, Drivers, Cars, Sessions>),
        )
        .route(
            "/manufacturers/",
            get(manufacturer_handler::list_manufacturers::<Manufacturers>),
        )
        .route(
            "/manufacturers/create/",
            post(manufacturer_handler::create_manufacturer::<Manufacturers>),
        )
        .route(
            "/manufacturers/{pk}/update/",
            post(manufacturer_handler::update_manufacturer::<Manufacturers>),
        )
        .route(
            "/manufacturers/{pk}/delete/",
            post(manufacturer_handler::delete_manufacturer::<Manufacturers>),
        )
        .route("/drivers/", get(driver_handler::list_drivers::<Drivers>))
        .route(
            "/drivers/create/",
            post(driver_handler::create_driver::<Drivers>),
        )
        .route(
            "/drivers/{pk}/",
            get(driver_handler::driver_detail::<Drivers, Cars>),
        )
        .route(
            "/drivers/{pk}/update/",
            post(driver_handler::update_driver_license::<Drivers>),
        )
        .route(
            "/drivers/{pk}/delete/",
            post(driver_handler::delete_driver::<Drivers>),
        )
        .route("/cars/", get(car_handler::list_cars::<Cars>))
        .route(
            "/cars/create/",
            post(car_handler::create_car::<Cars, Manufacturers, Drivers>),
        )
        .route("/cars/{pk}/", get(car_handler::car_detail::<Cars, Drivers>))
        .route(
            "/cars/{pk}/update/",
            post(car_handler::update_car::<Cars, Manufacturers, Drivers>),
        )
        .route(
            "/cars/{pk}/delete/",
            post(car_handler::delete_car::<Cars, Manufacturers, Drivers>),
        )
        .route(
            "/cars/{pk}/toggle-assign/",
            post(car_handler::toggle_assign_to_car::<Cars, Manufacturers, Drivers>),
        )
        .merge(admin_routes)
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(Extension(manufacturer_repo))
        .layer(Extension(driver_repo))
        .layer(Extension(car_repo))
        .layer(Extension(session_repo))
        .layer(Extension(hasher));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
