// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use axum_test::{TestRequest, TestServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use taxi_service::config::settings::{
    AuthSettings, DatabaseSettings, LoggingSettings, MetricsSettings, ServerSettings, Settings,
};
use taxi_service::domain::models::driver::{Driver, NewDriver};
use taxi_service::domain::models::manufacturer::{Manufacturer, NewManufacturer};
use taxi_service::domain::repositories::driver_repository::DriverRepository;
use taxi_service::domain::repositories::manufacturer_repository::ManufacturerRepository;
use taxi_service::domain::services::password_hasher::PasswordHasher;
use taxi_service::infrastructure::database::connection;
use taxi_service::infrastructure::repositories::car_repo_impl::CarRepositoryImpl;
use taxi_service::infrastructure::repositories::driver_repo_impl::DriverRepositoryImpl;
use taxi_service::infrastructure::repositories::manufacturer_repo_impl::ManufacturerRepositoryImpl;
use taxi_service::presentation::routes;

pub const PASSWORD: &str = "Sup3r-Secret!42";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub settings: Settings,
    pub drivers: Arc<DriverRepositoryImpl>,
    pub manufacturers: Arc<ManufacturerRepositoryImpl>,
    pub cars: Arc<CarRepositoryImpl>,
}

pub fn test_settings() -> Settings {
    Settings {
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: None,
            min_connections: None,
            connect_timeout: None,
            idle_timeout: None,
        },
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        auth: AuthSettings {
            session_cookie_name: "sessionid".to_string(),
            session_ttl_secs: 3600,
            login_url: "/accounts/login/".to_string(),
            // keep hashing cheap in tests
            password_iterations: 1,
        },
        logging: LoggingSettings { json: false },
        metrics: MetricsSettings {
            enabled: false,
            address: "127.0.0.1:0".to_string(),
        },
    }
}

pub async fn create_test_app() -> TestApp {
    let settings = test_settings();

    let db = connection::create_pool(&settings.database)
        .await
        .expect("Failed to connect to in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    let db = Arc::new(db);

    let app = routes::build_router(db.clone(), &settings);
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp {
        server,
        drivers: Arc::new(DriverRepositoryImpl::new(db.clone())),
        manufacturers: Arc::new(ManufacturerRepositoryImpl::new(db.clone())),
        cars: Arc::new(CarRepositoryImpl::new(db.clone())),
        db,
        settings,
    }
}

/// 一个已登录的客户端
pub struct Session {
    pub driver: Driver,
    pub key: String,
}

impl Session {
    pub fn cookie(&self) -> String {
        format!("sessionid={}", self.key)
    }
}

#[allow(dead_code)]
impl TestApp {
    pub async fn create_driver(&self, username: &str, is_staff: bool) -> Driver {
        self.drivers
            .create(&NewDriver {
                username: username.to_string(),
                password: PasswordHasher::new(1).hash(PASSWORD),
                first_name: "Test".to_string(),
                last_name: "Driver".to_string(),
                is_staff,
                ..Default::default()
            })
            .await
            .expect("Failed to create driver")
    }

    pub async fn create_manufacturer(&self, name: &str, country: &str) -> Manufacturer {
        self.manufacturers
            .create(&NewManufacturer::new(name, country))
            .await
            .expect("Failed to create manufacturer")
    }

    /// 通过登录接口获取会话
    pub async fn login(&self, driver: Driver) -> Session {
        let response = self
            .server
            .post("/accounts/login/")
            .form(&[("username", driver.username.as_str()), ("password", PASSWORD)])
            .await;
        assert_eq!(response.status_code(), StatusCode::FOUND);

        let set_cookie = response.header("set-cookie");
        let set_cookie = set_cookie.to_str().expect("ascii cookie header");
        let key = set_cookie
            .split(';')
            .next()
            .and_then(|pair| pair.strip_prefix("sessionid="))
            .expect("session cookie")
            .to_string();

        Session { driver, key }
    }

    pub async fn login_new_driver(&self, username: &str) -> Session {
        let driver = self.create_driver(username, false).await;
        self.login(driver).await
    }

    pub async fn login_staff(&self, username: &str) -> Session {
        let driver = self.create_driver(username, true).await;
        self.login(driver).await
    }

    pub fn get(&self, session: &Session, path: &str) -> TestRequest {
        self.server.get(path).add_header("Cookie", session.cookie())
    }

    pub fn post(&self, session: &Session, path: &str) -> TestRequest {
        self.server.post(path).add_header("Cookie", session.cookie())
    }
}

pub fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("ascii location header")
        .to_string()
}
