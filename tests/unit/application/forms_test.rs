// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use taxi_service::application::dto::car_form::CarForm;
use taxi_service::application::dto::driver_form::{DriverCreationForm, DriverLicenseUpdateForm};
use taxi_service::application::dto::form_errors::{FormErrors, NON_FIELD_ERRORS, REQUIRED_MESSAGE};
use taxi_service::application::dto::login_form::{is_local_path, LoginForm};
use taxi_service::application::dto::manufacturer_form::ManufacturerForm;

#[test]
fn test_blank_manufacturer_name_is_required() {
    let form = ManufacturerForm {
        name: "   ".to_string(),
        country: "Japan".to_string(),
    };

    let errors = form.clean().unwrap_err();
    assert_eq!(errors.field("name"), [REQUIRED_MESSAGE.to_string()]);
    assert!(!errors.has_field("country"));
}

#[test]
fn test_manufacturer_name_is_trimmed() {
    let form = ManufacturerForm {
        name: "  Toyota ".to_string(),
        country: String::new(),
    };

    assert!(form.clean().is_ok());
    assert_eq!(form.cleaned_name(), "Toyota");
}

#[test]
fn test_car_form_requires_model_and_manufacturer() {
    let errors = CarForm::default().clean().unwrap_err();

    assert_eq!(errors.field("model"), [REQUIRED_MESSAGE.to_string()]);
    assert_eq!(errors.field("manufacturer"), [REQUIRED_MESSAGE.to_string()]);
    assert!(!errors.has_field("drivers"));
}

#[test]
fn test_driver_form_reports_every_invalid_field() {
    let form = DriverCreationForm {
        username: "bad name".to_string(),
        license_number: "ab123456".to_string(),
        ..Default::default()
    };

    let errors = form.clean().unwrap_err();
    assert!(errors.has_field("username"));
    assert!(errors.has_field("license_number"));
    assert_eq!(errors.field("password1"), [REQUIRED_MESSAGE.to_string()]);
    assert_eq!(errors.field("password2"), [REQUIRED_MESSAGE.to_string()]);
}

#[test]
fn test_license_update_form() {
    let valid = DriverLicenseUpdateForm {
        license_number: "ABC12345".to_string(),
    };
    let invalid = DriverLicenseUpdateForm {
        license_number: "ABC1234X".to_string(),
    };

    assert!(valid.clean().is_ok());
    assert!(invalid.clean().unwrap_err().has_field("license_number"));
}

#[test]
fn test_login_form_requires_both_fields() {
    let form = LoginForm {
        username: "alice".to_string(),
        ..Default::default()
    };

    let errors = form.clean().unwrap_err();
    assert!(!errors.has_field("username"));
    assert_eq!(errors.field("password"), [REQUIRED_MESSAGE.to_string()]);
}

#[test]
fn test_local_paths() {
    assert!(is_local_path("/"));
    assert!(is_local_path("/drivers/1/"));
    assert!(!is_local_path("//example.com/"));
    assert!(!is_local_path("http://example.com/"));
    assert!(!is_local_path("drivers/"));
}

#[test]
fn test_form_errors_serialize_as_field_map() {
    let mut errors = FormErrors::new();
    errors.add("username", "taken");
    errors.add(NON_FIELD_ERRORS, "bad credentials");

    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({ "__all__": ["bad credentials"], "username": ["taken"] })
    );
    assert!(errors.into_result().is_err());
    assert!(FormErrors::new().into_result().is_ok());
}
