//! Placing orders through the service wired from settings, as the binary does.

use std::io::Write;

use chrono::{TimeZone, Utc};
use order_pricing::application::{OrderLineInput, PlaceOrderInput};
use order_pricing::build_service;
use order_pricing::config::Settings;
use order_pricing::domain::ports::OrderRepository;
use order_pricing::domain::FreightPolicy;
use order_pricing::errors::AppError;

fn reference_input(coupon: Option<&str>) -> PlaceOrderInput {
    PlaceOrderInput {
        cpf: "123.456.789-09".to_string(),
        lines: vec![
            OrderLineInput { item_id: 1, quantity: 1 },
            OrderLineInput { item_id: 2, quantity: 1 },
            OrderLineInput { item_id: 3, quantity: 3 },
        ],
        coupon: coupon.map(str::to_string),
        issue_date: Some(Utc.with_ymd_and_hms(2021, 3, 17, 22, 31, 0).unwrap()),
    }
}

fn default_settings() -> Settings {
    Settings {
        freight: FreightPolicy::default(),
        catalog_path: None,
    }
}

#[test]
fn bundled_catalog_prices_reference_order() {
    let service = build_service(&default_settings()).unwrap();

    let plain = service.place_order(reference_input(None)).unwrap();
    let discounted = service.place_order(reference_input(Some("VALE20"))).unwrap();
    let expired = service
        .place_order(reference_input(Some("VALE20_EXPIRED")))
        .unwrap();

    assert_eq!((plain.code.as_str(), plain.total), ("202100000001", 6350));
    assert_eq!((discounted.code.as_str(), discounted.total), ("202100000002", 5132));
    assert_eq!((expired.code.as_str(), expired.total), ("202100000003", 6350));
    assert_eq!(service.orders().count().unwrap(), 3);
}

#[test]
fn invalid_cpf_surfaces_unchanged() {
    let service = build_service(&default_settings()).unwrap();
    let mut input = reference_input(None);
    input.cpf = "123.123.123-12".to_string();

    let err: AppError = service.place_order(input).unwrap_err().into();
    assert_eq!(err.to_string(), "Invalid CPF");
    assert_eq!(service.orders().count().unwrap(), 0);
}

#[test]
fn catalog_file_replaces_bundled_catalog() {
    let path = std::env::temp_dir().join(format!(
        "order-pricing-catalog-{}.json",
        std::process::id()
    ));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{"items":[{{"id":7,"description":"Drum kit","price":20000,
            "dimensions":{{"width":200,"height":100,"length":100}},"weight":50000}}]}}"#
    )
    .unwrap();

    let settings = Settings {
        freight: FreightPolicy::default(),
        catalog_path: Some(path.clone()),
    };
    let service = build_service(&settings).unwrap();
    let mut input = reference_input(None);
    input.lines = vec![OrderLineInput { item_id: 7, quantity: 2 }];
    let output = service.place_order(input).unwrap();
    std::fs::remove_file(&path).ok();

    // 2 m³ at 25 kg/m³ over 1000 km is 500 per kit.
    assert_eq!(output.freight, 1000);
    assert_eq!(output.total, 40_000 + 1000);
}

#[test]
fn missing_catalog_file_is_io_error() {
    let settings = Settings {
        freight: FreightPolicy::default(),
        catalog_path: Some("/nonexistent/catalog.json".into()),
    };
    let err = build_service(&settings).err().expect("missing file fails");
    assert!(matches!(err, AppError::Io(_)));
}
