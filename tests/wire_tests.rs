use rust_decimal::Decimal;
use std::str::FromStr;
use subtracker::errors::AppError;
use subtracker::models::{
    Notification, NotificationSource, RenewalType, SubscriptionDraft, SubscriptionId,
};
use subtracker::store::wire::{SubscriptionPayload, decode_list};

mod common;
use common::date;

#[test]
fn decodes_store_records() {
    let body = r#"[
        {"id": 1, "name": "Netflix", "price": 15.99, "renewalType": "mensal",
         "startDate": "2024-01-15", "description": "", "category": "Streaming"},
        {"id": "abc", "name": "Domain", "price": 12, "renewalType": "anual",
         "startDate": "2023-03-01T00:00:00.000Z", "category": "Hosting"}
    ]"#;

    let list = decode_list(body).expect("decode");
    assert_eq!(list.len(), 2);

    assert_eq!(list[0].id, SubscriptionId::from(1));
    assert_eq!(list[0].renewal_type, RenewalType::Monthly);
    assert_eq!(list[0].price, Some(Decimal::from_str("15.99").expect("dec")));
    assert_eq!(list[0].start_date, Some(date("2024-01-15")));
    assert_eq!(list[0].notification, NotificationSource::Derived);

    assert_eq!(list[1].id, SubscriptionId::new("abc"));
    assert_eq!(list[1].renewal_type, RenewalType::Yearly);
    assert_eq!(list[1].start_date, Some(date("2023-03-01")));
    assert_eq!(list[1].description, "");
}

#[test]
fn missing_optional_fields_decode_as_absent() {
    let body = r#"[{"id": 7, "renewalType": "monthly", "startDate": ""}]"#;

    let list = decode_list(body).expect("decode");
    assert_eq!(list[0].price, None);
    assert_eq!(list[0].start_date, None);
    assert_eq!(list[0].name, "");
}

#[test]
fn precomputed_notification_is_kept() {
    let body = r#"[{"id": 1, "renewalType": "mensal", "startDate": "2024-01-15",
                   "notification": {"urgent": true, "days": 2}}]"#;

    let list = decode_list(body).expect("decode");
    assert_eq!(
        list[0].notification,
        NotificationSource::Precomputed(Notification {
            urgent: true,
            days_until: 2
        })
    );
}

#[test]
fn unknown_renewal_type_is_rejected() {
    let body = r#"[{"id": 1, "renewalType": "semanal", "startDate": "2024-01-15"}]"#;
    assert!(matches!(
        decode_list(body),
        Err(AppError::InvalidRenewalType(code)) if code == "semanal"
    ));
}

#[test]
fn negative_price_is_rejected() {
    let body = r#"[{"id": 1, "price": -3, "renewalType": "mensal"}]"#;
    assert!(matches!(decode_list(body), Err(AppError::InvalidPrice(_))));
}

#[test]
fn malformed_date_is_rejected() {
    let body = r#"[{"id": 1, "renewalType": "anual", "startDate": "31/01/2024"}]"#;
    assert!(matches!(decode_list(body), Err(AppError::InvalidDate(_))));
}

#[test]
fn non_array_body_is_a_json_error() {
    assert!(matches!(
        decode_list(r#"{"error": "boom"}"#),
        Err(AppError::Json(_))
    ));
}

#[test]
fn payload_uses_store_field_names() {
    let draft = SubscriptionDraft::new(
        " Spotify ",
        "Music",
        None,
        Decimal::from_str("10.99").expect("dec"),
        RenewalType::Monthly,
        date("2024-02-29"),
    )
    .expect("valid draft");

    let value = serde_json::to_value(SubscriptionPayload::from(&draft)).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Spotify",
            "price": 10.99,
            "renewalType": "mensal",
            "startDate": "2024-02-29",
            "description": "",
            "category": "Music"
        })
    );
}

#[test]
fn stored_next_renewal_is_decoded() {
    let body = r#"[
        {"id": 1, "renewalType": "mensal", "startDate": "2024-01-15", "nextRenewal": "2024-09-01"},
        {"id": 2, "renewalType": "anual", "startDate": "2023-03-01", "nextRenewal": ""},
        {"id": 3, "renewalType": "anual", "startDate": "2023-03-01"}
    ]"#;

    let list = decode_list(body).expect("decode");
    assert_eq!(list[0].next_renewal, Some(date("2024-09-01")));
    assert_eq!(list[1].next_renewal, None);
    assert_eq!(list[2].next_renewal, None);

    let bad = r#"[{"id": 1, "renewalType": "mensal", "nextRenewal": "soon"}]"#;
    assert!(matches!(decode_list(bad), Err(AppError::InvalidDate(_))));
}
