use chrono::NaiveDate;
use people_core::{Country, CountryAddRequest, CountryResponse, Gender, Person, PersonResponse};
use uuid::Uuid;

#[test]
fn new_records_get_non_nil_distinct_ids() {
    let first = Country::new("USA");
    let second = Country::new("USA");
    assert!(!first.id.is_nil());
    assert_ne!(first.id, second.id);

    let person = Person::new("Ann", "ann@example.com");
    assert!(!person.id.is_nil());
    assert!(!person.receive_newsletters);
}

#[test]
fn country_request_converts_to_record_and_projection() {
    let country = CountryAddRequest::new("Kenya").into_country();
    let response = CountryResponse::from(&country);
    assert_eq!(response.id, country.id);
    assert_eq!(response.name, "Kenya");
}

#[test]
fn person_response_round_trips_into_update_request() {
    let mut person = Person::new("Ann", "ann@example.com");
    person.gender = Some(Gender::Others);
    person.address = Some("1 Lane".to_string());
    person.receive_newsletters = true;
    let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    let response = PersonResponse::from_person(&person, Some("Chile".to_string()), today);
    let update = response.to_update_request();

    assert_eq!(update.id, person.id);
    assert_eq!(update.name.as_deref(), Some("Ann"));
    assert_eq!(update.gender, Some(Gender::Others));
    assert_eq!(update.address.as_deref(), Some("1 Lane"));
    assert!(update.receive_newsletters);
}

#[test]
fn person_response_serializes_with_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut person = Person::new("Ann", "ann@example.com");
    person.id = id;
    person.date_of_birth = NaiveDate::from_ymd_opt(1990, 3, 5);
    person.gender = Some(Gender::Female);
    let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

    let response = PersonResponse::from_person(&person, None, today);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["date_of_birth"], "1990-03-05");
    assert_eq!(json["age"], 36);
    assert_eq!(json["gender"], "Female");
    assert!(json["country_name"].is_null());
    assert_eq!(json["receive_newsletters"], false);

    let decoded: PersonResponse = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, response);
}
