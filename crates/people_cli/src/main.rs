//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `people_core` linkage and service wiring end to end.
//! - Keep output deterministic apart from generated IDs and ages.
//!
//! Usage: `people_cli [search_by] [search_text] [sort_by] [asc|desc]`

use chrono::NaiveDate;
use log::warn;
use people_core::{
    CountryAddRequest, CountryService, Gender, InMemoryCountryRepository,
    InMemoryPersonRepository, LoggingConfig, PersonAddRequest, PersonService,
    ServiceResult, SortOrder,
};

type Countries = CountryService<InMemoryCountryRepository>;

fn main() {
    if let Err(err) = LoggingConfig::from_env().init() {
        eprintln!("logging disabled: {err}");
    }
    println!("people_core version={}", people_core::core_version());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |index: usize| args.get(index).map(String::as_str);

    let countries = CountryService::new(InMemoryCountryRepository::new());
    let persons = PersonService::new(InMemoryPersonRepository::new(), &countries);
    if let Err(err) = seed(&countries, &persons) {
        warn!("event=cli_seed module=cli status=error");
        eprintln!("seeding failed: {err}");
        std::process::exit(1);
    }

    let filtered = persons.get_filtered_persons_by(arg(0).unwrap_or_default(), arg(1));
    let order = arg(3).and_then(SortOrder::parse).unwrap_or_default();
    for person in persons.get_sorted_persons_by(filtered, arg(2).unwrap_or_default(), order) {
        println!(
            "{} | {} | {} | {} | {}",
            person.name,
            person.email,
            person.age.map_or_else(|| "-".to_string(), |age| age.to_string()),
            person.gender.map_or("-", Gender::as_str),
            person.country_name.as_deref().unwrap_or("-"),
        );
    }
}

fn seed(
    countries: &Countries,
    persons: &PersonService<'_, InMemoryPersonRepository, Countries>,
) -> ServiceResult<()> {
    let usa = countries.add_country(Some(CountryAddRequest::new("USA")))?;
    let uk = countries.add_country(Some(CountryAddRequest::new("UK")))?;

    let mut alice = PersonAddRequest::new("Alice", "alice@example.com");
    alice.gender = Some(Gender::Female);
    alice.country_id = Some(usa.id);
    alice.date_of_birth = NaiveDate::from_ymd_opt(1991, 4, 12);
    persons.add_person(Some(alice))?;

    let mut marcus = PersonAddRequest::new("Marcus", "marcus@example.com");
    marcus.gender = Some(Gender::Male);
    marcus.country_id = Some(uk.id);
    marcus.receive_newsletters = true;
    persons.add_person(Some(marcus))?;

    persons.add_person(Some(PersonAddRequest::new("Sam", "sam@example.com")))?;
    Ok(())
}
