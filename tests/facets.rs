// tests/facets.rs
use seek_dash::facets::{unique_sorted, Facets};
use seek_dash::job::JobRecord;

fn at(company: &str, location: &str) -> JobRecord {
    JobRecord { company: company.into(), location: location.into(), ..JobRecord::default() }
}

#[test]
fn locations_are_unique_and_ascending() {
    assert_eq!(unique_sorted(["Sydney", "Perth", "Sydney"]), vec!["Perth", "Sydney"]);
}

#[test]
fn facets_from_jobs() {
    let jobs = vec![
        at("Globex", "Sydney NSW"),
        at("Acme", "Perth WA"),
        at("Globex", "Melbourne VIC"),
        at("Acme", "Sydney NSW"),
    ];
    let f = Facets::from_jobs(&jobs);
    assert_eq!(f.locations, vec!["Melbourne VIC", "Perth WA", "Sydney NSW"]);
    assert_eq!(f.companies, vec!["Acme", "Globex"]);
}

#[test]
fn empty_list_has_no_facets() {
    assert_eq!(Facets::from_jobs(&[]), Facets::default());
}

#[test]
fn ordering_is_bytewise() {
    // Upper-case sorts before lower-case; no locale folding.
    assert_eq!(unique_sorted(["beta", "Alpha", "alpha"]), vec!["Alpha", "alpha", "beta"]);
}
