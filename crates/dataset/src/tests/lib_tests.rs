use super::*;
use std::io::Write;

fn record(site: &str, mass: f64, class: u8, booster: &str) -> LaunchRecord {
    LaunchRecord {
        site: site.to_string(),
        payload_mass_kg: mass,
        outcome: Outcome::from_class(class).expect("class"),
        booster_version: booster.to_string(),
    }
}

fn sample() -> Dataset {
    // Sites {A, B}: A has 3 successes / 2 failures, B has 1 success / 4.
    Dataset::from_records(vec![
        record("A", 500.0, 1, "v1.0"),
        record("A", 1500.0, 1, "v1.0"),
        record("A", 2500.0, 1, "FT"),
        record("A", 3500.0, 0, "FT"),
        record("A", 4500.0, 0, "v1.1"),
        record("B", 1000.0, 1, "v1.1"),
        record("B", 2000.0, 0, "v1.0"),
        record("B", 3000.0, 0, "FT"),
        record("B", 4000.0, 0, "FT"),
        record("B", 5000.0, 0, "B4"),
    ])
}

#[test]
fn parses_well_formed_csv() {
    let csv = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,2534.0,1,FT
KSC LC-39A,0.0,0,v1.0
";
    let dataset = Dataset::from_reader(csv.as_bytes()).expect("dataset");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.sites(), &["CCAFS LC-40", "KSC LC-39A"]);
    assert_eq!(dataset.payload_bounds(), Some((0.0, 2534.0)));
}

#[test]
fn ignores_extra_csv_columns() {
    let csv = "\
Flight Number,Launch Site,Payload Mass (kg),class,Booster Version,Booster Version Category
1,CCAFS LC-40,2534.0,1,F9 FT B1020,FT
";
    let dataset = Dataset::from_reader(csv.as_bytes()).expect("dataset");
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].booster_version, "FT");
}

#[test]
fn rejects_out_of_range_class() {
    let csv = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,2534.0,3,FT
";
    let err = Dataset::from_reader(csv.as_bytes()).expect_err("should fail");
    assert!(format!("{err:#}").contains("class column must be 0 or 1"));
}

#[test]
fn rejects_negative_payload_mass() {
    let csv = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,-10.0,1,FT
";
    let err = Dataset::from_reader(csv.as_bytes()).expect_err("should fail");
    assert!(format!("{err:#}").contains("negative payload mass"));
}

#[test]
fn rejects_missing_columns() {
    let csv = "\
Launch Site,class
CCAFS LC-40,1
";
    Dataset::from_reader(csv.as_bytes()).expect_err("should fail");
}

#[test]
fn loads_from_file_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
         VAFB SLC-4E,500.0,1,v1.1\n"
    )
    .expect("write");

    let dataset = Dataset::from_csv_path(file.path()).expect("dataset");
    assert_eq!(dataset.sites(), &["VAFB SLC-4E"]);
}

#[test]
fn missing_file_is_an_error() {
    let err = Dataset::from_csv_path(Path::new("/nonexistent/launches.csv"))
        .expect_err("should fail");
    assert!(format!("{err:#}").contains("failed to open launch CSV"));
}

#[test]
fn success_counts_group_by_site_in_order() {
    let dataset = sample();
    assert_eq!(
        dataset.success_count_by_site(),
        vec![("A".to_string(), 3), ("B".to_string(), 1)]
    );
}

#[test]
fn outcome_counts_partition_site_records() {
    let dataset = sample();
    let (successes, failures) = dataset.outcome_counts_for_site("A");
    assert_eq!((successes, failures), (3, 2));
    assert_eq!(successes + failures, 5);
}

#[test]
fn unknown_site_counts_are_zero() {
    let dataset = sample();
    assert_eq!(dataset.outcome_counts_for_site("no-such-site"), (0, 0));
}

#[test]
fn range_filter_is_low_exclusive_high_inclusive() {
    let dataset = sample();
    let matched =
        dataset.records_matching(&SiteSelection::All, &PayloadRange::new(1000.0, 3000.0));
    // 1000.0 at B is excluded (strictly greater than low); 3000.0 is kept.
    let masses: Vec<f64> = matched.iter().map(|r| r.payload_mass_kg).collect();
    assert_eq!(masses, vec![1500.0, 2500.0, 2000.0, 3000.0]);
    assert!(matched
        .iter()
        .all(|r| 1000.0 < r.payload_mass_kg && r.payload_mass_kg <= 3000.0));
}

#[test]
fn site_filter_composes_with_range() {
    let dataset = sample();
    let matched = dataset.records_matching(
        &SiteSelection::Site("B".to_string()),
        &PayloadRange::new(0.0, 10_000.0),
    );
    assert_eq!(matched.len(), 5);
    assert!(matched.iter().all(|r| r.site == "B"));
}

#[test]
fn narrowing_the_range_never_adds_points() {
    let dataset = sample();
    let wide = dataset.records_matching(&SiteSelection::All, &PayloadRange::new(0.0, 10_000.0));
    let narrow =
        dataset.records_matching(&SiteSelection::All, &PayloadRange::new(1500.0, 4000.0));
    assert!(narrow.len() <= wide.len());
    for record in &narrow {
        assert!(wide
            .iter()
            .any(|r| std::ptr::eq(*r, *record)));
    }
}

#[test]
fn empty_dataset_has_no_bounds() {
    let dataset = Dataset::from_records(Vec::new());
    assert!(dataset.is_empty());
    assert_eq!(dataset.payload_bounds(), None);
    assert!(dataset.sites().is_empty());
}
