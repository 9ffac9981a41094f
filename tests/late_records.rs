use chrono::{Duration, Local, NaiveTime};

use ams::DataStore;
use ams::model::LateRecord;
use ams::query::late::{enrich_late_records, late_count_in_window};

fn late(id: &str, code: &str, days_back: i64) -> LateRecord {
    LateRecord {
        id: id.to_string(),
        student_code: code.to_string(),
        date: Local::now().date_naive() - Duration::days(days_back),
        check_in_time: NaiveTime::from_hms_opt(9, 30, 0).expect("valid time"),
    }
}

#[test]
fn window_is_inclusive_on_both_ends() {
    let mut store = DataStore::empty();
    store.late_records.push(late("lr1", "STU001", 0));
    store.late_records.push(late("lr2", "STU001", 7));
    store.late_records.push(late("lr3", "STU002", 8));

    assert_eq!(late_count_in_window(&store, 7), 2);
    assert_eq!(late_count_in_window(&store, 8), 3);
    assert_eq!(late_count_in_window(&store, 0), 1);
}

#[test]
fn unknown_student_codes_still_count() {
    let mut store = DataStore::empty();
    store.late_records.push(late("lr1", "STU001", 1));
    store.late_records.push(late("lr2", "STU000", 2));

    assert_eq!(late_count_in_window(&store, 7), 2);
}

#[test]
fn seeded_records_are_outside_the_trailing_week() {
    // The seeded late records carry fixed historical dates.
    let store = DataStore::seeded();
    assert_eq!(store.late_records.len(), 4);
    assert_eq!(late_count_in_window(&store, 7), 0);
}

#[test]
fn enrichment_joins_roster_details() {
    let store = DataStore::seeded();
    let views = enrich_late_records(&store);
    assert_eq!(views.len(), 4);

    let known = views.iter().find(|v| v.id == "lr1").expect("lr1");
    assert_eq!(known.student_name, "Barani");
    assert_eq!(known.department, "Computer Science");

    // lr4 references STU000, which is on no roster.
    let unknown = views.iter().find(|v| v.id == "lr4").expect("lr4");
    assert_eq!(unknown.student_code, "STU000");
    assert_eq!(unknown.student_name, "Unknown Student");
    assert_eq!(unknown.department, "Unknown");
}
