use chrono::{NaiveDate, Weekday};
use std::path::PathBuf;
use weekspend_finance::{MemorySink, bucket_all, build_transactions, run};
use weekspend_ingest::{load_config, parse_netbank_csv};

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("testdata")
        .join(name)
}

/// Fixture statement -> three weeks of reports with the expected totals.
#[test]
fn test_fixture_statement_produces_three_weeks() {
    let settings = load_config(testdata("config.txt")).unwrap();
    let rows = parse_netbank_csv(testdata("CSVData.csv")).unwrap();

    let mut sink = MemorySink::default();
    let summary = run(&settings, &rows, &mut sink).unwrap();

    assert_eq!(summary.transactions, rows.len());
    assert_eq!(
        summary.written,
        vec!["2017_October_1st", "2017_October_15th", "2018_January_7th"]
    );
    assert!(summary.failed.is_empty());

    let totals: Vec<_> = sink.reports.iter().map(|r| r.total_saved.to_string()).collect();
    assert_eq!(totals, vec!["643.9", "549.51", "676.6"]);
}

/// The October 15th week rendered in full.
#[test]
fn test_fixture_week_csv() {
    let settings = load_config(testdata("config.txt")).unwrap();
    let rows = parse_netbank_csv(testdata("CSVData.csv")).unwrap();

    let mut sink = MemorySink::default();
    run(&settings, &rows, &mut sink).unwrap();
    let week = sink
        .reports
        .iter()
        .find(|r| r.week_key == "2017_October_15th")
        .unwrap();

    let expected = [
        r#""","Groceries","Eating Out","Transport","Bills","Uncategorized""#,
        r#""Monday","-52.3","-4.5","","","""#,
        r#""Tuesday","250","","","","-9.99""#,
        r#""Wednesday","","-30.2","","","""#,
        r#""Thursday","","","","-60","""#,
        r#""Friday","","","","","""#,
        r#""Saturday","","","-35","","""#,
        r#""Sunday","-8.5","","","","""#,
        r#""Earning This Week","1000""#,
        r#""Rent This Week","-300""#,
        r#""Total Saved","549.51""#,
    ];
    let csv = week.to_csv().unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines, expected);

    // The hidden savings transfer is in Friday's total only
    assert_eq!(week.days[4].total.to_string(), "-200");
}

/// A pending transaction is bucketed by its "Value Date:".
#[test]
fn test_value_date_row_moves_to_settlement_week() {
    let settings = load_config(testdata("config.txt")).unwrap();
    let rows = parse_netbank_csv(testdata("CSVData.csv")).unwrap();
    let txns = build_transactions(&rows, &settings.categories).unwrap();

    let pending = txns
        .iter()
        .find(|t| t.description.contains("Value Date:"))
        .unwrap();
    assert_eq!(pending.date, NaiveDate::from_ymd_opt(2018, 1, 5).unwrap());

    let weeks = bucket_all(&txns, &settings.categories).unwrap();
    assert!(!weeks.contains_key("2018_January_14th"));
    let friday = weeks["2018_January_7th"].day(Weekday::Fri);
    assert_eq!(friday.transaction_count(), 1);
}

/// Both Cafe Nero rows on the Wednesday keep their input order.
#[test]
fn test_same_slot_keeps_statement_order() {
    let settings = load_config(testdata("config.txt")).unwrap();
    let rows = parse_netbank_csv(testdata("CSVData.csv")).unwrap();
    let txns = build_transactions(&rows, &settings.categories).unwrap();
    let weeks = bucket_all(&txns, &settings.categories).unwrap();

    let eating_out = settings
        .categories
        .categories()
        .iter()
        .find(|c| c.name == "Eating Out")
        .unwrap()
        .id;
    let slot = weeks["2017_October_15th"]
        .day(Weekday::Wed)
        .slot(eating_out)
        .unwrap();
    let descs: Vec<_> = slot.transactions.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descs, vec!["UBER EATS SYDNEY", "EFTPOS Cafe Nero Sydney"]);
}
