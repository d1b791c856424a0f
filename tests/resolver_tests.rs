mod common;
use chrono::NaiveDate;
use rinvoicer::core::JobcodeTable;
use rinvoicer::core::rate::resolve_rate;
use rinvoicer::errors::{AppError, RowError};
use rinvoicer::input::loader::read_rows;
use rinvoicer::input::parse::parse_number;
use rinvoicer::input::{RosterRow, parse_ledger, parse_roster};
use rinvoicer::models::{JobcodeMapping, RateChange};
use rinvoicer::utils::date::parse_date;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn history() -> Vec<RateChange> {
    vec![
        RateChange { effective: d(2020, 1, 1), rate: 10.0 },
        RateChange { effective: d(2021, 1, 1), rate: 20.0 },
        RateChange { effective: d(2022, 1, 1), rate: 30.0 },
    ]
}

fn mapping(client: &str, sub_code: &str, sub_abbr: &str) -> JobcodeMapping {
    JobcodeMapping {
        client: client.to_string(),
        main_code: "R-22 Research".to_string(),
        main_abbr: "R-22".to_string(),
        sub_code: sub_code.to_string(),
        sub_abbr: sub_abbr.to_string(),
    }
}

fn candidates(c: [&str; 4]) -> [String; 4] {
    c.map(str::to_string)
}

#[test]
fn test_rate_between_changes_uses_the_earlier_one() {
    let h = history();
    assert_eq!(resolve_rate(&h, d(2021, 1, 1)), Some(20.0));
    assert_eq!(resolve_rate(&h, d(2021, 6, 15)), Some(20.0));
    assert_eq!(resolve_rate(&h, d(2021, 12, 31)), Some(20.0));
}

#[test]
fn test_rate_before_first_change_is_the_default() {
    assert_eq!(resolve_rate(&history(), d(2019, 5, 1)), Some(10.0));
}

#[test]
fn test_rate_on_last_change_date() {
    assert_eq!(resolve_rate(&history(), d(2022, 1, 1)), Some(30.0));
    assert_eq!(resolve_rate(&history(), d(2030, 1, 1)), Some(30.0));
}

#[test]
fn test_single_rate_ignores_target() {
    let h = vec![RateChange { effective: d(2024, 6, 1), rate: 55.0 }];
    assert_eq!(resolve_rate(&h, d(1999, 1, 1)), Some(55.0));
    assert_eq!(resolve_rate(&h, d(2099, 1, 1)), Some(55.0));
}

#[test]
fn test_rate_history_need_not_be_sorted() {
    let h = vec![
        RateChange { effective: d(2020, 1, 1), rate: 10.0 },
        RateChange { effective: d(2022, 1, 1), rate: 30.0 },
        RateChange { effective: d(2021, 1, 1), rate: 20.0 },
    ];
    assert_eq!(resolve_rate(&h, d(2021, 6, 1)), Some(20.0));
    assert_eq!(resolve_rate(&h, d(2022, 6, 1)), Some(30.0));
}

#[test]
fn test_empty_history_has_no_rate() {
    assert_eq!(resolve_rate(&[], d(2024, 1, 1)), None);
}

#[test]
fn test_jobcode_falls_back_to_level_two() {
    let table = JobcodeTable::build(vec![
        mapping("Acme", "Alpha Work", "010-Alpha"),
        mapping("Acme", "Beta Work", "002-Beta"),
    ]);

    let m = table
        .resolve(4, &candidates(["Acme", " Beta Work ", "Alpha Work", ""]))
        .expect("level 2 resolves");
    assert_eq!(m.sub_abbr, "002-Beta");
}

#[test]
fn test_unresolved_jobcode_keeps_raw_candidates() {
    let table = JobcodeTable::build(vec![mapping("Acme", "Alpha Work", "010-Alpha")]);

    let err = table
        .resolve(7, &candidates(["Acme", "Nope ", "", "x"]))
        .unwrap_err();

    assert_eq!(
        err,
        RowError::UnresolvedJobcode {
            line: 7,
            candidates: candidates(["Acme", "Nope ", "", "x"]),
        }
    );
    assert!(err.to_string().contains("ledger line 7"));
    assert!(err.to_string().contains("Nope"));
}

#[test]
fn test_later_jobcode_row_replaces_earlier() {
    let table = JobcodeTable::build(vec![
        mapping("Acme", "Alpha Work", "010-Alpha"),
        mapping("Globex", "Alpha Work", "011-Alpha"),
    ]);

    assert_eq!(table.len(), 1);
    let m = table.get("Alpha Work").unwrap();
    assert_eq!(m.client, "Globex");
    assert_eq!(m.sub_abbr, "011-Alpha");
}

#[test]
fn test_dates_accept_common_spellings() {
    assert_eq!(parse_date("2024-04-15"), Some(d(2024, 4, 15)));
    assert_eq!(parse_date("2024/04/15"), Some(d(2024, 4, 15)));
    assert_eq!(parse_date("4/15/2024"), Some(d(2024, 4, 15)));
    assert_eq!(parse_date("4/15/24"), Some(d(2024, 4, 15)));
    assert_eq!(parse_date("15.04.2024"), None);
}

#[test]
fn test_two_digit_years_are_not_read_as_year_first() {
    assert_eq!(parse_date("1/5/24"), Some(d(2024, 1, 5)));
    assert_eq!(parse_date("12/01/24"), Some(d(2024, 12, 1)));
    assert_eq!(parse_date("3/4/24"), Some(d(2024, 3, 4)));
    assert_eq!(parse_date("3-4-24"), Some(d(2024, 3, 4)));
    assert_eq!(parse_date("3/4/2024"), Some(d(2024, 3, 4)));
    assert_eq!(parse_date("024/03/04"), None);
}

#[test]
fn test_short_ledger_dates_land_in_their_month() {
    let ledger = "jobcode_1,jobcode_2,jobcode_3,jobcode_4,local_date,username,hours,service item,notes,lname\n\
                  Alpha Work,,,,3/4/24,asmith,2,Consulting,,Smith\n\
                  Alpha Work,,,,1/5/24,asmith,1,Consulting,,Smith\n";

    let outcome = common::build(
        common::PERSONNEL_CSV,
        common::JOBCODES_CSV,
        ledger,
        rinvoicer::core::ErrorPolicy::Abort,
    );

    let acme = outcome.tree.client("Acme").expect("Acme present");
    assert_eq!(acme.month_labels(), ["Jan 2024", "Mar 2024"]);

    // the 2024-03-01 raise applies to the March row
    let mar = outcome.tree.get("Acme", "Mar 2024", "R-22", "010-Alpha").unwrap();
    assert_eq!(mar.person("Alice Smith").unwrap().rate, 120.0);
}

#[test]
fn test_numbers_accept_currency_and_separators() {
    assert_eq!(parse_number("ledger", 2, "hours", " $1,234.50 ").unwrap(), 1234.5);
    assert!(matches!(
        parse_number("ledger", 3, "hours", "abc"),
        Err(AppError::InvalidNumber { line: 3, .. })
    ));
    assert!(matches!(
        parse_number("ledger", 4, "hours", "  "),
        Err(AppError::MissingField { line: 4, field: "hours", .. })
    ));
}

#[test]
fn test_repeated_username_needs_effective_date() {
    let rows: Vec<RosterRow> = read_rows(
        "username,effectiveDate,rate,order,type,title,fname,lname,contractorRate\n\
         asmith,,100,1,FTE,Eng,Alice,Smith,0.05\n\
         asmith,,120,1,FTE,Eng,Alice,Smith,\n"
            .as_bytes(),
    )
    .unwrap();

    let err = parse_roster(&rows).unwrap_err();
    assert!(matches!(
        err,
        AppError::MissingField { line: 3, field: "effectiveDate", .. }
    ));
}

#[test]
fn test_first_roster_row_effective_date_is_ignored() {
    let rows: Vec<RosterRow> = read_rows(
        "username,effectiveDate,rate,order,type,title,fname,lname,contractorRate\n\
         asmith,2024-06-01,100,1,FTE,Eng,Alice,Smith,0.05\n"
            .as_bytes(),
    )
    .unwrap();

    let records = parse_roster(&rows).unwrap();
    assert_eq!(records[0].effective, None);
    assert_eq!(records[0].contractor_multiplier, Some(0.05));
}

#[test]
fn test_ledger_bad_date_reports_line_and_field() {
    let raw = common::raw_inputs(
        common::PERSONNEL_CSV,
        common::JOBCODES_CSV,
        "jobcode_1,jobcode_2,jobcode_3,jobcode_4,local_date,username,hours,service item,notes,lname\n\
         Alpha Work,,,,2024-01-02,asmith,1,Consulting,,Smith\n\
         Alpha Work,,,,someday,asmith,1,Consulting,,Smith\n",
    );

    let err = parse_ledger(&raw.ledger).unwrap_err();
    match err {
        AppError::InvalidDate { file, line, field, value } => {
            assert_eq!(file, "ledger");
            assert_eq!(line, 3);
            assert_eq!(field, "local_date");
            assert_eq!(value, "someday");
        }
        other => panic!("unexpected error: {other}"),
    }
}
