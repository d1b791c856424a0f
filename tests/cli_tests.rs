mod common;
use common::{JOBCODES_CSV, PERSONNEL_CSV, default_fixture, rin, write_fixture};
use predicates::prelude::*;
use std::fs;

const BAD_LEDGER: &str = "\
jobcode_1,jobcode_2,jobcode_3,jobcode_4,local_date,username,hours,service item,notes,lname
Alpha Work,,,,2024-01-02,asmith,1,Consulting,,Smith
Alpha Work,,,,2024-01-03,zzz,1,Consulting,,Zed
Nowhere,Still Nowhere,,,2024-01-04,asmith,1,Consulting,,Smith
";

#[test]
fn test_init_test_mode() {
    rin()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test mode"));
}

#[test]
fn test_config_print_uses_given_file() {
    let fx = default_fixture("config_print");
    let conf = fx.path("custom.conf");
    fs::write(&conf, "payment_terms_days: 45\ncurrency_symbol: \"EUR \"\n").unwrap();

    rin()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("payment_terms_days: 45"))
        .stdout(predicate::str::contains("error_policy: abort"));
}

#[test]
fn test_summary_prints_ordered_hierarchy() {
    let fx = default_fixture("summary_ordered");

    let output = rin()
        .args(fx.args())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Jones, Alice Smith"))
        .stdout(predicate::str::contains("$674.00"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    let dec = text.find("Dec 2023").expect("Dec 2023 listed");
    let jan = text.find("Jan 2024").expect("Jan 2024 listed");
    let mar = text.find("Mar 2024").expect("Mar 2024 listed");
    assert!(dec < jan && jan < mar);

    let beta = text.find("002-Beta").expect("Beta listed");
    let alpha_jan = text[jan..].find("010-Alpha").map(|i| i + jan).expect("Alpha listed");
    assert!(beta < alpha_jan);
}

#[test]
fn test_summary_aborts_on_unknown_person() {
    let fx = write_fixture("summary_abort", PERSONNEL_CSV, JOBCODES_CSV, BAD_LEDGER);

    rin()
        .args(fx.args())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ledger line 3"))
        .stderr(predicate::str::contains("'zzz'"));
}

#[test]
fn test_summary_collect_policy_from_config() {
    let fx = write_fixture("summary_collect", PERSONNEL_CSV, JOBCODES_CSV, BAD_LEDGER);
    let conf = fx.path("collect.conf");
    fs::write(&conf, "error_policy: collect\n").unwrap();

    rin()
        .args(fx.args())
        .args(["--config", &conf, "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"))
        .stdout(predicate::str::contains("010-Alpha"));
}

#[test]
fn test_check_reports_all_rejected_rows() {
    let fx = write_fixture("check_bad", PERSONNEL_CSV, JOBCODES_CSV, BAD_LEDGER);

    rin()
        .args(fx.args())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("username missing in personnel roster: 'zzz'"))
        .stderr(predicate::str::contains("Still Nowhere"))
        .stderr(predicate::str::contains("2 ledger row(s) rejected"));
}

#[test]
fn test_check_clean_inputs() {
    let fx = default_fixture("check_clean");

    rin()
        .args(fx.args())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("8 ledger rows classified"));
}

#[test]
fn test_missing_input_file_fails() {
    let fx = default_fixture("missing_input");
    let missing = fx.path("does_not_exist.csv");

    rin()
        .args([
            "--personnel",
            &fx.personnel,
            "--jobcodes",
            &fx.jobcodes,
            "--ledger",
            &missing,
            "summary",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does_not_exist.csv"));
}
