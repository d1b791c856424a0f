mod common;
use common::{default_fixture, rin, temp_out};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_export_csv_lines_in_tree_order() {
    let fx = default_fixture("export_csv");
    let out = temp_out("export_csv", "csv");

    rin()
        .args(fx.args())
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some("client,month,main_project,sub_project,kind,name,title,employment,quantity,rate,amount")
    );
    assert!(
        lines
            .next()
            .unwrap()
            .starts_with("Acme,Dec 2023,R-22,010-Alpha,labor,Alice Smith,Engineer,FTE,3")
    );
    assert!(content.contains("Acme,Jan 2024,R-22,002-Beta,expenses,Expenses"));
    assert!(content.contains("Acme,Jan 2024,R-22,002-Beta,contractor_fee,General / Admin"));
    assert!(content.contains("Globex,Dec 2023,A-1,001-Delta,labor,Bob Jones,Analyst,1099"));
}

#[test]
fn test_export_json_totals() {
    let fx = default_fixture("export_json");
    let out = temp_out("export_json", "json");

    rin()
        .args(fx.args())
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let lines: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let lines = lines.as_array().expect("json array");

    let beta: Vec<&serde_json::Value> = lines
        .iter()
        .filter(|l| l["month"] == "Jan 2024" && l["sub_project"] == "002-Beta")
        .collect();

    let kinds: Vec<&str> = beta.iter().map(|l| l["kind"].as_str().unwrap()).collect();
    assert_eq!(kinds, ["labor", "labor", "expenses", "contractor_fee"]);
    assert_eq!(beta[0]["name"], "Bob Jones");

    let total: f64 = beta.iter().map(|l| l["amount"].as_f64().unwrap()).sum();
    assert!((total - 794.0).abs() < 1e-9);
}

#[test]
fn test_export_xlsx_and_pdf_files() {
    let fx = default_fixture("export_binary");
    let xlsx = temp_out("export_binary", "xlsx");
    let pdf = temp_out("export_binary", "pdf");

    rin()
        .args(fx.args())
        .args(["export", "--format", "xlsx", "--file", &xlsx])
        .assert()
        .success();
    rin()
        .args(fx.args())
        .args(["export", "--format", "pdf", "--file", &pdf])
        .assert()
        .success();

    assert!(fs::read(&xlsx).unwrap().starts_with(b"PK"));
    assert!(fs::read(&pdf).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_export_refuses_existing_file_without_confirmation() {
    let fx = default_fixture("export_exists");
    let out = temp_out("export_exists", "csv");
    fs::write(&out, "keep me").unwrap();

    rin()
        .args(fx.args())
        .args(["export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rin()
        .args(fx.args())
        .args(["export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_generate_one_pdf_per_project_month() {
    let fx = default_fixture("generate_pdfs");
    let out_dir = fx.path("Invoices");

    rin()
        .args(fx.args())
        .args(["generate", "--out", &out_dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 invoice(s) written"));

    let root = Path::new(&out_dir);
    for rel in [
        "Acme/Dec 2023/R-22 010-Alpha.pdf",
        "Acme/Jan 2024/B-3 001-Gamma.pdf",
        "Acme/Jan 2024/R-22 002-Beta.pdf",
        "Acme/Jan 2024/R-22 010-Alpha.pdf",
        "Acme/Mar 2024/R-22 010-Alpha.pdf",
        "Globex/Dec 2023/A-1 001-Delta.pdf",
    ] {
        let bytes = fs::read(root.join(rel)).unwrap_or_else(|_| panic!("missing {rel}"));
        assert!(bytes.starts_with(b"%PDF"), "{rel} is not a PDF");
    }
}

#[test]
fn test_generate_overwrite_recreates_month_folder() {
    let fx = default_fixture("generate_overwrite");
    let out_dir = fx.path("Invoices");
    let stray = Path::new(&out_dir).join("Acme/Jan 2024/old.pdf");

    rin()
        .args(fx.args())
        .args(["generate", "--out", &out_dir])
        .assert()
        .success();
    fs::write(&stray, b"old").unwrap();

    rin()
        .args(fx.args())
        .args(["generate", "--out", &out_dir])
        .assert()
        .success();
    assert!(stray.exists());

    rin()
        .args(fx.args())
        .args(["generate", "--out", &out_dir, "--overwrite"])
        .assert()
        .success();
    assert!(!stray.exists());
}
