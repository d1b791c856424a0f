#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rinvoicer::core::{BuildOutcome, ErrorPolicy, InvoiceLogic, RawInputs};
use rinvoicer::input::loader::read_rows;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rin() -> Command {
    cargo_bin_cmd!("rinvoicer")
}

pub const PERSONNEL_CSV: &str = "\
username,effectiveDate,rate,order,type,title,fname,lname,contractorRate
asmith,,100,2,FTE,Engineer,Alice,Smith,0.05
bjones,,80,1,1099,Analyst,Bob,Jones,
asmith,2024-03-01,120,2,FTE,Engineer,Alice,Smith,
";

pub const JOBCODES_CSV: &str = "\
client,main_jobcode,main_jobcode_abbreviation,sub_jobcode,sub_jobcode_abbreviation
Acme,R-22 Research,R-22,Alpha Work,010-Alpha
Acme,R-22 Research,R-22,Beta Work,002-Beta
Acme,B-3 Build,B-3,Gamma Work,001-Gamma
Globex,A-1 Admin,A-1,Delta Work,001-Delta
";

/// Rows arrive out of month order, Alice before Bob, Alpha before Beta.
pub const LEDGER_CSV: &str = "\
jobcode_1,jobcode_2,jobcode_3,jobcode_4,local_date,username,hours,service item,notes,lname
Acme,R-22 Research,Alpha Work,,2024-03-05,asmith,2,Consulting,march work,Smith
Globex,Delta Work,,,2023-12-12,bjones,4,Admin,,Jones
Acme,R-22 Research,Alpha Work,Design,2023-12-01,asmith,3,Consulting,kickoff,Smith
Acme,R-22 Research,Alpha Work,,2024-01-03,asmith,1,Consulting,,Smith
Acme,R-22 Research,Beta Work,,2024-01-15,asmith,5,Consulting,beta,Smith
Acme,R-22 Research,Beta Work,,2024-01-16,,120.00,Expenses,receipts,Expenses
Acme,R-22 Research,Beta Work,,2024-01-20,bjones,2,Analysis,,Jones
Acme,B-3 Build,Gamma Work,,2024-01-22,bjones,1.5,Build,,Jones
";

/// CSV inputs written to a private folder under the system temp dir.
pub struct Fixture {
    pub dir: PathBuf,
    pub personnel: String,
    pub jobcodes: String,
    pub ledger: String,
}

impl Fixture {
    /// Global options pointing the binary at this fixture.
    pub fn args(&self) -> Vec<String> {
        vec![
            "--personnel".to_string(),
            self.personnel.clone(),
            "--jobcodes".to_string(),
            self.jobcodes.clone(),
            "--ledger".to_string(),
            self.ledger.clone(),
        ]
    }

    pub fn path(&self, name: &str) -> String {
        self.dir.join(name).to_string_lossy().to_string()
    }
}

/// Write the three CSV files for a test, replacing any leftovers from a previous run.
pub fn write_fixture(name: &str, personnel: &str, jobcodes: &str, ledger: &str) -> Fixture {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{name}_rinvoicer"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create fixture dir");

    let write = |file: &str, content: &str| {
        let p = dir.join(file);
        fs::write(&p, content).expect("write fixture csv");
        p.to_string_lossy().to_string()
    };

    Fixture {
        personnel: write("personnel.csv", personnel),
        jobcodes: write("jobcodes.csv", jobcodes),
        ledger: write("ledger.csv", ledger),
        dir,
    }
}

pub fn default_fixture(name: &str) -> Fixture {
    write_fixture(name, PERSONNEL_CSV, JOBCODES_CSV, LEDGER_CSV)
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rinvoicer_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn raw_inputs(personnel: &str, jobcodes: &str, ledger: &str) -> RawInputs {
    RawInputs {
        roster: read_rows(personnel.as_bytes()).expect("parse personnel"),
        jobcodes: read_rows(jobcodes.as_bytes()).expect("parse jobcodes"),
        ledger: read_rows(ledger.as_bytes()).expect("parse ledger"),
    }
}

pub fn build(personnel: &str, jobcodes: &str, ledger: &str, policy: ErrorPolicy) -> BuildOutcome {
    InvoiceLogic::process(&raw_inputs(personnel, jobcodes, ledger), "Expenses", policy)
        .expect("build tree")
}

pub fn build_default() -> BuildOutcome {
    build(PERSONNEL_CSV, JOBCODES_CSV, LEDGER_CSV, ErrorPolicy::Abort)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
