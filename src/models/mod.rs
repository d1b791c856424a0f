pub mod entry;
pub mod jobcode;
pub mod person;
pub mod project;

pub use entry::TimeEntry;
pub use jobcode::JobcodeMapping;
pub use person::{EmploymentType, PersonRecord, RateChange};
pub use project::{PersonMonth, ProjectIdentity, ProjectMonth};
