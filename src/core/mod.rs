pub mod billing;
pub mod builder;
pub mod jobcode;
pub mod ordering;
pub mod personnel;
pub mod pipeline;
pub mod rate;
pub mod tree;
pub mod validate;

pub use builder::{ErrorPolicy, TreeBuilder, build_tree};
pub use jobcode::JobcodeTable;
pub use personnel::PersonnelIndex;
pub use pipeline::{BuildOutcome, InvoiceLogic, RawInputs};
pub use tree::AggregationTree;
