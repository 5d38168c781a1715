mod demand;
mod error;
mod generation;
mod map;
mod outcome;
mod profile;
mod program;
mod scenario;
mod storage;

pub use demand::DemandBlock;
pub use error::ValidationError;
pub use generation::{GenerationUnit, UnitCategory};
pub use map::Map;
pub use outcome::{DemandOutcome, DispatchOutcome, GeneratorOutcome, StorageOutcome};
pub use profile::Profile;
pub use program::{Bound, EqualityConstraint, LinearProgram, LpSolution};
pub use scenario::Scenario;
pub use storage::StorageUnit;

macro_rules! string_wrapper {
    ($struct:ident) => {
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[repr(transparent)]
        #[doc = concat!("A newtype wrapper for ", stringify!($struct))]
        pub struct $struct(String);

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $struct {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

string_wrapper!(GeneratorId);
string_wrapper!(DemandId);
string_wrapper!(StorageId);
string_wrapper!(NodeId);
