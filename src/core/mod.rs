pub mod contrast;
pub mod engine;
pub mod package;
pub mod pipeline;

pub use crate::domain::model::{
    AuditResult, ColorPair, Compliance, NamedCombination, PairEvaluation, PairKind, Rgb,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
