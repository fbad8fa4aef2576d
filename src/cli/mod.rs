pub mod args;
pub mod parse;
pub mod resformat;
pub mod strategy;
pub mod style;
pub mod validate;

mod run;

pub use run::run;
