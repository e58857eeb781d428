pub mod canvas;
pub mod run;

pub use run::run;
