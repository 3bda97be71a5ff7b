pub mod configs;
pub mod run;
