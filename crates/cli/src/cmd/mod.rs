mod report;
mod run;
mod status;

pub use run::cmd_run;
pub use status::cmd_status;
