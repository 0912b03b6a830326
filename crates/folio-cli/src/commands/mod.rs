pub mod config;
pub mod seed;
pub mod status;

pub use config::{run_config, ConfigAction};
pub use seed::run_seed;
pub use status::show_status;
