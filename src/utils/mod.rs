pub mod environment;
pub mod format;

pub use environment::{DATA_DIR_ENV, data_dir};
pub use format::{
    format_clock, format_duration_human, format_path_with_tilde, format_timestamp,
    parse_time_of_day,
};
