pub mod markdown;
pub mod structured;
pub mod table;

pub use markdown::output_markdown;
pub use structured::{output_json, output_yaml};
pub use table::output_table;
