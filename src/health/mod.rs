pub mod actions;
pub mod component;
pub mod dump;
pub mod population;

pub use component::{HealthComponent, attach, clamp, is_attached};
pub use dump::{HealthSnapshot, dump, log_dump, render_table, write_jsonl, write_jsonl_file};
pub use population::Population;
