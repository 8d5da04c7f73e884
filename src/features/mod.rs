pub mod analyze;
pub mod humanize;
pub mod mimic;
pub mod pipeline;

pub use analyze::analyze_style;
pub use humanize::humanize_text;
pub use mimic::generate_mimic_text;
pub use pipeline::run_pipeline;
