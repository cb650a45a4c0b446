pub mod formatter;

pub use formatter::{
    format_bar, format_breakdown, format_json, format_regions, format_report, format_score,
    format_tsv, should_use_colors, ScoreBand,
};
