mod grid;
mod tables;

pub use self::grid::print_key as print_key_grid;
pub use self::tables::{
    alternates as print_alternates, runs as print_run_summaries,
    score_breakdown as print_score_breakdown,
};
