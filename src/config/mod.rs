//! Run configuration for the `edge_detect` binary.
//!
//! - [`cli`]: the positional command line (`<input> <output> [--op ...]`).
//! - [`run`]: the JSON run configuration accepted via `--config`.

pub mod cli;
pub mod run;

pub use cli::{parse_args, usage};
pub use run::{load_config, parse_config, RunConfig};
