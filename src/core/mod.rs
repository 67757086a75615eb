pub mod materializer;
pub mod symlink;

pub use materializer::{ensure_folder, LinkMaterializer};
pub use symlink::{platform_strategy, LinkStrategy};
