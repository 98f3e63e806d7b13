mod runtime;
mod storage;
mod tabs;

pub use runtime::*;
pub use storage::*;
pub use tabs::*;
