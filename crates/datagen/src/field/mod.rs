mod interface;
mod record;
mod thread_random;

pub use interface::*;
pub use record::*;
pub use thread_random::*;
