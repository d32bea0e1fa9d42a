pub mod conversion;
pub mod node_type;
pub mod simple;

pub use conversion::*;
pub use node_type::*;
pub use simple::*;
