pub mod codegen;
pub mod filter;
pub mod prelude;
pub mod util;
