pub mod connection;
pub mod op_box;
pub mod operator;
pub mod slot;
pub mod value;

pub use connection::*;
pub use op_box::*;
pub use operator::*;
pub use slot::*;
pub use value::*;
