pub mod conf_error;
pub mod node;
pub mod parser;

pub use conf_error::ConfError;
pub use node::ConfNode;
pub use parser::{parse_file, parse_str};
