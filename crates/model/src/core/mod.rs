pub mod object_type;
pub mod table;
pub mod utils;
