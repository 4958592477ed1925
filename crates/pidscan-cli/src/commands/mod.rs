pub mod categories;
pub mod extract;
pub mod scan;
pub mod table;
