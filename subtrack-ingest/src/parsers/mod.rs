pub mod csv_table;
pub mod line;
pub mod manual;
pub mod statement;
