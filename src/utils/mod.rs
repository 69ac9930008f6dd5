pub mod markup;
pub mod salary;
pub mod time;
