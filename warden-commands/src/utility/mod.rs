pub mod help;
pub mod invite;
