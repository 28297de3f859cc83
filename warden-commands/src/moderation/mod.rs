pub mod kick;
pub mod ledger;
pub mod nick;
pub mod purge;
