mod mutation;
mod query;

pub use mutation::{Mutation, NewEventImage};
pub use query::Query;
