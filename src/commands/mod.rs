pub mod rank;
pub mod recommend;
pub mod search;
