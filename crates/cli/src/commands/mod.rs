pub mod inspect;
pub mod mutate;
pub mod resist;
