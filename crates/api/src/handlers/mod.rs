pub mod pages;
pub mod parking;
