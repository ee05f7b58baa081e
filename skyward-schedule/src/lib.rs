pub mod generator;

pub use generator::RandomFlightGenerator;
