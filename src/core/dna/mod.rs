pub use alphabet::Allele;

mod alphabet;
