pub mod allele;
pub mod classify;
pub mod dna;
pub mod errors;
pub mod filtering;
pub mod io;
pub mod profile;
pub mod profiler;
pub mod read;
pub mod scan;
pub mod strandutil;
pub mod window;
pub mod workload;
