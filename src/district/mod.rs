mod border;
mod contiguity;
mod district;
mod trades;

pub use district::District;
