mod tile;
mod voters;

pub use tile::Tile;
pub use voters::VoterDistribution;
