mod init;
mod partition;

pub use init::{Inputs, seeded_inputs};
pub use partition::{Partition, chunk_range};
