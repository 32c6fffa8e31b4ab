mod property_partition;
mod utils;
