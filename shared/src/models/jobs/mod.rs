pub mod job;
pub mod tile_result;
