pub mod burst_payload;
pub mod call_preamble;
pub mod csbk_header;
pub mod data_header;
pub mod full_lc;
pub mod linking;
pub mod service_flags;
