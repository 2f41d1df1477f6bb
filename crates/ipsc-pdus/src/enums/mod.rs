pub mod data_packet_format;
pub mod data_type;
pub mod ipsc_slot_state;
pub mod msg_type;
pub mod peer_mode;
pub mod peer_operation;
pub mod service_access_point;
