pub mod call_ctl;
pub mod group_voice;
pub mod long_message;
pub mod pvt_data;
pub mod rpt_wake_up;
pub mod short_message;
pub mod xcmp_xnl;
