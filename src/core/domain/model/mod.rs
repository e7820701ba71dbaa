pub mod action_result;
pub mod bridge_connection;
pub mod client_config;
pub mod envelope;
pub mod job_details;
pub mod macro_descriptor;
pub mod printer_info;
pub mod printer_status;
pub mod temperature_reading;
