pub mod create_order;
pub mod dto;
