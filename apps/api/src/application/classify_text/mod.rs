pub mod dto;
pub mod pipeline;
pub mod use_case;
