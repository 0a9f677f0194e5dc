pub mod common_constants;
