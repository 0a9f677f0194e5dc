pub mod commands;
mod perform_swap;
