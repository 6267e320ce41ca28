pub mod jsonl;
pub mod state_file;
