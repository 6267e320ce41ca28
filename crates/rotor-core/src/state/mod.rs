pub mod record;
pub mod snapshot;
pub mod trailer;
pub mod wire;
