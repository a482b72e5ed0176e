mod key_value;
mod storage;

pub use key_value::IKeyValueClient;
pub use storage::ISessionStorage;
