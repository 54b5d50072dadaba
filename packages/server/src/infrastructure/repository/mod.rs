//! セッション状態の保存先
//!
//! - `inmemory`: プロセス内のメモリに保持する実装（再起動で全て消える）

pub mod inmemory;

pub use inmemory::InMemorySessionStore;
