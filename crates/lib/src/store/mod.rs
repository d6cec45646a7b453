//! Slot-backed stores
//!
//! [`RecordStore`] and [`SessionStore`] are narrow, named views over a
//! [`KeyValueStore`](crate::backend::KeyValueStore). Each owns exactly one slot
//! and reads or overwrites it as a whole.

mod errors;
pub use errors::StoreError;

mod records;
pub use records::RecordStore;

mod session;
pub use session::SessionStore;
