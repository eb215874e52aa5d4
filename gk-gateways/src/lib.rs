//! Gateways that connect the use cases to the outside world,
//! i.e. the local image file store.

mod images;

pub use self::images::FsImageStore;
