pub mod app;
pub mod codec;
pub mod error;
pub mod math;
pub mod reconstruct;
pub mod shape;
pub mod store;
pub mod view;

pub use error::{DiceError, ParseError, Result, StoreError};
pub use shape::{Edge, EdgeSet, Shape, ShapeId};
pub use store::{ShapeStore, StoreConfig};
