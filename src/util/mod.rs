pub use observable::*;

mod observable;
