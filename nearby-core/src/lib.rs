pub mod gateways;
pub mod util;
pub mod view;

pub mod entities {
    pub use nearby_entities::{geo::*, id::*, place::*, url};
}
