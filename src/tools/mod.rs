pub mod content;
pub mod frameworks;
pub mod resources;
pub mod search;
pub mod sections;

pub use content::*;
pub use frameworks::*;
pub use resources::*;
pub use search::*;
pub use sections::*;
