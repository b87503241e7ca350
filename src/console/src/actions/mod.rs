mod add;
mod add_each;
mod count;
mod list;

pub use add::*;
pub use add_each::*;
pub use count::*;
pub use list::*;
